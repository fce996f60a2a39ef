use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/skills")
            .route(web::get().to(skills::list_skills))
    );

    cfg.service(
        web::scope("/admin/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::list_skills))
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/options")
                    .route(web::get().to(skills::list_skill_options))
            )
            .service(
                web::resource("/{skill_id}")
                    .route(web::put().to(skills::rename_skill))
                    .route(web::delete().to(skills::delete_skill))
            )
    );
}
