use actix_web::web;

use crate::handlers::experiences;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/experiences")
            .route(web::get().to(experiences::public_experiences))
    );

    cfg.service(
        web::scope("/admin/experiences")
            .service(
                web::resource("")
                    .route(web::get().to(experiences::admin_list_experiences))
                    .route(web::post().to(experiences::create_experience))
            )
            .service(
                web::resource("/{experience_id}")
                    .route(web::put().to(experiences::update_experience))
                    .route(web::delete().to(experiences::delete_experience))
            )
    );
}
