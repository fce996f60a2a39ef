use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod experiences;
mod projects;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(experiences::config_routes)
            .configure(skills::config_routes)
            .configure(projects::config_routes)
    );
}
