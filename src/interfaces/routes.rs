use actix_web::web;

use crate::handlers::home::home;

mod auth;
mod about;
mod projects;
mod skills;
mod contact;
mod admin;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(auth::config_routes)
            .configure(about::config_routes)
            .configure(projects::config_routes)
            .configure(skills::config_routes)
            .configure(contact::config_routes)
            .configure(admin::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
