use actix_web::web;

use crate::handlers::about;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/about")
            .route(web::get().to(about::get_about))
            .route(web::put().to(about::update_about))
    );
}
