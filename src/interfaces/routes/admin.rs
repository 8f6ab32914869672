use actix_web::web;

use crate::handlers::{admin, system::admin_health_check};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(admin::admin_dashboard)
            .service(admin_health_check)
            .service(admin::create_event)
            .service(admin::update_event)
            .service(admin::delete_event)
            .service(admin::add_photo)
    );
}
