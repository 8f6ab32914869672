use actix_web::{http::header, web, HttpResponse};

use crate::handlers::{contact_me::submit_contact, home::home};

mod auth;
mod admin;
mod gallery;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(submit_contact);

    cfg.configure(auth::config_routes)
        .configure(admin::config_routes)
        .configure(gallery::config_routes);

    cfg.configure(json_error::config_routes);

    cfg.default_service(web::to(redirect_home));
}

/// Unknown paths land back on the home page.
async fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
