use actix_web::web;

use crate::handlers::gallery;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(gallery::client_dashboard);

    cfg.service(
        web::scope("/event")
            .service(gallery::event_gallery)
            .service(gallery::download_photo)
            .service(gallery::photo_insights)
    );
}
