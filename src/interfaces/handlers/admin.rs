use actix_web::{delete, get, post, put, web, Error, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{event::{Event, NewEventRequest}, photo::NewPhotoRequest},
    use_cases::extractors::AdminSession,
    AppState,
};

#[get("")]
pub async fn admin_dashboard(
    _admin: AdminSession,
    state: web::Data<AppState>
) -> impl Responder {
    HttpResponse::Ok().json(state.admin_handler.dashboard())
}

#[post("/events")]
#[instrument(skip_all, fields(admin = %admin.0.id))]
pub async fn create_event(
    admin: AdminSession,
    state: web::Data<AppState>,
    request: web::Json<NewEventRequest>,
) -> Result<impl Responder, Error> {
    let event = state.admin_handler.create_event(request.into_inner())?;

    Ok(HttpResponse::Created().json(event))
}

#[put("/events/{event_id}")]
#[instrument(skip(_admin, state, event))]
pub async fn update_event(
    _admin: AdminSession,
    state: web::Data<AppState>,
    event_id: web::Path<String>,
    event: web::Json<Event>,
) -> Result<impl Responder, Error> {
    state.admin_handler.update_event(&event_id, event.into_inner())?;

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/events/{event_id}")]
#[instrument(skip(_admin, state))]
pub async fn delete_event(
    _admin: AdminSession,
    state: web::Data<AppState>,
    event_id: web::Path<String>,
) -> impl Responder {
    state.admin_handler.delete_event(&event_id);
    HttpResponse::NoContent().finish()
}

#[post("/photos")]
#[instrument(skip_all)]
pub async fn add_photo(
    _admin: AdminSession,
    state: web::Data<AppState>,
    request: web::Json<NewPhotoRequest>,
) -> Result<impl Responder, Error> {
    let photo = state.admin_handler.add_photo(request.into_inner())?;

    Ok(HttpResponse::Created().json(photo))
}
