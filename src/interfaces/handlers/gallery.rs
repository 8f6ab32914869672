use actix_web::{get, post, web, Error, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::dashboard::GalleryFilter,
    use_cases::extractors::{ClientSession, SessionUser},
    AppState,
};

#[get("/dashboard")]
pub async fn client_dashboard(
    client: ClientSession,
    state: web::Data<AppState>
) -> impl Responder {
    HttpResponse::Ok().json(state.gallery_handler.client_dashboard(&client.0))
}

#[get("/{event_id}")]
#[instrument(skip(_session, state, query))]
pub async fn event_gallery(
    _session: SessionUser,
    state: web::Data<AppState>,
    event_id: web::Path<String>,
    query: web::Query<GalleryFilter>,
) -> Result<impl Responder, Error> {
    let view = state.gallery_handler.gallery(&event_id, &query.filter)?;

    Ok(HttpResponse::Ok().json(view))
}

#[post("/{event_id}/photos/{photo_id}/download")]
#[instrument(skip(state, session))]
pub async fn download_photo(
    state: web::Data<AppState>,
    session: SessionUser,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, Error> {
    let (event_id, photo_id) = path.into_inner();
    let ticket = state.gallery_handler.download(&event_id, &photo_id, &session.0)?;

    Ok(HttpResponse::Ok().json(ticket))
}

#[post("/{event_id}/photos/{photo_id}/insights")]
#[instrument(skip(_session, state))]
pub async fn photo_insights(
    _session: SessionUser,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<impl Responder, Error> {
    let (event_id, photo_id) = path.into_inner();
    let insights = state.gallery_handler.analyze(&event_id, &photo_id).await?;

    Ok(HttpResponse::Ok().json(insights))
}
