use actix_web::{get, post, web, HttpResponse, Responder, ResponseError};
use tracing::instrument;

use crate::entities::user::{LoginUser, SessionResponse};
use crate::AppState;

#[post("/login")]
#[instrument(skip_all)]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>
) -> impl Responder {
    match state.auth_handler.login(user.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.error_response(),
    }
}

#[post("/logout")]
#[instrument(skip_all)]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.auth_handler.logout())
}

/// Current identity and where the portal link should point.
#[get("/session")]
pub async fn current_session(state: web::Data<AppState>) -> impl Responder {
    let response = match state.auth_handler.current_user() {
        Some(user) => SessionResponse::signed_in(user),
        None => SessionResponse {
            user: None,
            redirect: state.auth_handler.portal_path().to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}
