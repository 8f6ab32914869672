use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{entities::user::{Role, User}, errors::AppError, AppState};

/// Route gate driven by the store's session identity.
///
/// Gated paths without a session redirect to `/login`; a session of the
/// wrong role redirects to `/`. The signed-in [`User`] is placed in the
/// request extensions for the extractors.
pub struct SessionGate;

impl<S> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGateService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionGateService<S> {
    service: Rc<S>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gate {
    Open,
    AnySession,
    Role(Role),
}

impl<S> Service<ServiceRequest> for SessionGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let state = req.app_data::<web::Data<AppState>>()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in middleware");
                    AppError::InternalError("Application state unavailable".into())
                })?;

            let user = state.store.user();

            // The router matches on the percent-decoded path
            let gate = match urlencoding::decode(req.path()) {
                Ok(path) => gate_for(&path, req.method().as_str()),
                Err(_) => {
                    tracing::debug!(path = %req.path(), "Undecodable path");
                    return Ok(redirect(req, "/"));
                }
            };

            if let Some(location) = redirect_for(gate, user.as_ref()) {
                tracing::debug!(path = %req.path(), location, "Session gate redirect");
                return Ok(redirect(req, location));
            }

            if let Some(user) = user {
                req.extensions_mut().insert(user);
            }
            service.call(req).await
        })
    }
}

fn gate_for(path: &str, method: &str) -> Gate {
    if method == "OPTIONS" {
        return Gate::Open;
    }

    if path == "/admin" || path.starts_with("/admin/") {
        Gate::Role(Role::Admin)
    } else if path == "/dashboard" || path.starts_with("/dashboard/") {
        Gate::Role(Role::User)
    } else if path.starts_with("/event/") {
        Gate::AnySession
    } else {
        Gate::Open
    }
}

fn redirect_for(gate: Gate, user: Option<&User>) -> Option<&'static str> {
    match (gate, user) {
        (Gate::Open, _) => None,
        (_, None) => Some("/login"),
        (Gate::Role(role), Some(user)) if user.role != role => Some("/"),
        _ => None,
    }
}

fn redirect(req: ServiceRequest, location: &str) -> ServiceResponse<BoxBody> {
    req.into_response(
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish(),
    )
}
