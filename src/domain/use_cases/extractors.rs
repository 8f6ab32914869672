use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use crate::{entities::user::{Role, User}, errors::AuthError};

/// Extractor for the signed-in identity placed on the request by the
/// session gate. Returns 401 when there is none.
#[derive(Debug)]
pub struct SessionUser(pub User);

impl FromRequest for SessionUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<User>() {
            Some(user) => ready(Ok(SessionUser(user.clone()))),
            None => ready(Err(AuthError::MissingSession.into())),
        }
    }
}

/// Requires an ADMIN identity. 403 for other roles, 401 without a session.
#[derive(Debug)]
pub struct AdminSession(pub User);

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(require_role(req, Role::Admin).map(AdminSession))
    }
}

/// Requires a USER (client) identity.
#[derive(Debug)]
pub struct ClientSession(pub User);

impl FromRequest for ClientSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(require_role(req, Role::User).map(ClientSession))
    }
}

fn require_role(req: &HttpRequest, role: Role) -> Result<User, actix_web::Error> {
    match req.extensions().get::<User>() {
        Some(user) if user.role == role => Ok(user.clone()),
        Some(_) => Err(AuthError::Forbidden(format!("{role:?} access required")).into()),
        None => Err(AuthError::MissingSession.into()),
    }
}
