use std::sync::Arc;

use validator::Validate;

use crate::entities::user::{LoginUser, SessionResponse, User};
use crate::errors::AuthError;
use crate::repositories::storage::KeyValueStorage;
use crate::store::StudioStore;

/// Mock sign-in against the store's user roster.
pub struct AuthHandler<S>
where
    S: KeyValueStorage,
{
    pub store: Arc<StudioStore<S>>,
}

impl<S> AuthHandler<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: Arc<StudioStore<S>>) -> Self {
        AuthHandler { store }
    }

    /// Signs in the roster user with a matching email. The password only has
    /// to be present.
    pub fn login(&self, request: LoginUser) -> Result<SessionResponse, AuthError> {
        request.validate()?;

        let user = self.store
            .users()
            .into_iter()
            .find(|u| u.email == request.email)
            .ok_or_else(|| {
                tracing::info!("Sign-in rejected for unknown email");
                AuthError::InvalidCredentials
            })?;

        self.store.set_user(Some(user.clone()));

        tracing::info!(user_id = %user.id, role = ?user.role, "User signed in");
        Ok(SessionResponse::signed_in(user))
    }

    pub fn logout(&self) -> SessionResponse {
        if let Some(user) = self.store.user() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        self.store.logout();
        SessionResponse::signed_out()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.user()
    }

    /// Where the navigation's portal link points for the current session.
    pub fn portal_path(&self) -> &'static str {
        match self.store.user() {
            Some(user) => user.role.landing_path(),
            None => "/login",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::user::Role, repositories::kv_repo::MemoryKvStore};

    fn handler() -> AuthHandler<MemoryKvStore> {
        AuthHandler::new(Arc::new(StudioStore::load(MemoryKvStore::new(), "test")))
    }

    fn login(email: &str, password: &str) -> LoginUser {
        LoginUser { email: email.into(), password: password.into() }
    }

    #[test]
    fn known_email_signs_in_and_redirects_by_role() {
        let auth = handler();

        let client = auth.login(login("client@example.com", "anything")).unwrap();
        assert_eq!(client.redirect, "/dashboard");
        assert_eq!(auth.current_user().unwrap().role, Role::User);

        let admin = auth.login(login("admin@Artworld Photography.com", "x")).unwrap();
        assert_eq!(admin.redirect, "/admin");
        assert_eq!(auth.portal_path(), "/admin");
    }

    #[test]
    fn unknown_email_is_rejected_without_touching_the_session() {
        let auth = handler();
        let err = auth.login(login("stranger@example.com", "pw")).unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(err.to_string().contains("client@example.com"));
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn empty_password_fails_validation() {
        let err = handler().login(login("client@example.com", "")).unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[test]
    fn logout_clears_the_session() {
        let auth = handler();
        auth.login(login("client@example.com", "pw")).unwrap();

        let response = auth.logout();

        assert_eq!(response.redirect, "/");
        assert!(response.user.is_none());
        assert_eq!(auth.portal_path(), "/login");
    }
}
