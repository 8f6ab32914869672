use serde::{Serialize, Deserialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Where a freshly signed-in identity of this role lands.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub assigned_event_ids: Vec<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_assigned_to(&self, event_id: &str) -> bool {
        self.assigned_event_ids.iter().any(|id| id == event_id)
    }
}

/// The password is collected for form parity but never checked. The email
/// is matched verbatim against the roster, so no format check is applied.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<User>,
    pub redirect: String,
}

impl SessionResponse {
    pub fn signed_in(user: User) -> Self {
        let redirect = user.role.landing_path().to_string();
        SessionResponse { user: Some(user), redirect }
    }

    pub fn signed_out() -> Self {
        SessionResponse { user: None, redirect: "/".to_string() }
    }
}
