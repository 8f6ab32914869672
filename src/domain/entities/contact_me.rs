use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default = "default_event_type")]
    #[validate(length(max = 60))]
    pub event_type: String,

    #[validate(length(min = 1, max = 2000, message = "Message is required"))]
    pub message: String,
}

fn default_event_type() -> String {
    "Wedding".to_string()
}

impl ContactForm {
    /// Strips any markup from the free-text message before it is logged.
    pub fn sanitized(mut self) -> Self {
        self.message = ammonia::Builder::default()
            .tags(HashSet::new())
            .clean(&self.message)
            .to_string();
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactMeResponse {
    pub id: Uuid,
    pub message: String,
}
