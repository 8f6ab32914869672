use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A photographed occasion owning a gallery.
///
/// `is_locked`, `password` and `expiry_date` are carried through storage but
/// nothing gates access on them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo_id: Option<String>,
    #[serde(default)]
    pub assigned_user_ids: Vec<String>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewEventRequest {
    #[validate(length(min = 1, max = 120, message = "Event name is required"))]
    pub name: String,

    #[serde(default = "default_event_type", rename = "type")]
    #[validate(length(min = 1, max = 60, message = "Event category is required"))]
    pub event_type: String,

    #[validate(length(min = 1, message = "Event date is required"))]
    pub date: String,
}

fn default_event_type() -> String {
    "Wedding".to_string()
}

impl NewEventRequest {
    /// Builds an open, unassigned event with a time-based id.
    pub fn into_event(self) -> Event {
        Event {
            id: format!("e-{}", Utc::now().timestamp_millis()),
            name: self.name.trim().to_string(),
            date: self.date,
            event_type: self.event_type,
            cover_photo_id: None,
            assigned_user_ids: Vec::new(),
            is_locked: false,
            password: None,
            expiry_date: None,
        }
    }
}
