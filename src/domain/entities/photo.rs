use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const PLACEHOLDER_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1542038784456-1ea8e935640e?auto=format&fit=crop&q=80&w=1200";
pub const PLACEHOLDER_THUMBNAIL_URL: &str =
    "https://images.unsplash.com/photo-1542038784456-1ea8e935640e?auto=format&fit=crop&q=80&w=400";
pub const UNTITLED_PHOTO: &str = "Untitled Moment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub thumbnail_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub event_id: String,
    pub upload_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub dimensions: Dimensions,
}

/// Admin form for attaching a hand-pasted image URL to an event.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPhotoRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub event_id: String,
}

impl NewPhotoRequest {
    pub fn has_event(&self) -> bool {
        !self.event_id.trim().is_empty()
    }

    pub fn into_photo(self) -> Photo {
        let url = self.url.trim();
        let (url, thumbnail_url) = if url.is_empty() {
            (PLACEHOLDER_PHOTO_URL.to_string(), PLACEHOLDER_THUMBNAIL_URL.to_string())
        } else {
            (url.to_string(), url.to_string())
        };

        let title = match self.title.trim() {
            "" => UNTITLED_PHOTO.to_string(),
            t => t.to_string(),
        };

        Photo {
            id: format!("p-{}", Utc::now().timestamp_millis()),
            url,
            thumbnail_url,
            title,
            description: None,
            event_id: self.event_id.trim().to_string(),
            upload_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            tags: None,
            dimensions: Dimensions { width: 1200, height: 800 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fall_back_to_placeholders() {
        let photo = NewPhotoRequest {
            event_id: "e-1".into(),
            ..Default::default()
        }
        .into_photo();

        assert_eq!(photo.url, PLACEHOLDER_PHOTO_URL);
        assert_eq!(photo.thumbnail_url, PLACEHOLDER_THUMBNAIL_URL);
        assert_eq!(photo.title, UNTITLED_PHOTO);
        assert_eq!(photo.dimensions, Dimensions { width: 1200, height: 800 });
        assert_eq!(photo.upload_date.len(), 10);
    }

    #[test]
    fn pasted_url_is_used_for_both_sizes() {
        let photo = NewPhotoRequest {
            title: "The First Dance".into(),
            url: "https://cdn.example.com/a.jpg".into(),
            event_id: "e-2".into(),
        }
        .into_photo();

        assert_eq!(photo.url, "https://cdn.example.com/a.jpg");
        assert_eq!(photo.thumbnail_url, photo.url);
        assert_eq!(photo.event_id, "e-2");
    }

    #[test]
    fn missing_event_is_detected() {
        let req = NewPhotoRequest { event_id: "   ".into(), ..Default::default() };
        assert!(!req.has_event());
    }
}
