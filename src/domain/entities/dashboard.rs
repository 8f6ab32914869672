use serde::{Deserialize, Serialize};

use super::{event::Event, photo::Photo};

/// Caption and tags produced for one photo, held only in process memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoInsights {
    pub caption: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioTotals {
    pub total_events: usize,
    pub total_photos: usize,
    pub total_clients: usize,
    pub total_downloads: usize,
}

/// One bar of the downloads-per-event chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDownloads {
    pub name: String,
    pub downloads: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub totals: StudioTotals,
    pub events: Vec<Event>,
    pub downloads_by_event: Vec<EventDownloads>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryCard {
    pub event: Event,
    pub cover_url: String,
    pub photo_count: usize,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientDashboard {
    pub galleries: Vec<GalleryCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryPhoto {
    #[serde(flatten)]
    pub photo: Photo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<PhotoInsights>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryView {
    pub event: Event,
    pub photos: Vec<GalleryPhoto>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadTicket {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GalleryFilter {
    #[serde(default)]
    pub filter: String,
}
