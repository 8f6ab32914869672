use std::sync::Arc;

use dashmap::DashMap;

use crate::{
    entities::{
        dashboard::{ClientDashboard, DownloadTicket, GalleryCard, GalleryPhoto, GalleryView, PhotoInsights},
        photo::Photo,
        user::User,
    },
    errors::AppError,
    infrastructure::enrichment::EnrichmentClient,
    repositories::{
        enrichment::{GenerativeModel, ImageSource},
        storage::KeyValueStorage,
    },
    store::StudioStore,
};

pub const DEFAULT_COVER_URL: &str = "https://picsum.photos/800/1000";
const DOWNLOAD_PREFIX: &str = "Artworld Photography";

/// Client-facing galleries: assigned events, per-event browsing, downloads
/// and on-demand AI insights.
///
/// Insights live in `insights` for the life of the process only; they are
/// never written to the store.
pub struct GalleryHandler<S, I, M>
where
    S: KeyValueStorage,
    I: ImageSource,
    M: GenerativeModel,
{
    pub store: Arc<StudioStore<S>>,
    pub enrichment: EnrichmentClient<I, M>,
    insights: DashMap<String, PhotoInsights>,
}

impl<S, I, M> GalleryHandler<S, I, M>
where
    S: KeyValueStorage,
    I: ImageSource,
    M: GenerativeModel,
{
    pub fn new(store: Arc<StudioStore<S>>, enrichment: EnrichmentClient<I, M>) -> Self {
        GalleryHandler {
            store,
            enrichment,
            insights: DashMap::new(),
        }
    }

    /// Galleries assigned to `user`, each with a cover image.
    pub fn client_dashboard(&self, user: &User) -> ClientDashboard {
        let state = self.store.snapshot();

        let galleries = state.events
            .iter()
            .filter(|event| user.is_assigned_to(&event.id))
            .map(|event| {
                let event_photos: Vec<&Photo> = state.photos
                    .iter()
                    .filter(|p| p.event_id == event.id)
                    .collect();

                let cover_url = event.cover_photo_id
                    .as_ref()
                    .and_then(|cover_id| state.photos.iter().find(|p| &p.id == cover_id))
                    .or_else(|| event_photos.first().copied())
                    .map(|p| p.url.clone())
                    .unwrap_or_else(|| DEFAULT_COVER_URL.to_string());

                GalleryCard {
                    event: event.clone(),
                    cover_url,
                    photo_count: event_photos.len(),
                    link: format!("/event/{}", event.id),
                }
            })
            .collect();

        ClientDashboard { galleries }
    }

    /// Photos of one event whose title, or any cached AI tag, contains
    /// `filter` (case-insensitive).
    pub fn gallery(&self, event_id: &str, filter: &str) -> Result<GalleryView, AppError> {
        let state = self.store.snapshot();

        let event = state.events
            .into_iter()
            .find(|e| e.id == event_id)
            .ok_or_else(|| AppError::NotFound(format!("Event {event_id} not found")))?;

        let needle = filter.trim().to_lowercase();

        let photos = state.photos
            .into_iter()
            .filter(|p| p.event_id == event_id)
            .map(|photo| {
                let insights = self.insights.get(&photo.id).map(|i| i.value().clone());
                GalleryPhoto { photo, insights }
            })
            .filter(|item| matches_filter(item, &needle))
            .collect();

        Ok(GalleryView { event, photos })
    }

    /// Records the download for `user` and hands back the file to fetch.
    pub fn download(&self, event_id: &str, photo_id: &str, user: &User) -> Result<DownloadTicket, AppError> {
        let photo = self.find_photo(event_id, photo_id)?;

        self.store.log_download(&photo.id, &user.id);
        tracing::info!(photo_id = %photo.id, user_id = %user.id, "Download logged");

        Ok(DownloadTicket {
            url: photo.url,
            file_name: format!("{DOWNLOAD_PREFIX}-{}.jpg", photo.id),
        })
    }

    /// Asks for a caption and tags concurrently and caches the pair.
    pub async fn analyze(&self, event_id: &str, photo_id: &str) -> Result<PhotoInsights, AppError> {
        let photo = self.find_photo(event_id, photo_id)?;

        let (caption, tags) = futures::join!(
            self.enrichment.generate_caption(&photo.url),
            self.enrichment.suggest_tags(&photo.url)
        );

        let insights = PhotoInsights { caption, tags };
        self.insights.insert(photo.id.clone(), insights.clone());

        Ok(insights)
    }

    pub fn cached_insights(&self, photo_id: &str) -> Option<PhotoInsights> {
        self.insights.get(photo_id).map(|i| i.value().clone())
    }

    fn find_photo(&self, event_id: &str, photo_id: &str) -> Result<Photo, AppError> {
        self.store
            .photos()
            .into_iter()
            .find(|p| p.id == photo_id && p.event_id == event_id)
            .ok_or_else(|| AppError::NotFound(format!("Photo {photo_id} not found in event {event_id}")))
    }
}

fn matches_filter(item: &GalleryPhoto, needle: &str) -> bool {
    if item.photo.title.to_lowercase().contains(needle) {
        return true;
    }

    item.insights
        .as_ref()
        .is_some_and(|i| i.tags.iter().any(|t| t.to_lowercase().contains(needle)))
}
