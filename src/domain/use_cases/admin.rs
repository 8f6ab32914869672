use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::{
        dashboard::{AdminDashboard, EventDownloads, StudioTotals},
        event::{Event, NewEventRequest},
        photo::{NewPhotoRequest, Photo},
    },
    errors::AppError,
    repositories::storage::KeyValueStorage,
    store::{StudioState, StudioStore},
};

const CHART_LABEL_CHARS: usize = 10;

pub struct AdminHandler<S>
where
    S: KeyValueStorage,
{
    pub store: Arc<StudioStore<S>>,
}

impl<S> AdminHandler<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: Arc<StudioStore<S>>) -> Self {
        AdminHandler { store }
    }

    /// Studio totals plus a downloads-per-event series.
    pub fn dashboard(&self) -> AdminDashboard {
        let state = self.store.snapshot();

        AdminDashboard {
            totals: StudioTotals {
                total_events: state.events.len(),
                total_photos: state.photos.len(),
                total_clients: state.users.len(),
                total_downloads: state.stats.len(),
            },
            downloads_by_event: downloads_by_event(&state),
            events: state.events,
        }
    }

    pub fn create_event(&self, request: NewEventRequest) -> Result<Event, AppError> {
        request.validate()?;

        let event = request.into_event();
        self.store.add_event(event.clone());

        tracing::info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// Attaches a hand-pasted image URL to an event. The event id is required
    /// but not checked against the catalog.
    pub fn add_photo(&self, request: NewPhotoRequest) -> Result<Photo, AppError> {
        request.validate()?;

        if !request.has_event() {
            return Err(AppError::invalid_field("eventId", "Please select an event"));
        }

        let photo = request.into_photo();
        self.store.add_photo(photo.clone());

        tracing::info!(photo_id = %photo.id, event_id = %photo.event_id, "Photo added");
        Ok(photo)
    }

    /// Unknown ids are ignored by the store.
    pub fn update_event(&self, id: &str, event: Event) -> Result<(), AppError> {
        if event.id != id {
            return Err(AppError::invalid_field("id", "Event id does not match the path"));
        }

        self.store.update_event(event);
        Ok(())
    }

    /// Photos of the event and user assignments are left untouched.
    pub fn delete_event(&self, id: &str) {
        self.store.delete_event(id);
        tracing::info!(event_id = %id, "Event deleted");
    }
}

fn downloads_by_event(state: &StudioState) -> Vec<EventDownloads> {
    state.events
        .iter()
        .map(|event| {
            let downloads = state.stats
                .iter()
                .filter(|stat| {
                    state.photos
                        .iter()
                        .find(|p| p.id == stat.photo_id)
                        .is_some_and(|p| p.event_id == event.id)
                })
                .count();

            EventDownloads {
                name: chart_label(&event.name),
                downloads,
            }
        })
        .collect()
}

fn chart_label(name: &str) -> String {
    let short: String = name.chars().take(CHART_LABEL_CHARS).collect();
    format!("{short}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::kv_repo::MemoryKvStore;

    fn handler() -> AdminHandler<MemoryKvStore> {
        AdminHandler::new(Arc::new(StudioStore::load(MemoryKvStore::new(), "test")))
    }

    #[test]
    fn dashboard_counts_downloads_per_event() {
        let admin = handler();
        admin.store.log_download("p-1", "u-2");
        admin.store.log_download("p-2", "u-2");
        admin.store.log_download("p-8", "u-2");
        admin.store.log_download("p-unknown", "u-2");

        let dashboard = admin.dashboard();

        assert_eq!(dashboard.totals.total_events, 2);
        assert_eq!(dashboard.totals.total_photos, 10);
        assert_eq!(dashboard.totals.total_clients, 2);
        assert_eq!(dashboard.totals.total_downloads, 4);
        assert_eq!(
            dashboard.downloads_by_event,
            vec![
                EventDownloads { name: "Eternal Bl...".into(), downloads: 2 },
                EventDownloads { name: "TechCorp S...".into(), downloads: 1 },
            ]
        );
    }

    #[test]
    fn chart_label_counts_characters_not_bytes() {
        assert_eq!(chart_label("Éternité à Paris"), "Éternité à...");
        assert_eq!(chart_label("Gala"), "Gala...");
    }

    #[test]
    fn created_event_is_appended() {
        let admin = handler();
        let event = admin
            .create_event(NewEventRequest {
                name: "Smith Wedding 2024".into(),
                event_type: "Wedding".into(),
                date: "2024-09-14".into(),
            })
            .unwrap();

        let events = admin.store.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events.last(), Some(&event));
    }

    #[test]
    fn event_without_name_is_rejected() {
        let admin = handler();
        let err = admin
            .create_event(NewEventRequest {
                name: String::new(),
                event_type: "Portrait".into(),
                date: "2024-09-14".into(),
            })
            .unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(admin.store.events().len(), 2);
    }

    #[test]
    fn photo_without_event_is_rejected() {
        let admin = handler();
        let err = admin.add_photo(NewPhotoRequest::default()).unwrap_err();

        match err {
            AppError::ValidationError(fields) => {
                assert_eq!(fields[0].field, "eventId");
                assert_eq!(fields[0].message, "Please select an event");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(admin.store.photos().len(), 10);
    }

    #[test]
    fn photo_is_added_to_the_chosen_event() {
        let admin = handler();
        let photo = admin
            .add_photo(NewPhotoRequest {
                title: "The First Dance".into(),
                url: String::new(),
                event_id: "e-2".into(),
            })
            .unwrap();

        assert_eq!(photo.event_id, "e-2");
        assert_eq!(admin.store.photos().last(), Some(&photo));
    }

    #[test]
    fn update_requires_matching_path_id() {
        let admin = handler();
        let event = admin.store.events()[0].clone();

        assert!(admin.update_event("e-2", event.clone()).is_err());
        assert!(admin.update_event("e-1", event).is_ok());
    }

    #[test]
    fn delete_keeps_the_event_photos() {
        let admin = handler();
        admin.delete_event("e-1");

        let ids: Vec<_> = admin.store.events().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["e-2"]);
        assert_eq!(admin.store.photos().iter().filter(|p| p.event_id == "e-1").count(), 6);
    }
}
