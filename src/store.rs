//! The studio's single source of truth.
//!
//! [`StudioStore`] owns the session identity plus the event, photo, user and
//! download collections. It is built once at startup, handed to the HTTP
//! layer through [`crate::AppState`], and disposed on shutdown. Every
//! mutation rewrites all five storage slots before the write lock is
//! released.

use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    domain::seed,
    entities::{download_stat::DownloadStat, event::Event, photo::Photo, user::User},
    errors::StorageError,
    repositories::storage::KeyValueStorage,
};

/// Storage keys for the five persisted slots, all under one namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageKeys {
    pub auth: String,
    pub events: String,
    pub photos: String,
    pub users: String,
    pub stats: String,
}

impl StorageKeys {
    pub fn new(namespace: &str) -> Self {
        StorageKeys {
            auth: format!("{namespace}_auth"),
            events: format!("{namespace}_events"),
            photos: format!("{namespace}_photos"),
            users: format!("{namespace}_users"),
            stats: format!("{namespace}_stats"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioState {
    pub user: Option<User>,
    pub events: Vec<Event>,
    pub photos: Vec<Photo>,
    pub users: Vec<User>,
    pub stats: Vec<DownloadStat>,
}

pub struct StudioStore<S: KeyValueStorage> {
    storage: S,
    keys: StorageKeys,
    state: RwLock<StudioState>,
}

impl<S: KeyValueStorage> StudioStore<S> {
    /// Rehydrates every slot independently, falling back to seed data (or
    /// nothing, for the session and the download log) per slot.
    pub fn load(storage: S, namespace: &str) -> Self {
        let keys = StorageKeys::new(namespace);

        let state = StudioState {
            user: read_slot::<_, Option<User>>(&storage, &keys.auth).flatten(),
            events: read_slot(&storage, &keys.events).unwrap_or_else(seed::initial_events),
            photos: read_slot(&storage, &keys.photos).unwrap_or_else(seed::initial_photos),
            users: read_slot(&storage, &keys.users).unwrap_or_else(seed::initial_users),
            stats: read_slot(&storage, &keys.stats).unwrap_or_default(),
        };

        tracing::info!(
            events = state.events.len(),
            photos = state.photos.len(),
            users = state.users.len(),
            stats = state.stats.len(),
            signed_in = state.user.is_some(),
            "Studio store loaded"
        );

        StudioStore {
            storage,
            keys,
            state: RwLock::new(state),
        }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn snapshot(&self) -> StudioState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.read().events.clone()
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.state.read().photos.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    pub fn stats(&self) -> Vec<DownloadStat> {
        self.state.read().stats.clone()
    }

    /// Replaces the session identity. The value is not checked against the
    /// user roster.
    pub fn set_user(&self, user: Option<User>) {
        self.mutate(|state| state.user = user);
    }

    pub fn add_event(&self, event: Event) {
        self.mutate(|state| state.events.push(event));
    }

    pub fn add_photo(&self, photo: Photo) {
        self.mutate(|state| state.photos.push(photo));
    }

    /// Replaces the event with the same id. Unknown ids leave the collection
    /// as it was.
    pub fn update_event(&self, event: Event) {
        self.mutate(|state| {
            match state.events.iter_mut().find(|ev| ev.id == event.id) {
                Some(slot) => *slot = event,
                None => tracing::debug!(event_id = %event.id, "Update ignored: no such event"),
            }
        });
    }

    /// Removes the event only. Its photos and any user assignments pointing
    /// at it are left in place.
    pub fn delete_event(&self, id: &str) {
        self.mutate(|state| state.events.retain(|ev| ev.id != id));
    }

    pub fn log_download(&self, photo_id: &str, user_id: &str) {
        let stat = DownloadStat::new(photo_id, user_id);
        self.mutate(|state| state.stats.push(stat));
    }

    pub fn logout(&self) {
        let mut state = self.state.write();
        state.user = None;
        self.persist(&state);

        if let Err(e) = self.storage.remove_item(&self.keys.auth) {
            tracing::warn!("Failed to remove persisted session: {}", e);
        }
    }

    /// Explicit end of the store's lifetime. Writes are already synchronous,
    /// so there is nothing left to flush.
    pub fn dispose(self) {
        let state = self.state.into_inner();
        tracing::info!(
            events = state.events.len(),
            photos = state.photos.len(),
            stats = state.stats.len(),
            "Studio store disposed"
        );
    }

    fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut StudioState),
    {
        let mut state = self.state.write();
        apply(&mut state);
        self.persist(&state);
    }

    /// Rewrites every slot regardless of which one changed.
    fn persist(&self, state: &StudioState) {
        self.write_slot(&self.keys.auth, &state.user);
        self.write_slot(&self.keys.events, &state.events);
        self.write_slot(&self.keys.photos, &state.photos);
        self.write_slot(&self.keys.users, &state.users);
        self.write_slot(&self.keys.stats, &state.stats);
    }

    fn write_slot<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, "Failed to serialize slot: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set_item(key, &json) {
            tracing::warn!(key, "Failed to persist slot: {}", e);
        }
    }
}

/// `None` when the key is absent, unreadable or not valid JSON for `T`.
fn read_slot<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    decode_slot(storage, key).unwrap_or_else(|e| {
        tracing::warn!(key, "Falling back to defaults: {}", e);
        None
    })
}

fn decode_slot<S, T>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    match storage.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialization(key.to_string(), e.to_string())),
        None => Ok(None),
    }
}
