use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod store;

pub use domain::{entities, seed, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::enrichment;

use enrichment::{http_client, EnrichmentClient, GeminiModel, HttpImageSource};
use errors::EnrichmentError;
use repositories::{
    kv_repo::{FileKvStore, MemoryKvStore},
    storage::KeyValueStorage,
};
use settings::{AppConfig, StorageBackend};
use store::StudioStore;
use use_cases::{admin::AdminHandler, auth::AuthHandler, contact::ContactHandler, gallery::GalleryHandler};

pub type AppStorage = Box<dyn KeyValueStorage>;
pub type AppStore = StudioStore<AppStorage>;
pub type AppAuthHandler = AuthHandler<AppStorage>;
pub type AppAdminHandler = AdminHandler<AppStorage>;
pub type AppGalleryHandler = GalleryHandler<AppStorage, HttpImageSource, GeminiModel>;

pub struct AppState {
    pub store: Arc<AppStore>,
    pub auth_handler: AppAuthHandler,
    pub admin_handler: AppAdminHandler,
    pub gallery_handler: AppGalleryHandler,
    pub contact_handler: ContactHandler,
}

impl AppState {
    pub fn new(config: &AppConfig, storage: AppStorage) -> Result<Self, EnrichmentError> {
        let store = Arc::new(StudioStore::load(storage, &config.storage_namespace));

        let http = http_client(config)?;
        let enrichment = EnrichmentClient::new(
            HttpImageSource::new(http.clone()),
            GeminiModel::new(http, config),
            config.enrichment_timeout(),
        );

        if !enrichment.model.is_configured() {
            tracing::warn!("No generative model API key configured; insights will use fallbacks");
        }

        Ok(AppState {
            auth_handler: AuthHandler::new(Arc::clone(&store)),
            admin_handler: AdminHandler::new(Arc::clone(&store)),
            gallery_handler: GalleryHandler::new(Arc::clone(&store), enrichment),
            contact_handler: ContactHandler::new(config.contact_delay()),
            store,
        })
    }
}

/// Opens the durable backend chosen in configuration.
pub fn open_storage(config: &AppConfig) -> AppStorage {
    match config.storage_backend {
        StorageBackend::File => {
            tracing::info!(dir = %config.storage_dir.display(), "Using file storage");
            Box::new(FileKvStore::new(config.storage_dir.clone()))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage; state is lost on exit");
            Box::new(MemoryKvStore::new())
        }
    }
}
