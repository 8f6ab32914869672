pub mod client;
pub mod gemini;
pub mod image_source;

pub use client::{EnrichmentClient, CAPTION_FALLBACK, TAGS_FALLBACK};
pub use gemini::GeminiModel;
pub use image_source::HttpImageSource;

use crate::{errors::EnrichmentError, settings::AppConfig};

/// Builds the transport shared by the image fetcher and the model client.
/// Every request made through it is bounded by the configured timeout.
pub fn http_client(config: &AppConfig) -> Result<reqwest::Client, EnrichmentError> {
    reqwest::Client::builder()
        .timeout(config.enrichment_timeout())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| EnrichmentError::Fetch(e.to_string()))
}
