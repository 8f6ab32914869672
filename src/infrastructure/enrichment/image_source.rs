use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    errors::EnrichmentError,
    repositories::enrichment::{ImageSource, InlineImage},
};

const DEFAULT_MIME: &str = "image/jpeg";

#[derive(Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    pub fn new(client: reqwest::Client) -> Self {
        HttpImageSource { client }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<InlineImage, EnrichmentError> {
        let bytes = self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        encode_image(&bytes)
    }
}

/// Sniffs the MIME type from the magic bytes and base64-encodes the payload.
pub fn encode_image(bytes: &[u8]) -> Result<InlineImage, EnrichmentError> {
    if bytes.is_empty() {
        return Err(EnrichmentError::Fetch("image body is empty".to_string()));
    }

    let mime_type = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .filter(|mime| mime.starts_with("image/"))
        .unwrap_or(DEFAULT_MIME);

    Ok(InlineImage {
        mime_type: mime_type.to_string(),
        data: STANDARD.encode(bytes),
    })
}
