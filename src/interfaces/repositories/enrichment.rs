use async_trait::async_trait;
use serde_json::Value;

use crate::errors::EnrichmentError;

/// Image bytes ready to be inlined into a model request.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Standard base64, no data-URL prefix.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: InlineImage,
    /// When set, the model is asked for `application/json` matching this schema.
    pub response_schema: Option<Value>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Downloads the image behind a public URL.
    async fn fetch(&self, url: &str) -> Result<InlineImage, EnrichmentError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Returns the model's text output, which may be empty.
    async fn generate(&self, request: GenerationRequest) -> Result<String, EnrichmentError>;
}
