use std::{future::Future, time::Duration};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    errors::EnrichmentError,
    repositories::enrichment::{GenerationRequest, GenerativeModel, ImageSource},
};

pub const CAPTION_FALLBACK: &str = "A stunning photography piece.";
pub const TAGS_FALLBACK: [&str; 2] = ["Photography", "Visuals"];

const CAPTION_PROMPT: &str =
    "Describe this photograph in one elegant sentence for accessibility. Focus on the mood and subjects.";
const TAGS_PROMPT: &str = "Suggest 5 relevant tags for this photograph in JSON format.";

/// Caption and tag suggestions for gallery photos.
///
/// Neither operation fails: any fetch, model, parse or timeout problem is
/// logged and replaced by a fixed fallback value. Results are not cached
/// here.
pub struct EnrichmentClient<I, M>
where
    I: ImageSource,
    M: GenerativeModel,
{
    pub image_source: I,
    pub model: M,
    timeout: Duration,
}

impl<I, M> EnrichmentClient<I, M>
where
    I: ImageSource,
    M: GenerativeModel,
{
    pub fn new(image_source: I, model: M, timeout: Duration) -> Self {
        EnrichmentClient {
            image_source,
            model,
            timeout,
        }
    }

    /// One-sentence description of the photo behind `photo_url`.
    pub async fn generate_caption(&self, photo_url: &str) -> String {
        let outcome = self.bounded(self.caption(photo_url)).await;

        match outcome {
            Ok(caption) => caption,
            Err(e) => {
                tracing::warn!(photo_url, error = %e, "Caption generation failed, using fallback");
                CAPTION_FALLBACK.to_string()
            }
        }
    }

    /// A short list of tags for the photo behind `photo_url`.
    pub async fn suggest_tags(&self, photo_url: &str) -> Vec<String> {
        let outcome = self.bounded(self.tags(photo_url)).await;

        match outcome {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!(photo_url, error = %e, "Tag suggestion failed, using fallback");
                TAGS_FALLBACK.iter().map(|t| t.to_string()).collect()
            }
        }
    }

    async fn caption(&self, photo_url: &str) -> Result<String, EnrichmentError> {
        let image = self.image_source.fetch(photo_url).await?;

        let text = self.model
            .generate(GenerationRequest {
                prompt: CAPTION_PROMPT.to_string(),
                image,
                response_schema: None,
            })
            .await?;

        match text.trim() {
            "" => Err(EnrichmentError::EmptyResponse),
            caption => Ok(caption.to_string()),
        }
    }

    async fn tags(&self, photo_url: &str) -> Result<Vec<String>, EnrichmentError> {
        let image = self.image_source.fetch(photo_url).await?;

        let text = self.model
            .generate(GenerationRequest {
                prompt: TAGS_PROMPT.to_string(),
                image,
                response_schema: Some(tags_schema()),
            })
            .await?;

        parse_tags(&text)
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, EnrichmentError>
    where
        F: Future<Output = Result<T, EnrichmentError>>,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .unwrap_or(Err(EnrichmentError::Timeout))
    }
}

fn tags_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "propertyOrdering": ["tags"]
    })
}

#[derive(Deserialize)]
struct TagsPayload {
    tags: Option<Vec<String>>,
}

fn parse_tags(text: &str) -> Result<Vec<String>, EnrichmentError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EnrichmentError::EmptyResponse);
    }

    let payload: TagsPayload = serde_json::from_str(text)?;
    payload
        .tags
        .ok_or_else(|| EnrichmentError::Malformed("`tags` field is missing".to_string()))
}
