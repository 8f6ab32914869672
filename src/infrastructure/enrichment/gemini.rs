use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    errors::EnrichmentError,
    repositories::enrichment::{GenerationRequest, GenerativeModel},
    settings::{AppConfig, ModelCredentials},
};

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    credentials: ModelCredentials,
    endpoint: String,
}

impl GeminiModel {
    pub fn new(client: reqwest::Client, config: &AppConfig) -> Self {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.gemini_base_url.trim_end_matches('/'),
            config.gemini_model
        );

        GeminiModel {
            client,
            credentials: ModelCredentials::from(config),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, request: GenerationRequest) -> Result<String, EnrichmentError> {
        if !self.credentials.is_configured() {
            return Err(EnrichmentError::MissingApiKey);
        }

        let response: GenerateContentResponse = self.client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.credentials.api_key.as_str())
            .json(&request_body(&request))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.text())
    }
}

fn request_body(request: &GenerationRequest) -> Value {
    let mut body = json!({
        "contents": [{
            "parts": [
                { "text": request.prompt },
                {
                    "inlineData": {
                        "mimeType": request.image.mime_type,
                        "data": request.image.data,
                    }
                }
            ]
        }]
    });

    if let Some(schema) = &request.response_schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }

    body
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::enrichment::InlineImage;

    fn request(schema: Option<Value>) -> GenerationRequest {
        GenerationRequest {
            prompt: "Describe".into(),
            image: InlineImage { mime_type: "image/png".into(), data: "AAAA".into() },
            response_schema: schema,
        }
    }

    #[test]
    fn endpoint_combines_base_url_and_model() {
        let config = AppConfig {
            gemini_base_url: "https://models.example.com/v1beta/".into(),
            gemini_model: "flash".into(),
            ..AppConfig::default()
        };
        let model = GeminiModel::new(reqwest::Client::new(), &config);
        assert_eq!(model.endpoint(), "https://models.example.com/v1beta/models/flash:generateContent");
    }

    #[test]
    fn body_inlines_the_image_after_the_prompt() {
        let body = request_body(&request(None));
        let parts = &body["contents"][0]["parts"];

        assert_eq!(parts[0]["text"], "Describe");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "AAAA");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn schema_requests_json_output() {
        let body = request_body(&request(Some(json!({"type": "OBJECT"}))));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "A bride " }, { "text": "at dusk." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), "A bride at dusk.");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn missing_api_key_short_circuits() {
        let model = GeminiModel::new(reqwest::Client::new(), &AppConfig::default());
        let err = model.generate(request(None)).await.unwrap_err();
        assert!(matches!(err, EnrichmentError::MissingApiKey));
    }
}
