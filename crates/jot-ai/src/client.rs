//! REST client for the Gemini structured-extraction endpoint.
//!
//! One handle is built at startup and shared process-wide; it holds no
//! per-request state. Each classification call is independent: no cache,
//! no retry, and the result is ephemeral until the caller saves it.

use crate::error::{AiError, Result};
use crate::{Classifier, prompt, schema};

use jot_core::OrganizeResult;

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, model: String, temperature: f64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, text: &str) -> GenerateContentRequest {
        let today = Utc::now().date_naive();

        GenerateContentRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: prompt::system_instruction(today),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: schema::response_schema(),
            },
        }
    }
}

#[async_trait]
impl Classifier for GeminiClient {
    async fn classify(&self, text: &str) -> Result<OrganizeResult> {
        let request = self.build_request(text);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        let result = parse_candidate(&body)?;
        debug!(
            "Extraction returned {} item(s) across four categories",
            result.len()
        );

        Ok(result)
    }
}

/// Pull the first candidate's text out of the service response and parse
/// it as the fixed schema. Any shape mismatch is fatal for the call; the
/// payload is not partially recovered.
fn parse_candidate(response: &GenerateContentResponse) -> Result<OrganizeResult> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| AiError::MissingCandidate {
            location: ErrorLocation::from(Location::caller()),
        })?;

    serde_json::from_str(text).map_err(|e| AiError::Schema {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

// ---------------------------------------------------------------------- //
// Wire types
// ---------------------------------------------------------------------- //

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
