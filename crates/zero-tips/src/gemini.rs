//! Gemini `generateContent` provider.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TipConfig;
use crate::prompt::{build_prompt, TipRequest};
use crate::provider::{TipError, TipProvider};

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiProvider {
    pub fn from_config(config: &TipConfig) -> Result<Self, TipError> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait::async_trait]
impl TipProvider for GeminiProvider {
    async fn generate(&self, req: &TipRequest) -> Result<String, TipError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TipError::MissingApiKey(self.api_key_env.clone()))?;

        let prompt = build_prompt(req);
        let body = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: &prompt }] }],
        };

        debug!(model = %self.model, "requesting tip");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TipError::Server { status: status.as_u16(), message });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| TipError::Decode(e.to_string()))?;
        Ok(parsed.text())
    }
}

/* ------------------------------ wire format ------------------------------ */

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined. Empty when there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect::<String>())
            .unwrap_or_default()
    }
}
