//! Gemini `generateContent` backend.

use super::{BackendError, GenerationBackend, GenerationOutput};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client as RequestClient;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct Config {
    pub api_base: String,
    pub api_key: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Build a config for `api_key`, taking the base URL override from `lookup`.
    pub fn new<F>(api_key: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self { api_base, api_key }
    }

    fn headers(&self) -> Result<HeaderMap, BackendError> {
        let mut key =
            HeaderValue::from_str(&self.api_key).map_err(|_| BackendError::InvalidApiKey)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }
}

#[derive(Debug, Clone)]
pub struct GeminiBackend {
    http_client: RequestClient,
    headers: HeaderMap,
    config: Config,
}

impl GeminiBackend {
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let headers = config.headers()?;
        Ok(Self {
            http_client: RequestClient::builder().build()?,
            headers,
            config,
        })
    }

    pub fn with_client(self, client: RequestClient) -> Self {
        Self {
            http_client: client,
            ..self
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/{}:generateContent",
            self.config.api_base,
            model_path(model)
        )
    }
}

impl GenerationBackend for GeminiBackend {
    async fn generate(&self, model: &str, prompt: &str) -> Result<GenerationOutput, BackendError> {
        let url = self.endpoint(model);
        log::info!("[gemini] POST {url}");

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers.clone())
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        Ok(GenerationOutput {
            text: parsed.text(),
        })
    }
}

/// Gemini expects resource names like `models/gemini-flash-latest`.
fn model_path(model: &str) -> String {
    let model = model.trim().trim_start_matches('/');
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_owned()
    } else {
        format!("models/{model}")
    }
}

/// Pull `error.message` out of an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().chars().take(500).collect(),
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, skipping thought parts.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;

        let mut text: Option<String> = None;
        for part in parts.iter().filter(|p| !p.thought) {
            if let Some(chunk) = &part.text {
                text.get_or_insert_with(String::new).push_str(chunk);
            }
        }
        text
    }
}
