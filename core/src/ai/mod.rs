pub mod credentials;
pub mod gemini;

use crate::error::AppError;
use thiserror::Error;

pub use gemini::GeminiBackend;

/// What a backend hands back from a single generation call.
///
/// `text` is `None` when the service answered but produced no text (for
/// example every candidate was blocked).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    pub text: Option<String>,
}

impl GenerationOutput {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API key contains characters that are not valid in an HTTP header")]
    InvalidApiKey,
}

/// A remote text-generation service.
#[allow(
    async_fn_in_trait,
    reason = "backends are only driven on a single-threaded runtime"
)]
pub trait GenerationBackend {
    /// Send `prompt` to `model` and return the raw output.
    async fn generate(&self, model: &str, prompt: &str) -> Result<GenerationOutput, BackendError>;
}

/// Client that turns backend results into trimmed, non-empty text.
pub struct ModelClient<B> {
    backend: B,
}

impl<B: GenerationBackend> ModelClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Resolve the API key through `lookup`, then build the backend with it.
    ///
    /// `build` only runs once a key has been found, so a missing key never
    /// reaches the network layer.
    pub fn connect<L, F>(lookup: L, build: F) -> Result<Self, AppError>
    where
        L: Fn(&str) -> Option<String>,
        F: FnOnce(String) -> Result<B, AppError>,
    {
        let api_key = credentials::resolve_api_key(lookup)?;
        Ok(Self::new(build(api_key)?))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate text for `prompt`, failing on transport errors and empty output.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        log::debug!(
            "[model_client] Calling {model} with a {} character prompt",
            prompt.len()
        );

        let output = self
            .backend
            .generate(model, prompt)
            .await
            .map_err(|e| AppError::remote_call(format!("Gemini API call failed: {e}")))?;

        match output.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_owned()),
            _ => Err(AppError::remote_call("Gemini returned empty response.")),
        }
    }
}

impl ModelClient<GeminiBackend> {
    /// Build a Gemini-backed client from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::connect(credentials::process_env, |api_key| {
            let config = gemini::Config::new(api_key, credentials::process_env);
            GeminiBackend::new(config)
                .map_err(|e| AppError::remote_call(format!("Failed to create HTTP client: {e}")))
        })
    }
}
