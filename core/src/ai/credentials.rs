use crate::error::AppError;

/// Environment variables checked for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Resolve the API key from the first candidate variable with a non-empty value.
///
/// `lookup` abstracts over the environment so callers can pass
/// `|name| std::env::var(name).ok()` in production and a map in tests.
pub fn resolve_api_key<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    for name in API_KEY_VARS {
        if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
            log::debug!("[credentials] Using API key from {name}");
            return Ok(value.trim().to_owned());
        }
    }

    Err(AppError::configuration(
        "Missing API key. Set GEMINI_API_KEY (recommended) in .env or env vars.",
    ))
}

/// Lookup backed by the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
