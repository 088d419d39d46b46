use crate::error::AppError;
use std::path::Path;

/// Passage used when no input file is given.
pub const DEFAULT_TEXT: &str = "Content creators often work with long articles, research reports, or product notes and need a fast way to extract the key points.\n\
They also frequently rewrite their content to match different audiences and platforms, such as LinkedIn, newsletters, or short-form video scripts.\n\
A lightweight tool that can summarise text clearly and rephrase it in a specified tone helps creators iterate faster while keeping the original meaning.";

/// Load the document text.
///
/// With no path (or an empty one) the built-in [`DEFAULT_TEXT`] is returned as
/// is. A file is read in full and trimmed.
pub fn load_text(path: Option<&Path>) -> Result<String, AppError> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        log::debug!("[input] No input file given, using default passage");
        return Ok(DEFAULT_TEXT.to_owned());
    };

    if !path.is_file() {
        return Err(AppError::not_found(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::not_found(format!(
            "Input file could not be read: {}: {e}",
            path.display()
        ))
    })?;

    log::info!(
        "[input] Loaded {} bytes from {}",
        contents.len(),
        path.display()
    );
    Ok(contents.trim().to_owned())
}
