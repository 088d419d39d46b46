use crate::error::AppError;

/// Minimum number of whitespace-delimited words a document must have.
pub const MIN_WORDS: usize = 30;

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reject empty documents and documents shorter than [`MIN_WORDS`] words.
pub fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::validation("Input text is empty."));
    }

    let words = word_count(text);
    if words < MIN_WORDS {
        return Err(AppError::validation(format!(
            "Input text is too short ({words} words). Provide at least ~{MIN_WORDS} words."
        )));
    }

    Ok(())
}
