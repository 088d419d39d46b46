/// Build the prompt asking the model for a 2–3 sentence summary.
pub fn build_summary_prompt(text: &str) -> String {
    format!(
        "Summarise the text into 2–3 concise sentences. \
         Keep the key points and avoid extra commentary.\n\n\
         TEXT:\n{text}"
    )
}

/// Build the prompt asking the model to rewrite the text in `tone`.
pub fn build_rephrase_prompt(text: &str, tone: &str) -> String {
    format!(
        "Rephrase the text while preserving the original meaning and factual content.\n\
         Tone: {tone}\n\
         Guidelines:\n\
         - Do not add new facts.\n\
         - Keep it roughly similar length (within +/- 20%).\n\
         - Make it coherent and natural.\n\n\
         TEXT:\n{text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_layout() {
        let prompt = build_summary_prompt("Hello world.");
        assert!(prompt.starts_with("Summarise the text into 2–3 concise sentences. Keep"));
        assert!(prompt.ends_with("\n\nTEXT:\nHello world."));
    }

    #[test]
    fn test_rephrase_prompt_contains_tone_verbatim() {
        let prompt = build_rephrase_prompt("Hello world.", "Pirate, but Polite");
        assert!(prompt.contains("\nTone: Pirate, but Polite\n"));
        assert!(prompt.contains("- Do not add new facts.\n"));
        assert!(prompt.contains("(within +/- 20%)"));
        assert!(prompt.ends_with("TEXT:\nHello world."));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let text = "The same input, twice.";
        assert_eq!(build_summary_prompt(text), build_summary_prompt(text));
        assert_eq!(
            build_rephrase_prompt(text, "formal"),
            build_rephrase_prompt(text, "formal")
        );
        assert_ne!(
            build_rephrase_prompt(text, "formal"),
            build_rephrase_prompt(text, "casual")
        );
    }
}
