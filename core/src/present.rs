use crate::pipeline::{GenerationPass, GenerationResult};
use std::fmt::Write;

const BANNER_WIDTH: usize = 80;

fn push_section(out: &mut String, title: &str, body: &str) {
    let banner = "=".repeat(BANNER_WIDTH);
    let _ = write!(out, "\n{banner}\n{title}\n{banner}\n{body}\n");
}

/// Render one pass as three bannered sections: original, summary, rephrased.
pub fn render_text(text: &str, tone: &str, result: &GenerationResult) -> String {
    let mut out = String::new();
    push_section(&mut out, "ORIGINAL TEXT", text);
    push_section(&mut out, "SUMMARY (2–3 sentences)", &result.summary);
    push_section(
        &mut out,
        &format!("REPHRASED TEXT (Tone: {tone})"),
        &result.rephrased,
    );
    out.push('\n');
    out
}

/// Print one pass to stdout.
pub fn print_text(text: &str, tone: &str, result: &GenerationResult) {
    print!("{}", render_text(text, tone, result));
}

/// Render every pass of a run as one pretty-printed JSON document.
pub fn render_json(text: &str, passes: &[GenerationPass]) -> String {
    let document = serde_json::json!({
        "original": text,
        "passes": passes,
    });
    format!("{document:#}")
}
