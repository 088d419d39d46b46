use crate::ai::{GenerationBackend, ModelClient};
use crate::error::AppError;
use crate::prompt::{build_rephrase_prompt, build_summary_prompt};
use serde::Serialize;

/// Tone used for the automatic demonstration pass.
pub const DEMO_TONE: &str = "Shakespearean";

/// Requested tones (lowercase) that trigger the demonstration pass.
pub const DEMO_TRIGGER_TONES: [&str; 5] =
    ["professional", "formal", "casual", "humorous", "persuasive"];

/// Output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub summary: String,
    pub rephrased: String,
}

/// A generation pass together with the tone it was run for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPass {
    pub tone: String,
    #[serde(flatten)]
    pub result: GenerationResult,
}

/// Everything a run produced, in presentation order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub passes: Vec<GenerationPass>,
}

#[derive(Debug, Clone, Copy)]
pub struct RunRequest<'a> {
    pub text: &'a str,
    pub tone: &'a str,
    pub model: &'a str,
}

/// Demonstration tone to run after a pass in `requested`, if any.
pub fn demo_tone_for(requested: &str) -> Option<&'static str> {
    let requested = requested.to_lowercase();
    DEMO_TRIGGER_TONES
        .contains(&requested.as_str())
        .then_some(DEMO_TONE)
}

/// Run one generation pass: the summary call, then the rephrase call.
pub async fn generate_outputs<B: GenerationBackend>(
    client: &ModelClient<B>,
    text: &str,
    tone: &str,
    model: &str,
) -> Result<GenerationResult, AppError> {
    let summary = client.generate(model, &build_summary_prompt(text)).await?;
    let rephrased = client
        .generate(model, &build_rephrase_prompt(text, tone))
        .await?;

    Ok(GenerationResult { summary, rephrased })
}

/// Run the primary pass and, for common tones, the demonstration pass.
///
/// `present` is called after each pass completes, so the first pass is shown
/// even if the second one fails.
pub async fn run<B, P>(
    client: &ModelClient<B>,
    request: RunRequest<'_>,
    mut present: P,
) -> Result<RunReport, AppError>
where
    B: GenerationBackend,
    P: FnMut(&GenerationPass),
{
    let mut tones = vec![request.tone];
    if let Some(demo) = demo_tone_for(request.tone) {
        log::info!("[pipeline] '{}' is a common tone, adding a {demo} pass", request.tone);
        tones.push(demo);
    }

    let mut report = RunReport::default();
    for tone in tones {
        log::info!("[pipeline] Generating with tone '{tone}' on {}", request.model);
        let result = generate_outputs(client, request.text, tone, request.model).await?;
        let pass = GenerationPass {
            tone: tone.to_owned(),
            result,
        };
        present(&pass);
        report.passes.push(pass);
    }

    Ok(report)
}
