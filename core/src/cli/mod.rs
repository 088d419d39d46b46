use crate::ai::ModelClient;
use crate::error::AppError;
use crate::input::load_text;
use crate::pipeline::{self, RunRequest};
use crate::present;
use crate::validate::validate_text;
use clap::Parser;
use std::ffi::OsStr;
use std::path::Path;

pub const DEFAULT_TONE: &str = "professional";
pub const DEFAULT_MODEL: &str = "models/gemini-flash-latest";

#[derive(Debug, Parser)]
#[command(name = "text-enhancer")]
#[command(author, version, about = "AI text summarizer & enhancer (Gemini)", long_about = None)]
pub struct Cli {
    /// Path to a .txt file to process (defaults to a built-in sample passage)
    #[arg(long)]
    pub input: Option<String>,

    /// Tone for rephrasing (e.g. professional, casual, Shakespearean)
    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,

    /// Gemini model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Whether the `[ERROR]` prefix on stderr should be coloured.
///
/// Only stderr matters here; a set, non-empty `NO_COLOR` always disables colour.
pub fn stderr_color_enabled(stderr_is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    stderr_is_terminal && no_color.map_or(true, OsStr::is_empty)
}

/// Run the CLI: load and validate the input, then generate and print results.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let text = load_text(cli.input.as_deref().map(Path::new))?;
    validate_text(&text)?;

    let client = ModelClient::from_env()?;

    let request = RunRequest {
        text: &text,
        tone: &cli.tone,
        model: &cli.model,
    };

    let format = cli.format;
    let report = pipeline::run(&client, request, |pass| {
        if format == OutputFormat::Text {
            present::print_text(&text, &pass.tone, &pass.result);
        }
    })
    .await?;

    if format == OutputFormat::Json {
        println!("{}", present::render_json(&text, &report.passes));
    }

    Ok(())
}
