//! text-enhancer binary
//!
//! Loads `.env`, sets up logging, and runs the CLI. Any error is printed as
//! `[ERROR] <kind>: <message>` and the process exits with status 1.

use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use text_enhancer::cli::{run, stderr_color_enabled, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let no_color = std::env::var_os("NO_COLOR");
    colored::control::set_override(stderr_color_enabled(
        std::io::stderr().is_terminal(),
        no_color.as_deref(),
    ));

    if let Err(e) = run(cli).await {
        eprintln!("\n{} {}: {}", "[ERROR]".red().bold(), e.kind_name(), e);
        std::process::exit(1);
    }
}
