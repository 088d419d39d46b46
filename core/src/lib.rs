pub mod ai;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod present;
pub mod prompt;
pub mod validate;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::AppError;
pub use pipeline::{GenerationPass, GenerationResult, RunReport, RunRequest};
