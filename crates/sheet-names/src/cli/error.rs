//! Error types for the sheet-names CLI.

use thiserror::Error;

use crate::error::NameGenerationError;

/// Errors surfaced by the CLI settings and generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags or the environment.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the loader failure.
        message: String,
    },
    /// A setting without a default was not supplied.
    #[error("missing required setting: {setting}")]
    MissingSetting {
        /// Environment variable that supplies the setting.
        setting: &'static str,
    },
    /// The HTTP client could not be built.
    #[error("failed to build sheets client: {message}")]
    Client {
        /// Error message describing the failure.
        message: String,
    },
    /// Name generation failed.
    #[error("name generation failed: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: NameGenerationError,
    },
}
