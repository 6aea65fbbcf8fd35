//! CLI error type.

use std::io;

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

/// Anything that can stop a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error returned by the SDK.
    #[error(transparent)]
    Api(#[from] realmchat::Error),

    /// Filesystem failure.
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// A JSON argument could not be used.
    #[error("--{arg}: {reason}")]
    Json { arg: &'static str, reason: String },

    /// Missing or malformed configuration.
    #[error("{0}")]
    Config(String),
}

impl CliError {
    pub(crate) const fn io(context: &'static str, source: io::Error) -> Self {
        Self::Io { context, source }
    }
}
