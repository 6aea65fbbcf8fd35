//! Unified error types for the Realm Chat SDK.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the Realm Chat SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required parameter was absent or blank. Raised before any network call.
    #[error("{0}")]
    MissingParameter(String),

    /// The HTTP call failed, or the API answered with `result: false`.
    #[error("{0}")]
    Api(String),

    /// A builder or configuration argument was invalid.
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// The `MissingParameter` error raised when no device is selected.
    pub(crate) fn missing_device() -> Self {
        Self::MissingParameter("Missing parameter(s): deviceId".into())
    }

    /// Whether this error was raised before anything was sent.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingParameter(_) | Self::InvalidArgument(_))
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Self::Api(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_errors() {
        assert!(Error::missing_device().is_precondition());
        assert!(Error::InvalidArgument("bad base URL".into()).is_precondition());
        assert!(!Error::Api("API error: API return false result.".into()).is_precondition());
    }
}
