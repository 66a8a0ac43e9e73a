use thiserror::Error;

/// Everything that can go wrong in an upload workflow.
///
/// Every variant is caught at the submission boundary and shown to the user
/// as a single transient message (the `Display` string). Nothing here is
/// retried automatically and nothing propagates past the update loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The compare backend's base URL was never configured.
    #[error("API URL not configured")]
    Configuration,

    /// A precondition on user input failed (missing files, non-image file).
    /// The submission is aborted before any network traffic.
    #[error("{0}")]
    Validation(String),

    /// The request went out but failed: connection error, timeout, or a
    /// non-success HTTP status from the backend.
    #[error("{0}")]
    Transport(String),

    /// Anything else: malformed JSON, unreadable file, task failure.
    #[error("Something went wrong: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AppError::Transport(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        AppError::Unexpected(message.into())
    }
}
