use thiserror::Error;

/// Errors raised by the matching core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Ranking was requested for a user without a usable location
    #[error("reference user {user_id} has no usable location")]
    MissingLocation { user_id: String },
}

/// Errors surfaced at the command line boundary
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Match(#[from] MatchError),
}

impl Error {
    /// Short machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::Json(_) => "invalid_json",
            Error::Validation(_) => "validation_failed",
            Error::Io(_) => "io_error",
            Error::Match(MatchError::MissingLocation { .. }) => "missing_location",
        }
    }
}
