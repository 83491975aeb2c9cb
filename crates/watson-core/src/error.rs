/// Result type shared by model builders and request preparation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building models or preparing requests
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was never set
    #[error("{0} cannot be null")]
    MissingField(&'static str),

    /// A required identifier was never set or is an empty string
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// A rule spanning several fields does not hold
    #[error("{0}")]
    InvalidArgument(String),

    /// Model could not be converted to or from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Service URL cannot carry path segments or failed to parse
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Header name or value is not valid HTTP
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// Whether this error comes from argument validation in a builder
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::EmptyField(_) | Self::InvalidArgument(_)
        )
    }

    /// Name of the offending field for missing and empty field errors
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) => Some(field),
            _ => None,
        }
    }
}
