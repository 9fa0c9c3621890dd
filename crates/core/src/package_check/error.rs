use thiserror::Error;

/// Errors that can occur when parsing a package-check request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body is invalid: {0}")]
    InvalidBody(String),
    #[error("Package Id must not be empty")]
    EmptyId,
}
