use thiserror::Error;

/// Errors raised by the relational store and the record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backend could not be reached or the connection dropped.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The backend refused the request for capacity reasons.
    #[error("Throttled: {0}")]
    Throttled(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A write broke a constraint declared by the schema.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// Stored data could not be decoded into a domain type.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let cases = [
            (
                RepositoryError::ConnectionFailed("timeout after 30s".to_string()),
                "Connection failed: timeout after 30s",
            ),
            (
                RepositoryError::Throttled("throughput exceeded".to_string()),
                "Throttled: throughput exceeded",
            ),
            (
                RepositoryError::ConstraintViolation("asset_name is required".to_string()),
                "Constraint violation: asset_name is required",
            ),
            (
                RepositoryError::InvalidData("Status is not an integer".to_string()),
                "Invalid data: Status is not an integer",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }
}
