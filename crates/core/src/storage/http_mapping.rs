//! HTTP status codes for store failures.
//!
//! Kept free of any HTTP crate so the core stays I/O-agnostic; the server
//! turns the code into its own status type.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Backend outages and throttling are 503 so callers know a retry may succeed.
/// A constraint violation is the client's fault (400). Everything else is 500,
/// including stored records that no longer decode.
///
/// ```
/// use rpa_functions_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::Throttled("request limit exceeded".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) | RepositoryError::Throttled(_) => 503,
        RepositoryError::ConstraintViolation(_) => 400,
        RepositoryError::QueryFailed(_) | RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(error: RepositoryError) -> u16 {
        repository_error_to_status_code(&error)
    }

    #[test]
    fn test_unavailable_backends_are_503() {
        assert_eq!(status(RepositoryError::ConnectionFailed("endpoint unreachable".into())), 503);
        assert_eq!(status(RepositoryError::Throttled("throughput exceeded".into())), 503);
    }

    #[test]
    fn test_constraint_violation_is_400() {
        assert_eq!(status(RepositoryError::ConstraintViolation("NOT NULL".into())), 400);
    }

    #[test]
    fn test_undecodable_record_is_500() {
        assert_eq!(status(RepositoryError::InvalidData("Record PKG-9: Status is not an integer".into())), 500);
        assert_eq!(status(RepositoryError::QueryFailed("scan failed".into())), 500);
    }
}
