//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`.

use rusqlite::ErrorCode;

use rpa_functions_core::storage::RepositoryError;

/// Maps a failed SQLite call on the given table.
///
/// | SQLite error | RepositoryError |
/// |---|---|
/// | any `SQLITE_CONSTRAINT_*` | `ConstraintViolation` |
/// | `SQLITE_BUSY`, `SQLITE_LOCKED` | `Throttled` |
/// | `SQLITE_CANTOPEN`, `SQLITE_NOTADB`, closed connection | `ConnectionFailed` |
/// | anything else | `QueryFailed` |
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error, table: &'static str) -> RepositoryError {
    let sqlite_failure = match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(failure, detail)) => {
            Some((failure.code, detail.clone()))
        }
        tokio_rusqlite::Error::Close(_) => {
            return RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => None,
    };

    let Some((code, detail)) = sqlite_failure else {
        return RepositoryError::QueryFailed(err.to_string());
    };
    let detail = detail.unwrap_or_else(|| err.to_string());

    match code {
        ErrorCode::ConstraintViolation => {
            RepositoryError::ConstraintViolation(format!("{table}: {detail}"))
        }
        ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
            RepositoryError::Throttled(format!("{table} is locked by another writer"))
        }
        ErrorCode::CannotOpen | ErrorCode::NotADatabase => {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {detail}"))
        }
        _ => RepositoryError::QueryFailed(format!("{table}: {detail}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn failure(code: ErrorCode, extended_code: i32, detail: Option<&str>) -> tokio_rusqlite::Error {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
            ffi::Error {
                code,
                extended_code,
            },
            detail.map(str::to_string),
        ))
    }

    #[test]
    fn test_not_null_is_constraint_violation() {
        let err = failure(
            ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_NOTNULL,
            Some("NOT NULL constraint failed: assets.asset_name"),
        );

        assert_eq!(
            map_tokio_rusqlite_error(err, "assets"),
            RepositoryError::ConstraintViolation(
                "assets: NOT NULL constraint failed: assets.asset_name".to_string()
            )
        );
    }

    #[test]
    fn test_busy_is_throttled() {
        let err = failure(ErrorCode::DatabaseBusy, ffi::SQLITE_BUSY, None);

        assert!(matches!(
            map_tokio_rusqlite_error(err, "wells_tests"),
            RepositoryError::Throttled(_)
        ));
    }

    #[test]
    fn test_cannot_open_is_connection_failed() {
        let err = failure(ErrorCode::CannotOpen, ffi::SQLITE_CANTOPEN, None);

        assert!(matches!(
            map_tokio_rusqlite_error(err, "assets"),
            RepositoryError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_other_error_is_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        assert!(matches!(
            map_tokio_rusqlite_error(err, "daily_reports"),
            RepositoryError::QueryFailed(_)
        ));
    }
}
