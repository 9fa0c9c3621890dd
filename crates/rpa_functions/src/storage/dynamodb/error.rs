//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `rpa_functions_core::storage`.
//! Throughput and request-limit rejections become `Throttled` so the HTTP
//! layer answers 503 rather than 500.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use rpa_functions_core::storage::RepositoryError;

/// Maps SDK failures that never reached the service (dispatch, timeout).
fn map_transport_error<E: Debug, R: Debug>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(format!("DynamoDB unreachable: {:?}", err)),
        ),
        _ => None,
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }

    match err.into_service_error() {
        ScanError::ProvisionedThroughputExceededException(_) | ScanError::RequestLimitExceeded(_) => {
            RepositoryError::Throttled("Scan throttled, please retry".to_string())
        }
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }

    match err.into_service_error() {
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::Throttled("PutItem throttled, please retry".to_string())
        }
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::ConstraintViolation("Item collection size limit exceeded".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}
