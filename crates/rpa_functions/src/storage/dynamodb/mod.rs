//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the record store
//! using `aws-sdk-dynamodb`. Each record is a single item keyed by `PK`/`SK`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
