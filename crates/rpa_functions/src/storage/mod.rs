//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `rpa_functions_core::storage`. Each store picks its backend at
//! compile time via feature flags and falls back to memory otherwise.
//!
//! # Feature Flags
//!
//! - `sqlite`: relational store (assets, daily reports, well tests) on SQLite
//!   using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: package-check record store on AWS DynamoDB using `aws-sdk-dynamodb`
//!
//! The two features are independent and may be combined.
//!
//! # Examples
//!
//! Build with both durable backends:
//! ```bash
//! cargo build -p rpa_functions --features sqlite,dynamodb
//! ```

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
