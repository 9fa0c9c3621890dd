//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of every repository trait
//! and of the record store, keeping all data in collections wrapped in
//! `Arc<RwLock<_>>`. It backs whichever store has no production backend
//! enabled, and the test suite.
//!
//! # Example
//!
//! ```rust,ignore
//! use rpa_functions::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new("PackageCheck");
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
