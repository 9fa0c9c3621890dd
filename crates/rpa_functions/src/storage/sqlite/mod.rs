//! SQLite storage backend for the relational store.
//!
//! This module provides a SQLite-based implementation of the asset, daily
//! report and well test repositories using `rusqlite` for synchronous
//! operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
