//! Core types and storage contracts shared by the RPA functions server.
//!
//! Everything in this crate is pure data, pure functions, or trait
//! definitions. I/O lives in the `rpa_functions` crate.

pub mod assets;
pub mod package_check;
pub mod storage;
