//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! underwriting test suite.
//!
//! # Modules
//!
//! - `fixtures`: Low- and high-risk records for every form
//! - `builders`: Builder for records and tool calls
//! - `assertions`: Custom assertion helpers for decisions and errors
//! - `generators`: Property-based generators of valid records

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
