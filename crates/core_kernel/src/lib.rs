//! Core Kernel - Foundational types shared by the underwriting workspace
//!
//! This crate provides the small set of building blocks used across crates:
//! - Money types with precise decimal arithmetic (premium application)
//! - Strongly-typed identifiers for underwriting cases
//! - The kernel error type

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{CaseId, SubmissionId};
pub use error::CoreError;
