//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! lodgement test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built people, organisations and addresses
//! - `builders`: Business entity builders preset per owner type
//! - `assertions`: Assertion helpers for rule outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
