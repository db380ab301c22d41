//! Core Kernel - Foundational types shared by the lodgement system
//!
//! This crate provides the building blocks used across all crates:
//! - Digit-string register identifiers (ABN, ACN, ABR reference number, post code)
//! - The kernel error type
//! - Port infrastructure for remote collaborators

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{is_digits, Abn, Acn, AbrReferenceNumber, PostCode};
pub use error::CoreError;
pub use ports::{
    PortError, MessageEvent, DomainPort,
    HealthCheckable, HealthCheckResult, AdapterHealth,
};
