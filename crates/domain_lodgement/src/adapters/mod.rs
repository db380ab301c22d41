//! External Adapters for the Lodgement Domain
//!
//! Adapter implementations of the `RegisterPort` trait for talking to the
//! remote business register.
//!
//! # Available Adapters
//!
//! - **SoapRegisterAdapter**: sends business document envelopes over a
//!   pluggable [`SoapTransport`]
//! - **MockRegisterPort**: in-memory register for testing (re-exported from
//!   the ports module)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_lodgement::adapters::{RegisterClientConfig, SoapRegisterAdapter};
//! use domain_lodgement::RegisterPort;
//! use std::sync::Arc;
//!
//! let adapter = SoapRegisterAdapter::new(RegisterClientConfig::default(), transport)?;
//! let port: Arc<dyn RegisterPort> = Arc::new(adapter);
//! ```

pub mod soap_register;

pub use soap_register::{
    generate_message_reference, BusinessDocumentHeader, MessageType, RegisterClientConfig,
    RegisterEndpoints, SoapRegisterAdapter, SoapResponse, SoapTransport,
};
