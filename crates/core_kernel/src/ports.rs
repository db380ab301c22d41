//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for talking to systems outside
//! the process, most importantly the remote business register.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Validation engine (pure)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ validated records only
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Port Traits                             │
//! │          (RegisterPort in domain_lodgement)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │   Mock Adapter    │     │  SOAP Adapter    │
//!         │   (in memory)     │     │  (opaque         │
//!         │                   │     │   transport)     │
//!         └───────────────────┘     └──────────────────┘
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// A single itemised error reported by a remote system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Remote error code
    pub error_code: String,
    /// Human readable description
    pub description: String,
}

impl MessageEvent {
    pub fn new(error_code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for MessageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.error_code, self.description)
    }
}

fn join_events(events: &[MessageEvent]) -> String {
    events
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across mock and remote adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// A validation error occurred before the request left the process
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: Option<String>,
    },

    /// The remote system processed the request and rejected it
    #[error("Request was rejected by {operation} - {}", join_events(.events))]
    Rejected {
        operation: String,
        events: Vec<MessageEvent>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// A response could not be interpreted
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },
}

impl PortError {
    /// Creates a Validation error carrying a rule code
    pub fn validation_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Creates a Rejected error
    pub fn rejected(operation: impl Into<String>, events: Vec<MessageEvent>) -> Self {
        PortError::Rejected {
            operation: operation.into(),
            events,
        }
    }

    /// Returns the remote message events, if the remote side rejected the request
    pub fn events(&self) -> &[MessageEvent] {
        match self {
            PortError::Rejected { events, .. } => events,
            _ => &[],
        }
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    pub fn unhealthy(adapter_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            message: Some(message.into()),
            checked_at: chrono::Utc::now(),
        }
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let timeout = PortError::Timeout {
            operation: "bnLodgeApplication".to_string(),
            duration_ms: 180_000,
        };
        assert_eq!(timeout.to_string(), "Timeout after 180000ms: bnLodgeApplication");
        assert!(timeout.events().is_empty());
    }

    #[test]
    fn test_rejected_lists_events() {
        let error = PortError::rejected(
            "bnLodgeApplication",
            vec![
                MessageEvent::new("10001", "Name not available"),
                MessageEvent::new("10002", "ABN cancelled"),
            ],
        );
        let text = error.to_string();
        assert!(text.contains("Error 10001: Name not available; Error 10002: ABN cancelled"));
        assert_eq!(error.events().len(), 2);
    }

    #[test]
    fn test_health_check_constructors() {
        let ok = HealthCheckResult::healthy("mock-register");
        assert_eq!(ok.status, AdapterHealth::Healthy);
        let bad = HealthCheckResult::unhealthy("soap-register", "missing endpoint");
        assert_eq!(bad.status, AdapterHealth::Unhealthy);
        assert_eq!(bad.message.as_deref(), Some("missing endpoint"));
    }
}
