//! Lodgement Domain Ports
//!
//! This module defines the port through which the lodgement domain talks to
//! the remote business register.
//!
//! # Architecture
//!
//! The `RegisterPort` trait lists the register operations the domain needs.
//! Adapters implement it:
//!
//! - **SOAP Adapter**: wraps requests in a business document envelope and
//!   sends them over an opaque transport
//! - **Mock Adapter**: in-memory register for tests and local runs
//!
//! Lodgement accepts only a [`ValidatedBusinessEntity`], so nothing reaches
//! the register before it has passed validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_lodgement::ports::RegisterPort;
//! use std::sync::Arc;
//!
//! pub struct LodgementService {
//!     register: Arc<dyn RegisterPort>,
//! }
//!
//! impl LodgementService {
//!     pub async fn lodge(&self, entity: &BusinessEntity) -> Result<RemoteResult, PortError> {
//!         let validated = BusinessEntityValidator::validate(entity)?;
//!         self.register.lodge_application(&validated).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::name_availability::QueryNameAvailabilityRequest;
use crate::search::SearchNniRequest;
use crate::validation::ValidatedBusinessEntity;

/// A successful response from the register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteResult {
    /// Register operation that produced the result
    pub operation: String,
    /// Reference number the request was sent with
    pub message_reference: String,
    /// Response body as returned by the register
    pub body: serde_json::Value,
    /// When the response was received
    pub received_at: DateTime<Utc>,
}

/// Port for the remote business register
///
/// Every operation checks its request before sending it; a request that
/// fails its checks returns `PortError::Validation` carrying the rule code.
#[async_trait]
pub trait RegisterPort: DomainPort + HealthCheckable {
    /// Asks whether a proposed company or business name is available
    async fn query_name_availability(
        &self,
        request: &QueryNameAvailabilityRequest,
    ) -> Result<RemoteResult, PortError>;

    /// Searches the National Names Index
    async fn search_nni_name(&self, request: &SearchNniRequest) -> Result<RemoteResult, PortError>;

    /// Lodges a business name application for a validated entity
    async fn lodge_application(&self, entity: &ValidatedBusinessEntity) -> Result<RemoteResult, PortError>;
}

/// Mock implementation of RegisterPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::{HealthCheckResult, MessageEvent};
    use serde_json::json;
    use std::collections::HashSet;
    use tokio::sync::RwLock;

    use crate::lodgement::BusinessEntity;

    /// In-memory register
    ///
    /// Names registered with [`MockRegisterPort::with_taken_names`] are
    /// reported unavailable and are returned by name searches. Lodged
    /// entities are recorded and can be inspected.
    #[derive(Debug, Default)]
    pub struct MockRegisterPort {
        taken_names: RwLock<HashSet<String>>,
        lodged: RwLock<Vec<BusinessEntity>>,
        rejection: RwLock<Option<Vec<MessageEvent>>>,
        sequence: RwLock<u64>,
    }

    impl MockRegisterPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a register in which the given names are already held
        pub fn with_taken_names<I, S>(names: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                taken_names: RwLock::new(names.into_iter().map(Into::into).collect()),
                ..Default::default()
            }
        }

        /// Makes every following call fail as rejected with these events
        pub async fn reject_with(&self, events: Vec<MessageEvent>) {
            *self.rejection.write().await = Some(events);
        }

        /// Entities lodged so far
        pub async fn lodged(&self) -> Vec<BusinessEntity> {
            self.lodged.read().await.clone()
        }

        async fn respond(&self, operation: &str, body: serde_json::Value) -> Result<RemoteResult, PortError> {
            if let Some(events) = self.rejection.read().await.clone() {
                return Err(PortError::rejected(operation, events));
            }
            let mut sequence = self.sequence.write().await;
            *sequence += 1;
            Ok(RemoteResult {
                operation: operation.to_string(),
                message_reference: format!("MOCK:{:06}", *sequence),
                body,
                received_at: Utc::now(),
            })
        }
    }

    impl DomainPort for MockRegisterPort {}

    #[async_trait]
    impl HealthCheckable for MockRegisterPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-register")
        }
    }

    #[async_trait]
    impl RegisterPort for MockRegisterPort {
        async fn query_name_availability(
            &self,
            request: &QueryNameAvailabilityRequest,
        ) -> Result<RemoteResult, PortError> {
            request.check()?;
            let available = !self.taken_names.read().await.contains(&request.proposed_name);
            self.respond(
                "queryNameAvailability",
                json!({ "proposedName": request.proposed_name, "available": available }),
            )
            .await
        }

        async fn search_nni_name(&self, request: &SearchNniRequest) -> Result<RemoteResult, PortError> {
            request.check()?;
            let needle = request.organisation.name.trim().to_uppercase();
            let mut matches: Vec<String> = self
                .taken_names
                .read()
                .await
                .iter()
                .filter(|name| name.contains(&needle))
                .cloned()
                .collect();
            matches.sort();
            matches.truncate(request.max_results as usize);
            self.respond("searchNniName", json!({ "names": matches })).await
        }

        async fn lodge_application(&self, entity: &ValidatedBusinessEntity) -> Result<RemoteResult, PortError> {
            let result = self
                .respond("bnLodgeApplication", json!({ "ownerType": entity.owner_type, "accepted": true }))
                .await?;
            self.lodged.write().await.push((**entity).clone());
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRegisterPort;
    use super::*;
    use core_kernel::MessageEvent;

    #[tokio::test]
    async fn test_mock_reports_taken_names() {
        let port = MockRegisterPort::with_taken_names(["ACME PLUMBING"]);

        let taken = port
            .query_name_availability(&QueryNameAvailabilityRequest::business_name("ACME PLUMBING"))
            .await
            .unwrap();
        assert_eq!(taken.body["available"], false);

        let free = port
            .query_name_availability(&QueryNameAvailabilityRequest::business_name("ZENITH PLUMBING"))
            .await
            .unwrap();
        assert_eq!(free.body["available"], true);
        assert_ne!(taken.message_reference, free.message_reference);
    }

    #[tokio::test]
    async fn test_mock_checks_requests() {
        let port = MockRegisterPort::new();
        let err = port
            .query_name_availability(&QueryNameAvailabilityRequest::business_name("lowercase"))
            .await
            .unwrap_err();
        assert!(matches!(err, PortError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_mock_search_limits_results() {
        let port = MockRegisterPort::with_taken_names(["ACME ONE", "ACME TWO", "ACME THREE", "OTHER"]);
        let mut request = SearchNniRequest::for_name("acme");
        request.max_results = 2;
        let result = port.search_nni_name(&request).await.unwrap();
        assert_eq!(result.body["names"], serde_json::json!(["ACME ONE", "ACME THREE"]));
    }

    #[tokio::test]
    async fn test_mock_rejection() {
        let port = MockRegisterPort::new();
        port.reject_with(vec![MessageEvent::new("20010", "Service unavailable for maintenance")])
            .await;
        let err = port
            .search_nni_name(&SearchNniRequest::for_name("ACME"))
            .await
            .unwrap_err();
        assert_eq!(err.events().len(), 1);
        assert!(err.to_string().contains("searchNniName"));
    }

    #[tokio::test]
    async fn test_mock_port_health_check() {
        let port = MockRegisterPort::new();
        let result = port.health_check().await;
        assert_eq!(result.status, core_kernel::AdapterHealth::Healthy);
    }
}
