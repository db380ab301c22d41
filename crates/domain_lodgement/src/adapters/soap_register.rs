//! SOAP Register Adapter
//!
//! This module provides an adapter for the business register's SOAP
//! services. It implements the `RegisterPort` trait on top of an opaque
//! [`SoapTransport`], which owns the wire protocol, authentication and any
//! connection handling.
//!
//! # Architecture
//!
//! Each request is wrapped in a business document envelope:
//!
//! - a `businessDocumentHeader` naming the message type and version, the
//!   sender and a unique message reference number
//! - a `businessDocumentBody` holding the serialized request
//!
//! A response whose header result is `rejected` becomes
//! `PortError::Rejected` carrying the register's itemised message events.
//!
//! # Configuration
//!
//! ```rust,ignore
//! let config = RegisterClientConfig {
//!     endpoints: RegisterEndpoints {
//!         bn_lodge_application: "https://register.example/bnLodgeApplication?wsdl".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let adapter = SoapRegisterAdapter::new(config, transport)?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use core_kernel::{CoreError, DomainPort, HealthCheckResult, HealthCheckable, MessageEvent, PortError};

use crate::name_availability::QueryNameAvailabilityRequest;
use crate::ports::{RegisterPort, RemoteResult};
use crate::search::SearchNniRequest;
use crate::validation::ValidatedBusinessEntity;

/// Register message types and the schema version each is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    QueryNameAvailability,
    SearchNniName,
    GetNni,
    QueryAddress,
    BnLodgeApplication,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::QueryNameAvailability => "queryNameAvailability",
            MessageType::SearchNniName => "searchNniName",
            MessageType::GetNni => "getNni",
            MessageType::QueryAddress => "queryAddress",
            MessageType::BnLodgeApplication => "bnLodgeApplication",
        }
    }

    pub fn version(&self) -> u8 {
        match self {
            MessageType::QueryNameAvailability => 2,
            MessageType::SearchNniName | MessageType::GetNni => 3,
            MessageType::QueryAddress | MessageType::BnLodgeApplication => 1,
        }
    }
}

/// Header sent with every register request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDocumentHeader {
    pub message_type: MessageType,
    pub message_version: u8,
    pub sender_type: String,
    pub sender_id: String,
    pub message_reference_number: String,
}

/// Outcome flag in a response header
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseResult {
    #[serde(default)]
    pub rejected: bool,
}

/// Header of a register response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    #[serde(default)]
    pub result: Option<ResponseResult>,
    #[serde(default)]
    pub message_events: Vec<MessageEvent>,
}

/// A decoded register response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoapResponse {
    #[serde(default)]
    pub business_document_header: Option<ResponseHeader>,
    #[serde(default)]
    pub business_document_body: serde_json::Value,
}

impl SoapResponse {
    pub fn is_rejected(&self) -> bool {
        self.business_document_header
            .as_ref()
            .and_then(|h| h.result.as_ref())
            .map_or(false, |r| r.rejected)
    }

    pub fn events(&self) -> Vec<MessageEvent> {
        self.business_document_header
            .as_ref()
            .map(|h| h.message_events.clone())
            .unwrap_or_default()
    }
}

/// Sends an envelope to a register endpoint and decodes the reply
#[async_trait]
pub trait SoapTransport: Send + Sync + 'static {
    async fn call(
        &self,
        endpoint: &str,
        operation: MessageType,
        envelope: serde_json::Value,
    ) -> Result<SoapResponse, PortError>;
}

/// Endpoint (WSDL) URL of each register service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterEndpoints {
    pub query_address: String,
    pub query_name_availability: String,
    pub get_nni: String,
    pub search_nni: String,
    pub bn_lodge_application: String,
}

impl RegisterEndpoints {
    pub fn for_message(&self, message_type: MessageType) -> &str {
        match message_type {
            MessageType::QueryAddress => &self.query_address,
            MessageType::QueryNameAvailability => &self.query_name_availability,
            MessageType::GetNni => &self.get_nni,
            MessageType::SearchNniName => &self.search_nni,
            MessageType::BnLodgeApplication => &self.bn_lodge_application,
        }
    }

    /// Keys of endpoints left empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("queryAddress", &self.query_address),
            ("queryNameAvailability", &self.query_name_availability),
            ("getNni", &self.get_nni),
            ("searchNni", &self.search_nni),
            ("bnLodgeApplication", &self.bn_lodge_application),
        ]
        .into_iter()
        .filter(|(_, url)| url.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }
}

/// Configuration for the SOAP register adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterClientConfig {
    /// Sender identifier issued by the register
    pub sender_id: String,

    /// Sender type code
    pub sender_type: String,

    /// Service endpoints
    pub endpoints: RegisterEndpoints,

    /// Time allowed for one call, in seconds
    pub timeout_secs: u64,
}

impl Default for RegisterClientConfig {
    fn default() -> Self {
        Self {
            sender_id: "000040540".to_string(),
            sender_type: "REGA".to_string(),
            endpoints: RegisterEndpoints::default(),
            timeout_secs: 180,
        }
    }
}

impl RegisterClientConfig {
    /// Checks the sender identity and that every endpoint is set
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.sender_id.trim().is_empty() || self.sender_type.trim().is_empty() {
            return Err(CoreError::configuration("Missing register sender id or sender type"));
        }
        let missing = self.endpoints.missing();
        if !missing.is_empty() {
            return Err(CoreError::configuration(format!(
                "Missing register endpoint URLs: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

/// Builds a message reference of the form `MSG:<yyyymmddHHMMSS>-<8 hex>`
pub fn generate_message_reference(now: DateTime<Utc>) -> String {
    let unique = Uuid::new_v4().simple().to_string();
    format!("MSG:{}-{}", now.format("%Y%m%d%H%M%S"), &unique[..8])
}

/// Register adapter implementing the RegisterPort trait over SOAP
#[derive(Debug)]
pub struct SoapRegisterAdapter<T> {
    config: RegisterClientConfig,
    transport: T,
}

impl<T: SoapTransport> SoapRegisterAdapter<T> {
    /// Creates the adapter, rejecting incomplete configuration
    pub fn new(config: RegisterClientConfig, transport: T) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &RegisterClientConfig {
        &self.config
    }

    /// Builds the request header for a message type
    pub fn header(&self, message_type: MessageType) -> BusinessDocumentHeader {
        BusinessDocumentHeader {
            message_type,
            message_version: message_type.version(),
            sender_type: self.config.sender_type.clone(),
            sender_id: self.config.sender_id.clone(),
            message_reference_number: generate_message_reference(Utc::now()),
        }
    }

    #[instrument(skip_all, fields(operation = message_type.as_str()))]
    async fn send<B: Serialize + Sync>(
        &self,
        message_type: MessageType,
        body: &B,
    ) -> Result<RemoteResult, PortError> {
        let header = self.header(message_type);
        let message_reference = header.message_reference_number.clone();
        let body = serde_json::to_value(body).map_err(|e| PortError::Transformation {
            message: format!("serializing {} body: {}", message_type.as_str(), e),
        })?;
        let envelope = serde_json::json!({
            "businessDocumentHeader": header,
            "businessDocumentBody": body,
        });

        let endpoint = self.config.endpoints.for_message(message_type);
        let call = self.transport.call(endpoint, message_type, envelope);
        let response = tokio::time::timeout(Duration::from_secs(self.config.timeout_secs), call)
            .await
            .map_err(|_| PortError::Timeout {
                operation: message_type.as_str().to_string(),
                duration_ms: self.config.timeout_secs * 1000,
            })??;

        if response.is_rejected() {
            let events = response.events();
            warn!(%message_reference, events = events.len(), "request rejected by register");
            return Err(PortError::rejected(message_type.as_str(), events));
        }

        debug!(%message_reference, "register request accepted");
        Ok(RemoteResult {
            operation: message_type.as_str().to_string(),
            message_reference,
            body: response.business_document_body,
            received_at: Utc::now(),
        })
    }
}

impl<T: SoapTransport> DomainPort for SoapRegisterAdapter<T> {}

#[async_trait]
impl<T: SoapTransport> HealthCheckable for SoapRegisterAdapter<T> {
    async fn health_check(&self) -> HealthCheckResult {
        match self.config.validate() {
            Ok(()) => HealthCheckResult::healthy("soap-register"),
            Err(e) => HealthCheckResult::unhealthy("soap-register", e.to_string()),
        }
    }
}

#[async_trait]
impl<T: SoapTransport> RegisterPort for SoapRegisterAdapter<T> {
    async fn query_name_availability(
        &self,
        request: &QueryNameAvailabilityRequest,
    ) -> Result<RemoteResult, PortError> {
        request.check()?;
        self.send(MessageType::QueryNameAvailability, request).await
    }

    async fn search_nni_name(&self, request: &SearchNniRequest) -> Result<RemoteResult, PortError> {
        request.check()?;
        self.send(MessageType::SearchNniName, request).await
    }

    async fn lodge_application(&self, entity: &ValidatedBusinessEntity) -> Result<RemoteResult, PortError> {
        self.send(MessageType::BnLodgeApplication, entity).await
    }
}
