//! Business Name Lodgement Domain
//!
//! This crate validates business name lodgements before they are sent to
//! the register, and provides the port through which they are sent.
//!
//! # Lodgement Model
//!
//! A [`BusinessEntity`] is submitted under one of five owner types:
//!
//! - **IND**: an individual sole trader
//! - **IB**: an incorporated body with an ACN
//! - **PTSH**: a partnership of one to nine partners
//! - **USTR**: an unincorporated trust with its trustees
//! - **JV**: a joint venture of at least two participants
//!
//! Partners, trustees and participants are [`Associate`]s. Each associate is
//! classified as individual, incorporated or unincorporated, and an
//! unincorporated associate must name the people or companies that
//! represent it.
//!
//! # Examples
//!
//! ```rust
//! use domain_lodgement::{AbrEntity, BusinessEntity, BusinessEntityValidator, OrganisationRecord};
//! use core_kernel::{Abn, Acn};
//! use reference_data::OwnerType;
//!
//! let acn = Acn::parse("004085616").unwrap();
//! let entity = BusinessEntity::new(OwnerType::IncorporatedBody)
//!     .with_abr_entity(AbrEntity::with_abn(Abn::parse("12345678901").unwrap()))
//!     .with_organisation(OrganisationRecord::incorporated("ACME PTY LTD", acn));
//!
//! let validated = BusinessEntityValidator::validate(&entity).unwrap();
//! assert!(validated.validation_summary().requires_acn);
//! ```

pub mod error;
pub mod person;
pub mod address;
pub mod party;
pub mod lodgement;
pub mod classification;
pub mod validation;
pub mod summary;
pub mod name_availability;
pub mod search;
pub mod ports;
pub mod adapters;

pub use error::{LodgementError, RuleCode};
pub use person::{BirthDetails, PersonName};
pub use address::{
    AddressForm, LodgementAddress, LodgementAddressList, PhysicalAddress, ResidentialAddress,
    UnstructuredAddress,
};
pub use party::{AbrEntity, IndividualRecord, OrganisationRecord};
pub use lodgement::{Associate, BusinessEntity, PartnerAssociate};
pub use classification::{AssociateParty, PartnerClassification, RepresentativeKind};
pub use validation::{
    AssociateValidator, BusinessEntityValidator, RepresentativeValidator, ValidatedBusinessEntity,
    JV_MIN_PARTNERS, PTSH_MAX_PARTNERS,
};
pub use summary::{
    ClassificationSummary, RepresentativeEntry, RepresentativeSummary, UnincorporatedDetail,
    ValidationSummary,
};
pub use name_availability::{Proprietor, QueryNameAvailabilityRequest};
pub use search::{SearchNniRequest, SearchOrganisation};
pub use ports::{RegisterPort, RemoteResult};
pub use adapters::{RegisterClientConfig, SoapRegisterAdapter, SoapTransport};

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockRegisterPort;
