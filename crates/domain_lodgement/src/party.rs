//! Parties named on a lodgement
//!
//! This module contains the leaf records shared by the business entity, its
//! associates and their representatives:
//!
//! - [`AbrEntity`]: the entity's Australian Business Register details
//! - [`IndividualRecord`]: a natural person
//! - [`OrganisationRecord`]: a company or other organisation; the presence of
//!   an ACN marks it as incorporated
//!
//! Each record checks only its own fields. Whether a field is required or
//! forbidden in context is decided by the record that contains it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Abn, AbrReferenceNumber, Acn};
use reference_data::{classify_abr_entity, AbrEntityTypeCode, AsicEntityType};

use crate::address::ResidentialAddress;
use crate::error::LodgementError;
use crate::person::{BirthDetails, PersonName};

/// An entity's details on the Australian Business Register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbrEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abn: Option<Abn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<AbrReferenceNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type_code: Option<AbrEntityTypeCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abn_exemption: Option<bool>,
}

impl AbrEntity {
    /// Creates ABR details holding only an ABN
    pub fn with_abn(abn: Abn) -> Self {
        Self {
            abn: Some(abn),
            ..Default::default()
        }
    }

    /// Sets the registered entity name
    pub fn named(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = Some(entity_name.into());
        self
    }

    pub fn has_abn(&self) -> bool {
        self.abn.is_some()
    }

    /// Resolves the register entity type from the ABR type code, if one is given.
    ///
    /// An ACN counts as the ASIC identifier for conditional ABR codes.
    pub fn asic_entity_type(&self, acn: Option<&Acn>) -> Option<AsicEntityType> {
        let code = self.entity_type_code?;
        classify_abr_entity(code.as_code(), acn.map(Acn::as_str)).ok()
    }
}

/// A natural person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IndividualRecord {
    pub name: PersonName,
    pub birth_details: BirthDetails,
    pub address: ResidentialAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
}

impl IndividualRecord {
    /// "given family", trimmed
    pub fn full_name(&self) -> String {
        self.name.full_name()
    }

    /// Checks name, birth details, address and email
    pub fn check_as_of(&self, today: NaiveDate) -> Result<(), LodgementError> {
        self.name.check()?;
        self.birth_details.check_as_of(today)?;
        self.address.check()?;
        self.validate()?;
        Ok(())
    }
}

/// A company, trust, association or other organisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationRecord {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acn: Option<Acn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
}

impl OrganisationRecord {
    /// Creates an organisation without an ACN
    pub fn unincorporated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            acn: None,
            email: None,
        }
    }

    /// Creates an organisation with an ACN
    pub fn incorporated(name: impl Into<String>, acn: Acn) -> Self {
        Self {
            name: name.into(),
            acn: Some(acn),
            email: None,
        }
    }

    pub fn is_incorporated(&self) -> bool {
        self.acn.is_some()
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if self.name.trim().is_empty() {
            return Err(LodgementError::invalid_field("name", "Organisation name is required"));
        }
        self.validate()?;
        Ok(())
    }
}
