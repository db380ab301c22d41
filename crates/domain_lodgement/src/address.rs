//! Address types
//!
//! Australian addresses are structured ([`PhysicalAddress`]); foreign
//! addresses are free-form lines ([`UnstructuredAddress`]). A person's
//! [`ResidentialAddress`] holds exactly one of the two and the form must
//! agree with the declared country. Business addresses for a lodgement are a
//! [`LodgementAddressList`] holding one principal place of business and one
//! address for service of documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::PostCode;
use reference_data::{is_country, is_street_type, AddressTypeCode, PostalDeliveryType, StateTerritoryCode, AUSTRALIA};

use crate::error::{LodgementError, RuleCode};

/// A structured Australian address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_or_office_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_delivery_type: Option<PostalDeliveryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_delivery_number: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub locality: String,
    pub state: StateTerritoryCode,
    pub post_code: PostCode,
}

impl PhysicalAddress {
    /// Creates a street-less address in the given locality
    pub fn new(locality: impl Into<String>, state: StateTerritoryCode, post_code: PostCode) -> Self {
        Self {
            floor_number: None,
            property_name: None,
            unit_or_office_number: None,
            street_number: None,
            street_name: None,
            street_type: None,
            postal_delivery_type: None,
            postal_delivery_number: None,
            locality: locality.into(),
            state,
            post_code,
        }
    }

    /// Sets the street number, name and type
    pub fn with_street(
        mut self,
        number: impl Into<String>,
        name: impl Into<String>,
        street_type: impl Into<String>,
    ) -> Self {
        self.street_number = Some(number.into());
        self.street_name = Some(name.into());
        self.street_type = Some(street_type.into());
        self
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if self.locality.trim().is_empty() {
            return Err(LodgementError::invalid_field("locality", "Locality is required"));
        }
        if let Some(street_type) = &self.street_type {
            if !is_street_type(street_type) {
                return Err(LodgementError::invalid_field(
                    "streetType",
                    format!("'{}' is not a recognised street type", street_type.trim()),
                ));
            }
        }
        if let Some(delivery) = self.postal_delivery_type {
            let has_number = self
                .postal_delivery_number
                .as_deref()
                .map_or(false, |n| !n.trim().is_empty());
            if delivery.requires_number() && !has_number {
                return Err(LodgementError::invalid_field(
                    "postalDeliveryNumber",
                    format!("A number is required for postal delivery type {}", delivery),
                ));
            }
        }
        self.validate()?;
        Ok(())
    }
}

/// A foreign address given as free-form lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnstructuredAddress {
    pub address_line1: String,
    pub address_line2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line4: Option<String>,
}

impl UnstructuredAddress {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            address_line1: line1.into(),
            address_line2: line2.into(),
            address_line3: None,
            address_line4: None,
        }
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if self.address_line1.trim().is_empty() {
            return Err(LodgementError::invalid_field("addressLine1", "Address line 1 is required"));
        }
        if self.address_line2.trim().is_empty() {
            return Err(LodgementError::invalid_field("addressLine2", "Address line 2 is required"));
        }
        Ok(())
    }
}

fn default_country() -> String {
    AUSTRALIA.to_string()
}

/// The address a person lives at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentialAddress {
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<PhysicalAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unstructured: Option<UnstructuredAddress>,
}

/// The address form held by a [`ResidentialAddress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressForm<'a> {
    Australian(&'a PhysicalAddress),
    Foreign(&'a UnstructuredAddress),
}

impl ResidentialAddress {
    pub fn australian(address: PhysicalAddress) -> Self {
        Self {
            country: AUSTRALIA.to_string(),
            physical: Some(address),
            unstructured: None,
        }
    }

    pub fn foreign(country: impl Into<String>, address: UnstructuredAddress) -> Self {
        Self {
            country: country.into(),
            physical: None,
            unstructured: Some(address),
        }
    }

    /// Whether the declared country is Australia
    pub fn is_australian(&self) -> bool {
        self.country.trim() == AUSTRALIA
    }

    /// Returns the single address form present
    pub fn form(&self) -> Result<AddressForm<'_>, LodgementError> {
        match (&self.physical, &self.unstructured) {
            (Some(physical), None) => Ok(AddressForm::Australian(physical)),
            (None, Some(unstructured)) => Ok(AddressForm::Foreign(unstructured)),
            (None, None) => Err(LodgementError::rule(
                RuleCode::AddressFormRequired,
                "A residential address needs either a physical or an unstructured address",
            )),
            (Some(_), Some(_)) => Err(LodgementError::rule(
                RuleCode::AddressFormExclusive,
                "A residential address cannot be both physical and unstructured",
            )),
        }
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if !is_country(&self.country) {
            return Err(LodgementError::invalid_field(
                "country",
                format!("'{}' is not a recognised country", self.country.trim()),
            ));
        }
        match (self.form()?, self.is_australian()) {
            (AddressForm::Australian(physical), true) => physical.check(),
            (AddressForm::Foreign(unstructured), false) => unstructured.check(),
            (AddressForm::Australian(_), false) => Err(LodgementError::rule(
                RuleCode::AddressCountryMismatch,
                format!("A physical address is only allowed for {}, not {}", AUSTRALIA, self.country.trim()),
            )),
            (AddressForm::Foreign(_), true) => Err(LodgementError::rule(
                RuleCode::AddressCountryMismatch,
                format!("An address in {} must be a physical address", AUSTRALIA),
            )),
        }
    }
}

/// A business address lodged with an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LodgementAddress {
    #[serde(rename = "type")]
    pub address_type: AddressTypeCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_delivery_type: Option<PostalDeliveryType>,
    pub address: PhysicalAddress,
}

impl LodgementAddress {
    /// Creates an Australian address of the given type
    pub fn new(address_type: AddressTypeCode, address: PhysicalAddress) -> Self {
        Self {
            address_type,
            care_of: None,
            country: Some(AUSTRALIA.to_string()),
            start_date: None,
            postal_delivery_type: None,
            address,
        }
    }

    fn has_australian_country(&self) -> bool {
        self.country
            .as_deref()
            .map_or(false, |c| c.trim().eq_ignore_ascii_case(AUSTRALIA))
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if !matches!(
            self.address_type,
            AddressTypeCode::PlaceOfBusiness | AddressTypeCode::ServiceOfDocuments
        ) {
            return Err(LodgementError::invalid_field(
                "type",
                format!(
                    "Address type must be GD (principal place of business) or GE (service of documents), not {}",
                    self.address_type
                ),
            ));
        }
        if self.country.is_some() && !self.has_australian_country() {
            return Err(LodgementError::rule(
                RuleCode::AddressNotAustralian,
                format!("Address of type {} must be in {}", self.address_type, AUSTRALIA),
            ));
        }
        if self.postal_delivery_type.is_some() && self.address_type != AddressTypeCode::ServiceOfDocuments {
            return Err(LodgementError::rule(
                RuleCode::AddressPostalTypeNotAllowed,
                "A postal delivery type is only allowed on a GE address",
            ));
        }
        self.address.check()
    }

    /// Checks the address and rewrites its country to the canonical spelling
    pub fn normalised(mut self) -> Result<Self, LodgementError> {
        self.check()?;
        if self.country.is_some() {
            self.country = Some(AUSTRALIA.to_string());
        }
        Ok(self)
    }
}

/// The business addresses of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LodgementAddressList {
    pub addresses: Vec<LodgementAddress>,
}

impl LodgementAddressList {
    pub fn new(addresses: Vec<LodgementAddress>) -> Self {
        Self { addresses }
    }

    fn count(&self, address_type: AddressTypeCode) -> usize {
        self.addresses.iter().filter(|a| a.address_type == address_type).count()
    }

    /// Checks each address, then that exactly one GD and one GE address are present
    /// and that both name Australia as their country
    pub fn check(&self) -> Result<(), LodgementError> {
        for (i, address) in self.addresses.iter().enumerate() {
            address
                .check()
                .map_err(|e| LodgementError::nested(RuleCode::AddressInvalid, "Address", i + 1, e))?;
        }
        if self.count(AddressTypeCode::PlaceOfBusiness) != 1
            || self.count(AddressTypeCode::ServiceOfDocuments) != 1
        {
            return Err(LodgementError::rule(
                RuleCode::AddressListIncomplete,
                "Exactly one GD and one GE address are required",
            ));
        }
        if let Some(address) = self.addresses.iter().find(|a| !a.has_australian_country()) {
            return Err(LodgementError::rule(
                RuleCode::AddressNotAustralian,
                format!("Address of type {} must have country {}", address.address_type, AUSTRALIA),
            ));
        }
        Ok(())
    }

    /// The principal place of business, if present
    pub fn place_of_business(&self) -> Option<&LodgementAddress> {
        self.addresses
            .iter()
            .find(|a| a.address_type == AddressTypeCode::PlaceOfBusiness)
    }

    /// The address for service of documents, if present
    pub fn service_address(&self) -> Option<&LodgementAddress> {
        self.addresses
            .iter()
            .find(|a| a.address_type == AddressTypeCode::ServiceOfDocuments)
    }
}
