//! Natural person details: names and birth details

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use reference_data::{is_country, StateTerritoryCode};

use crate::error::LodgementError;

/// A person's name as lodged with the register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[validate(length(min = 1, max = 200))]
    pub given_names: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_given_names: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub family_name: String,
}

impl PersonName {
    pub fn new(given_names: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_names: given_names.into(),
            other_given_names: None,
            family_name: family_name.into(),
        }
    }

    /// "given family", each part trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names.trim(), self.family_name.trim())
            .trim()
            .to_string()
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if self.given_names.trim().is_empty() {
            return Err(LodgementError::invalid_field("givenNames", "Given names are required"));
        }
        if self.family_name.trim().is_empty() {
            return Err(LodgementError::invalid_field("familyName", "Family name is required"));
        }
        self.validate()?;
        Ok(())
    }
}

/// Date and place of birth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateTerritoryCode>,
    pub country_of_birth: String,
}

impl BirthDetails {
    pub fn new(date: NaiveDate, country_of_birth: impl Into<String>) -> Self {
        Self {
            date,
            city_town: None,
            state: None,
            country_of_birth: country_of_birth.into(),
        }
    }

    /// Checks the birth date lies strictly before `today` and the country is listed
    pub fn check_as_of(&self, today: NaiveDate) -> Result<(), LodgementError> {
        if self.date >= today {
            return Err(LodgementError::invalid_field(
                "date",
                format!("Date of birth {} must be in the past", self.date),
            ));
        }
        if !is_country(&self.country_of_birth) {
            return Err(LodgementError::invalid_field(
                "countryOfBirth",
                format!("'{}' is not a recognised country", self.country_of_birth.trim()),
            ));
        }
        Ok(())
    }
}
