//! National Names Index searches

use serde::{Deserialize, Serialize};
use validator::Validate;

use reference_data::{OrganisationType, SearchScope, SearchType, StatusType};

use crate::error::LodgementError;

/// The organisation being searched for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchOrganisation {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub organisation_type: Option<OrganisationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,
}

fn default_max_results() -> u32 {
    SearchNniRequest::DEFAULT_MAX_RESULTS
}

/// A name search against the National Names Index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchNniRequest {
    #[serde(default)]
    pub search_type: SearchType,
    #[serde(default)]
    pub search_scope: SearchScope,
    pub organisation: SearchOrganisation,
    #[serde(default = "default_max_results")]
    #[validate(range(min = 1, max = 100))]
    pub max_results: u32,
}

impl SearchNniRequest {
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// A standard search over all entities for `name`
    pub fn for_name(name: impl Into<String>) -> Self {
        Self {
            search_type: SearchType::default(),
            search_scope: SearchScope::default(),
            organisation: SearchOrganisation {
                name: name.into(),
                organisation_type: None,
                status: None,
            },
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        if self.organisation.name.trim().is_empty() {
            return Err(LodgementError::invalid_field("name", "Organisation name is required"));
        }
        self.organisation.validate()?;
        self.validate()?;
        Ok(())
    }
}
