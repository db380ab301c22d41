//! Name availability queries
//!
//! Before lodging, an applicant asks the register whether a proposed company
//! or business name is available. A business name query may name the
//! proprietor so that a name already held by the same holder is not reported
//! as taken.

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{Abn, Acn};

use crate::error::{LodgementError, RuleCode};

/// Punctuation and symbols the register accepts in a proposed name
pub const NAME_SYMBOLS: &str = ".,?!(){}:;'\"|-_\\/@#$%*=&";

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == ' ' || NAME_SYMBOLS.contains(ch)
}

/// The holder of a proposed business name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proprietor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proprietor_acn: Option<Acn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proprietor_abn: Option<Abn>,
}

impl Proprietor {
    pub fn check(&self) -> Result<(), LodgementError> {
        if self.proprietor_acn.is_some() == self.proprietor_abn.is_some() {
            return Err(LodgementError::rule(
                RuleCode::ProprietorIdentifier,
                "Exactly one of proprietorAcn or proprietorAbn must be provided",
            ));
        }
        Ok(())
    }
}

/// A request to check whether a name can be registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QueryNameAvailabilityRequest {
    #[validate(length(min = 1, max = 200))]
    pub proposed_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name_availability_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bn_name_availability_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proprietor: Option<Proprietor>,
}

impl QueryNameAvailabilityRequest {
    /// A business name availability query
    pub fn business_name(proposed_name: impl Into<String>) -> Self {
        Self {
            proposed_name: proposed_name.into(),
            company_name_availability_check: None,
            bn_name_availability_check: Some(true),
            proprietor: None,
        }
    }

    /// A company name availability query
    pub fn company_name(proposed_name: impl Into<String>) -> Self {
        Self {
            proposed_name: proposed_name.into(),
            company_name_availability_check: Some(true),
            bn_name_availability_check: None,
            proprietor: None,
        }
    }

    pub fn with_proprietor(mut self, proprietor: Proprietor) -> Self {
        self.proprietor = Some(proprietor);
        self
    }

    pub fn is_business_name_check(&self) -> bool {
        self.bn_name_availability_check == Some(true)
    }

    pub fn is_company_name_check(&self) -> bool {
        self.company_name_availability_check == Some(true)
    }

    pub fn check(&self) -> Result<(), LodgementError> {
        self.validate()?;
        if self.proposed_name != self.proposed_name.to_uppercase() {
            return Err(LodgementError::invalid_field(
                "proposedName",
                "proposedName must be in UPPERCASE",
            ));
        }
        let mut invalid: Vec<char> = self.proposed_name.chars().filter(|c| !is_name_char(*c)).collect();
        if !invalid.is_empty() {
            invalid.sort_unstable();
            invalid.dedup();
            let listed: Vec<String> = invalid.iter().map(|c| format!("'{}'", c)).collect();
            return Err(LodgementError::invalid_field(
                "proposedName",
                format!("proposedName contains invalid characters: {}", listed.join(", ")),
            ));
        }
        if self.is_company_name_check() == self.is_business_name_check() {
            return Err(LodgementError::rule(
                RuleCode::NameCheckExclusive,
                "Exactly one of companyNameAvailabilityCheck or bnNameAvailabilityCheck must be true",
            ));
        }
        if let Some(proprietor) = &self.proprietor {
            if !self.is_business_name_check() {
                return Err(LodgementError::rule(
                    RuleCode::ProprietorNotAllowed,
                    "proprietor can only be provided when bnNameAvailabilityCheck is true",
                ));
            }
            proprietor.check()?;
        }
        Ok(())
    }
}
