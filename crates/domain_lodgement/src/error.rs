//! Lodgement domain errors
//!
//! Every rejection carries a machine-readable [`RuleCode`] and a message for
//! the end user. Failures inside an associate or representative are wrapped
//! with the 1-based position of the offending entry, keeping the inner error
//! as the source.

use serde::{Serialize, Serializer};
use thiserror::Error;
use validator::ValidationErrors;

use core_kernel::{CoreError, PortError};

macro_rules! rule_codes {
    ($( $(#[$meta:meta])* $variant:ident => $code:literal ),+ $(,)?) => {
        /// Machine-readable reason for rejecting a lodgement
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RuleCode {
            $( $(#[$meta])* $variant, )+
        }

        impl RuleCode {
            /// Every code, in declaration order
            pub const ALL: &'static [RuleCode] = &[$(RuleCode::$variant),+];

            /// Returns the wire form of the code
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RuleCode::$variant => $code,)+
                }
            }
        }
    };
}

rule_codes! {
    // Sole trader
    IndAbrRequired => "IND_ABR_REQUIRED",
    IndIndividualRequired => "IND_INDIVIDUAL_REQUIRED",
    IndNoAssociates => "IND_NO_ASSOCIATES",
    IndNoOrganisation => "IND_NO_ORGANISATION",

    // Incorporated body
    IbAbrRequired => "IB_ABR_REQUIRED",
    IbOrganisationRequired => "IB_ORGANISATION_REQUIRED",
    IbNoAssociates => "IB_NO_ASSOCIATES",
    IbNoIndividual => "IB_NO_INDIVIDUAL",
    IbAcnRequired => "IB_ACN_REQUIRED",

    // Partnership
    PtshAbrRequired => "PTSH_ABR_REQUIRED",
    PtshOrganisationRequired => "PTSH_ORGANISATION_REQUIRED",
    PtshPartnersRequired => "PTSH_PARTNERS_REQUIRED",
    PtshMaxPartners => "PTSH_MAX_PARTNERS",
    PtshNoIndividual => "PTSH_NO_INDIVIDUAL",
    PtshNoAcn => "PTSH_NO_ACN",
    PtshPartnerInvalid => "PTSH_PARTNER_INVALID",

    // Trust or association
    UstrAbrRequired => "USTR_ABR_REQUIRED",
    UstrOrganisationRequired => "USTR_ORGANISATION_REQUIRED",
    UstrTrusteesRequired => "USTR_TRUSTEES_REQUIRED",
    UstrNoIndividual => "USTR_NO_INDIVIDUAL",
    UstrAssociateInvalid => "USTR_ASSOCIATE_INVALID",

    // Joint venture
    JvOrganisationRequired => "JV_ORGANISATION_REQUIRED",
    JvPartnersRequired => "JV_PARTNERS_REQUIRED",
    JvMinPartners => "JV_MIN_PARTNERS",
    JvAbnOrExempt => "JV_ABN_OR_EXEMPT",
    JvAbnAndExemptConflict => "JV_ABN_AND_EXEMPT_CONFLICT",
    JvNoAcn => "JV_NO_ACN",
    JvNoIndividual => "JV_NO_INDIVIDUAL",
    JvExemptPartnerAbn => "JV_EXEMPT_PARTNER_ABN",
    JvPartnerInvalid => "JV_PARTNER_INVALID",

    // Associates
    AssocStructure => "ASSOC_STRUCTURE",
    IndAssocNoReps => "IND_ASSOC_NO_REPS",
    IndAssocAbn => "IND_ASSOC_ABN",
    IncAssocNoReps => "INC_ASSOC_NO_REPS",
    IncAssocAcn => "INC_ASSOC_ACN",
    IncAssocAbn => "INC_ASSOC_ABN",
    UnincAssocRepsRequired => "UNINC_ASSOC_REPS_REQUIRED",
    UnincAssocNoAcn => "UNINC_ASSOC_NO_ACN",
    UnincAssocAbn => "UNINC_ASSOC_ABN",
    UnincRepInvalid => "UNINC_REP_INVALID",

    // Representatives of unincorporated associates
    PartnerAssocRequired => "PARTNER_ASSOC_REQUIRED",
    PartnerAssocExclusive => "PARTNER_ASSOC_EXCLUSIVE",
    PartnerAssocOrgAcn => "PARTNER_ASSOC_ORG_ACN",

    // Cross-field consistency
    NameMismatch => "NAME_MISMATCH",
    IndividualNameMismatch => "INDIVIDUAL_NAME_MISMATCH",

    // Leaf records
    FieldInvalid => "FIELD_INVALID",
    AddressInvalid => "ADDRESS_INVALID",
    AddressFormRequired => "ADDRESS_FORM_REQUIRED",
    AddressFormExclusive => "ADDRESS_FORM_EXCLUSIVE",
    AddressCountryMismatch => "ADDRESS_COUNTRY_MISMATCH",
    AddressPostalTypeNotAllowed => "ADDRESS_POSTAL_TYPE_NOT_ALLOWED",
    AddressListIncomplete => "ADDRESS_LIST_INCOMPLETE",
    AddressNotAustralian => "ADDRESS_NOT_AUSTRALIAN",

    // Name availability queries
    NameCheckExclusive => "NAME_CHECK_EXCLUSIVE",
    ProprietorNotAllowed => "PROPRIETOR_NOT_ALLOWED",
    ProprietorIdentifier => "PROPRIETOR_IDENTIFIER",
}

impl RuleCode {
    /// Whether the code reports a record whose shape is wrong, as opposed to
    /// a well-formed record breaking a business rule
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            RuleCode::AssocStructure
                | RuleCode::PartnerAssocRequired
                | RuleCode::PartnerAssocExclusive
                | RuleCode::AddressFormRequired
                | RuleCode::AddressFormExclusive
                | RuleCode::FieldInvalid
        )
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Errors that reject a lodgement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LodgementError {
    /// A business rule was broken; `index` is set when the rule names one
    /// associate by its 1-based position
    #[error("{message}")]
    RuleViolation {
        code: RuleCode,
        index: Option<usize>,
        message: String,
    },

    /// A nested associate or representative failed its own validation
    #[error("{subject} {index} validation failed: {source}")]
    Nested {
        code: RuleCode,
        subject: &'static str,
        index: usize,
        #[source]
        source: Box<LodgementError>,
    },

    /// A leaf field has the wrong format or is missing
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

impl LodgementError {
    /// Creates a RuleViolation error
    pub fn rule(code: RuleCode, message: impl Into<String>) -> Self {
        LodgementError::RuleViolation {
            code,
            index: None,
            message: message.into(),
        }
    }

    /// Creates a RuleViolation error about the associate at `index` (1-based)
    pub fn rule_at(code: RuleCode, index: usize, message: impl Into<String>) -> Self {
        LodgementError::RuleViolation {
            code,
            index: Some(index),
            message: message.into(),
        }
    }

    /// Wraps an inner failure with the 1-based position of the entry that raised it
    pub fn nested(code: RuleCode, subject: &'static str, index: usize, source: LodgementError) -> Self {
        LodgementError::Nested {
            code,
            subject,
            index,
            source: Box::new(source),
        }
    }

    /// Creates an InvalidField error
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        LodgementError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the rule code of this (outermost) error
    pub fn rule_code(&self) -> RuleCode {
        match self {
            LodgementError::RuleViolation { code, .. } | LodgementError::Nested { code, .. } => *code,
            LodgementError::InvalidField { .. } => RuleCode::FieldInvalid,
        }
    }

    /// Returns the code as reported to callers, e.g. `UNINC_REP_INVALID:2`
    pub fn code(&self) -> String {
        match self {
            LodgementError::RuleViolation { code, index: Some(index), .. }
            | LodgementError::Nested { code, index, .. } => format!("{}:{}", code, index),
            _ => self.rule_code().as_str().to_string(),
        }
    }

    /// Returns the innermost error
    pub fn root_cause(&self) -> &LodgementError {
        let mut current = self;
        while let LodgementError::Nested { source, .. } = current {
            current = source;
        }
        current
    }

    /// Returns the 1-based positions traversed from the outermost error inward
    pub fn index_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                LodgementError::Nested { index, source, .. } => {
                    path.push(*index);
                    current = source;
                }
                LodgementError::RuleViolation { index: Some(index), .. } => {
                    path.push(*index);
                    return path;
                }
                _ => return path,
            }
        }
    }

    /// Whether the root cause is a structural error
    pub fn is_structural(&self) -> bool {
        self.root_cause().rule_code().is_structural()
    }
}

impl From<ValidationErrors> for LodgementError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        let field = fields.into_iter().next().unwrap_or_else(|| "record".to_string());
        LodgementError::InvalidField {
            field,
            message: errors.to_string(),
        }
    }
}

impl From<CoreError> for LodgementError {
    fn from(error: CoreError) -> Self {
        let message = match error {
            CoreError::Validation(message) | CoreError::Configuration(message) => message,
        };
        LodgementError::InvalidField {
            field: "identifier".to_string(),
            message,
        }
    }
}

impl From<LodgementError> for PortError {
    fn from(error: LodgementError) -> Self {
        PortError::validation_code(error.to_string(), error.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn representative_failure() -> LodgementError {
        LodgementError::nested(
            RuleCode::UnincRepInvalid,
            "Representative",
            2,
            LodgementError::rule(
                RuleCode::PartnerAssocOrgAcn,
                "Organisation representatives must have an ACN",
            ),
        )
    }

    #[test]
    fn test_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in RuleCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate code {}", code);
        }
    }

    #[test]
    fn test_nested_code_carries_index() {
        let error = representative_failure();
        assert_eq!(error.code(), "UNINC_REP_INVALID:2");
        assert_eq!(error.rule_code(), RuleCode::UnincRepInvalid);
        assert_eq!(error.root_cause().rule_code(), RuleCode::PartnerAssocOrgAcn);
    }

    #[test]
    fn test_nested_message_keeps_inner_text() {
        let error = LodgementError::nested(
            RuleCode::PtshPartnerInvalid,
            "Partner",
            3,
            representative_failure(),
        );
        let text = error.to_string();
        assert!(text.starts_with("Partner 3 validation failed: Representative 2"));
        assert!(text.ends_with("Organisation representatives must have an ACN"));
        assert_eq!(error.index_path(), vec![3, 2]);
    }

    #[test]
    fn test_positional_rule_code() {
        let error = LodgementError::rule_at(RuleCode::JvExemptPartnerAbn, 1, "Partner 1 must have an ABN");
        assert_eq!(error.code(), "JV_EXEMPT_PARTNER_ABN:1");
        assert_eq!(error.index_path(), vec![1]);
    }

    #[test]
    fn test_structural_classification() {
        assert!(LodgementError::rule(RuleCode::AssocStructure, "x").is_structural());
        assert!(!representative_failure().is_structural());
        assert!(LodgementError::invalid_field("postCode", "bad").is_structural());
    }

    #[test]
    fn test_converts_into_port_validation_error() {
        let port: PortError = representative_failure().into();
        match port {
            PortError::Validation { code, .. } => assert_eq!(code.as_deref(), Some("UNINC_REP_INVALID:2")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_serializes_as_wire_code() {
        assert_eq!(serde_json::to_string(&RuleCode::JvMinPartners).unwrap(), "\"JV_MIN_PARTNERS\"");
    }
}
