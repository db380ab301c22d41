//! Associate and representative classification
//!
//! Classification is computed from the current field state every time it is
//! asked for and is never stored. An associate is exactly one of an
//! individual, an incorporated organisation (has an ACN) or an unincorporated
//! organisation (no ACN). A record holding both or neither of individual and
//! organisation has no classification; asking for one is a structural error.

use serde::{Deserialize, Serialize};

use core_kernel::Acn;

use crate::error::{LodgementError, RuleCode};
use crate::lodgement::{Associate, PartnerAssociate};
use crate::party::{IndividualRecord, OrganisationRecord};

/// The kind of party an associate is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerClassification {
    Individual,
    Incorporated,
    Unincorporated,
}

impl PartnerClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerClassification::Individual => "individual",
            PartnerClassification::Incorporated => "incorporated",
            PartnerClassification::Unincorporated => "unincorporated",
        }
    }

    /// Whether representatives must act for this kind of associate
    pub fn requires_representatives(&self) -> bool {
        matches!(self, PartnerClassification::Unincorporated)
    }
}

impl std::fmt::Display for PartnerClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An associate viewed through its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociateParty<'a> {
    Individual(&'a IndividualRecord),
    Incorporated {
        organisation: &'a OrganisationRecord,
        acn: &'a Acn,
    },
    Unincorporated {
        organisation: &'a OrganisationRecord,
    },
}

impl AssociateParty<'_> {
    pub fn classification(&self) -> PartnerClassification {
        match self {
            AssociateParty::Individual(_) => PartnerClassification::Individual,
            AssociateParty::Incorporated { .. } => PartnerClassification::Incorporated,
            AssociateParty::Unincorporated { .. } => PartnerClassification::Unincorporated,
        }
    }
}

/// A representative viewed as the one party it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentativeKind<'a> {
    Individual(&'a IndividualRecord),
    Organisation {
        organisation: &'a OrganisationRecord,
        acn: &'a Acn,
    },
}

impl RepresentativeKind<'_> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            RepresentativeKind::Individual(_) => "individual",
            RepresentativeKind::Organisation { .. } => "organisation",
        }
    }

    pub fn name(&self) -> String {
        match self {
            RepresentativeKind::Individual(individual) => individual.full_name(),
            RepresentativeKind::Organisation { organisation, .. } => organisation.name.clone(),
        }
    }
}

impl Associate {
    /// Resolves which single party this associate is
    pub fn party(&self) -> Result<AssociateParty<'_>, LodgementError> {
        match (&self.individual, &self.organisation) {
            (Some(individual), None) => Ok(AssociateParty::Individual(individual)),
            (None, Some(organisation)) => Ok(match &organisation.acn {
                Some(acn) => AssociateParty::Incorporated { organisation, acn },
                None => AssociateParty::Unincorporated { organisation },
            }),
            _ => Err(LodgementError::rule(
                RuleCode::AssocStructure,
                "An associate must be either an individual or an organisation",
            )),
        }
    }

    /// Classifies the associate as individual, incorporated or unincorporated
    pub fn classification(&self) -> Result<PartnerClassification, LodgementError> {
        self.party().map(|party| party.classification())
    }
}

impl PartnerAssociate {
    /// Resolves which single party this representative is.
    ///
    /// An organisation acting as representative must itself be incorporated.
    pub fn kind(&self) -> Result<RepresentativeKind<'_>, LodgementError> {
        match (&self.individual, &self.organisation) {
            (Some(individual), None) => Ok(RepresentativeKind::Individual(individual)),
            (None, Some(organisation)) => match &organisation.acn {
                Some(acn) => Ok(RepresentativeKind::Organisation { organisation, acn }),
                None => Err(LodgementError::rule(
                    RuleCode::PartnerAssocOrgAcn,
                    format!("Organisation representative '{}' must have an ACN", organisation.name),
                )),
            },
            (None, None) => Err(LodgementError::rule(
                RuleCode::PartnerAssocRequired,
                "A representative must be either an individual or an organisation",
            )),
            (Some(_), Some(_)) => Err(LodgementError::rule(
                RuleCode::PartnerAssocExclusive,
                "A representative cannot be both an individual and an organisation",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::AbrEntity;
    use proptest::prelude::*;

    fn organisation(acn: Option<&str>) -> OrganisationRecord {
        OrganisationRecord {
            name: "Org".to_string(),
            acn: acn.map(|a| Acn::parse(a).unwrap()),
            email: None,
        }
    }

    #[test]
    fn test_organisation_classification_follows_acn() {
        let incorporated = Associate::organisation(AbrEntity::default(), organisation(Some("004085616")));
        assert_eq!(incorporated.classification().unwrap(), PartnerClassification::Incorporated);

        let unincorporated = Associate::organisation(AbrEntity::default(), organisation(None));
        assert_eq!(unincorporated.classification().unwrap(), PartnerClassification::Unincorporated);
        assert!(unincorporated.classification().unwrap().requires_representatives());
    }

    #[test]
    fn test_neither_party_is_structural() {
        let mut associate = Associate::organisation(AbrEntity::default(), organisation(None));
        associate.organisation = None;
        let err = associate.classification().unwrap_err();
        assert_eq!(err.rule_code(), RuleCode::AssocStructure);
        assert!(err.is_structural());
    }

    #[test]
    fn test_representative_kinds() {
        let rep = PartnerAssociate::organisation(organisation(Some("004085616")));
        assert_eq!(rep.kind().unwrap().kind_name(), "organisation");

        let rep = PartnerAssociate::organisation(organisation(None));
        assert_eq!(rep.kind().unwrap_err().rule_code(), RuleCode::PartnerAssocOrgAcn);

        let rep = PartnerAssociate { individual: None, organisation: None };
        assert_eq!(rep.kind().unwrap_err().rule_code(), RuleCode::PartnerAssocRequired);
    }

    #[test]
    fn test_serialized_classification_is_lowercase() {
        let json = serde_json::to_string(&PartnerClassification::Unincorporated).unwrap();
        assert_eq!(json, "\"unincorporated\"");
    }

    proptest! {
        #[test]
        fn prop_organisation_classification_is_total(has_acn in any::<bool>()) {
            let acn = if has_acn { Some("004085616") } else { None };
            let associate = Associate::organisation(AbrEntity::default(), organisation(acn));
            let expected = if has_acn {
                PartnerClassification::Incorporated
            } else {
                PartnerClassification::Unincorporated
            };
            prop_assert_eq!(associate.classification().unwrap(), expected);
            prop_assert_eq!(associate.classification().unwrap(), expected);
        }
    }
}
