//! Informational summaries of a lodgement
//!
//! None of these summaries validate anything. They describe how associates
//! classify and which details an owner type requires, for reporting.

use serde::Serialize;

use core_kernel::Acn;
use reference_data::OwnerType;

use crate::classification::PartnerClassification;
use crate::error::LodgementError;
use crate::lodgement::{Associate, BusinessEntity};
use crate::validation::{JV_MIN_PARTNERS, PTSH_MAX_PARTNERS};

/// One representative acting for an unincorporated associate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepresentativeEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acn: Option<Acn>,
}

/// The representatives of one associate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepresentativeSummary {
    pub has_representatives: bool,
    pub representative_count: usize,
    pub representatives: Vec<RepresentativeEntry>,
}

impl RepresentativeSummary {
    /// Summarises the representatives of an associate.
    ///
    /// Only unincorporated associates report representatives. Entries that
    /// hold neither or both parties are skipped.
    pub fn for_associate(associate: &Associate) -> Self {
        if !matches!(associate.classification(), Ok(PartnerClassification::Unincorporated)) {
            return Self::default();
        }
        let representatives = associate
            .representatives()
            .iter()
            .filter_map(|rep| match (&rep.individual, &rep.organisation) {
                (Some(individual), None) => Some(RepresentativeEntry {
                    kind: "individual",
                    name: individual.full_name(),
                    acn: None,
                }),
                (None, Some(organisation)) => Some(RepresentativeEntry {
                    kind: "organisation",
                    name: organisation.name.clone(),
                    acn: organisation.acn.clone(),
                }),
                _ => None,
            })
            .collect();
        Self {
            has_representatives: true,
            representative_count: associate.representatives().len(),
            representatives,
        }
    }
}

/// An unincorporated associate in a [`ClassificationSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnincorporatedDetail {
    /// 0-based position in the associate list
    pub partner_index: usize,
    pub partner_name: String,
    pub representatives: RepresentativeSummary,
}

/// Tally of associate classifications
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    pub total_partners: usize,
    pub individual_partners: usize,
    pub incorporated_partners: usize,
    pub unincorporated_partners: usize,
    pub unincorporated_details: Vec<UnincorporatedDetail>,
}

impl ClassificationSummary {
    /// Tallies the associates, failing on the first that cannot be classified
    pub fn from_associates(associates: &[Associate]) -> Result<Self, LodgementError> {
        let mut summary = Self {
            total_partners: associates.len(),
            ..Default::default()
        };
        for (i, associate) in associates.iter().enumerate() {
            match associate.classification()? {
                PartnerClassification::Individual => summary.individual_partners += 1,
                PartnerClassification::Incorporated => summary.incorporated_partners += 1,
                PartnerClassification::Unincorporated => {
                    summary.unincorporated_partners += 1;
                    summary.unincorporated_details.push(UnincorporatedDetail {
                        partner_index: i,
                        partner_name: associate.primary_name(),
                        representatives: RepresentativeSummary::for_associate(associate),
                    });
                }
            }
        }
        Ok(summary)
    }
}

/// Which details an owner type requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub owner_type: OwnerType,
    pub requires_individual: bool,
    pub requires_organisation: bool,
    pub requires_associates: bool,
    pub requires_acn: bool,
    pub allows_abn_exemption: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_associates: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_associates: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_classification: Option<ClassificationSummary>,
}

impl ValidationSummary {
    /// Requirements of an owner type, without reference to any record
    pub fn for_owner_type(owner_type: OwnerType) -> Self {
        let (min_associates, max_associates) = match owner_type {
            OwnerType::Partnership => (Some(1), Some(PTSH_MAX_PARTNERS)),
            OwnerType::UnincorporatedEntity => (Some(1), None),
            OwnerType::JointVenture => (Some(JV_MIN_PARTNERS), None),
            OwnerType::Individual | OwnerType::IncorporatedBody => (None, None),
        };
        Self {
            owner_type,
            requires_individual: owner_type == OwnerType::Individual,
            requires_organisation: owner_type != OwnerType::Individual,
            requires_associates: owner_type.is_composite(),
            requires_acn: owner_type == OwnerType::IncorporatedBody,
            allows_abn_exemption: owner_type == OwnerType::JointVenture,
            min_associates,
            max_associates,
            partner_classification: None,
        }
    }

    /// Requirements of the record's owner type, with a partner tally for
    /// partnerships and joint ventures whose associates all classify
    pub fn for_entity(entity: &BusinessEntity) -> Self {
        let mut summary = Self::for_owner_type(entity.owner_type);
        if entity.owner_type.has_partners() {
            summary.partner_classification = ClassificationSummary::from_associates(entity.associates()).ok();
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lodgement::PartnerAssociate;
    use crate::party::{AbrEntity, OrganisationRecord};

    fn trust() -> Associate {
        Associate::organisation(AbrEntity::default(), OrganisationRecord::unincorporated("Smith Trust"))
    }

    fn company() -> Associate {
        Associate::organisation(
            AbrEntity::default(),
            OrganisationRecord::incorporated("Acme Pty Ltd", Acn::parse("004085616").unwrap()),
        )
    }

    #[test]
    fn test_owner_type_requirements() {
        let ind = ValidationSummary::for_owner_type(OwnerType::Individual);
        assert!(ind.requires_individual);
        assert!(!ind.requires_organisation);
        assert!(!ind.requires_associates);

        let ib = ValidationSummary::for_owner_type(OwnerType::IncorporatedBody);
        assert!(ib.requires_acn);

        let jv = ValidationSummary::for_owner_type(OwnerType::JointVenture);
        assert!(jv.allows_abn_exemption);
        assert_eq!(jv.min_associates, Some(2));

        let ptsh = ValidationSummary::for_owner_type(OwnerType::Partnership);
        assert_eq!(ptsh.max_associates, Some(9));
    }

    #[test]
    fn test_tally_counts_each_classification() {
        let rep = PartnerAssociate::organisation(OrganisationRecord::incorporated(
            "Trustee Co",
            Acn::parse("123456789").unwrap(),
        ));
        let associates = vec![company(), trust().with_representatives(vec![rep]), company()];
        let summary = ClassificationSummary::from_associates(&associates).unwrap();

        assert_eq!(summary.total_partners, 3);
        assert_eq!(summary.incorporated_partners, 2);
        assert_eq!(summary.unincorporated_partners, 1);
        assert_eq!(summary.unincorporated_details[0].partner_index, 1);
        assert_eq!(summary.unincorporated_details[0].partner_name, "Smith Trust");

        let reps = &summary.unincorporated_details[0].representatives;
        assert!(reps.has_representatives);
        assert_eq!(reps.representative_count, 1);
        assert_eq!(reps.representatives[0].kind, "organisation");
        assert_eq!(reps.representatives[0].acn.as_ref().map(Acn::as_str), Some("123456789"));
    }

    #[test]
    fn test_incorporated_associates_have_no_representatives() {
        let summary = RepresentativeSummary::for_associate(&company());
        assert!(!summary.has_representatives);
        assert_eq!(summary.representative_count, 0);
    }

    #[test]
    fn test_partner_classification_only_for_partnerships() {
        let entity = BusinessEntity::new(OwnerType::UnincorporatedEntity).with_associates(vec![trust()]);
        assert!(ValidationSummary::for_entity(&entity).partner_classification.is_none());

        let entity = BusinessEntity::new(OwnerType::JointVenture).with_associates(vec![trust(), company()]);
        let tally = ValidationSummary::for_entity(&entity).partner_classification.unwrap();
        assert_eq!(tally.total_partners, 2);
    }

    #[test]
    fn test_summary_serializes_wire_owner_type() {
        let json = serde_json::to_value(ValidationSummary::for_owner_type(OwnerType::Partnership)).unwrap();
        assert_eq!(json["owner_type"], "PTSH");
        assert_eq!(json["requires_associates"], true);
    }
}
