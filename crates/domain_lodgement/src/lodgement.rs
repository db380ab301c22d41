//! Business entity lodgement records
//!
//! A [`BusinessEntity`] is the root of an application. Depending on its
//! owner type it names an individual (sole trader), an organisation, and a
//! list of [`Associate`]s (partners, trustees or joint venture participants).
//! An associate that is an organisation without an ACN names
//! [`PartnerAssociate`] representatives who act for it.
//!
//! # Examples
//!
//! ```rust
//! use domain_lodgement::lodgement::{Associate, BusinessEntity, PartnerAssociate};
//! use domain_lodgement::party::{AbrEntity, OrganisationRecord};
//! use core_kernel::{Abn, Acn};
//! use reference_data::OwnerType;
//!
//! let trustee = PartnerAssociate::organisation(
//!     OrganisationRecord::incorporated("Trustee Co Pty Ltd", Acn::parse("004085616").unwrap()),
//! );
//! let partner = Associate::organisation(
//!     AbrEntity::with_abn(Abn::parse("53004085616").unwrap()),
//!     OrganisationRecord::unincorporated("Smith Family Trust"),
//! )
//! .with_representatives(vec![trustee]);
//!
//! let entity = BusinessEntity::new(OwnerType::Partnership)
//!     .with_abr_entity(AbrEntity::with_abn(Abn::parse("12345678901").unwrap()))
//!     .with_organisation(OrganisationRecord::unincorporated("Smith & Partners"))
//!     .with_associates(vec![partner]);
//!
//! assert_eq!(entity.associate_count(), 1);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use reference_data::OwnerType;

use crate::party::{AbrEntity, IndividualRecord, OrganisationRecord};

/// A representative acting for an unincorporated associate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerAssociate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<OrganisationRecord>,
}

impl PartnerAssociate {
    /// A person acting as representative
    pub fn individual(individual: IndividualRecord) -> Self {
        Self {
            individual: Some(individual),
            organisation: None,
        }
    }

    /// An organisation acting as representative
    pub fn organisation(organisation: OrganisationRecord) -> Self {
        Self {
            individual: None,
            organisation: Some(organisation),
        }
    }
}

/// A partner, trustee or joint venture participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Associate {
    pub abr_entity: AbrEntity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<OrganisationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_associate: Option<Vec<PartnerAssociate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Associate {
    /// An associate who is a natural person
    pub fn individual(abr_entity: AbrEntity, individual: IndividualRecord) -> Self {
        Self {
            abr_entity,
            individual: Some(individual),
            organisation: None,
            partner_associate: None,
            start_date: None,
            end_date: None,
        }
    }

    /// An associate that is an organisation
    pub fn organisation(abr_entity: AbrEntity, organisation: OrganisationRecord) -> Self {
        Self {
            abr_entity,
            individual: None,
            organisation: Some(organisation),
            partner_associate: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the representatives acting for this associate
    pub fn with_representatives(mut self, representatives: Vec<PartnerAssociate>) -> Self {
        self.partner_associate = Some(representatives);
        self
    }

    /// Representatives, empty when none are given
    pub fn representatives(&self) -> &[PartnerAssociate] {
        self.partner_associate.as_deref().unwrap_or_default()
    }

    /// The name shown for this associate in summaries
    pub fn primary_name(&self) -> String {
        match (&self.individual, &self.organisation) {
            (Some(individual), _) => individual.full_name(),
            (None, Some(organisation)) => organisation.name.clone(),
            (None, None) => "Unknown associate".to_string(),
        }
    }
}

/// Reads an optional flag, treating `null` as `false`
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// The root record of a business name lodgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEntity {
    pub owner_type: OwnerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abr_entity: Option<AbrEntity>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub abn_exemption: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<IndividualRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<OrganisationRecord>,
    #[serde(default, rename = "associate", skip_serializing_if = "Option::is_none")]
    pub associates: Option<Vec<Associate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_review: Option<NaiveDate>,
}

impl BusinessEntity {
    /// Creates an empty record of the given owner type
    pub fn new(owner_type: OwnerType) -> Self {
        Self {
            owner_type,
            abr_entity: None,
            abn_exemption: false,
            individual: None,
            organisation: None,
            associates: None,
            date_review: None,
        }
    }

    pub fn with_abr_entity(mut self, abr_entity: AbrEntity) -> Self {
        self.abr_entity = Some(abr_entity);
        self
    }

    pub fn with_individual(mut self, individual: IndividualRecord) -> Self {
        self.individual = Some(individual);
        self
    }

    pub fn with_organisation(mut self, organisation: OrganisationRecord) -> Self {
        self.organisation = Some(organisation);
        self
    }

    pub fn with_associates(mut self, associates: Vec<Associate>) -> Self {
        self.associates = Some(associates);
        self
    }

    pub fn with_abn_exemption(mut self, exempt: bool) -> Self {
        self.abn_exemption = exempt;
        self
    }

    /// Associates, empty when none are given
    pub fn associates(&self) -> &[Associate] {
        self.associates.as_deref().unwrap_or_default()
    }

    pub fn associate_count(&self) -> usize {
        self.associates().len()
    }

    /// Whether the ABR details carry an ABN
    pub fn has_abn(&self) -> bool {
        self.abr_entity.as_ref().map_or(false, AbrEntity::has_abn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_read_as_empty() {
        let entity = BusinessEntity::new(OwnerType::Individual);
        assert!(entity.associates().is_empty());
        assert!(!entity.has_abn());

        let associate = Associate::organisation(AbrEntity::default(), OrganisationRecord::unincorporated("Trust"));
        assert!(associate.representatives().is_empty());
    }

    #[test]
    fn test_primary_name() {
        let associate = Associate::organisation(AbrEntity::default(), OrganisationRecord::unincorporated("Trust"));
        assert_eq!(associate.primary_name(), "Trust");
    }

    #[test]
    fn test_deserializes_wire_form() {
        let json = r#"{
            "ownerType": "JV",
            "abnExemption": true,
            "organisation": {"name": "Alpha Beta JV"},
            "associate": [
                {"abrEntity": {"abn": "11111111111"}, "organisation": {"name": "Alpha", "acn": "111111111"}}
            ]
        }"#;
        let entity: BusinessEntity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.owner_type, OwnerType::JointVenture);
        assert!(entity.abn_exemption);
        assert_eq!(entity.associate_count(), 1);
        assert!(entity.associates()[0].organisation.as_ref().unwrap().is_incorporated());
    }

    #[test]
    fn test_abn_exemption_defaults_to_false() {
        let entity: BusinessEntity = serde_json::from_str(r#"{"ownerType":"IB"}"#).unwrap();
        assert!(!entity.abn_exemption);
        assert!(entity.abr_entity.is_none());
    }

    #[test]
    fn test_null_abn_exemption_reads_as_false() {
        let entity: BusinessEntity =
            serde_json::from_str(r#"{"ownerType":"IB","abnExemption":null}"#).unwrap();
        assert!(!entity.abn_exemption);

        let entity: BusinessEntity =
            serde_json::from_str(r#"{"ownerType":"JV","abnExemption":true}"#).unwrap();
        assert!(entity.abn_exemption);
    }
}
