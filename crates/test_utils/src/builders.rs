//! Test Data Builders
//!
//! Builders for business entities and associates with sensible defaults.
//! Each preset produces an entity that passes validation, so tests only
//! state the change they care about.

use domain_lodgement::{
    AbrEntity, Associate, BusinessEntity, IndividualRecord, OrganisationRecord, PartnerAssociate,
};
use reference_data::OwnerType;

use crate::fixtures::{IdFixtures, PartyFixtures};

/// Builder for constructing test business entities
#[derive(Debug, Clone)]
pub struct BusinessEntityBuilder {
    entity: BusinessEntity,
}

impl BusinessEntityBuilder {
    /// An empty entity of the given owner type
    pub fn new(owner_type: OwnerType) -> Self {
        Self {
            entity: BusinessEntity::new(owner_type),
        }
    }

    /// A valid IND lodgement for Jane Citizen
    pub fn sole_trader() -> Self {
        Self::new(OwnerType::Individual)
            .with_abr_entity(PartyFixtures::abr_with_abn())
            .with_individual(PartyFixtures::jane_citizen())
    }

    /// A valid IB lodgement
    pub fn company() -> Self {
        Self::new(OwnerType::IncorporatedBody)
            .with_abr_entity(PartyFixtures::abr_with_abn())
            .with_organisation(PartyFixtures::company("ACME PTY LTD"))
    }

    /// A valid PTSH lodgement with `partners` individual partners
    pub fn partnership(partners: usize) -> Self {
        Self::new(OwnerType::Partnership)
            .with_abr_entity(PartyFixtures::abr_with_abn())
            .with_organisation(PartyFixtures::organisation("SMITH & JONES"))
            .with_associates((1..=partners).map(AssociateBuilder::individual_partner).collect())
    }

    /// A valid USTR lodgement with one corporate trustee
    pub fn trust() -> Self {
        Self::new(OwnerType::UnincorporatedEntity)
            .with_abr_entity(PartyFixtures::abr_with_abn())
            .with_organisation(PartyFixtures::organisation("CITIZEN FAMILY TRUST"))
            .with_associates(vec![AssociateBuilder::company_partner("TRUSTEE PTY LTD")])
    }

    /// A valid JV lodgement with `participants` corporate participants
    pub fn joint_venture(participants: usize) -> Self {
        Self::new(OwnerType::JointVenture)
            .with_abr_entity(PartyFixtures::abr_with_abn())
            .with_organisation(PartyFixtures::organisation("HARBOUR JOINT VENTURE"))
            .with_associates(
                (1..=participants)
                    .map(|i| AssociateBuilder::company_partner(&format!("PARTICIPANT {} PTY LTD", i)))
                    .collect(),
            )
    }

    pub fn with_owner_type(mut self, owner_type: OwnerType) -> Self {
        self.entity.owner_type = owner_type;
        self
    }

    pub fn with_abr_entity(mut self, abr_entity: AbrEntity) -> Self {
        self.entity.abr_entity = Some(abr_entity);
        self
    }

    pub fn without_abr_entity(mut self) -> Self {
        self.entity.abr_entity = None;
        self
    }

    /// Keeps the ABR details but drops their ABN
    pub fn without_abn(mut self) -> Self {
        if let Some(abr) = self.entity.abr_entity.as_mut() {
            abr.abn = None;
        }
        self
    }

    /// Sets the registered entity name, creating ABR details if needed
    pub fn with_entity_name(mut self, name: &str) -> Self {
        let abr = self.entity.abr_entity.take().unwrap_or_default();
        self.entity.abr_entity = Some(abr.named(name));
        self
    }

    pub fn with_individual(mut self, individual: IndividualRecord) -> Self {
        self.entity.individual = Some(individual);
        self
    }

    pub fn without_individual(mut self) -> Self {
        self.entity.individual = None;
        self
    }

    pub fn with_organisation(mut self, organisation: OrganisationRecord) -> Self {
        self.entity.organisation = Some(organisation);
        self
    }

    pub fn without_organisation(mut self) -> Self {
        self.entity.organisation = None;
        self
    }

    pub fn with_associates(mut self, associates: Vec<Associate>) -> Self {
        self.entity.associates = Some(associates);
        self
    }

    /// Appends one associate
    pub fn push_associate(mut self, associate: Associate) -> Self {
        self.entity.associates.get_or_insert_with(Vec::new).push(associate);
        self
    }

    pub fn with_abn_exemption(mut self, exempt: bool) -> Self {
        self.entity.abn_exemption = exempt;
        self
    }

    pub fn build(self) -> BusinessEntity {
        self.entity
    }
}

/// Builders for associates and their representatives
pub struct AssociateBuilder;

impl AssociateBuilder {
    /// An individual partner with an ABN, named "Partner<n> Citizen"
    pub fn individual_partner(n: usize) -> Associate {
        Associate::individual(
            PartyFixtures::abr_with_abn(),
            PartyFixtures::individual(&format!("Partner{}", n), "Citizen"),
        )
    }

    /// A company partner with an ACN and an ABN
    pub fn company_partner(name: &str) -> Associate {
        Associate::organisation(PartyFixtures::abr_with_abn(), PartyFixtures::company(name))
    }

    /// An unincorporated partner with an ABN and the given representatives
    pub fn unincorporated_partner(name: &str, representatives: Vec<PartnerAssociate>) -> Associate {
        Associate::organisation(
            AbrEntity::with_abn(IdFixtures::other_abn()),
            PartyFixtures::organisation(name),
        )
        .with_representatives(representatives)
    }

    /// An individual representative
    pub fn individual_representative(given_names: &str, family_name: &str) -> PartnerAssociate {
        PartnerAssociate::individual(PartyFixtures::individual(given_names, family_name))
    }

    /// A company representative with an ACN
    pub fn company_representative(name: &str) -> PartnerAssociate {
        PartnerAssociate::organisation(PartyFixtures::company(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixed_today;
    use domain_lodgement::BusinessEntityValidator;

    #[test]
    fn test_presets_are_valid() {
        let presets = [
            BusinessEntityBuilder::sole_trader(),
            BusinessEntityBuilder::company(),
            BusinessEntityBuilder::partnership(2),
            BusinessEntityBuilder::trust(),
            BusinessEntityBuilder::joint_venture(2),
        ];
        for preset in presets {
            let entity = preset.build();
            assert!(
                BusinessEntityValidator::check_as_of(&entity, fixed_today()).is_ok(),
                "{} preset should validate",
                entity.owner_type
            );
        }
    }

    #[test]
    fn test_push_associate_creates_list() {
        let entity = BusinessEntityBuilder::new(OwnerType::Partnership)
            .push_associate(AssociateBuilder::individual_partner(1))
            .build();
        assert_eq!(entity.associate_count(), 1);
    }
}
