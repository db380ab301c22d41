//! Property-Based Test Generators
//!
//! Proptest strategies for owner types and associates. The associate
//! strategy covers every party shape, including the malformed ones, so that
//! classification can be tested for totality.

use domain_lodgement::{AbrEntity, Associate, PartnerAssociate};
use proptest::prelude::*;
use reference_data::OwnerType;

use crate::builders::AssociateBuilder;
use crate::fixtures::{IdFixtures, PartyFixtures};

/// Strategy for generating any owner type
pub fn owner_type_strategy() -> impl Strategy<Value = OwnerType> {
    prop::sample::select(OwnerType::ALL.to_vec())
}

/// Strategy for upper-case organisation names
pub fn organisation_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z ]{0,30}[A-Z]"
}

/// Strategy for a representative: individual, company, or neither/both
pub fn representative_strategy() -> impl Strategy<Value = PartnerAssociate> {
    (any::<bool>(), any::<bool>(), organisation_name_strategy()).prop_map(|(person, org, name)| {
        PartnerAssociate {
            individual: person.then(PartyFixtures::jane_citizen),
            organisation: org.then(|| PartyFixtures::company(&name)),
        }
    })
}

/// Strategy for an associate of arbitrary shape
///
/// Individual and organisation presence, ACN, ABN and representatives vary
/// independently.
pub fn associate_strategy() -> impl Strategy<Value = Associate> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        organisation_name_strategy(),
        prop::collection::vec(representative_strategy(), 0..3),
    )
        .prop_map(|(person, org, acn, abn, name, representatives)| Associate {
            abr_entity: if abn {
                AbrEntity::with_abn(IdFixtures::abn())
            } else {
                AbrEntity::default()
            },
            individual: person.then(PartyFixtures::jane_citizen),
            organisation: org.then(|| {
                if acn {
                    PartyFixtures::company(&name)
                } else {
                    PartyFixtures::organisation(&name)
                }
            }),
            partner_associate: (!representatives.is_empty()).then_some(representatives),
            start_date: None,
            end_date: None,
        })
}

/// Strategy for well-formed associates that pass validation
pub fn valid_associate_strategy() -> impl Strategy<Value = Associate> {
    (0u8..3, organisation_name_strategy(), 1usize..4).prop_map(|(kind, name, reps)| match kind {
        0 => AssociateBuilder::individual_partner(reps),
        1 => AssociateBuilder::company_partner(&name),
        _ => AssociateBuilder::unincorporated_partner(
            &name,
            (0..reps)
                .map(|i| AssociateBuilder::individual_representative(&format!("Rep{}", i), "Citizen"))
                .collect(),
        ),
    })
}
