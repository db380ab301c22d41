//! Integration tests for domain_lodgement

use proptest::prelude::*;

use domain_lodgement::{
    AbrEntity, BusinessEntityValidator, ClassificationSummary, MockRegisterPort,
    PartnerClassification, RegisterPort, RuleCode, ValidationSummary,
};
use reference_data::OwnerType;
use test_utils::*;

fn validate(entity: &domain_lodgement::BusinessEntity) -> Result<domain_lodgement::ValidatedBusinessEntity, domain_lodgement::LodgementError> {
    BusinessEntityValidator::validate_as_of(entity, fixed_today())
}

// ============================================================================
// Owner Type Rule Tests
// ============================================================================

mod owner_type_tests {
    use super::*;

    #[test]
    fn test_sole_trader_with_matching_name_accepted() {
        let entity = BusinessEntityBuilder::sole_trader()
            .with_entity_name("Jane Citizen")
            .build();
        assert_accepted(validate(&entity));
    }

    #[test]
    fn test_sole_trader_with_associate_rejected() {
        let entity = BusinessEntityBuilder::sole_trader()
            .with_entity_name("Jane Citizen")
            .push_associate(AssociateBuilder::individual_partner(1))
            .build();
        assert_rejected_with(validate(&entity), RuleCode::IndNoAssociates);
    }

    #[test]
    fn test_sole_trader_flips() {
        let cases = [
            (BusinessEntityBuilder::sole_trader().without_abr_entity(), RuleCode::IndAbrRequired),
            (BusinessEntityBuilder::sole_trader().without_individual(), RuleCode::IndIndividualRequired),
            (
                BusinessEntityBuilder::sole_trader().with_organisation(PartyFixtures::organisation("JANE'S")),
                RuleCode::IndNoOrganisation,
            ),
        ];
        for (builder, code) in cases {
            assert_rejected_with(validate(&builder.build()), code);
        }
    }

    #[test]
    fn test_company_flips() {
        let cases = [
            (BusinessEntityBuilder::company().without_abr_entity(), RuleCode::IbAbrRequired),
            (BusinessEntityBuilder::company().without_organisation(), RuleCode::IbOrganisationRequired),
            (
                BusinessEntityBuilder::company().push_associate(AssociateBuilder::company_partner("OTHER PTY LTD")),
                RuleCode::IbNoAssociates,
            ),
            (
                BusinessEntityBuilder::company().with_individual(PartyFixtures::jane_citizen()),
                RuleCode::IbNoIndividual,
            ),
            (
                BusinessEntityBuilder::company().with_organisation(PartyFixtures::organisation("ACME")),
                RuleCode::IbAcnRequired,
            ),
        ];
        for (builder, code) in cases {
            assert_rejected_with(validate(&builder.build()), code);
        }
    }

    #[test]
    fn test_partnership_flips() {
        let cases = [
            (BusinessEntityBuilder::partnership(2).without_abr_entity(), RuleCode::PtshAbrRequired),
            (BusinessEntityBuilder::partnership(2).without_organisation(), RuleCode::PtshOrganisationRequired),
            (BusinessEntityBuilder::partnership(0), RuleCode::PtshPartnersRequired),
            (
                BusinessEntityBuilder::partnership(2).with_individual(PartyFixtures::jane_citizen()),
                RuleCode::PtshNoIndividual,
            ),
            (
                BusinessEntityBuilder::partnership(2).with_organisation(PartyFixtures::company("SMITH PTY LTD")),
                RuleCode::PtshNoAcn,
            ),
        ];
        for (builder, code) in cases {
            assert_rejected_with(validate(&builder.build()), code);
        }
    }

    #[test]
    fn test_partnership_bounds() {
        assert_accepted(validate(&BusinessEntityBuilder::partnership(1).build()));
        assert_accepted(validate(&BusinessEntityBuilder::partnership(9).build()));
        assert_rejected_with(
            validate(&BusinessEntityBuilder::partnership(10).build()),
            RuleCode::PtshMaxPartners,
        );
    }

    #[test]
    fn test_trust_flips() {
        let cases = [
            (BusinessEntityBuilder::trust().without_abr_entity(), RuleCode::UstrAbrRequired),
            (BusinessEntityBuilder::trust().without_organisation(), RuleCode::UstrOrganisationRequired),
            (BusinessEntityBuilder::trust().with_associates(vec![]), RuleCode::UstrTrusteesRequired),
            (
                BusinessEntityBuilder::trust().with_individual(PartyFixtures::jane_citizen()),
                RuleCode::UstrNoIndividual,
            ),
        ];
        for (builder, code) in cases {
            assert_rejected_with(validate(&builder.build()), code);
        }
    }

    #[test]
    fn test_joint_venture_bounds() {
        assert_rejected_with(
            validate(&BusinessEntityBuilder::joint_venture(0).build()),
            RuleCode::JvPartnersRequired,
        );
        assert_rejected_with(
            validate(&BusinessEntityBuilder::joint_venture(1).build()),
            RuleCode::JvMinPartners,
        );
        assert_accepted(validate(&BusinessEntityBuilder::joint_venture(2).build()));
        assert_accepted(validate(&BusinessEntityBuilder::joint_venture(12).build()));
    }

    #[test]
    fn test_joint_venture_abn_exclusive_or() {
        let conflict = BusinessEntityBuilder::joint_venture(2).with_abn_exemption(true).build();
        assert_rejected_with(validate(&conflict), RuleCode::JvAbnAndExemptConflict);

        let neither = BusinessEntityBuilder::joint_venture(2).without_abn().build();
        assert_rejected_with(validate(&neither), RuleCode::JvAbnOrExempt);

        let exempt = BusinessEntityBuilder::joint_venture(2)
            .without_abr_entity()
            .with_abn_exemption(true)
            .build();
        assert_accepted(validate(&exempt));
    }

    #[test]
    fn test_exempt_joint_venture_needs_participant_abns() {
        let mut second = AssociateBuilder::company_partner("SECOND PTY LTD");
        second.abr_entity = AbrEntity::default();
        let entity = BusinessEntityBuilder::joint_venture(1)
            .push_associate(second)
            .without_abr_entity()
            .with_abn_exemption(true)
            .build();

        let err = assert_rejected_with(validate(&entity), RuleCode::JvExemptPartnerAbn);
        assert_eq!(err.code(), "JV_EXEMPT_PARTNER_ABN:2");
    }

    #[test]
    fn test_joint_venture_flips() {
        let cases = [
            (BusinessEntityBuilder::joint_venture(2).without_organisation(), RuleCode::JvOrganisationRequired),
            (
                BusinessEntityBuilder::joint_venture(2).with_organisation(PartyFixtures::company("JV PTY LTD")),
                RuleCode::JvNoAcn,
            ),
            (
                BusinessEntityBuilder::joint_venture(2).with_individual(PartyFixtures::jane_citizen()),
                RuleCode::JvNoIndividual,
            ),
        ];
        for (builder, code) in cases {
            assert_rejected_with(validate(&builder.build()), code);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let entity = BusinessEntityBuilder::partnership(3).build();
        let before = entity.clone();
        let first = assert_accepted(validate(&entity));
        let second = assert_accepted(validate(&entity));
        assert_eq!(first, second);
        assert_eq!(entity, before);
        assert_eq!(first.into_inner(), before);
    }
}

// ============================================================================
// Associate Tests
// ============================================================================

mod associate_tests {
    use super::*;

    #[test]
    fn test_unincorporated_associate_needs_company_representatives() {
        let no_reps = AssociateBuilder::unincorporated_partner("CITIZEN FAMILY TRUST", vec![]);
        let entity = BusinessEntityBuilder::partnership(1).push_associate(no_reps).build();
        let err = assert_root_cause(validate(&entity), RuleCode::UnincAssocRepsRequired);
        assert_eq!(err.code(), "PTSH_PARTNER_INVALID:2");

        let org_without_acn = domain_lodgement::PartnerAssociate::organisation(PartyFixtures::organisation("TRUSTEE"));
        let bad_rep = AssociateBuilder::unincorporated_partner("CITIZEN FAMILY TRUST", vec![org_without_acn]);
        let entity = BusinessEntityBuilder::partnership(1).push_associate(bad_rep).build();
        let err = assert_root_cause(validate(&entity), RuleCode::PartnerAssocOrgAcn);
        assert_eq!(err.index_path(), vec![2, 1]);

        let good_rep = AssociateBuilder::unincorporated_partner(
            "CITIZEN FAMILY TRUST",
            vec![AssociateBuilder::company_representative("TRUSTEE PTY LTD")],
        );
        let entity = BusinessEntityBuilder::partnership(1).push_associate(good_rep).build();
        assert_accepted(validate(&entity));
    }

    #[test]
    fn test_individual_partner_without_abn() {
        let mut partner = AssociateBuilder::individual_partner(2);
        partner.abr_entity = AbrEntity::default();
        let entity = BusinessEntityBuilder::partnership(1).push_associate(partner).build();
        let err = assert_root_cause(validate(&entity), RuleCode::IndAssocAbn);
        assert_eq!(err.rule_code(), RuleCode::PtshPartnerInvalid);
    }

    #[test]
    fn test_trustee_failures_use_trust_code() {
        let mut trustee = AssociateBuilder::company_partner("TRUSTEE PTY LTD");
        trustee.individual = Some(PartyFixtures::jane_citizen());
        let entity = BusinessEntityBuilder::trust().with_associates(vec![trustee]).build();
        let err = assert_rejected_with(validate(&entity), RuleCode::UstrAssociateInvalid);
        assert!(err.is_structural());
        assert_eq!(err.root_cause().rule_code(), RuleCode::AssocStructure);
    }

    #[test]
    fn test_incorporated_partner_cannot_have_representatives() {
        let partner = AssociateBuilder::company_partner("PARTNER PTY LTD")
            .with_representatives(vec![AssociateBuilder::company_representative("AGENT PTY LTD")]);
        let entity = BusinessEntityBuilder::partnership(1).push_associate(partner).build();
        let err = assert_root_cause(validate(&entity), RuleCode::IncAssocNoReps);
        assert_eq!(err.code(), "PTSH_PARTNER_INVALID:2");
    }

    #[test]
    fn test_unincorporated_partner_without_abn() {
        let mut partner = AssociateBuilder::unincorporated_partner(
            "CITIZEN FAMILY TRUST",
            vec![AssociateBuilder::company_representative("TRUSTEE PTY LTD")],
        );
        partner.abr_entity = AbrEntity::default();
        let entity = BusinessEntityBuilder::partnership(1).push_associate(partner).build();
        assert_root_cause(validate(&entity), RuleCode::UnincAssocAbn);
    }

    #[test]
    fn test_representative_holding_both_parties() {
        let both = domain_lodgement::PartnerAssociate {
            individual: Some(PartyFixtures::jane_citizen()),
            organisation: Some(PartyFixtures::company("TRUSTEE PTY LTD")),
        };
        let partner = AssociateBuilder::unincorporated_partner(
            "CITIZEN FAMILY TRUST",
            vec![AssociateBuilder::company_representative("OTHER PTY LTD"), both],
        );
        let entity = BusinessEntityBuilder::partnership(1).push_associate(partner).build();
        let err = assert_root_cause(validate(&entity), RuleCode::PartnerAssocExclusive);
        assert_eq!(err.index_path(), vec![2, 2]);
        assert!(err.is_structural());
    }

    #[test]
    fn test_partner_count_checked_before_partner_fields() {
        let mut partners: Vec<_> = (1..=10).map(AssociateBuilder::individual_partner).collect();
        if let Some(individual) = partners[0].individual.as_mut() {
            individual.birth_details.date = fixed_today() + chrono::Days::new(1);
        }
        let entity = BusinessEntityBuilder::partnership(0).with_associates(partners).build();
        assert_rejected_with(validate(&entity), RuleCode::PtshMaxPartners);

        let mut partners: Vec<_> = (1..=9).map(AssociateBuilder::individual_partner).collect();
        if let Some(individual) = partners[0].individual.as_mut() {
            individual.birth_details.date = fixed_today() + chrono::Days::new(1);
        }
        let entity = BusinessEntityBuilder::partnership(0).with_associates(partners).build();
        let err = assert_root_cause(validate(&entity), RuleCode::FieldInvalid);
        assert_eq!(err.code(), "PTSH_PARTNER_INVALID:1");
    }

    #[test]
    fn test_nested_message_names_position() {
        let mut partner = AssociateBuilder::individual_partner(1);
        partner.abr_entity = AbrEntity::default();
        let entity = BusinessEntityBuilder::joint_venture(1).push_associate(partner).build();
        let err = assert_rejected_with(validate(&entity), RuleCode::JvPartnerInvalid);
        assert!(err.to_string().starts_with("Partner 2 validation failed: "));
    }
}

// ============================================================================
// Name Consistency Tests
// ============================================================================

mod name_tests {
    use super::*;

    #[test]
    fn test_organisation_name_must_match_abr_name() {
        let entity = BusinessEntityBuilder::company().with_entity_name("  ACME PTY LTD ").build();
        assert_accepted(validate(&entity));

        let entity = BusinessEntityBuilder::company().with_entity_name("Acme Pty Ltd").build();
        assert_rejected_with(validate(&entity), RuleCode::NameMismatch);
    }

    #[test]
    fn test_sole_trader_name_must_match_abr_name() {
        let entity = BusinessEntityBuilder::sole_trader().with_entity_name("Jane Smith").build();
        assert_rejected_with(validate(&entity), RuleCode::IndividualNameMismatch);
    }

    #[test]
    fn test_blank_abr_name_skips_name_checks() {
        let entity = BusinessEntityBuilder::company().with_entity_name("   ").build();
        assert_accepted(validate(&entity));

        let entity = BusinessEntityBuilder::sole_trader().with_entity_name(" \t ").build();
        assert_accepted(validate(&entity));
    }

    #[test]
    fn test_name_parts_are_trimmed_before_joining() {
        let entity = BusinessEntityBuilder::sole_trader()
            .with_individual(PartyFixtures::individual("Jane ", " Citizen"))
            .with_entity_name(" Jane Citizen ")
            .build();
        assert_accepted(validate(&entity));
    }

    #[test]
    fn test_owner_rules_run_before_name_checks() {
        let entity = BusinessEntityBuilder::company()
            .with_entity_name("SOMETHING ELSE")
            .with_individual(PartyFixtures::jane_citizen())
            .build();
        assert_rejected_with(validate(&entity), RuleCode::IbNoIndividual);
    }
}

// ============================================================================
// Summary Tests
// ============================================================================

mod summary_tests {
    use super::*;

    #[test]
    fn test_classification_tally() {
        let entity = BusinessEntityBuilder::partnership(2)
            .push_associate(AssociateBuilder::company_partner("PARTNER PTY LTD"))
            .push_associate(AssociateBuilder::unincorporated_partner(
                "CITIZEN FAMILY TRUST",
                vec![
                    AssociateBuilder::individual_representative("John", "Citizen"),
                    AssociateBuilder::company_representative("TRUSTEE PTY LTD"),
                ],
            ))
            .build();
        let validated = assert_accepted(validate(&entity));
        let summary = validated.classification_summary();

        assert_eq!(summary.total_partners, 4);
        assert_eq!(summary.individual_partners, 2);
        assert_eq!(summary.incorporated_partners, 1);
        assert_eq!(summary.unincorporated_partners, 1);
        let detail = &summary.unincorporated_details[0];
        assert_eq!(detail.partner_index, 3);
        assert_eq!(detail.partner_name, "CITIZEN FAMILY TRUST");
        assert_eq!(detail.representatives.representative_count, 2);
    }

    #[test]
    fn test_requirements_per_owner_type() {
        let ptsh = ValidationSummary::for_owner_type(OwnerType::Partnership);
        assert_eq!((ptsh.min_associates, ptsh.max_associates), (Some(1), Some(9)));
        let jv = ValidationSummary::for_owner_type(OwnerType::JointVenture);
        assert_eq!(jv.min_associates, Some(2));
        assert!(jv.allows_abn_exemption);
        let ib = ValidationSummary::for_owner_type(OwnerType::IncorporatedBody);
        assert!(ib.requires_acn);
        assert!(!ib.requires_associates);
    }

    #[test]
    fn test_summary_serializes_tally() {
        let validated = assert_accepted(validate(&BusinessEntityBuilder::joint_venture(2).build()));
        let json = serde_json::to_value(validated.validation_summary()).unwrap();
        assert_eq!(json["owner_type"], "JV");
        assert_eq!(json["partner_classification"]["incorporated_partners"], 2);
    }
}

// ============================================================================
// Register Port Tests
// ============================================================================

mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_lodge_validated_entity() {
        let port = MockRegisterPort::new();
        let validated = assert_accepted(validate(&BusinessEntityBuilder::trust().build()));

        let result = port.lodge_application(&validated).await.unwrap();
        assert_eq!(result.operation, "bnLodgeApplication");
        assert_eq!(result.body["ownerType"], "USTR");

        let lodged = port.lodged().await;
        assert_eq!(lodged.len(), 1);
        assert_eq!(lodged[0], *validated);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_classification_is_total(associate in associate_strategy()) {
            let has_individual = associate.individual.is_some();
            let has_organisation = associate.organisation.is_some();
            match associate.classification() {
                Ok(PartnerClassification::Individual) => {
                    prop_assert!(has_individual && !has_organisation);
                }
                Ok(PartnerClassification::Incorporated) => {
                    prop_assert!(!has_individual);
                    prop_assert!(associate.organisation.as_ref().unwrap().acn.is_some());
                }
                Ok(PartnerClassification::Unincorporated) => {
                    prop_assert!(!has_individual);
                    prop_assert!(associate.organisation.as_ref().unwrap().acn.is_none());
                }
                Err(e) => {
                    prop_assert_eq!(has_individual, has_organisation);
                    prop_assert_eq!(e.rule_code(), RuleCode::AssocStructure);
                }
            }
        }

        #[test]
        fn prop_valid_partnerships_accepted(associates in prop::collection::vec(valid_associate_strategy(), 1..=9)) {
            let count = associates.len();
            let entity = BusinessEntityBuilder::partnership(0).with_associates(associates).build();
            let validated = validate(&entity);
            prop_assert!(validated.is_ok(), "{:?}", validated.err());
            let summary = ClassificationSummary::from_associates(entity.associates()).unwrap();
            prop_assert_eq!(summary.total_partners, count);
            prop_assert_eq!(
                summary.individual_partners + summary.incorporated_partners + summary.unincorporated_partners,
                count
            );
        }

        #[test]
        fn prop_owner_type_summary_matches_rules(owner_type in owner_type_strategy()) {
            let summary = ValidationSummary::for_owner_type(owner_type);
            prop_assert_eq!(summary.requires_associates, owner_type.is_composite());
            prop_assert_eq!(summary.allows_abn_exemption, owner_type == OwnerType::JointVenture);
        }
    }
}
