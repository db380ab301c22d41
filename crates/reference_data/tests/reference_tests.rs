//! Integration tests for the reference value sets

use proptest::prelude::*;
use reference_data::*;
use std::str::FromStr;

mod owner_type_tests {
    use super::*;

    #[test]
    fn test_every_owner_type_round_trips_through_its_code() {
        for owner in OwnerType::ALL {
            assert_eq!(OwnerType::from_str(owner.as_code()).unwrap(), *owner);
        }
    }

    #[test]
    fn test_composite_owner_types() {
        let composite: Vec<_> = OwnerType::ALL
            .iter()
            .filter(|o| o.is_composite())
            .map(|o| o.as_code())
            .collect();
        assert_eq!(composite, vec!["PTSH", "USTR", "JV"]);
    }
}

mod abr_classification_tests {
    use super::*;

    #[test]
    fn test_company_codes_are_incorporated() {
        assert_eq!(
            classify_abr_entity("PRV", None).unwrap(),
            AsicEntityType::IncorporatedBody
        );
    }

    #[test]
    fn test_individual_code() {
        let entity = classify_abr_entity("IND", None).unwrap();
        assert_eq!(entity, AsicEntityType::Individual);
        assert_eq!(entity.owner_type(), Some(OwnerType::Individual));
    }

    #[test]
    fn test_conditional_codes_depend_on_asic_identifier() {
        assert_eq!(
            classify_abr_entity("STR", Some("123456789")).unwrap(),
            AsicEntityType::IncorporatedBody
        );
        assert_eq!(
            classify_abr_entity("STR", None).unwrap(),
            AsicEntityType::Unincorporated
        );
        assert_eq!(
            classify_abr_entity("PTT", Some("   ")).unwrap(),
            AsicEntityType::Unincorporated
        );
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        let err = classify_abr_entity("ZZZ", None).unwrap_err();
        assert!(matches!(err, ClassifyError::UnknownCode(ref code) if code == "ZZZ"));
    }

    #[test]
    fn test_classification_never_returns_conditional() {
        for code in AbrEntityTypeCode::ALL {
            let resolved = classify_abr_entity(code.as_code(), None).unwrap();
            assert_ne!(resolved, AsicEntityType::Conditional);
            assert!(resolved.owner_type().is_some());
        }
    }
}

mod list_tests {
    use super::*;

    #[test]
    fn test_lists_have_no_duplicates() {
        let countries: std::collections::HashSet<_> = COUNTRIES.iter().collect();
        assert_eq!(countries.len(), COUNTRIES.len());
        let streets: std::collections::HashSet<_> = STREET_TYPES.iter().collect();
        assert_eq!(streets.len(), STREET_TYPES.len());
    }

    #[test]
    fn test_country_lookup_trims() {
        assert!(is_country(AUSTRALIA));
        assert!(is_country("  United Kingdom"));
        assert!(!is_country(""));
    }

    proptest! {
        #[test]
        fn prop_every_listed_country_is_accepted_with_padding(
            index in 0..COUNTRIES.len(),
            pad in "[ \t]{0,3}",
        ) {
            let padded = format!("{pad}{}{pad}", COUNTRIES[index]);
            prop_assert!(is_country(&padded));
        }

        #[test]
        fn prop_digit_strings_are_never_street_types(value in "[0-9]{1,6}") {
            prop_assert!(!is_street_type(&value));
        }
    }
}

mod code_choice_tests {
    use super::*;

    #[test]
    fn test_state_choices_are_labelled() {
        let choices = StateTerritoryCode::choices();
        let nsw = choices.iter().find(|c| c.value == "NSW").unwrap();
        assert_eq!(nsw.label, "New South Wales");
    }

    #[test]
    fn test_lodgement_address_types() {
        assert_eq!(AddressTypeCode::PlaceOfBusiness.as_code(), "GD");
        assert_eq!(AddressTypeCode::ServiceOfDocuments.as_code(), "GE");
    }
}
