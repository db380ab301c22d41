//! Pre-built Test Fixtures
//!
//! Ready-to-use records for lodgement tests. Every fixture passes its own
//! leaf checks, so a test can break exactly the rule it is about.

use chrono::NaiveDate;
use core_kernel::{Abn, Acn, PostCode};
use domain_lodgement::{
    AbrEntity, IndividualRecord, OrganisationRecord, PersonName, BirthDetails, PhysicalAddress,
    ResidentialAddress,
};
use reference_data::{StateTerritoryCode, AUSTRALIA};

/// Fixed "today" for date-sensitive checks
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Fixture for register identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn abn() -> Abn {
        Abn::parse("12345678901").unwrap()
    }

    /// A second ABN, distinct from [`IdFixtures::abn`]
    pub fn other_abn() -> Abn {
        Abn::parse("98765432109").unwrap()
    }

    pub fn acn() -> Acn {
        Acn::parse("004085616").unwrap()
    }

    pub fn post_code() -> PostCode {
        PostCode::parse("2000").unwrap()
    }
}

/// Fixture for addresses
pub struct AddressFixtures;

impl AddressFixtures {
    /// 1 George St, Sydney NSW 2000
    pub fn sydney() -> PhysicalAddress {
        PhysicalAddress::new("Sydney", StateTerritoryCode::NewSouthWales, IdFixtures::post_code())
            .with_street("1", "George", "St")
    }

    pub fn residential() -> ResidentialAddress {
        ResidentialAddress::australian(Self::sydney())
    }
}

/// Fixture for people and organisations
pub struct PartyFixtures;

impl PartyFixtures {
    /// A valid individual with the given names
    pub fn individual(given_names: &str, family_name: &str) -> IndividualRecord {
        IndividualRecord {
            name: PersonName::new(given_names, family_name),
            birth_details: BirthDetails::new(NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(), AUSTRALIA),
            address: AddressFixtures::residential(),
            email: None,
        }
    }

    /// Jane Citizen
    pub fn jane_citizen() -> IndividualRecord {
        Self::individual("Jane", "Citizen")
    }

    pub fn company(name: &str) -> OrganisationRecord {
        OrganisationRecord::incorporated(name, IdFixtures::acn())
    }

    pub fn organisation(name: &str) -> OrganisationRecord {
        OrganisationRecord::unincorporated(name)
    }

    pub fn abr_with_abn() -> AbrEntity {
        AbrEntity::with_abn(IdFixtures::abn())
    }
}
