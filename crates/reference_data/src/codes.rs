//! Register code sets
//!
//! Search, organisation, status, address and jurisdiction codes used by the
//! business register's request and response documents.

use serde::Serialize;
use thiserror::Error;

/// A code that is not a member of its closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

/// A value/label pair suitable for a form choice list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeChoice {
    pub value: &'static str,
    pub label: String,
}

/// Turns a CamelCase member name into space-separated words.
pub(crate) fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 8);
    for (i, ch) in name.char_indices() {
        if i > 0 && ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}

define_codes! {
    /// Search type options for register name searches
    pub enum SearchType {
        Standard => "S",
        Exact => "E",
    }
}

impl Default for SearchType {
    fn default() -> Self {
        SearchType::Standard
    }
}

define_codes! {
    /// Search scopes for NNI name searches
    pub enum SearchScope {
        NamesValidForExtract => "1",
        CurrentNamesAndReservations => "2",
        IncludeDeregistered => "3",
        AllEntities => "A",
        BusinessNamesAndState => "B",
        RegDeregCompaniesTrustsNrets => "C",
        RegisteredCompaniesAndNrets => "E",
        FullScopeWithBusnAndState => "G",
        ExtendedScopeWithDeregistered => "H",
        NoncRegisteredTrustsNrets => "I",
        CompaniesAndReservations => "J",
        NoncAndBusinessNames => "L",
        NoncAndReservations => "M",
        NonCompanyNames => "N",
        NoncAndRegisteredCompanies => "O",
        TrustsAndSchemes => "T",
        RegisteredCompanies => "R",
        CombinedStandardScope => "S",
        CurrentNameReservations => "P",
        CompaniesReservationsBusn => "X",
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        SearchScope::AllEntities
    }
}

define_codes! {
    /// Register organisation type codes
    pub enum OrganisationType {
        ProprietaryCompany => "APTY",
        PublicCompany => "APUB",
        PassportFundAu => "ARPA",
        PassportFundForeign => "ARPF",
        Association => "ASSN",
        BusinessName => "BUSN",
        Charity => "CHAR",
        CommunityPurpose => "COMP",
        Cooperative => "COOP",
        ForeignCompany => "FNOS",
        LimitedPartnership => "LTDP",
        ManagedInvestmentScheme => "MISM",
        NonCompany => "NONC",
        NonRegisteredEntity => "NRET",
        RegisteredAustralianBody => "RACN",
        ReligiousBody => "REBD",
        NameReservation => "RSVN",
        SolicitorCorporation => "SOLS",
        Trust => "TRST",
    }
}

define_codes! {
    /// Business name registration status
    pub enum EntityStatus {
        Registered => "REGD",
        Cancelled => "DRGD",
        Pending => "PEND",
    }
}

define_codes! {
    /// Business name registration term
    pub enum TermType {
        OneYear => "1",
        ThreeYears => "3",
    }
}

define_codes! {
    /// Address type codes
    pub enum AddressTypeCode {
        RegisteredOfficeCompany => "RG",
        RegisteredOfficeForeignCompany => "RP",
        PrincipalPlaceOfBusinessCompany => "PA",
        RegisteredOfficeInPlaceOfIncorporation => "RO",
        ResidentialAddress => "GC",
        PlaceOfBusiness => "GD",
        ServiceOfDocuments => "GE",
        ContactAddress => "GL",
    }
}

define_codes! {
    /// Status codes for register entities
    pub enum StatusType {
        PendingRegistration => "PEND",
        Registered => "REGD",
        Deregistered => "DRGD",
        Held => "HELD",
        StrikeOff => "SOFF",
        UnderExternalAdministration => "EXAD",
        Cancelled => "CNCL",
        NotRegistered => "NRGD",
        Dormant => "DMNT",
    }
}

define_codes! {
    /// Postal delivery type codes
    pub enum PostalDeliveryType {
        CareOfPostOffice => "CARE_PO",
        CommunityMailAgent => "CMA",
        CommunityMailBag => "CMB",
        GpoBox => "GPO_BOX",
        LockedBag => "LOCKED_BAG",
        MailService => "MS",
        PoBox => "PO_BOX",
        PrivateBag => "PRIVATE_BAG",
        RoadsideDelivery => "RSD",
        RoadsideMailBox => "RMB",
        RoadsideMailService => "RMS",
        CommunityPostalAgent => "CPA",
    }
}

impl PostalDeliveryType {
    /// Whether a postal delivery number must accompany this delivery type
    pub fn requires_number(&self) -> bool {
        matches!(
            self,
            PostalDeliveryType::GpoBox
                | PostalDeliveryType::LockedBag
                | PostalDeliveryType::PoBox
                | PostalDeliveryType::PrivateBag
                | PostalDeliveryType::RoadsideMailBox
        )
    }
}

define_codes! {
    /// Australian state and territory codes
    pub enum StateTerritoryCode {
        AustralianCapitalTerritory => "ACT",
        CocosKeelingIslands => "CCK",
        ChristmasIsland => "CXR",
        JervisBayTerritory => "JBT",
        NewSouthWales => "NSW",
        NorfolkIsland => "NFK",
        NorthernTerritory => "NT",
        Queensland => "QLD",
        SouthAustralia => "SA",
        Tasmania => "TAS",
        Victoria => "VIC",
        WesternAustralia => "WA",
    }
}
