//! ABR entity types
//!
//! The Australian Business Register describes an entity with a three letter
//! type code. The business register groups those codes into a handful of
//! entity types, one of which ("conditional") only resolves once it is known
//! whether the entity holds an ASIC identifier.

use thiserror::Error;

use crate::owner_type::OwnerType;

define_codes! {
    /// Register entity type classification
    pub enum AsicEntityType {
        IncorporatedBody => "IB",
        Unincorporated => "USTR",
        Individual => "IND",
        Partnership => "PTSH",
        JointVenture => "JV",
        Conditional => "COND",
    }
}

impl AsicEntityType {
    /// Maps a resolved entity type onto the owner type used for lodgement.
    ///
    /// `Conditional` has no owner type until it is resolved.
    pub fn owner_type(&self) -> Option<OwnerType> {
        match self {
            AsicEntityType::IncorporatedBody => Some(OwnerType::IncorporatedBody),
            AsicEntityType::Unincorporated => Some(OwnerType::UnincorporatedEntity),
            AsicEntityType::Individual => Some(OwnerType::Individual),
            AsicEntityType::Partnership => Some(OwnerType::Partnership),
            AsicEntityType::JointVenture => Some(OwnerType::JointVenture),
            AsicEntityType::Conditional => None,
        }
    }
}

define_codes! {
    /// ABR entity type codes
    pub enum AbrEntityTypeCode {
        // Incorporated body
        AustralianPrivateCompany => "PRV",
        AustralianPublicCompany => "PUB",
        AustralianPrivateCompanyCommonwealth => "CCR",
        AustralianPrivateCompanyLocal => "LCR",
        AustralianPrivateCompanyState => "SCR",
        AustralianPrivateCompanyTerritory => "TCR",
        AustralianPublicCompanyCommonwealth => "CCB",
        AustralianPublicCompanyLocal => "LCB",
        AustralianPublicCompanyState => "SCB",
        AustralianPublicCompanyTerritory => "TCB",
        PooledDevelopmentFund => "PDF",
        PooledDevelopmentFundCommonwealth => "CCP",
        PooledDevelopmentFundLocal => "LCP",
        PooledDevelopmentFundState => "SCP",
        PooledDevelopmentFundTerritory => "TCP",
        // Individual
        Individual => "IND",
        // Partnerships
        FamilyPartnership => "FPT",
        LimitedPartnership => "LPT",
        OtherPartnership => "PTR",
        LimitedPartnershipLocal => "LCL",
        LimitedPartnershipState => "SCL",
        LimitedPartnershipTerritory => "TCL",
        OtherPartnershipCommonwealth => "CGP",
        OtherPartnershipLocal => "LGP",
        OtherPartnershipState => "SGP",
        OtherPartnershipTerritory => "TGP",
        // Unincorporated entities
        ApprovedDepositFund => "ADF",
        ApraRegulatedFundFundTypeUnknown => "ARF",
        CoOperativeCommonwealth => "CCC",
        OtherUnincorporatedEntityCommonwealth => "CCN",
        CorporateUnitTrustCommonwealth => "CCU",
        CommonwealthGovernmentStatutoryAuthority => "CGA",
        CommonwealthGovernmentCompany => "CGC",
        CommonwealthGovernmentEntity => "CGE",
        CommonwealthGovernmentSuperannuationFund => "CGS",
        CommonwealthGovernmentTrust => "CGT",
        CashManagementTrust => "CMT",
        CoOperative => "COP",
        ApraRegulatedSuperFundCommonwealthPublicSectorFund => "CSA",
        ApraRegulatedSuperFundCommonwealthPublicSectorScheme => "CSP",
        ANonRegulatedSuperannuationFundCommonwealth => "CSS",
        CashManagementTrustCommonwealth => "CTC",
        DiscretionaryTrustServicesManagementCommonwealth => "CTD",
        FixedTrustCommonwealth => "CTF",
        HybridTrustCommonwealth => "CTH",
        DiscretionaryTrustInvestmentCommonwealth => "CTI",
        PublicUnitTrustListedCommonwealth => "CTL",
        PublicUnitTrustUnlistedCommonwealth => "CTQ",
        DiscretionaryTrustTradingCommonwealth => "CTT",
        FixedUnitTrustCommonwealth => "CTU",
        CorporateUnitTrust => "CUT",
        DeceasedEstate => "DES",
        DiplomaticConsulateBodyOrHighCommissioner => "DIP",
        DiscretionaryInvestmentTrust => "DIT",
        DiscretionaryServiceManagementTrust => "DST",
        DiscretionaryTradingTrust => "DTT",
        FirstHomeSaverAccountFhsaTrust => "FHS",
        FixedUnitTrust => "FUT",
        FixedTrust => "FXT",
        HybridTrust => "HYT",
        CoOperativeLocal => "LCC",
        OtherUnincorporatedEntityLocal => "LCN",
        CorporateUnitTrustLocal => "LCU",
        LocalGovernmentStatutoryAuthority => "LGA",
        LocalGovernmentCompany => "LGC",
        LocalGovernmentEntity => "LGE",
        LocalGovernmentTrust => "LGT",
        ApraRegulatedSuperFundLocalPublicSectorFund => "LSA",
        ApraRegulatedSuperFundLocalPublicSectorScheme => "LSP",
        ANonRegulatedSuperannuationFundLocal => "LSS",
        CashManagementTrustLocal => "LTC",
        DiscretionaryTrustServicesManagementLocal => "LTD",
        FixedTrustLocal => "LTF",
        HybridTrustLocal => "LTH",
        DiscretionaryTrustInvestmentLocal => "LTI",
        PublicUnitTrustListedLocal => "LTL",
        PublicUnitTrustUnlistedLocal => "LTQ",
        DiscretionaryTrustTradingLocal => "LTT",
        FixedUnitTrustLocal => "LTU",
        ApraRegulatedNonPublicOfferFund => "NPF",
        NonRegulatedSuperannuationFund => "NRF",
        ApraRegulatedPublicOfferFund => "POF",
        UnlistedPublicUnitTrust => "PQT",
        PooledSuperannuationTrust => "PST",
        ListedPublicUnitTrust => "PUT",
        SmallApraRegulatedFund => "SAF",
        CoOperativeState => "SCC",
        OtherUnincorporatedEntityState => "SCN",
        CorporateUnitTrustState => "SCU",
        StateGovernmentStatutoryAuthority => "SGA",
        StateGovernmentCompany => "SGC",
        StateGovernmentEntity => "SGE",
        StateGovernmentTrust => "SGT",
        AnAtoRegulatedSelfManagedSuperannuationFund => "SMF",
        ApraRegulatedSuperFundStatePublicSectorFund => "SSA",
        ApraRegulatedSuperFundStatePublicSectorScheme => "SSP",
        ANonRegulatedSuperannuationFundState => "SSS",
        CashManagementTrustState => "STC",
        DiscretionaryTrustServicesManagementState => "STD",
        FixedTrustState => "STF",
        HybridTrustState => "STH",
        DiscretionaryTrustInvestmentState => "STI",
        PublicUnitTrustListedState => "STL",
        PublicUnitTrustUnlistedState => "STQ",
        DiscretionaryTrustTradingState => "STT",
        FixedUnitTrustState => "STU",
        SuperFund => "SUP",
        CoOperativeTerritory => "TCC",
        OtherUnincorporatedEntityTerritory => "TCN",
        CorporateUnitTrustTerritory => "TCU",
        TerritoryGovernmentStatutoryAuthority => "TGA",
        TerritoryGovernmentEntity => "TGE",
        TerritoryGovernmentTrust => "TGT",
        OtherTrust => "TRT",
        ApraRegulatedSuperFundTerritoryPublicSectorFund => "TSA",
        ApraRegulatedSuperFundTerritoryPublicSectorScheme => "TSP",
        ANonRegulatedSuperannuationFundTerritory => "TSS",
        CashManagementTrustTerritory => "TTC",
        DiscretionaryTrustServicesManagementTerritory => "TTD",
        FixedTrustTerritory => "TTF",
        HybridTrustTerritory => "TTH",
        DiscretionaryTrustInvestmentTerritory => "TTI",
        PublicUnitTrustListedTerritory => "TTL",
        PublicUnitTrustUnlistedTerritory => "TTQ",
        DiscretionaryTrustTradingTerritory => "TTT",
        FixedUnitTrustTerritory => "TTU",
        OtherUnincorporatedEntity => "UIE",
        // Conditional entities
        OtherIncorporatedEntity => "OIE",
        OtherIncorporatedEntityCommonwealth => "CCO",
        OtherIncorporatedEntityLocal => "LCO",
        OtherIncorporatedEntityState => "SCO",
        OtherIncorporatedEntityTerritory => "TCO",
        StrataTitleCommonwealth => "CCS",
        PublicTradingTrustCommonwealth => "CCT",
        StrataTitleLocal => "LCS",
        PublicTradingTrustLocal => "LCT",
        PublicTradingTrust => "PTT",
        StrataTitleState => "SCS",
        PublicTradingTrustState => "SCT",
        StrataTitle => "STR",
        StrataTitleTerritory => "TCS",
        PublicTradingTrustTerritory => "TCT",
    }
}

impl AbrEntityTypeCode {
    /// Returns the register entity type before conditional resolution
    pub fn base_entity_type(&self) -> AsicEntityType {
        match self {
            AbrEntityTypeCode::AustralianPrivateCompany
            | AbrEntityTypeCode::AustralianPublicCompany
            | AbrEntityTypeCode::AustralianPrivateCompanyCommonwealth
            | AbrEntityTypeCode::AustralianPrivateCompanyLocal
            | AbrEntityTypeCode::AustralianPrivateCompanyState
            | AbrEntityTypeCode::AustralianPrivateCompanyTerritory
            | AbrEntityTypeCode::AustralianPublicCompanyCommonwealth
            | AbrEntityTypeCode::AustralianPublicCompanyLocal
            | AbrEntityTypeCode::AustralianPublicCompanyState
            | AbrEntityTypeCode::AustralianPublicCompanyTerritory
            | AbrEntityTypeCode::PooledDevelopmentFund
            | AbrEntityTypeCode::PooledDevelopmentFundCommonwealth
            | AbrEntityTypeCode::PooledDevelopmentFundLocal
            | AbrEntityTypeCode::PooledDevelopmentFundState
            | AbrEntityTypeCode::PooledDevelopmentFundTerritory
                => AsicEntityType::IncorporatedBody,
            AbrEntityTypeCode::Individual
                => AsicEntityType::Individual,
            AbrEntityTypeCode::FamilyPartnership
            | AbrEntityTypeCode::LimitedPartnership
            | AbrEntityTypeCode::OtherPartnership
            | AbrEntityTypeCode::LimitedPartnershipLocal
            | AbrEntityTypeCode::LimitedPartnershipState
            | AbrEntityTypeCode::LimitedPartnershipTerritory
            | AbrEntityTypeCode::OtherPartnershipCommonwealth
            | AbrEntityTypeCode::OtherPartnershipLocal
            | AbrEntityTypeCode::OtherPartnershipState
            | AbrEntityTypeCode::OtherPartnershipTerritory
                => AsicEntityType::Partnership,
            AbrEntityTypeCode::OtherIncorporatedEntity
            | AbrEntityTypeCode::OtherIncorporatedEntityCommonwealth
            | AbrEntityTypeCode::OtherIncorporatedEntityLocal
            | AbrEntityTypeCode::OtherIncorporatedEntityState
            | AbrEntityTypeCode::OtherIncorporatedEntityTerritory
            | AbrEntityTypeCode::StrataTitleCommonwealth
            | AbrEntityTypeCode::PublicTradingTrustCommonwealth
            | AbrEntityTypeCode::StrataTitleLocal
            | AbrEntityTypeCode::PublicTradingTrustLocal
            | AbrEntityTypeCode::PublicTradingTrust
            | AbrEntityTypeCode::StrataTitleState
            | AbrEntityTypeCode::PublicTradingTrustState
            | AbrEntityTypeCode::StrataTitle
            | AbrEntityTypeCode::StrataTitleTerritory
            | AbrEntityTypeCode::PublicTradingTrustTerritory
                => AsicEntityType::Conditional,
            _ => AsicEntityType::Unincorporated,
        }
    }
}

/// Errors raised while classifying an ABR entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Unknown ABR entity type code: {0}")]
    UnknownCode(String),
}

/// Classifies an entity from its ABR type code and optional ASIC identifier.
///
/// Conditional codes resolve to an incorporated body when an ASIC identifier
/// is present and to an unincorporated entity otherwise.
pub fn classify_abr_entity(
    abr_code: &str,
    asic_id: Option<&str>,
) -> Result<AsicEntityType, ClassifyError> {
    let code: AbrEntityTypeCode = abr_code
        .parse()
        .map_err(|_| ClassifyError::UnknownCode(abr_code.trim().to_string()))?;
    let has_asic_id = asic_id.map_or(false, |id| !id.trim().is_empty());
    Ok(match code.base_entity_type() {
        AsicEntityType::Conditional if has_asic_id => AsicEntityType::IncorporatedBody,
        AsicEntityType::Conditional => AsicEntityType::Unincorporated,
        other => other,
    })
}
