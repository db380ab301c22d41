//! Lodgement validation rules
//!
//! This module decides whether a business entity may be lodged. Validation
//! is a pure function of the record: it either returns the record unchanged
//! as a [`ValidatedBusinessEntity`] or the first rule it breaks.
//!
//! # Evaluation order
//!
//! 1. The entity's own individual and organisation records check their fields
//! 2. The rules of the declared owner type, in the order listed below
//! 3. Each associate, wrapped with its 1-based position on failure
//! 4. Consistency between the ABR entity name and the lodged names
//!
//! Within each step the first failing check stops evaluation.
//!
//! An associate's own records (its individual or organisation and those of
//! its representatives) are checked in step 3, after the owner type's count
//! rules. A partnership of ten partners is reported as `PTSH_MAX_PARTNERS`
//! even when one of the partners also carries an invalid field.
//!
//! # Owner type rules
//!
//! ## Sole trader (IND)
//! - ABR details and an individual are required
//! - No associates, no organisation
//!
//! ## Incorporated body (IB)
//! - ABR details and an organisation with an ACN are required
//! - No associates, no individual
//!
//! ## Partnership (PTSH)
//! - ABR details, an organisation and 1 to 9 partners are required
//! - No individual; the partnership organisation has no ACN
//!
//! ## Trust or association (USTR)
//! - ABR details, an organisation and at least one trustee are required
//! - No individual
//!
//! ## Joint venture (JV)
//! - An organisation and at least 2 participants are required
//! - Exactly one of an ABN or an ABN exemption; when exempt every
//!   participant needs its own ABN
//! - No ACN, no individual
//!
//! # Associates
//!
//! | Classification | Representatives | ABN |
//! |---|---|---|
//! | individual | forbidden | required |
//! | incorporated | forbidden | required |
//! | unincorporated | at least one, each valid | required |

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::ops::Deref;
use tracing::debug;

use reference_data::OwnerType;

use crate::classification::{AssociateParty, PartnerClassification, RepresentativeKind};
use crate::error::{LodgementError, RuleCode};
use crate::lodgement::{Associate, BusinessEntity, PartnerAssociate};
use crate::summary::{ClassificationSummary, ValidationSummary};

/// Most partners a partnership may have
pub const PTSH_MAX_PARTNERS: usize = 9;

/// Fewest participants a joint venture may have
pub const JV_MIN_PARTNERS: usize = 2;

/// Validator for representatives of unincorporated associates
pub struct RepresentativeValidator;

impl RepresentativeValidator {
    /// Checks the representative's own fields, then that it holds exactly one
    /// party and that an organisation representative has an ACN
    pub fn validate(
        representative: &PartnerAssociate,
        today: NaiveDate,
    ) -> Result<RepresentativeKind<'_>, LodgementError> {
        if let Some(individual) = &representative.individual {
            individual.check_as_of(today)?;
        }
        if let Some(organisation) = &representative.organisation {
            organisation.check()?;
        }
        representative.kind()
    }
}

/// Validator for partners, trustees and joint venture participants
pub struct AssociateValidator;

impl AssociateValidator {
    /// Validates an associate against the rules of its classification
    pub fn validate(associate: &Associate, today: NaiveDate) -> Result<PartnerClassification, LodgementError> {
        if let Some(individual) = &associate.individual {
            individual.check_as_of(today)?;
        }
        if let Some(organisation) = &associate.organisation {
            organisation.check()?;
        }

        let party = associate.party()?;
        let has_representatives = !associate.representatives().is_empty();
        let has_abn = associate.abr_entity.has_abn();

        // INC_ASSOC_ACN and UNINC_ASSOC_NO_ACN cannot be raised here: the ACN
        // is what selects the classification.
        match party {
            AssociateParty::Individual(_) => {
                if has_representatives {
                    return Err(LodgementError::rule(
                        RuleCode::IndAssocNoReps,
                        "Individual associates cannot have representatives",
                    ));
                }
                if !has_abn {
                    return Err(LodgementError::rule(
                        RuleCode::IndAssocAbn,
                        "Individual associates must have an ABN",
                    ));
                }
            }
            AssociateParty::Incorporated { .. } => {
                if has_representatives {
                    return Err(LodgementError::rule(
                        RuleCode::IncAssocNoReps,
                        "Incorporated associates cannot have representatives",
                    ));
                }
                if !has_abn {
                    return Err(LodgementError::rule(
                        RuleCode::IncAssocAbn,
                        "Incorporated associates must have an ABN",
                    ));
                }
            }
            AssociateParty::Unincorporated { organisation } => {
                if !has_representatives {
                    return Err(LodgementError::rule(
                        RuleCode::UnincAssocRepsRequired,
                        format!(
                            "Unincorporated associate '{}' must name at least one representative",
                            organisation.name
                        ),
                    ));
                }
                if !has_abn {
                    return Err(LodgementError::rule(
                        RuleCode::UnincAssocAbn,
                        "Unincorporated associates must have an ABN",
                    ));
                }
                for (i, representative) in associate.representatives().iter().enumerate() {
                    RepresentativeValidator::validate(representative, today).map_err(|e| {
                        LodgementError::nested(RuleCode::UnincRepInvalid, "Representative", i + 1, e)
                    })?;
                }
            }
        }

        Ok(party.classification())
    }
}

/// Validator for the root business entity record
///
/// # Examples
///
/// ```rust
/// use domain_lodgement::validation::BusinessEntityValidator;
/// use domain_lodgement::lodgement::BusinessEntity;
/// use reference_data::OwnerType;
///
/// let entity = BusinessEntity::new(OwnerType::Individual);
/// let err = BusinessEntityValidator::validate(&entity).unwrap_err();
/// assert_eq!(err.code(), "IND_ABR_REQUIRED");
/// ```
pub struct BusinessEntityValidator;

impl BusinessEntityValidator {
    /// Validates the entity as of today's date (UTC)
    pub fn validate(entity: &BusinessEntity) -> Result<ValidatedBusinessEntity, LodgementError> {
        Self::validate_as_of(entity, Utc::now().date_naive())
    }

    /// Validates the entity, treating `today` as the current date
    pub fn validate_as_of(
        entity: &BusinessEntity,
        today: NaiveDate,
    ) -> Result<ValidatedBusinessEntity, LodgementError> {
        debug!(
            owner_type = %entity.owner_type,
            associates = entity.associate_count(),
            "validating business entity"
        );
        match Self::check_as_of(entity, today) {
            Ok(()) => Ok(ValidatedBusinessEntity {
                entity: entity.clone(),
            }),
            Err(error) => {
                debug!(code = %error.code(), "business entity rejected");
                Err(error)
            }
        }
    }

    /// Runs every check without producing a validated record
    pub fn check_as_of(entity: &BusinessEntity, today: NaiveDate) -> Result<(), LodgementError> {
        if let Some(individual) = &entity.individual {
            individual.check_as_of(today)?;
        }
        if let Some(organisation) = &entity.organisation {
            organisation.check()?;
        }

        match entity.owner_type {
            OwnerType::Individual => Self::check_individual(entity)?,
            OwnerType::IncorporatedBody => Self::check_incorporated_body(entity)?,
            OwnerType::Partnership => Self::check_partnership(entity, today)?,
            OwnerType::UnincorporatedEntity => Self::check_unincorporated_entity(entity, today)?,
            OwnerType::JointVenture => Self::check_joint_venture(entity, today)?,
        }

        Self::check_associate_consistency(entity)?;
        Self::check_names(entity)
    }

    fn check_individual(entity: &BusinessEntity) -> Result<(), LodgementError> {
        if entity.abr_entity.is_none() {
            return Err(LodgementError::rule(
                RuleCode::IndAbrRequired,
                "ABR entity details are required for a sole trader",
            ));
        }
        if entity.individual.is_none() {
            return Err(LodgementError::rule(
                RuleCode::IndIndividualRequired,
                "Individual details are required for a sole trader",
            ));
        }
        if entity.associate_count() > 0 {
            return Err(LodgementError::rule(
                RuleCode::IndNoAssociates,
                "A sole trader cannot have partners or associates",
            ));
        }
        if entity.organisation.is_some() {
            return Err(LodgementError::rule(
                RuleCode::IndNoOrganisation,
                "A sole trader does not lodge organisation details",
            ));
        }
        Ok(())
    }

    fn check_incorporated_body(entity: &BusinessEntity) -> Result<(), LodgementError> {
        if entity.abr_entity.is_none() {
            return Err(LodgementError::rule(
                RuleCode::IbAbrRequired,
                "ABR entity details are required for a company",
            ));
        }
        let Some(organisation) = &entity.organisation else {
            return Err(LodgementError::rule(
                RuleCode::IbOrganisationRequired,
                "Organisation details are required for a company",
            ));
        };
        if entity.associate_count() > 0 {
            return Err(LodgementError::rule(
                RuleCode::IbNoAssociates,
                "A company cannot have partners or associates",
            ));
        }
        if entity.individual.is_some() {
            return Err(LodgementError::rule(
                RuleCode::IbNoIndividual,
                "A company does not lodge individual details",
            ));
        }
        if !organisation.is_incorporated() {
            return Err(LodgementError::rule(
                RuleCode::IbAcnRequired,
                "An ACN is required for an incorporated body",
            ));
        }
        Ok(())
    }

    fn check_partnership(entity: &BusinessEntity, today: NaiveDate) -> Result<(), LodgementError> {
        if entity.abr_entity.is_none() {
            return Err(LodgementError::rule(
                RuleCode::PtshAbrRequired,
                "ABR entity details are required for a partnership",
            ));
        }
        let Some(organisation) = &entity.organisation else {
            return Err(LodgementError::rule(
                RuleCode::PtshOrganisationRequired,
                "Organisation details are required for a partnership",
            ));
        };
        if entity.associate_count() == 0 {
            return Err(LodgementError::rule(
                RuleCode::PtshPartnersRequired,
                "A partnership must have at least one partner",
            ));
        }
        if entity.associate_count() > PTSH_MAX_PARTNERS {
            return Err(LodgementError::rule(
                RuleCode::PtshMaxPartners,
                format!(
                    "A partnership can have at most {} partners, found {}",
                    PTSH_MAX_PARTNERS,
                    entity.associate_count()
                ),
            ));
        }
        if entity.individual.is_some() {
            return Err(LodgementError::rule(
                RuleCode::PtshNoIndividual,
                "A partnership lodges organisation details, not individual details",
            ));
        }
        if organisation.is_incorporated() {
            return Err(LodgementError::rule(
                RuleCode::PtshNoAcn,
                "A partnership organisation cannot have an ACN",
            ));
        }
        Self::check_associates(entity, RuleCode::PtshPartnerInvalid, "Partner", today)
    }

    fn check_unincorporated_entity(entity: &BusinessEntity, today: NaiveDate) -> Result<(), LodgementError> {
        if entity.abr_entity.is_none() {
            return Err(LodgementError::rule(
                RuleCode::UstrAbrRequired,
                "ABR entity details are required for a trust or association",
            ));
        }
        if entity.organisation.is_none() {
            return Err(LodgementError::rule(
                RuleCode::UstrOrganisationRequired,
                "Organisation details are required for a trust or association",
            ));
        }
        if entity.associate_count() == 0 {
            return Err(LodgementError::rule(
                RuleCode::UstrTrusteesRequired,
                "A trust or association must have at least one trustee or representative",
            ));
        }
        if entity.individual.is_some() {
            return Err(LodgementError::rule(
                RuleCode::UstrNoIndividual,
                "A trust or association lodges organisation details, not individual details",
            ));
        }
        Self::check_associates(entity, RuleCode::UstrAssociateInvalid, "Associate", today)
    }

    fn check_joint_venture(entity: &BusinessEntity, today: NaiveDate) -> Result<(), LodgementError> {
        let Some(organisation) = &entity.organisation else {
            return Err(LodgementError::rule(
                RuleCode::JvOrganisationRequired,
                "Organisation details are required for a joint venture",
            ));
        };
        if entity.associate_count() == 0 {
            return Err(LodgementError::rule(
                RuleCode::JvPartnersRequired,
                "A joint venture must have participants",
            ));
        }
        if entity.associate_count() < JV_MIN_PARTNERS {
            return Err(LodgementError::rule(
                RuleCode::JvMinPartners,
                format!("A joint venture must have at least {} participants", JV_MIN_PARTNERS),
            ));
        }
        match (entity.has_abn(), entity.abn_exemption) {
            (false, false) => {
                return Err(LodgementError::rule(
                    RuleCode::JvAbnOrExempt,
                    "A joint venture must have an ABN or be ABN exempt",
                ))
            }
            (true, true) => {
                return Err(LodgementError::rule(
                    RuleCode::JvAbnAndExemptConflict,
                    "A joint venture cannot have both an ABN and an ABN exemption",
                ))
            }
            _ => {}
        }
        if organisation.is_incorporated() {
            return Err(LodgementError::rule(
                RuleCode::JvNoAcn,
                "A joint venture organisation cannot have an ACN",
            ));
        }
        if entity.individual.is_some() {
            return Err(LodgementError::rule(
                RuleCode::JvNoIndividual,
                "A joint venture lodges organisation details, not individual details",
            ));
        }
        if entity.abn_exemption {
            if let Some(i) = entity.associates().iter().position(|a| !a.abr_entity.has_abn()) {
                return Err(LodgementError::rule_at(
                    RuleCode::JvExemptPartnerAbn,
                    i + 1,
                    format!("An ABN exempt joint venture needs an ABN for participant {}", i + 1),
                ));
            }
        }
        Self::check_associates(entity, RuleCode::JvPartnerInvalid, "Partner", today)
    }

    fn check_associates(
        entity: &BusinessEntity,
        code: RuleCode,
        subject: &'static str,
        today: NaiveDate,
    ) -> Result<(), LodgementError> {
        for (i, associate) in entity.associates().iter().enumerate() {
            let classification = AssociateValidator::validate(associate, today)
                .map_err(|e| LodgementError::nested(code, subject, i + 1, e))?;
            debug!(index = i + 1, %classification, "associate accepted");
        }
        Ok(())
    }

    /// Rules spanning several associates; there are none at present.
    fn check_associate_consistency(_entity: &BusinessEntity) -> Result<(), LodgementError> {
        Ok(())
    }

    fn check_names(entity: &BusinessEntity) -> Result<(), LodgementError> {
        let Some(abr_name) = entity
            .abr_entity
            .as_ref()
            .and_then(|abr| abr.entity_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
        else {
            return Ok(());
        };

        if let Some(organisation) = &entity.organisation {
            if abr_name != organisation.name.trim() {
                return Err(LodgementError::rule(
                    RuleCode::NameMismatch,
                    format!(
                        "ABR entity name '{}' must match organisation name '{}'",
                        abr_name, organisation.name
                    ),
                ));
            }
        }

        if entity.owner_type == OwnerType::Individual {
            if let Some(individual) = &entity.individual {
                let full_name = individual.full_name();
                if !full_name.is_empty() && full_name != abr_name {
                    return Err(LodgementError::rule(
                        RuleCode::IndividualNameMismatch,
                        format!(
                            "Individual name '{}' must match ABR entity name '{}'",
                            full_name, abr_name
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A business entity that has passed validation
///
/// Only [`BusinessEntityValidator`] creates these, so holding one proves the
/// record was accepted. It derefs to the unchanged record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedBusinessEntity {
    entity: BusinessEntity,
}

impl ValidatedBusinessEntity {
    pub fn into_inner(self) -> BusinessEntity {
        self.entity
    }

    /// Tally of the associates' classifications
    pub fn classification_summary(&self) -> ClassificationSummary {
        ClassificationSummary::from_associates(self.entity.associates()).unwrap_or_default()
    }

    /// Requirements of the owner type, with a partner tally for partnerships
    /// and joint ventures
    pub fn validation_summary(&self) -> ValidationSummary {
        ValidationSummary::for_entity(&self.entity)
    }
}

impl Deref for ValidatedBusinessEntity {
    type Target = BusinessEntity;

    fn deref(&self) -> &Self::Target {
        &self.entity
    }
}
