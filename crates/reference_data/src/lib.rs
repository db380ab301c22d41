//! Reference value sets for business name lodgement
//!
//! Closed sets consumed by the validation engine. Every code enum serializes
//! as its register wire code (`"PTSH"`, `"NSW"`, `"GD"`) and can list its
//! members as label/value choices for forms.
//!
//! - **Owner types**: the five legal structures a business name holder can take
//! - **Register codes**: organisation types, statuses, address types, states
//! - **ABR entity types**: ABR codes and their mapping to register entity types
//! - **Lists**: countries and street types accepted by address fields

#[macro_use]
mod macros;

pub mod codes;
pub mod owner_type;
pub mod abr;
pub mod lists;

pub use codes::{
    AddressTypeCode, CodeChoice, EntityStatus, OrganisationType, PostalDeliveryType,
    SearchScope, SearchType, StateTerritoryCode, StatusType, TermType, UnknownCode,
};
pub use owner_type::OwnerType;
pub use abr::{classify_abr_entity, AbrEntityTypeCode, AsicEntityType, ClassifyError};
pub use lists::{is_country, is_street_type, AUSTRALIA, COUNTRIES, STREET_TYPES};
