//! Owner types
//!
//! The declared legal structure of a business name holder. Each owner type
//! selects exactly one rule set in the business entity validator.

define_codes! {
    /// The legal structure of the business holding the name
    pub enum OwnerType {
        /// A sole trader
        Individual => "IND",
        /// A company or other incorporated body
        IncorporatedBody => "IB",
        /// A partnership of up to nine partners
        Partnership => "PTSH",
        /// An unincorporated trust or association
        UnincorporatedEntity => "USTR",
        /// A joint venture of two or more participants
        JointVenture => "JV",
    }
}

impl OwnerType {
    /// Returns the short plain-English description of the structure
    pub fn description(&self) -> &'static str {
        match self {
            OwnerType::Individual => "sole trader",
            OwnerType::IncorporatedBody => "company",
            OwnerType::Partnership => "partnership",
            OwnerType::UnincorporatedEntity => "trust/association",
            OwnerType::JointVenture => "joint venture",
        }
    }

    /// Whether the structure is made up of associates
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            OwnerType::Partnership | OwnerType::UnincorporatedEntity | OwnerType::JointVenture
        )
    }

    /// Whether associates are classified and validated as partners
    pub fn has_partners(&self) -> bool {
        matches!(self, OwnerType::Partnership | OwnerType::JointVenture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        let codes: Vec<_> = OwnerType::ALL.iter().map(|o| o.as_code()).collect();
        assert_eq!(codes, vec!["IND", "IB", "PTSH", "USTR", "JV"]);
    }

    #[test]
    fn test_composites() {
        assert!(!OwnerType::Individual.is_composite());
        assert!(!OwnerType::IncorporatedBody.is_composite());
        assert!(OwnerType::UnincorporatedEntity.is_composite());
        assert!(OwnerType::JointVenture.has_partners());
        assert!(!OwnerType::UnincorporatedEntity.has_partners());
    }

    #[test]
    fn test_deserialize() {
        let owner: OwnerType = serde_json::from_str("\"USTR\"").unwrap();
        assert_eq!(owner, OwnerType::UnincorporatedEntity);
        assert!(serde_json::from_str::<OwnerType>("\"LLC\"").is_err());
    }
}
