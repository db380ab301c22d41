//! Strongly-typed register identifiers
//!
//! Australian register identifiers are fixed or bounded runs of ASCII digits.
//! Newtype wrappers keep an ABN from being passed where an ACN is expected
//! and guarantee the digit format once parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_digits {
    ($name:ident, $label:literal, $min:literal, $max:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Minimum number of digits
            pub const MIN_DIGITS: usize = $min;
            /// Maximum number of digits
            pub const MAX_DIGITS: usize = $max;

            /// Parses the identifier, trimming surrounding whitespace
            pub fn parse(value: &str) -> Result<Self, CoreError> {
                let trimmed = value.trim();
                if !is_digits(trimmed, $min, $max) {
                    return Err(CoreError::validation(if $min == $max {
                        format!("{} must be exactly {} digits", $label, $max)
                    } else {
                        format!("{} must be {} to {} digits", $label, $min, $max)
                    }));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the digits
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the human label used in error messages
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

/// Returns true when `value` is between `min` and `max` ASCII digits long
pub fn is_digits(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

// Australian Business Number
define_digits!(Abn, "ABN", 11, 11);
// Australian Company Number
define_digits!(Acn, "ACN", 9, 9);
// ABR reference number
define_digits!(AbrReferenceNumber, "ABR reference number", 1, 10);
// Australian post code
define_digits!(PostCode, "Post code", 4, 4);
