//! Strongly-typed identifiers for underwriting entities
//!
//! Newtype wrappers around UUIDs keep case and submission identifiers
//! from being mixed up when they travel through the API layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier (v7)
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix used by `Display`
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(raw)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// One underwriting case per applicant conversation
define_id!(CaseId, "UWC");
// One accepted record inside a case
define_id!(SubmissionId, "SUB");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_id_display_has_prefix() {
        let id = CaseId::new();
        assert!(id.to_string().starts_with("UWC-"));
    }

    #[test]
    fn test_parse_accepts_prefixed_and_bare_forms() {
        let original = SubmissionId::new();
        let prefixed: SubmissionId = original.to_string().parse().unwrap();
        let bare: SubmissionId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, prefixed);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let parsed = "UWC-not-a-uuid".parse::<CaseId>();
        assert!(matches!(parsed, Err(CoreError::InvalidIdentifier(_))));
    }
}
