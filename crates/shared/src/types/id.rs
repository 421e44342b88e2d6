//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally passing a `UserId` where an `InspectionId` is expected.
//! Backend records use integer primary keys; drafts that only exist on the
//! device carry a time-ordered UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed integer ID wrappers for backend records.
macro_rules! record_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from the backend primary key.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the inner primary key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

record_id!(UserId, "Unique identifier for a user account.");
record_id!(InspectionId, "Unique identifier for a submitted inspection.");
record_id!(
    AssignmentId,
    "Unique identifier for an assigned (new) inspection created by a branch admin."
);

/// Local identifier of an inspection draft that has not been submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub Uuid);

impl DraftId {
    /// Creates a new random ID using UUID v7 (time-ordered).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_id_serializes_as_plain_integer() {
        let id = InspectionId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let parsed: InspectionId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_record_id_from_str() {
        assert_eq!(UserId::from_str(" 7 ").unwrap(), UserId::new(7));
        assert!(UserId::from_str("seven").is_err());
    }

    #[test]
    fn test_draft_ids_are_unique() {
        assert_ne!(DraftId::new(), DraftId::new());
    }
}
