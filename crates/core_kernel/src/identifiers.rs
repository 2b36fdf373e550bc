//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around time-ordered UUIDs keep a claim id from being
//! passed where a document id is expected. The display form carries a short
//! type tag (`CLM-…`, `DOC-…`); parsing accepts it with or without the tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh identifier; later ids sort after earlier ones
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wraps an identifier loaded from storage
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "-{}"), self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix(concat!($tag, "-")).unwrap_or(s);
                Uuid::parse_str(raw).map(Self)
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

entity_id!(
    /// Identity of a claim aggregate
    ClaimId,
    "CLM"
);
entity_id!(
    /// Identity of a document attached to a claim
    DocumentId,
    "DOC"
);
