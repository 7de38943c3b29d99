//! Integer identifier types for the initiative domain.
//!
//! Identifiers are assigned by the backing store, never generated locally.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! store_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a store-assigned identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

store_id!(
    /// Identifier of an initiative record.
    InitiativeId
);

store_id!(
    /// Identifier of an evaluation record.
    EvaluationId
);

store_id!(
    /// Identifier of the strategic plan that owns an initiative.
    PlanId
);

store_id!(
    /// Identifier of a dashboard user.
    UserId
);

store_id!(
    /// Identifier of a stored supporting document.
    DocumentId
);
