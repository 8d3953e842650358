//! Identifier value objects
//!
//! Opaque string identifiers for the aggregates the core reads but does not
//! own. The store collaborator decides what the strings actually are
//! (database keys, UUIDs, slugs).

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id! {
    /// Identity of a debate (Value Object)
    DebateId
}

string_id! {
    /// Identity of a topic (Value Object)
    TopicId
}

string_id! {
    /// Identity of a human user (Value Object)
    UserId
}
