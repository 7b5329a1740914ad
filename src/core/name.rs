//! Identifier newtypes for states and events.
//!
//! States and events are addressed by opaque string names. The newtypes
//! keep the two namespaces apart at the type level: a `StateName` cannot
//! be passed where an `EventName` is expected, even though both are
//! strings underneath.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a state in the transition graph.
///
/// Exactly one state exists per name within an engine. Construct via
/// `From`:
///
/// ```rust
/// use flowstate::StateName;
///
/// let name = StateName::from("DRAFT");
/// assert_eq!(name, "DRAFT");
/// assert_eq!(name.as_str(), "DRAFT");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

/// Name of an event that may trigger a transition.
///
/// Event names are scoped per state: the same event name may lead to
/// different successors when registered on different source states, but
/// at most one successor per (state, event) pair.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(String);

macro_rules! name_impls {
    ($name:ident) => {
        impl $name {
            /// View the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

name_impls!(StateName);
name_impls!(EventName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_converts_from_str_and_string() {
        let from_str = StateName::from("START");
        let from_string = StateName::from(String::from("START"));
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn names_compare_against_str() {
        let state = StateName::from("START");
        let event = EventName::from("go");
        assert_eq!(state, "START");
        assert_eq!(event, "go");
        assert_ne!(state, "FINISH");
    }

    #[test]
    fn display_matches_inner_string() {
        let name = StateName::from("STATE_1");
        assert_eq!(name.to_string(), "STATE_1");
    }

    #[test]
    fn names_serialize_transparently() {
        let name = EventName::from("EVENT_1");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"EVENT_1\"");

        let back: EventName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
