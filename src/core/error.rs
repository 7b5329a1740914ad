//! Engine error types.

use crate::core::action::ActionError;
use crate::core::name::{EventName, StateName};
use thiserror::Error;

/// Errors reported by engine construction, registration and event
/// processing.
///
/// Every failure is returned as a value; the engine never panics on a
/// failure path, never retries, and never moves the cursor on an
/// operation that returns an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A transition already exists for this (state, event) pair.
    #[error("event \"{event}\" is already defined for the state \"{state}\"")]
    DuplicateEvent { state: StateName, event: EventName },

    /// An action is already attached for this (state, event) pair.
    #[error("action is already defined for the event \"{event}\" and the state \"{state}\"")]
    DuplicateAction { state: StateName, event: EventName },

    /// The event is not registered for the current state.
    #[error("event \"{event}\" is not defined for the state \"{state}\"")]
    UnknownEvent { state: StateName, event: EventName },

    /// The state name was never registered.
    #[error("state \"{name}\" is not defined")]
    UnknownState { name: StateName },

    /// The action attached to the firing event failed; carries the
    /// callback's own error unmodified.
    #[error("{0}")]
    ActionFailed(ActionError),

    /// A builder step was handed malformed input.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_event_names_event_and_state() {
        let err = EngineError::UnknownEvent {
            state: StateName::from("STATE_2"),
            event: EventName::from("EVENT_2"),
        };
        assert_eq!(
            err.to_string(),
            "event \"EVENT_2\" is not defined for the state \"STATE_2\""
        );
    }

    #[test]
    fn duplicate_action_names_event_and_state() {
        let err = EngineError::DuplicateAction {
            state: StateName::from("STATE_1"),
            event: EventName::from("EVENT_1"),
        };
        assert_eq!(
            err.to_string(),
            "action is already defined for the event \"EVENT_1\" and the state \"STATE_1\""
        );
    }

    #[test]
    fn action_failure_displays_verbatim() {
        let err = EngineError::ActionFailed("some error".into());
        assert_eq!(err.to_string(), "some error");
    }
}
