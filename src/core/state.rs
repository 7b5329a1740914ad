//! A single node in the transition graph.
//!
//! A `State` owns its outgoing edges (event name to successor state
//! name) and the optional actions attached to those events. Successor
//! values are names indexing into the engine's state collection, so a
//! state never owns its siblings and cyclic transition graphs need no
//! special handling.
//!
//! All mutation goes through the engine; hosts only inspect states.

use crate::core::action::Action;
use crate::core::error::EngineError;
use crate::core::name::{EventName, StateName};
use std::collections::HashMap;
use std::fmt;

/// A named state and its outgoing transitions.
///
/// Obtained by reference from engine lookups such as
/// [`Engine::get_state`](crate::Engine::get_state) and
/// [`Engine::current_state`](crate::Engine::current_state).
///
/// # Example
///
/// ```rust
/// use flowstate::Engine;
///
/// let mut engine = Engine::with_initial_state("START");
/// engine.register_state("START", "go", "FINISH").unwrap();
///
/// let start = engine.get_state("START").unwrap();
/// assert_eq!(start.name(), "START");
/// assert_eq!(start.successor(&"go".into()).unwrap(), "FINISH");
/// assert!(!start.has_action(&"go".into()));
/// ```
pub struct State {
    name: StateName,
    transitions: HashMap<EventName, StateName>,
    actions: HashMap<EventName, Action>,
}

impl State {
    pub(crate) fn new(name: StateName) -> Self {
        State {
            name,
            transitions: HashMap::new(),
            actions: HashMap::new(),
        }
    }

    /// The state's name.
    pub fn name(&self) -> &StateName {
        &self.name
    }

    /// The successor reached when `event` fires from this state, if
    /// one is registered.
    pub fn successor(&self, event: &EventName) -> Option<&StateName> {
        self.transitions.get(event)
    }

    /// Whether an action is attached for `event` on this state.
    pub fn has_action(&self, event: &EventName) -> bool {
        self.actions.contains_key(event)
    }

    /// Register `event` as leading to `next`.
    ///
    /// At most one successor per event; a second registration fails and
    /// leaves the existing edge untouched.
    pub(crate) fn attach_event(
        &mut self,
        event: EventName,
        next: StateName,
    ) -> Result<(), EngineError> {
        if self.transitions.contains_key(&event) {
            return Err(EngineError::DuplicateEvent {
                state: self.name.clone(),
                event,
            });
        }
        self.transitions.insert(event, next);
        Ok(())
    }

    /// Attach an action to run when `event` fires from this state.
    ///
    /// The matching transition may be registered before or after the
    /// action; firing the event requires both.
    pub(crate) fn attach_action(
        &mut self,
        event: EventName,
        action: Action,
    ) -> Result<(), EngineError> {
        if self.actions.contains_key(&event) {
            return Err(EngineError::DuplicateAction {
                state: self.name.clone(),
                event,
            });
        }
        self.actions.insert(event, action);
        Ok(())
    }

    /// Resolve `event` against this state and run its action, if any.
    ///
    /// Resolution happens first: an unregistered event fails without
    /// touching any action. A failing action aborts the transition and
    /// its error is handed back unmodified; the successor is returned
    /// only once the action (when present) has succeeded.
    pub(crate) fn exec_event(&self, event: &EventName) -> Result<StateName, EngineError> {
        let next = self
            .transitions
            .get(event)
            .ok_or_else(|| EngineError::UnknownEvent {
                state: self.name.clone(),
                event: event.clone(),
            })?;

        if let Some(action) = self.actions.get(event) {
            action.run().map_err(EngineError::ActionFailed)?;
        }

        Ok(next.clone())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .field("actions", &self.actions.keys())
            .finish()
    }
}
