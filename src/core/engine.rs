//! The engine: state graph ownership and the event cursor.

use crate::builder::EngineBuilder;
use crate::core::action::Action;
use crate::core::error::EngineError;
use crate::core::name::{EventName, StateName};
use crate::core::state::State;
use std::collections::HashMap;

/// Name given to the initial state when the caller does not supply one.
pub const DEFAULT_INITIAL_STATE: &str = "STATE_INITIAL";

/// A finite state machine: a collection of named states and a cursor.
///
/// The engine exclusively owns every [`State`]; callers register
/// transitions and actions through it, then drive the cursor with
/// [`process_event`](Engine::process_event). Every operation either
/// fully succeeds or fully fails with the cursor unchanged.
///
/// The engine has no internal locking. Registration, lookup, event
/// processing and action invocation are all synchronous; a host that
/// shares an engine across threads must serialize access externally,
/// for example behind one mutex around the whole engine.
///
/// # Example
///
/// ```rust
/// use flowstate::Engine;
///
/// # fn main() -> Result<(), flowstate::EngineError> {
/// let mut engine = Engine::with_initial_state("START");
/// engine.register_state("START", "submit", "PENDING")?;
/// engine.register_state("PENDING", "approve", "DONE")?;
///
/// engine.process_event("submit")?;
/// engine.process_event("approve")?;
/// assert_eq!(engine.current_state().name(), "DONE");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Engine {
    states: HashMap<StateName, State>,
    initial: StateName,
    current: StateName,
}

impl Engine {
    /// Create an engine whose initial state is named
    /// [`DEFAULT_INITIAL_STATE`].
    pub fn new() -> Self {
        Self::with_initial_state(DEFAULT_INITIAL_STATE)
    }

    /// Create an engine with a caller-named initial state.
    ///
    /// The initial state exists immediately; the cursor starts on it.
    pub fn with_initial_state(name: impl Into<StateName>) -> Self {
        let name = name.into();
        let mut states = HashMap::new();
        states.insert(name.clone(), State::new(name.clone()));
        Engine {
            states,
            initial: name.clone(),
            current: name,
        }
    }

    /// Start configuring an engine as an ordered list of steps.
    ///
    /// See [`EngineBuilder`].
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Register the transition `from --event--> to`.
    ///
    /// Both endpoint states are fetched or created as needed, then the
    /// edge is attached to the source. Returns the destination state.
    ///
    /// Fails with [`EngineError::DuplicateEvent`] if `from` already has
    /// a transition for `event`; the existing edge is left untouched.
    /// States created before the failure stay registered.
    pub fn register_state(
        &mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Result<&State, EngineError> {
        let from = from.into();
        let event = event.into();
        let to = to.into();

        self.ensure_state(&to);
        let source = self
            .states
            .entry(from.clone())
            .or_insert_with(|| State::new(from));
        source.attach_event(event, to.clone())?;

        Ok(self
            .states
            .get(&to)
            .expect("destination state registered above"))
    }

    /// Attach an action for `event` on the **current** state.
    ///
    /// The action runs whenever `event` next fires while the cursor is
    /// on this state. Fails with [`EngineError::DuplicateAction`] if the
    /// current state already has an action for `event`. The matching
    /// transition may be registered before or after the action; firing
    /// the event requires both.
    pub fn attach_action(
        &mut self,
        event: impl Into<EventName>,
        action: Action,
    ) -> Result<(), EngineError> {
        let current = self
            .states
            .get_mut(&self.current)
            .expect("current state is always registered");
        current.attach_action(event.into(), action)
    }

    /// Look up a state by name. Absence is a normal outcome, not an
    /// error.
    pub fn get_state(&self, name: impl Into<StateName>) -> Option<&State> {
        self.states.get(&name.into())
    }

    /// The state the engine was constructed with.
    pub fn initial_state(&self) -> &State {
        self.states
            .get(&self.initial)
            .expect("initial state is always registered")
    }

    /// The state the cursor is currently on.
    pub fn current_state(&self) -> &State {
        self.states
            .get(&self.current)
            .expect("current state is always registered")
    }

    /// Fire `event` from the current state.
    ///
    /// Resolves the event against the current state, runs the attached
    /// action if there is one, and only then moves the cursor. Returns
    /// the new current state.
    ///
    /// On any failure the cursor stays where it was:
    /// [`EngineError::UnknownEvent`] if the current state has no
    /// transition for `event`, or [`EngineError::ActionFailed`] carrying
    /// the action's own error.
    pub fn process_event(&mut self, event: impl Into<EventName>) -> Result<&State, EngineError> {
        let event = event.into();
        let next = self.current_state().exec_event(&event)?;
        self.current = next;
        Ok(self.current_state())
    }

    /// Move the cursor straight to `name`, bypassing the transition
    /// graph and any attached actions.
    ///
    /// Fails with [`EngineError::UnknownState`] if no state with that
    /// name was ever registered. Intended for host-driven resets and
    /// recoveries outside the modeled protocol.
    pub fn jump_to_state(&mut self, name: impl Into<StateName>) -> Result<(), EngineError> {
        let name = name.into();
        if !self.states.contains_key(&name) {
            return Err(EngineError::UnknownState { name });
        }
        self.current = name;
        Ok(())
    }

    /// Attach an action to a named state; builder steps use this to
    /// target the source state of the edge they just registered.
    pub(crate) fn attach_action_to(
        &mut self,
        name: &StateName,
        event: EventName,
        action: Action,
    ) -> Result<(), EngineError> {
        match self.states.get_mut(name) {
            Some(state) => state.attach_action(event, action),
            None => Err(EngineError::UnknownState { name: name.clone() }),
        }
    }

    fn ensure_state(&mut self, name: &StateName) {
        if !self.states.contains_key(name) {
            self.states
                .insert(name.clone(), State::new(name.clone()));
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
