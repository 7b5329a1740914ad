//! Builder for constructing engines.

use crate::core::{Action, Engine, EngineError, EventName, StateName, DEFAULT_INITIAL_STATE};

/// One recorded configuration step, replayed in order at build time.
enum Step {
    Transition {
        from: StateName,
        event: EventName,
        to: StateName,
    },
    TransitionWithAction {
        from: StateName,
        event: EventName,
        to: StateName,
        action: Action,
    },
}

/// Builder that assembles an [`Engine`] from an ordered list of
/// configuration steps.
///
/// Steps are recorded as they are declared and applied in the same
/// order by [`build`](EngineBuilder::build), which aborts on the first
/// failing step. A partially configured engine is never handed out.
///
/// # Example
///
/// ```rust
/// use flowstate::Engine;
///
/// # fn main() -> Result<(), flowstate::EngineError> {
/// let mut engine = Engine::builder()
///     .initial_state("DRAFT")
///     .transition("DRAFT", "submit", "REVIEW")
///     .transition("REVIEW", "approve", "PUBLISHED")
///     .build()?;
///
/// engine.process_event("submit")?;
/// assert_eq!(engine.current_state().name(), "REVIEW");
/// # Ok(())
/// # }
/// ```
pub struct EngineBuilder {
    initial: Option<StateName>,
    steps: Vec<Step>,
}

impl EngineBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        EngineBuilder {
            initial: None,
            steps: Vec::new(),
        }
    }

    /// Name the initial state, overriding the default
    /// [`DEFAULT_INITIAL_STATE`].
    pub fn initial_state(mut self, name: impl Into<StateName>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Record the transition `from --event--> to`.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        self.steps.push(Step::Transition {
            from: from.into(),
            event: event.into(),
            to: to.into(),
        });
        self
    }

    /// Record the transition `from --event--> to` together with the
    /// action to run on the source state when `event` fires.
    ///
    /// The action is not invoked at build time, only when the event
    /// fires through [`Engine::process_event`].
    pub fn transition_with_action(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
        action: Action,
    ) -> Self {
        self.steps.push(Step::TransitionWithAction {
            from: from.into(),
            event: event.into(),
            to: to.into(),
            action,
        });
        self
    }

    /// Apply the recorded steps in order and return the engine.
    ///
    /// Returns the first failing step's error: a duplicate transition
    /// or action surfaces as the corresponding registration error, and
    /// an empty state or event name anywhere fails with
    /// [`EngineError::InvalidConfiguration`].
    pub fn build(self) -> Result<Engine, EngineError> {
        let initial = self
            .initial
            .unwrap_or_else(|| StateName::from(DEFAULT_INITIAL_STATE));
        require_nonempty(initial.as_str(), "initial state name")?;

        let mut engine = Engine::with_initial_state(initial);
        for step in self.steps {
            match step {
                Step::Transition { from, event, to } => {
                    validate_edge(&from, &event, &to)?;
                    engine.register_state(from, event, to)?;
                }
                Step::TransitionWithAction {
                    from,
                    event,
                    to,
                    action,
                } => {
                    validate_edge(&from, &event, &to)?;
                    engine.register_state(from.clone(), event.clone(), to)?;
                    engine.attach_action_to(&from, event, action)?;
                }
            }
        }

        Ok(engine)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_edge(from: &StateName, event: &EventName, to: &StateName) -> Result<(), EngineError> {
    require_nonempty(from.as_str(), "source state name")?;
    require_nonempty(event.as_str(), "event name")?;
    require_nonempty(to.as_str(), "destination state name")
}

fn require_nonempty(value: &str, what: &str) -> Result<(), EngineError> {
    if value.is_empty() {
        return Err(EngineError::InvalidConfiguration {
            reason: format!("{what} must not be empty"),
        });
    }
    Ok(())
}
