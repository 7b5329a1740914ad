//! Transition actions.
//!
//! An action is a side-effecting callback attached to a (state, event)
//! pair and invoked synchronously while that event fires. A failing
//! action aborts the transition: the engine's cursor does not move.

use std::fmt;

/// Error type actions report; surfaced to the caller unmodified.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Side-effecting callback attached to a transition.
///
/// Actions are first-class values wrapping an arbitrary closure. The
/// closure must be thread-safe (`Send + Sync`) so an engine guarded by
/// an external lock can cross threads, but the engine itself never runs
/// actions concurrently; each one executes to completion inside
/// `process_event`.
///
/// # Example
///
/// ```rust
/// use flowstate::Action;
///
/// let action = Action::new(|| {
///     println!("notifying downstream");
///     Ok(())
/// });
///
/// assert!(action.run().is_ok());
/// ```
pub struct Action {
    callback: Box<dyn Fn() -> Result<(), ActionError> + Send + Sync>,
}

impl Action {
    /// Wrap a callback as an action.
    ///
    /// Returning `Err` from the callback aborts the transition it is
    /// attached to and hands the error back to the `process_event`
    /// caller verbatim.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Action {
            callback: Box::new(callback),
        }
    }

    /// Invoke the wrapped callback.
    pub fn run(&self) -> Result<(), ActionError> {
        (self.callback)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}
