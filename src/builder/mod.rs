//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and shorthand constructors for
//! authoring state graphs and wiring them to a host.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::Transition;

/// Create an unconditional transition without an action.
///
/// # Example
///
/// ```
/// use polymachine::builder::simple_transition;
///
/// let transition = simple_transition::<(), ()>("start", "Running");
/// assert!(!transition.has_guard());
/// ```
pub fn simple_transition<H, D>(
    event: impl Into<String>,
    target: impl Into<String>,
) -> Transition<H, D> {
    Transition::new(event, target)
}

/// Create a transition gated by a guard predicate.
///
/// # Example
///
/// ```
/// use polymachine::builder::guarded_transition;
///
/// struct Tank {
///     level: u32,
/// }
///
/// let refill = guarded_transition("check", "Refilling", |tank: &Tank, _: &()| tank.level < 10);
/// assert!(refill.permits(&Tank { level: 3 }, &()));
/// ```
pub fn guarded_transition<H, D, F>(
    event: impl Into<String>,
    target: impl Into<String>,
    guard: F,
) -> Transition<H, D>
where
    F: Fn(&H, &D) -> bool + Send + Sync + 'static,
{
    Transition::new(event, target).when(guard)
}
