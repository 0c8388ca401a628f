//! Transition edges between states.

use super::guard::{Action, Guard};
use std::fmt;

/// An edge of the state graph.
///
/// The target is stored by name and resolved through the registry only when
/// the transition fires, so a graph may reference states that are registered
/// later.
///
/// # Example
///
/// ```rust
/// use polymachine::core::Transition;
///
/// struct Job {
///     retries: u32,
/// }
///
/// let retry: Transition<Job, ()> = Transition::new("fail", "Queued")
///     .when(|job: &Job, _: &()| job.retries < 3)
///     .action(|job: &mut Job, _: &()| job.retries += 1);
///
/// assert_eq!(retry.event(), "fail");
/// assert_eq!(retry.target(), "Queued");
/// assert!(retry.has_guard());
/// ```
pub struct Transition<H, D> {
    event: String,
    target: String,
    guard: Option<Guard<H, D>>,
    action: Option<Action<H, D>>,
}

impl<H, D> Transition<H, D> {
    /// Create an unconditional transition without an action.
    pub fn new(event: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            target: target.into(),
            guard: None,
            action: None,
        }
    }

    /// Attach a guard.
    pub fn guard(mut self, guard: Guard<H, D>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a guard built from a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&H, &D) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach an action built from a closure.
    pub fn action<F>(mut self, effect: F) -> Self
    where
        F: Fn(&mut H, &D) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(effect));
        self
    }

    pub(crate) fn with_parts(
        event: String,
        target: String,
        guard: Option<Guard<H, D>>,
        action: Option<Action<H, D>>,
    ) -> Self {
        Self {
            event,
            target,
            guard,
            action,
        }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Whether this transition reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.event == event
    }

    /// Evaluate the guard. A transition without a guard always passes.
    pub fn permits(&self, host: &H, detail: &D) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(host, detail))
    }

    /// Run the action, if any.
    pub fn fire(&self, host: &mut H, detail: &D) {
        if let Some(action) = &self.action {
            action.run(host, detail);
        }
    }
}

impl<H, D> fmt::Debug for Transition<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("target", &self.target)
            .field("guarded", &self.has_guard())
            .field("action", &self.has_action())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Light {
        switches: u32,
    }

    #[test]
    fn unguarded_transition_always_permits() {
        let transition: Transition<Light, ()> = Transition::new("toggle", "On");

        assert!(transition.permits(&Light::default(), &()));
        assert!(!transition.has_guard());
        assert!(!transition.has_action());
    }

    #[test]
    fn guard_controls_permission() {
        let transition: Transition<Light, bool> =
            Transition::new("toggle", "On").when(|_, powered: &bool| *powered);

        assert!(transition.permits(&Light::default(), &true));
        assert!(!transition.permits(&Light::default(), &false));
    }

    #[test]
    fn fire_runs_action_on_host() {
        let transition: Transition<Light, ()> =
            Transition::new("toggle", "On").action(|light: &mut Light, _| light.switches += 1);
        let mut light = Light::default();

        transition.fire(&mut light, &());
        transition.fire(&mut light, &());

        assert_eq!(light.switches, 2);
    }

    #[test]
    fn fire_without_action_is_noop() {
        let transition: Transition<Light, ()> = Transition::new("toggle", "On");
        let mut light = Light::default();

        transition.fire(&mut light, &());

        assert_eq!(light.switches, 0);
    }

    #[test]
    fn handles_matches_exact_event_name() {
        let transition: Transition<Light, ()> = Transition::new("toggle", "On");

        assert!(transition.handles("toggle"));
        assert!(!transition.handles("Toggle"));
        assert!(!transition.handles(""));
    }

    #[test]
    fn debug_output_names_edge() {
        let transition: Transition<Light, ()> =
            Transition::new("toggle", "On").when(|_, _| true);

        let debug = format!("{transition:?}");
        assert!(debug.contains("toggle"));
        assert!(debug.contains("guarded: true"));
    }
}
