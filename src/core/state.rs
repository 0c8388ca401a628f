//! States of the graph and identity queries over them.
//!
//! A state is built once while the graph is authored and is immutable
//! afterwards. The registry hands out shared [`StateRef`] handles; two
//! handles denote the same state only if they point at the same registry
//! entry, regardless of name.

use super::guard::Hook;
use super::transition::Transition;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a registered state.
pub type StateRef<H, D> = Arc<State<H, D>>;

/// A named node of the state graph.
///
/// # Example
///
/// ```rust
/// use polymachine::core::{State, Transition};
///
/// #[derive(Default)]
/// struct Player {
///     playing: bool,
/// }
///
/// let paused: State<Player, ()> = State::new("Paused")
///     .transition(Transition::new("play", "Playing"))
///     .on_entry(|p: &mut Player| p.playing = false);
///
/// assert_eq!(paused.name(), "Paused");
/// assert_eq!(paused.transitions().len(), 1);
/// ```
pub struct State<H, D> {
    name: String,
    transitions: Vec<Transition<H, D>>,
    on_entry: Option<Hook<H>>,
    on_exit: Option<Hook<H>>,
}

impl<H, D> State<H, D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
            on_entry: None,
            on_exit: None,
        }
    }

    /// Append a transition. Declaration order is the tie-break order for
    /// guarded transitions sharing an event.
    pub fn transition(mut self, transition: Transition<H, D>) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn transitions_from(mut self, transitions: Vec<Transition<H, D>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    pub fn on_entry<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.on_entry = Some(Hook::new(callback));
        self
    }

    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.on_exit = Some(Hook::new(callback));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &[Transition<H, D>] {
        &self.transitions
    }

    /// Transitions reacting to `event`, in declaration order.
    pub fn candidates<'a>(&'a self, event: &str) -> Vec<&'a Transition<H, D>> {
        self.transitions.iter().filter(|t| t.handles(event)).collect()
    }

    pub(crate) fn entry_hook(&self) -> Option<&Hook<H>> {
        self.on_entry.as_ref()
    }

    pub(crate) fn exit_hook(&self) -> Option<&Hook<H>> {
        self.on_exit.as_ref()
    }
}

impl<H, D> fmt::Debug for State<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .field("on_entry", &self.on_entry.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

/// Identity comparison: true iff both handles refer to the same registry entry.
pub fn is_state<H, D>(state: &StateRef<H, D>, candidate: &StateRef<H, D>) -> bool {
    Arc::ptr_eq(state, candidate)
}

/// True iff `state` is identical to any of `candidates`.
pub fn one_of_state<H, D>(state: &StateRef<H, D>, candidates: &[StateRef<H, D>]) -> bool {
    candidates.iter().any(|c| is_state(state, c))
}
