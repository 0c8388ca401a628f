//! State machine that resolves events against the active state and drives
//! the host through lifecycle hooks.

use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::config::MachineConfig;
use crate::core::{
    is_state, one_of_state, State, StateHistory, StateRef, StateRegistry, StateTransition,
    Transition,
};
use crate::machine::outcome::{Diagnostic, MachineError, SendOutcome};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Callback notified with the new state label on every label update.
pub type Observer = Box<dyn FnMut(&str) + Send>;

/// Result of filtering and guarding the candidates for an event.
enum Selection<'a, H, D> {
    /// No transition in the active state reacts to the event
    Unhandled,
    /// Candidates exist but no guard passed
    Rejected,
    Winner(&'a Transition<H, D>),
}

/// Pick the transition that fires for `event`.
///
/// A lone candidate fires if it is unguarded or its guard passes. Several
/// candidates must all be guarded; the first passing guard in declaration
/// order wins and later guards are not evaluated.
fn select_transition<'a, H, D>(
    state: &'a State<H, D>,
    host: &H,
    event: &str,
    detail: &D,
) -> Result<Selection<'a, H, D>, MachineError> {
    let candidates = state.candidates(event);

    match candidates.as_slice() {
        [] => Ok(Selection::Unhandled),
        [only] => {
            if only.permits(host, detail) {
                Ok(Selection::Winner(*only))
            } else {
                Ok(Selection::Rejected)
            }
        }
        many => {
            if many.iter().any(|t| !t.has_guard()) {
                return Err(MachineError::AmbiguousTransition {
                    event: event.to_string(),
                    state: state.name().to_string(),
                });
            }

            Ok(many
                .iter()
                .copied()
                .find(|t| t.permits(host, detail))
                .map_or(Selection::Rejected, Selection::Winner))
        }
    }
}

/// Finite state machine attached to a host value.
///
/// The machine owns the host and hands it to every guard (`&H`), action and
/// hook (`&mut H`). Callbacks never see the machine itself, so a callback
/// cannot send another event while one is being resolved.
///
/// # Example
///
/// ```rust
/// use polymachine::core::{State, StateRegistry, Transition};
/// use polymachine::StateMachine;
///
/// #[derive(Default)]
/// struct Job {
///     runs: u32,
/// }
///
/// let mut registry = StateRegistry::new();
/// registry
///     .register(State::new("Idle").transition(Transition::new("start", "Running")))
///     .unwrap();
/// registry
///     .register(State::new("Running").on_entry(|job: &mut Job| job.runs += 1))
///     .unwrap();
///
/// let mut machine: StateMachine<Job, ()> = StateMachine::new(Job::default(), registry);
/// machine.initialize("Idle").unwrap();
/// machine.send("start").unwrap();
///
/// assert_eq!(machine.state(), "Running");
/// assert_eq!(machine.host().runs, 1);
/// ```
pub struct StateMachine<H, D> {
    host: H,
    registry: StateRegistry<H, D>,
    initial: Option<StateRef<H, D>>,
    current: Option<StateRef<H, D>>,
    label: String,
    observers: Vec<Observer>,
    history: StateHistory,
    config: MachineConfig,
}

impl<H, D> StateMachine<H, D> {
    /// Create an uninitialized machine. Call [`initialize`](Self::initialize)
    /// before sending events.
    pub fn new(host: H, registry: StateRegistry<H, D>) -> Self {
        Self::with_config(host, registry, MachineConfig::default())
    }

    pub fn with_config(host: H, registry: StateRegistry<H, D>, config: MachineConfig) -> Self {
        let history = config
            .max_history
            .map_or_else(StateHistory::new, StateHistory::bounded);
        Self {
            host,
            registry,
            initial: None,
            current: None,
            label: String::new(),
            observers: Vec::new(),
            history,
            config,
        }
    }

    /// Register an observer of the state label.
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Enter the named state without running any exit hook.
    ///
    /// An unknown name leaves the machine uninitialized and is reported as
    /// [`Diagnostic::InvalidTransitionTarget`].
    pub fn initialize(&mut self, name: &str) -> Result<SendOutcome, MachineError> {
        if let Some(current) = &self.current {
            return Err(MachineError::AlreadyInitialized {
                state: current.name().to_string(),
            });
        }

        let initial = self.registry.get(name);
        if let Some(state) = &initial {
            self.initial = Some(Arc::clone(state));
        }
        Ok(self.transition_to(initial, name, None))
    }

    /// Switch back to the initial state through the regular exit/entry sequence.
    pub fn reset(&mut self) -> Result<SendOutcome, MachineError> {
        let initial = self.initial.clone().ok_or(MachineError::NotInitialized)?;
        let name = initial.name().to_string();
        Ok(self.transition_to(Some(initial), &name, None))
    }

    /// Send an event with a default detail payload.
    pub fn send(&mut self, event: &str) -> Result<SendOutcome, MachineError>
    where
        D: Default,
    {
        let detail = D::default();
        self.send_with(event, &detail)
    }

    /// Send an event to the active state.
    ///
    /// The winning transition's action runs before its target is resolved.
    /// If the target is not registered the action is not undone and the
    /// machine stays where it was.
    pub fn send_with(&mut self, event: &str, detail: &D) -> Result<SendOutcome, MachineError> {
        if event.is_empty() {
            return Err(MachineError::InvalidArgument);
        }
        let current = self
            .current
            .clone()
            .ok_or_else(|| MachineError::InvalidState {
                event: event.to_string(),
            })?;

        let transition = match select_transition(&current, &self.host, event, detail)? {
            Selection::Winner(transition) => transition,
            Selection::Rejected => {
                tracing::debug!(
                    machine = self.config.label(),
                    state = current.name(),
                    event,
                    "no guard passed, event ignored"
                );
                return Ok(SendOutcome::GuardsRejected);
            }
            Selection::Unhandled => {
                let diagnostic = Diagnostic::NoMatchingTransition {
                    state: current.name().to_string(),
                    event: event.to_string(),
                };
                tracing::warn!(
                    machine = self.config.label(),
                    state = current.name(),
                    event,
                    "{diagnostic}"
                );
                return Ok(SendOutcome::Ignored(diagnostic));
            }
        };

        transition.fire(&mut self.host, detail);

        let next = self.registry.get(transition.target());
        Ok(self.transition_to(next, transition.target(), Some(event)))
    }

    fn transition_to(
        &mut self,
        next: Option<StateRef<H, D>>,
        target: &str,
        event: Option<&str>,
    ) -> SendOutcome {
        let Some(next) = next else {
            let diagnostic = Diagnostic::InvalidTransitionTarget {
                target: target.to_string(),
            };
            tracing::error!(
                machine = self.config.label(),
                state = self.label.as_str(),
                target_state = target,
                "{diagnostic}"
            );
            return SendOutcome::Ignored(diagnostic);
        };

        let previous = self.current.clone();
        if let Some(current) = &previous {
            // Edge-triggered observers would otherwise miss a self-transition.
            if is_state(current, &next) && self.config.notify_self_transitions {
                self.publish("");
            }
            if let Some(hook) = current.exit_hook() {
                hook.run(&mut self.host);
            }
        }

        self.current = Some(Arc::clone(&next));
        self.publish(next.name());

        let from = previous.map(|s| s.name().to_string());
        if self.config.record_history {
            self.history.record(StateTransition {
                from: from.clone(),
                to: next.name().to_string(),
                event: event.map(String::from),
                timestamp: Utc::now(),
            });
        }
        tracing::debug!(
            machine = self.config.label(),
            from = from.as_deref().unwrap_or(""),
            to = next.name(),
            event = event.unwrap_or(""),
            "state switched"
        );

        if let Some(hook) = next.entry_hook() {
            hook.run(&mut self.host);
        }

        SendOutcome::Transitioned {
            from,
            to: next.name().to_string(),
        }
    }

    fn publish(&mut self, label: &str) {
        self.label.clear();
        self.label.push_str(label);
        for observer in &mut self.observers {
            observer(label);
        }
    }

    /// The externally observed state label; empty before initialization.
    pub fn state(&self) -> &str {
        &self.label
    }

    pub fn current_state(&self) -> Option<&StateRef<H, D>> {
        self.current.as_ref()
    }

    pub fn initial_state(&self) -> Option<&StateRef<H, D>> {
        self.initial.as_ref()
    }

    /// Look up a registered state handle by name.
    pub fn state_ref(&self, name: &str) -> Option<StateRef<H, D>> {
        self.registry.get(name)
    }

    /// Whether `state` is the active state.
    pub fn is_in(&self, state: &StateRef<H, D>) -> bool {
        self.current.as_ref().is_some_and(|c| is_state(c, state))
    }

    pub fn is_one_of(&self, states: &[StateRef<H, D>]) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| one_of_state(c, states))
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn registry(&self) -> &StateRegistry<H, D> {
        &self.registry
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Capture the machine position. Hooks, guards and actions are not part
    /// of a checkpoint.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(
            self.initial.as_ref().map(|s| s.name().to_string()),
            self.current.as_ref().map(|s| s.name().to_string()),
            self.history.clone(),
        )
    }

    /// Move the machine to the position stored in `checkpoint`.
    ///
    /// Observers see the restored label; no entry or exit hook runs.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let initial = self.resolve_checkpoint_state(checkpoint.initial_state.as_deref())?;
        let current = self.resolve_checkpoint_state(checkpoint.current_state.as_deref())?;

        self.initial = initial;
        self.current = current;
        self.history = checkpoint.history.clone();
        self.history.set_limit(self.config.max_history);
        let label = self
            .current
            .as_ref()
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        self.publish(&label);

        tracing::debug!(
            machine = self.config.label(),
            checkpoint = checkpoint.id.as_str(),
            state = label.as_str(),
            "restored from checkpoint"
        );
        Ok(())
    }

    fn resolve_checkpoint_state(
        &self,
        name: Option<&str>,
    ) -> Result<Option<StateRef<H, D>>, CheckpointError> {
        name.map(|name| {
            self.registry
                .get(name)
                .ok_or_else(|| CheckpointError::UnknownState {
                    name: name.to_string(),
                })
        })
        .transpose()
    }
}

impl<H, D> fmt::Debug for StateMachine<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.label)
            .field("states", &self.registry)
            .field("observers", &self.observers.len())
            .field("config", &self.config)
            .finish()
    }
}
