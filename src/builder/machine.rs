//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{State, StateRegistry};
use crate::machine::{Observer, StateMachine};
use crate::validation::{issues, validate_graph};

/// Builder for constructing state machines with a fluent API.
///
/// `build` registers every state, optionally validates the graph and then
/// initializes the machine, which runs the initial state's entry hook.
pub struct StateMachineBuilder<H, D> {
    host: H,
    states: Vec<State<H, D>>,
    initial: Option<String>,
    config: MachineConfig,
    observers: Vec<Observer>,
}

impl<H, D> StateMachineBuilder<H, D> {
    /// Create a new builder around the host the machine will drive.
    pub fn new(host: H) -> Self {
        Self {
            host,
            states: Vec::new(),
            initial: None,
            config: MachineConfig::default(),
            observers: Vec::new(),
        }
    }

    /// Set the initial state by name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state.
    pub fn state(mut self, state: State<H, D>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: Vec<State<H, D>>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a label observer before initialization, so it also sees the
    /// initial state.
    pub fn observe<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build and initialize the state machine.
    pub fn build(self) -> Result<StateMachine<H, D>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut registry = StateRegistry::new();
        for state in self.states {
            registry.register(state)?;
        }

        if !registry.contains(&initial) {
            return Err(BuildError::UnknownInitialState(initial));
        }

        if self.config.validate_on_build {
            let found = issues(validate_graph(&registry));
            if !found.is_empty() {
                return Err(BuildError::InvalidGraph(found));
            }
        }

        let mut machine = StateMachine::with_config(self.host, registry, self.config);
        for observer in self.observers {
            machine.observe(observer);
        }
        machine.initialize(&initial)?;

        Ok(machine)
    }
}
