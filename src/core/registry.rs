//! Name-keyed registry of the states a machine can occupy.

use super::state::{State, StateRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while populating a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("State '{name}' is already registered")]
    DuplicateState { name: String },
}

/// Registry of states, keyed by unique name.
///
/// Registration order is preserved for iteration. Lookups never fail; a
/// missing name is reported as `None` so that dangling transition targets
/// can degrade gracefully at fire time.
pub struct StateRegistry<H, D> {
    states: Vec<StateRef<H, D>>,
    index: HashMap<String, usize>,
}

impl<H, D> StateRegistry<H, D> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a state and return its shared handle.
    pub fn register(&mut self, state: State<H, D>) -> Result<StateRef<H, D>, RegistryError> {
        if self.index.contains_key(state.name()) {
            return Err(RegistryError::DuplicateState {
                name: state.name().to_string(),
            });
        }

        let state = Arc::new(state);
        self.index.insert(state.name().to_string(), self.states.len());
        self.states.push(Arc::clone(&state));
        Ok(state)
    }

    /// Resolve a state by name.
    pub fn get(&self, name: &str) -> Option<StateRef<H, D>> {
        self.index.get(name).map(|&i| Arc::clone(&self.states[i]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StateRef<H, D>> {
        self.states.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name()).collect()
    }
}

impl<H, D> Default for StateRegistry<H, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, D> fmt::Debug for StateRegistry<H, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
