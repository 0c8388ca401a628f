//! Opt-in validation of a state graph.
//!
//! The engine tolerates dangling targets and only rejects ambiguous events
//! when one is actually sent. This module finds both ahead of time, using
//! Stillwater's `Validation` so that every issue in the graph is reported in
//! a single pass.
//!
//! # Example
//!
//! ```rust
//! use polymachine::core::{State, StateRegistry, Transition};
//! use polymachine::validation::validate_graph;
//!
//! let mut registry: StateRegistry<(), ()> = StateRegistry::new();
//! registry
//!     .register(State::new("Idle").transition(Transition::new("start", "Running")))
//!     .unwrap();
//!
//! assert!(validate_graph(&registry).is_failure());
//! ```

mod issues;

pub use issues::GraphIssue;

use crate::core::{State, StateRegistry};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result type of graph checks.
pub type GraphValidation = Validation<(), NonEmptyVec<GraphIssue>>;

/// Check every state of the registry, accumulating ALL issues.
pub fn validate_graph<H, D>(registry: &StateRegistry<H, D>) -> GraphValidation {
    let mut checks: Vec<GraphValidation> = Vec::new();

    for state in registry.iter() {
        checks.extend(check_targets(state, registry));
        checks.extend(check_ambiguity(state));
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

fn check_targets<H, D>(
    state: &State<H, D>,
    registry: &StateRegistry<H, D>,
) -> Vec<GraphValidation> {
    state
        .transitions()
        .iter()
        .map(|t| {
            if registry.contains(t.target()) {
                Validation::success(())
            } else {
                Validation::fail(GraphIssue::DanglingTarget {
                    state: state.name().to_string(),
                    event: t.event().to_string(),
                    target: t.target().to_string(),
                })
            }
        })
        .collect()
}

fn check_ambiguity<H, D>(state: &State<H, D>) -> Vec<GraphValidation> {
    let mut seen = HashSet::new();

    state
        .transitions()
        .iter()
        .filter(|t| seen.insert(t.event()))
        .map(|t| {
            let candidates = state.candidates(t.event());
            if candidates.len() > 1 && candidates.iter().any(|c| !c.has_guard()) {
                Validation::fail(GraphIssue::AmbiguousEvent {
                    state: state.name().to_string(),
                    event: t.event().to_string(),
                })
            } else {
                Validation::success(())
            }
        })
        .collect()
}

/// Flatten a failed validation into a plain list of issues.
pub fn issues(validation: GraphValidation) -> Vec<GraphIssue> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    fn registry(states: Vec<State<(), ()>>) -> StateRegistry<(), ()> {
        let mut registry = StateRegistry::new();
        for state in states {
            registry.register(state).unwrap();
        }
        registry
    }

    #[test]
    fn well_formed_graph_passes() {
        let registry = registry(vec![
            State::new("Idle").transition(Transition::new("start", "Running")),
            State::new("Running").transitions_from(vec![
                Transition::new("finish", "Done").when(|_, _| true),
                Transition::new("finish", "Idle").when(|_, _| false),
            ]),
            State::new("Done"),
        ]);

        assert!(validate_graph(&registry).is_success());
    }

    #[test]
    fn empty_registry_passes() {
        let registry: StateRegistry<(), ()> = StateRegistry::new();
        assert!(validate_graph(&registry).is_success());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let registry = registry(vec![
            State::new("Idle").transitions_from(vec![
                Transition::new("start", "Running"),
                Transition::new("start", "Nowhere").when(|_, _| true),
            ]),
            State::new("Running").transition(Transition::new("stop", "Gone")),
        ]);

        let found = issues(validate_graph(&registry));

        assert_eq!(found.len(), 3);
        assert!(found.contains(&GraphIssue::DanglingTarget {
            state: "Idle".to_string(),
            event: "start".to_string(),
            target: "Nowhere".to_string(),
        }));
        assert!(found.contains(&GraphIssue::DanglingTarget {
            state: "Running".to_string(),
            event: "stop".to_string(),
            target: "Gone".to_string(),
        }));
        assert!(found.contains(&GraphIssue::AmbiguousEvent {
            state: "Idle".to_string(),
            event: "start".to_string(),
        }));
    }

    #[test]
    fn ambiguous_event_reported_once_per_state() {
        let registry = registry(vec![State::new("Idle").transitions_from(vec![
            Transition::new("poke", "Idle"),
            Transition::new("poke", "Idle"),
            Transition::new("poke", "Idle"),
        ])]);

        let found = issues(validate_graph(&registry));

        assert_eq!(
            found,
            vec![GraphIssue::AmbiguousEvent {
                state: "Idle".to_string(),
                event: "poke".to_string(),
            }]
        );
    }

    #[test]
    fn forward_references_are_valid() {
        let registry = registry(vec![
            State::new("A").transition(Transition::new("next", "B")),
            State::new("B").transition(Transition::new("next", "A")),
        ]);

        assert!(validate_graph(&registry).is_success());
    }
}
