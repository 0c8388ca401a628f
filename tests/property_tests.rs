//! Property-based tests for transition resolution.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated guard configurations.

use polymachine::core::{State, Transition};
use polymachine::{MachineError, SendOutcome, StateMachine, StateMachineBuilder};
use proptest::prelude::*;

/// Host without state; every decision comes from the event detail.
struct Host;

/// Machine whose `Start` state has one guarded `go` transition per flag,
/// targeting `T0`, `T1`, ... in declaration order. Guard `i` passes iff
/// `flags[i]` is set.
fn guarded_fanout(flags: &[bool]) -> StateMachine<Host, Vec<bool>> {
    let transitions = (0..flags.len())
        .map(|i| {
            Transition::new("go", format!("T{i}"))
                .when(move |_: &Host, detail: &Vec<bool>| detail[i])
        })
        .collect();
    let targets = (0..flags.len()).map(|i| State::new(format!("T{i}"))).collect();

    StateMachineBuilder::new(Host)
        .initial("Start")
        .state(State::new("Start").transitions_from(transitions))
        .states(targets)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn first_passing_guard_wins(flags in prop::collection::vec(any::<bool>(), 1..8)) {
        let mut machine = guarded_fanout(&flags);

        let outcome = machine.send_with("go", &flags).unwrap();

        match flags.iter().position(|f| *f) {
            Some(winner) => {
                let expected = format!("T{winner}");
                prop_assert_eq!(outcome.entered(), Some(expected.as_str()));
                prop_assert_eq!(machine.state(), expected.as_str());
            }
            None => {
                prop_assert_eq!(outcome, SendOutcome::GuardsRejected);
                prop_assert_eq!(machine.state(), "Start");
            }
        }
    }

    #[test]
    fn any_unguarded_duplicate_is_ambiguous(
        guarded in prop::collection::vec(any::<bool>(), 2..6)
    ) {
        prop_assume!(guarded.iter().any(|g| !*g));

        let transitions = guarded
            .iter()
            .map(|&g| {
                let t = Transition::new("go", "End");
                if g { t.when(|_: &(), _: &()| true) } else { t }
            })
            .collect();
        let mut machine = StateMachineBuilder::new(())
            .initial("Start")
            .state(State::new("Start").transitions_from(transitions))
            .state(State::new("End"))
            .build()
            .unwrap();

        let result = machine.send("go");

        let is_ambiguous = matches!(result, Err(MachineError::AmbiguousTransition { .. }));
        prop_assert!(is_ambiguous);
        prop_assert_eq!(machine.state(), "Start");
    }

    #[test]
    fn unknown_events_never_change_state(event in "[a-z]{1,12}") {
        prop_assume!(event != "go");
        let mut machine = guarded_fanout(&[true]);

        let outcome = machine.send_with(&event, &vec![true]).unwrap();

        prop_assert!(outcome.diagnostic().is_some());
        prop_assert_eq!(machine.state(), "Start");
        prop_assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn history_path_matches_visited_states(steps in prop::collection::vec(0..3usize, 0..12)) {
        let names = ["A", "B", "C"];
        let states = names
            .iter()
            .map(|name| {
                State::new(*name).transitions_from(
                    names.iter().map(|to| Transition::new(format!("to{to}"), *to)).collect(),
                )
            })
            .collect();
        let mut machine: StateMachine<(), ()> = StateMachineBuilder::new(())
            .initial("A")
            .states(states)
            .build()
            .unwrap();

        let mut expected = vec!["A"];
        for step in &steps {
            machine.send(&format!("to{}", names[*step])).unwrap();
            expected.push(names[*step]);
        }

        prop_assert_eq!(machine.history().get_path(), expected);
    }
}
