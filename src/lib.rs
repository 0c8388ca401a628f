//! Polymachine: a synchronous finite state machine engine for host objects
//!
//! A host value hands its behavioral decisions to a [`StateMachine`]: which
//! state it is in, which events are legal there, and what side effects go
//! with a transition. The machine owns the host and passes it to every guard,
//! action and lifecycle hook.
//!
//! # Core Concepts
//!
//! - **State**: a named node with ordered transitions and optional entry/exit hooks
//! - **Transition**: event name, target state name, optional guard and action
//! - **Registry**: name-keyed states; targets are resolved when a transition fires
//! - **Machine**: resolves events, runs actions and hooks, publishes the state label
//!
//! Events are resolved to completion on the caller's thread. Callbacks get
//! the host, never the machine, so sending an event from inside a guard,
//! action or hook is rejected at compile time.
//!
//! # Example
//!
//! ```rust
//! use polymachine::builder::StateMachineBuilder;
//! use polymachine::core::{State, Transition};
//!
//! #[derive(Default)]
//! struct Job {
//!     archived: bool,
//! }
//!
//! #[derive(Default)]
//! struct Report {
//!     ok: bool,
//! }
//!
//! let mut machine = StateMachineBuilder::new(Job::default())
//!     .initial("Idle")
//!     .state(State::new("Idle").transition(Transition::new("start", "Running")))
//!     .state(
//!         State::new("Running")
//!             .transition(
//!                 Transition::new("finish", "Done")
//!                     .when(|_: &Job, r: &Report| r.ok)
//!                     .action(|job: &mut Job, _: &Report| job.archived = true),
//!             )
//!             .transition(Transition::new("finish", "Idle").when(|_: &Job, r: &Report| !r.ok)),
//!     )
//!     .state(State::new("Done"))
//!     .build()
//!     .unwrap();
//!
//! machine.send("start").unwrap();
//! assert_eq!(machine.state(), "Running");
//!
//! machine.send_with("finish", &Report { ok: true }).unwrap();
//! assert_eq!(machine.state(), "Done");
//! assert!(machine.host().archived);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::MachineConfig;
pub use crate::core::{is_state, one_of_state, State, StateRef, StateRegistry, Transition};
pub use machine::{Diagnostic, MachineError, SendOutcome, StateMachine};
