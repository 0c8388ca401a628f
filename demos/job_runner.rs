//! Job Runner
//!
//! Drives a small job host through Idle -> Running -> Done/Idle.
//!
//! Key concepts:
//! - Guarded branching on the event detail
//! - Actions run before the switch, hooks around it
//! - Label observers and tracing diagnostics
//!
//! Run with: RUST_LOG=debug cargo run --example job_runner

use polymachine::builder::StateMachineBuilder;
use polymachine::core::{State, Transition};
use polymachine::MachineConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Job {
    attempts: u32,
    published: bool,
}

#[derive(Debug, Default)]
struct Report {
    ok: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Job Runner Example ===\n");

    let mut machine = StateMachineBuilder::new(Job::default())
        .config(MachineConfig::named("job-runner"))
        .initial("Idle")
        .state(
            State::new("Idle")
                .transition(Transition::new("start", "Running"))
                .on_entry(|job: &mut Job| println!("  idle after {} attempt(s)", job.attempts)),
        )
        .state(
            State::new("Running")
                .transition(
                    Transition::new("finish", "Done")
                        .when(|_: &Job, report: &Report| report.ok)
                        .action(|job: &mut Job, _: &Report| job.published = true),
                )
                .transition(
                    Transition::new("finish", "Idle").when(|_: &Job, report: &Report| !report.ok),
                )
                .on_entry(|job: &mut Job| job.attempts += 1),
        )
        .state(State::new("Done"))
        .observe(|label| println!("state -> {label:?}"))
        .build()
        .unwrap();

    machine.send("start").unwrap();
    machine.send_with("finish", &Report { ok: false }).unwrap();

    machine.send("start").unwrap();
    machine.send_with("finish", &Report { ok: true }).unwrap();

    // Done has no transitions; this is only logged.
    let outcome = machine.send("start").unwrap();
    println!("\nIgnored: {:?}", outcome.diagnostic());

    println!("Final host: {:?}", machine.host());
    println!("Path: {:?}", machine.history().get_path());

    println!("\n=== Example Complete ===");
}
