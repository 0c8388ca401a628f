//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, Transition};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<H, D> {
    event: Option<String>,
    target: Option<String>,
    guard: Option<Guard<H, D>>,
    action: Option<Action<H, D>>,
}

impl<H, D> TransitionBuilder<H, D> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            event: None,
            target: None,
            guard: None,
            action: None,
        }
    }

    /// Set the event the transition reacts to (required).
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the target state name (required).
    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<H, D>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&H, &D) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the action run before the switch (optional).
    pub fn action<F>(mut self, effect: F) -> Self
    where
        F: Fn(&mut H, &D) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(effect));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<H, D>, BuildError> {
        let event = self
            .event
            .filter(|e| !e.is_empty())
            .ok_or(BuildError::MissingEvent)?;
        let target = self
            .target
            .filter(|t| !t.is_empty())
            .ok_or(BuildError::MissingTarget)?;

        Ok(Transition::with_parts(event, target, self.guard, self.action))
    }
}

impl<H, D> Default for TransitionBuilder<H, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Account {
        balance: i64,
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<Account, ()>::new().on("open").build();
        assert!(matches!(result, Err(BuildError::MissingTarget)));

        let result = TransitionBuilder::<Account, ()>::new().to("Open").build();
        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn empty_event_is_missing() {
        let result = TransitionBuilder::<Account, ()>::new().on("").to("Open").build();
        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn transition_builder_with_guard_and_action() {
        let transition: Transition<Account, i64> = TransitionBuilder::new()
            .on("withdraw")
            .to("Open")
            .when(|a: &Account, amount: &i64| a.balance >= *amount)
            .action(|a: &mut Account, amount: &i64| a.balance -= amount)
            .build()
            .unwrap();

        let mut account = Account { balance: 10 };
        assert!(transition.permits(&account, &5));
        assert!(!transition.permits(&account, &20));

        transition.fire(&mut account, &4);
        assert_eq!(account.balance, 6);
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition: Transition<Account, ()> = TransitionBuilder::new()
            .on("open")
            .to("Open")
            .build()
            .unwrap();

        assert_eq!(transition.event(), "open");
        assert_eq!(transition.target(), "Open");
        assert!(!transition.has_guard());
        assert!(!transition.has_action());
    }
}
