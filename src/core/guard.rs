//! Guard predicates and transition actions.
//!
//! Guards decide whether a transition may fire. They read the host and the
//! event detail but never mutate either. Actions are the side-effecting
//! counterpart and receive the host mutably.

/// Predicate that determines if a transition can fire.
///
/// Guards are evaluated in declaration order while resolving an event and
/// must be free of side effects: a guard that is not reached because an
/// earlier one passed is never called.
///
/// # Example
///
/// ```rust
/// use polymachine::core::Guard;
///
/// struct Door {
///     locked: bool,
/// }
///
/// let unlocked = Guard::new(|door: &Door, _: &()| !door.locked);
///
/// assert!(unlocked.check(&Door { locked: false }, &()));
/// assert!(!unlocked.check(&Door { locked: true }, &()));
/// ```
pub struct Guard<H, D> {
    predicate: Box<dyn Fn(&H, &D) -> bool + Send + Sync>,
}

impl<H, D> Guard<H, D> {
    /// Create a guard from a predicate over the host and the event detail.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&H, &D) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against the host and the detail.
    pub fn check(&self, host: &H, detail: &D) -> bool {
        (self.predicate)(host, detail)
    }
}

/// Side effect run when a transition fires, before the state switch.
pub struct Action<H, D> {
    effect: Box<dyn Fn(&mut H, &D) + Send + Sync>,
}

impl<H, D> Action<H, D> {
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn(&mut H, &D) + Send + Sync + 'static,
    {
        Action {
            effect: Box::new(effect),
        }
    }

    pub fn run(&self, host: &mut H, detail: &D) {
        (self.effect)(host, detail)
    }
}

/// Entry or exit callback of a state.
pub struct Hook<H> {
    callback: Box<dyn Fn(&mut H) + Send + Sync>,
}

impl<H> Hook<H> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        Hook {
            callback: Box::new(callback),
        }
    }

    pub fn run(&self, host: &mut H) {
        (self.callback)(host)
    }
}
