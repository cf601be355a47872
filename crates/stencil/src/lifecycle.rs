//! Ordered start-up and shutdown phases.
//!
//! A [`Lifecycle`] walks a context value through a fixed sequence of
//! [`State`]s. Each transition first runs the hooks registered for the
//! [`Phase`] leading into it, in registration order, and only then moves to
//! the new state. A failing hook aborts the transition and leaves the state
//! unchanged.
//!
//! ```text
//! Created -> Initialized -> Loaded -> Resolved -> Started -> Stopped
//!        PreInitialize   PreLoad  PreResolve  PreStart   PreStop / PostStop
//! ```
//!
//! # Example
//!
//! ```
//! # use stencil::lifecycle::{Lifecycle, Phase, State};
//! let mut lifecycle: Lifecycle<Vec<String>> = Lifecycle::new();
//! lifecycle.on(Phase::PreLoad, |log| {
//!     log.push("load".to_string());
//!     Ok(())
//! });
//! lifecycle.on(Phase::PreStart, |log| {
//!     log.push("start".to_string());
//!     Ok(())
//! });
//!
//! let mut log = Vec::new();
//! lifecycle.run_to_start(&mut log).unwrap();
//! assert_eq!(lifecycle.state(), State::Started);
//! assert_eq!(log, ["load", "start"]);
//! ```

use std::fmt;

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

/// A lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Created,
    Initialized,
    Loaded,
    Resolved,
    Started,
    Stopped,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Initialized => "initialized",
            Self::Loaded => "loaded",
            Self::Resolved => "resolved",
            Self::Started => "started",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// A point at which hooks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    PreInitialize,
    PreLoad,
    PreResolve,
    PreStart,
    PreStop,
    PostStop,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PreInitialize => "pre-initialize",
            Self::PreLoad => "pre-load",
            Self::PreResolve => "pre-resolve",
            Self::PreStart => "pre-start",
            Self::PreStop => "pre-stop",
            Self::PostStop => "post-stop",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("cannot {action} while {state}")]
    InvalidTransition { state: State, action: &'static str },

    #[error("{phase} hook failed: {message}")]
    Hook { phase: Phase, message: String },
}

impl LifecycleError {
    pub fn hook(phase: Phase, message: impl Into<String>) -> Self {
        Self::Hook {
            phase,
            message: message.into(),
        }
    }
}

/// A hook run against the lifecycle's context.
pub type Hook<C> = Box<dyn FnMut(&mut C) -> Result<(), LifecycleError> + Send>;

/// Hooks per phase plus the current state.
pub struct Lifecycle<C> {
    state: State,
    hooks: IndexMap<Phase, Vec<Hook<C>>>,
}

impl<C> Default for Lifecycle<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Lifecycle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: IndexMap<_, _> = self
            .hooks
            .iter()
            .map(|(phase, hooks)| (phase, hooks.len()))
            .collect();
        f.debug_struct("Lifecycle")
            .field("state", &self.state)
            .field("hooks", &counts)
            .finish()
    }
}

impl<C> Lifecycle<C> {
    pub fn new() -> Self {
        Self {
            state: State::Created,
            hooks: IndexMap::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Append a hook to `phase`. Hooks of one phase run in the order they
    /// were added.
    pub fn on<F>(&mut self, phase: Phase, hook: F) -> &mut Self
    where
        F: FnMut(&mut C) -> Result<(), LifecycleError> + Send + 'static,
    {
        self.hooks.entry(phase).or_default().push(Box::new(hook));
        self
    }

    /// Number of hooks registered for `phase`.
    pub fn hook_count(&self, phase: Phase) -> usize {
        self.hooks.get(&phase).map_or(0, Vec::len)
    }

    /// # Errors
    ///
    /// Fails unless the lifecycle is [`State::Created`], or if a
    /// [`Phase::PreInitialize`] hook fails.
    pub fn initialize(&mut self, context: &mut C) -> Result<(), LifecycleError> {
        self.transition(context, State::Created, Phase::PreInitialize, State::Initialized, "initialize")
    }

    /// # Errors
    ///
    /// Fails unless the lifecycle is [`State::Initialized`], or if a
    /// [`Phase::PreLoad`] hook fails.
    pub fn load(&mut self, context: &mut C) -> Result<(), LifecycleError> {
        self.transition(context, State::Initialized, Phase::PreLoad, State::Loaded, "load")
    }

    /// # Errors
    ///
    /// Fails unless the lifecycle is [`State::Loaded`], or if a
    /// [`Phase::PreResolve`] hook fails.
    pub fn resolve(&mut self, context: &mut C) -> Result<(), LifecycleError> {
        self.transition(context, State::Loaded, Phase::PreResolve, State::Resolved, "resolve")
    }

    /// # Errors
    ///
    /// Fails unless the lifecycle is [`State::Resolved`], or if a
    /// [`Phase::PreStart`] hook fails.
    pub fn start(&mut self, context: &mut C) -> Result<(), LifecycleError> {
        self.transition(context, State::Resolved, Phase::PreStart, State::Started, "start")
    }

    /// Run the [`Phase::PreStop`] hooks, move to [`State::Stopped`], then
    /// run the [`Phase::PostStop`] hooks.
    ///
    /// # Errors
    ///
    /// Fails unless the lifecycle is [`State::Started`], or if a hook
    /// fails. A failing post-stop hook still leaves the lifecycle stopped.
    pub fn stop(&mut self, context: &mut C) -> Result<(), LifecycleError> {
        self.transition(context, State::Started, Phase::PreStop, State::Stopped, "stop")?;
        self.run_hooks(Phase::PostStop, context)
    }

    /// Initialize, load, resolve and start in sequence.
    ///
    /// # Errors
    ///
    /// Returns the first failing transition.
    pub fn run_to_start(&mut self, context: &mut C) -> Result<(), LifecycleError> {
        self.initialize(context)?;
        self.load(context)?;
        self.resolve(context)?;
        self.start(context)
    }

    fn transition(
        &mut self,
        context: &mut C,
        from: State,
        phase: Phase,
        to: State,
        action: &'static str,
    ) -> Result<(), LifecycleError> {
        if self.state != from {
            return Err(LifecycleError::InvalidTransition {
                state: self.state,
                action,
            });
        }
        self.run_hooks(phase, context)?;
        self.state = to;
        debug!(state:% = to; "Lifecycle transition complete");
        Ok(())
    }

    fn run_hooks(&mut self, phase: Phase, context: &mut C) -> Result<(), LifecycleError> {
        let Some(hooks) = self.hooks.get_mut(&phase) else {
            return Ok(());
        };
        debug!(phase:%, hooks = hooks.len(); "Running lifecycle hooks");
        for hook in hooks {
            hook(context)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &'static str) -> impl FnMut(&mut Vec<&'static str>) -> Result<(), LifecycleError> {
        move |log| {
            log.push(name);
            Ok(())
        }
    }

    #[test]
    fn test_hooks_run_in_phase_and_registration_order() {
        let mut lifecycle = Lifecycle::new();
        lifecycle
            .on(Phase::PreStart, record("start"))
            .on(Phase::PreLoad, record("load-1"))
            .on(Phase::PreInitialize, record("init"))
            .on(Phase::PreLoad, record("load-2"))
            .on(Phase::PreStop, record("pre-stop"))
            .on(Phase::PostStop, record("post-stop"));

        let mut log = Vec::new();
        lifecycle.run_to_start(&mut log).unwrap();
        lifecycle.stop(&mut log).unwrap();

        assert_eq!(log, ["init", "load-1", "load-2", "start", "pre-stop", "post-stop"]);
        assert_eq!(lifecycle.state(), State::Stopped);
        assert_eq!(lifecycle.hook_count(Phase::PreLoad), 2);
        assert_eq!(lifecycle.hook_count(Phase::PreResolve), 0);
    }

    #[test]
    fn test_out_of_order_transition_fails() {
        let mut lifecycle: Lifecycle<()> = Lifecycle::new();

        let err = lifecycle.start(&mut ()).unwrap_err();
        assert_eq!(
            err,
            LifecycleError::InvalidTransition {
                state: State::Created,
                action: "start",
            }
        );
        assert_eq!(err.to_string(), "cannot start while created");
        assert_eq!(lifecycle.state(), State::Created);
    }

    #[test]
    fn test_failing_hook_keeps_state() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.on(Phase::PreLoad, |_: &mut ()| Err(LifecycleError::hook(Phase::PreLoad, "boom")));

        lifecycle.initialize(&mut ()).unwrap();
        let err = lifecycle.load(&mut ()).unwrap_err();

        assert_eq!(err.to_string(), "pre-load hook failed: boom");
        assert_eq!(lifecycle.state(), State::Initialized);
    }

    #[test]
    fn test_stop_twice_fails() {
        let mut lifecycle: Lifecycle<()> = Lifecycle::new();
        lifecycle.run_to_start(&mut ()).unwrap();
        lifecycle.stop(&mut ()).unwrap();

        assert!(matches!(
            lifecycle.stop(&mut ()),
            Err(LifecycleError::InvalidTransition {
                state: State::Stopped,
                ..
            })
        ));
    }
}
