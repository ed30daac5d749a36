//! Effect lifecycle state machine.

use tracing::debug;

use crate::error::{BridgeError, Result};

/// Lifecycle states of one effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, backend not yet opened.
    Uninitialized,
    /// Backend opened, processing disabled.
    Configured,
    /// Processing enabled.
    Active,
}

impl Lifecycle {
    /// Returns a human-readable name for the state.
    pub fn name(self) -> &'static str {
        match self {
            Lifecycle::Uninitialized => "UNINITIALIZED",
            Lifecycle::Configured => "CONFIGURED",
            Lifecycle::Active => "ACTIVE",
        }
    }
}

/// Owns the lifecycle state and validates every transition.
///
/// A rejected transition leaves the state unchanged.
#[derive(Debug)]
pub struct StateController {
    state: Lifecycle,
}

impl StateController {
    /// Start in `Uninitialized`.
    pub fn new() -> Self {
        Self {
            state: Lifecycle::Uninitialized,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Fail with an invalid-operation error unless in `expected`.
    pub fn expect(&self, expected: Lifecycle, op: &'static str) -> Result<()> {
        if self.state != expected {
            return Err(BridgeError::InvalidTransition {
                op,
                state: self.state.name(),
            });
        }
        Ok(())
    }

    /// `Uninitialized → Configured`. Valid exactly once.
    pub fn init(&mut self) -> Result<()> {
        self.expect(Lifecycle::Uninitialized, "init")?;
        self.transition(Lifecycle::Configured);
        Ok(())
    }

    /// `Configured → Active`.
    pub fn enable(&mut self) -> Result<()> {
        self.expect(Lifecycle::Configured, "enable")?;
        self.transition(Lifecycle::Active);
        Ok(())
    }

    /// `Active → Configured`.
    pub fn disable(&mut self) -> Result<()> {
        self.expect(Lifecycle::Active, "disable")?;
        self.transition(Lifecycle::Configured);
        Ok(())
    }

    /// `Configured | Active → Configured`.
    pub fn reset(&mut self) -> Result<()> {
        if self.state == Lifecycle::Uninitialized {
            return Err(BridgeError::InvalidTransition {
                op: "reset",
                state: self.state.name(),
            });
        }
        self.transition(Lifecycle::Configured);
        Ok(())
    }

    fn transition(&mut self, next: Lifecycle) {
        debug!(from = self.state.name(), to = next.name(), "lifecycle transition");
        self.state = next;
    }
}

impl Default for StateController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_init_enable_disable() {
        let mut state = StateController::new();
        assert_eq!(state.state(), Lifecycle::Uninitialized);
        state.init().unwrap();
        assert_eq!(state.state(), Lifecycle::Configured);
        state.enable().unwrap();
        assert_eq!(state.state(), Lifecycle::Active);
        state.disable().unwrap();
        assert_eq!(state.state(), Lifecycle::Configured);
    }

    #[test]
    fn double_init_rejected_state_unchanged() {
        let mut state = StateController::new();
        state.init().unwrap();
        let err = state.init().unwrap_err();
        assert!(matches!(err, BridgeError::InvalidTransition { op: "init", .. }));
        assert_eq!(state.state(), Lifecycle::Configured);
    }

    #[test]
    fn enable_requires_configured() {
        let mut state = StateController::new();
        assert!(state.enable().is_err());
        state.init().unwrap();
        state.enable().unwrap();
        // Already active: rejected, state stays Active.
        assert!(state.enable().is_err());
        assert_eq!(state.state(), Lifecycle::Active);
    }

    #[test]
    fn disable_requires_active() {
        let mut state = StateController::new();
        state.init().unwrap();
        let err = state.disable().unwrap_err();
        assert!(matches!(
            err,
            BridgeError::InvalidTransition { op: "disable", .. }
        ));
        assert_eq!(state.state(), Lifecycle::Configured);
    }

    #[test]
    fn reset_from_configured_and_active() {
        let mut state = StateController::new();
        assert!(state.reset().is_err());
        state.init().unwrap();
        state.reset().unwrap();
        assert_eq!(state.state(), Lifecycle::Configured);
        state.enable().unwrap();
        state.reset().unwrap();
        assert_eq!(state.state(), Lifecycle::Configured);
    }
}
