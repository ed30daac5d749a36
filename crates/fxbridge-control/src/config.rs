//! Session identity and current audio configuration.

use fxbridge_wire::{decode_config, AudioConfig, Result};

use crate::backend::SessionContext;

/// Holds the immutable session identity and the current configuration.
///
/// The configuration starts at [`AudioConfig::default`] and is only ever
/// replaced through [`apply`](ConfigManager::apply) (the set-config path)
/// or restored by [`reset`](ConfigManager::reset).
#[derive(Debug)]
pub struct ConfigManager {
    session: SessionContext,
    current: AudioConfig,
}

impl ConfigManager {
    /// Create a manager with the default configuration.
    pub fn new(session: SessionContext) -> Self {
        Self {
            session,
            current: AudioConfig::default(),
        }
    }

    /// The session identity, fixed for the instance's lifetime.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// The configuration currently in effect.
    pub fn current(&self) -> AudioConfig {
        self.current
    }

    /// Decode a set-config payload, merge caller fields over the defaults,
    /// and store the result. Nothing is stored if decoding fails.
    pub fn apply(&mut self, payload: &[u8]) -> Result<AudioConfig> {
        let merged = decode_config(payload)?;
        self.current = merged;
        Ok(merged)
    }

    /// Restore the default configuration.
    pub fn reset(&mut self) {
        self.current = AudioConfig::default();
    }
}
