//! Command dispatch and lifecycle control for the legacy effect ABI.
//!
//! [`EffectBridge`] is the sole entry point: it takes a raw command code, a
//! borrowed command payload, and a borrowed reply buffer, and translates the
//! command into typed calls on an [`EffectBackend`]. Payloads are decoded
//! through the bounds-checked views in `fxbridge-wire`; every failure comes
//! back as an integer status code, never a panic.
//!
//! The bridge owns a small lifecycle state machine
//! (uninitialized → configured ⇄ active) and the current audio
//! configuration; the backend handle obtained on init is closed on drop.

pub mod backend;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod state;

pub use backend::{
    BackendError, EffectBackend, EffectDescriptor, EffectHandle, OffloadParam, SessionContext,
};
pub use command::CommandCode;
pub use config::ConfigManager;
pub use dispatch::EffectBridge;
pub use error::{BridgeError, Result};
pub use state::{Lifecycle, StateController};
