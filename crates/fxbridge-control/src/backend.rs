//! The structured effect interface this layer forwards decoded commands to.

use fxbridge_wire::{AudioConfig, ParamBlock};

/// Immutable identity scoping one effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: i32,
    pub io_id: i32,
}

/// Effect-type identity metadata, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    /// UUID of the effect type (e.g. equalizer, reverb).
    pub type_uuid: [u8; 16],
    /// UUID of this particular implementation.
    pub uuid: [u8; 16],
    /// Display name.
    pub name: String,
}

/// Opaque handle minted by the backend on a successful open.
///
/// Exclusively owned by the bridge from init until teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectHandle(u64);

impl EffectHandle {
    /// Wrap a backend-minted raw id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id, for the backend's own bookkeeping.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Errors surfaced by the structured backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend offers no equivalent for the requested operation.
    #[error("operation not supported by backend")]
    Unsupported,

    /// The backend failed; its status is propagated verbatim to the caller.
    #[error("backend returned status {0}")]
    Status(i32),
}

/// Offload routing fields carried by the legacy offload command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffloadParam {
    pub is_offload: bool,
    pub io_handle: i32,
}

/// Structured, typed effect-control interface.
///
/// Implemented once per effect family; parameter semantics live behind
/// [`set_parameter`](EffectBackend::set_parameter) and
/// [`get_parameter`](EffectBackend::get_parameter), which the dispatcher
/// invokes uniformly after wire decoding. The routing operations have
/// default bodies returning [`BackendError::Unsupported`] for families
/// with no equivalent.
///
/// All calls are synchronous and blocking; the dispatcher never retries.
pub trait EffectBackend {
    /// Open the effect for a session, returning an exclusive handle.
    fn open(
        &mut self,
        session: &SessionContext,
        config: &AudioConfig,
    ) -> Result<EffectHandle, BackendError>;

    /// Release a handle obtained from [`open`](EffectBackend::open).
    fn close(&mut self, handle: EffectHandle) -> Result<(), BackendError>;

    /// Apply a decoded parameter block.
    fn set_parameter(&mut self, param: &ParamBlock) -> Result<(), BackendError>;

    /// Query the current value for a parameter tag.
    fn get_parameter(&mut self, tag: u32) -> Result<ParamBlock, BackendError>;

    /// Identity metadata for this effect.
    fn descriptor(&self) -> &EffectDescriptor;

    /// Route the effect to an output device.
    fn set_device(&mut self, _device: u32) -> Result<(), BackendError> {
        Err(BackendError::Unsupported)
    }

    /// Update stream volume (8.24 fixed-point left/right).
    fn set_volume(&mut self, _left: u32, _right: u32) -> Result<(), BackendError> {
        Err(BackendError::Unsupported)
    }

    /// Move the effect between offloaded and non-offloaded streams.
    fn set_offload(&mut self, _offload: OffloadParam) -> Result<(), BackendError> {
        Err(BackendError::Unsupported)
    }

    /// Mark this instance as first in the processing chain.
    fn set_first_priority(&mut self) -> Result<(), BackendError> {
        Err(BackendError::Unsupported)
    }
}
