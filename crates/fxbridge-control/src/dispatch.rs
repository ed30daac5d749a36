//! Command dispatcher: the sole entry point of the bridge.

use tracing::{debug, warn};

use fxbridge_wire::{
    decode_param, encode_config, encode_param, AudioConfig, ParamBlock, PayloadReader, Reply,
    StatusCode, WireError, PARAM_KEY_SIZE,
};

use crate::backend::{EffectBackend, EffectDescriptor, EffectHandle, OffloadParam, SessionContext};
use crate::command::CommandCode;
use crate::config::ConfigManager;
use crate::error::{BridgeError, Result};
use crate::state::{Lifecycle, StateController};

/// Size of the i32 acknowledgement written by the mutating commands.
const ACK_SIZE: usize = 4;

/// Wire size of the offload payload: is_offload (4) + io_handle (4).
const OFFLOAD_SIZE: usize = 8;

/// Translates legacy binary commands into typed backend calls.
///
/// One instance controls one effect; the caller serializes invocations.
/// Command and reply buffers are borrowed for the duration of a single
/// [`handle_command`](EffectBridge::handle_command) call and never retained.
/// The backend handle obtained on init is closed when the bridge drops.
pub struct EffectBridge<B: EffectBackend> {
    backend: B,
    descriptor: EffectDescriptor,
    config: ConfigManager,
    state: StateController,
    handle: Option<EffectHandle>,
}

impl<B: EffectBackend> EffectBridge<B> {
    /// Create a bridge for one effect instance.
    pub fn new(backend: B, session: SessionContext) -> Self {
        let descriptor = backend.descriptor().clone();
        Self {
            backend,
            descriptor,
            config: ConfigManager::new(session),
            state: StateController::new(),
            handle: None,
        }
    }

    /// Identity metadata of the controlled effect.
    pub fn descriptor(&self) -> &EffectDescriptor {
        &self.descriptor
    }

    /// The session identity this instance is scoped to.
    pub fn session(&self) -> &SessionContext {
        self.config.session()
    }

    /// The current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.state.state()
    }

    /// The audio configuration currently in effect.
    pub fn current_config(&self) -> AudioConfig {
        self.config.current()
    }

    /// Dispatch one raw command.
    ///
    /// Looks up `raw_code` in the closed command set; unrecognized codes
    /// return [`StatusCode::Unsupported`] with the reply untouched. All
    /// payload and capacity validation happens before any state or backend
    /// mutation, so a failed command has no side effects.
    ///
    /// On an undersized reply the returned status is
    /// [`StatusCode::NotEnoughData`] and `reply.len()` reports the capacity
    /// a retry needs; the reply bytes stay untouched.
    pub fn handle_command(&mut self, raw_code: u32, cmd: &[u8], reply: &mut Reply<'_>) -> i32 {
        let result = match CommandCode::from_raw(raw_code) {
            Some(code) => {
                debug!(command = code.name(), len = cmd.len(), "dispatching command");
                self.dispatch(code, cmd, reply)
            }
            None => Err(BridgeError::UnsupportedCommand(raw_code)),
        };

        match result {
            Ok(()) => StatusCode::Ok.as_i32(),
            Err(err) => {
                if let BridgeError::Wire(WireError::InsufficientCapacity { required, .. }) = &err {
                    reply.set_required(*required);
                }
                warn!(code = raw_code, error = %err, "command rejected");
                err.status()
            }
        }
    }

    fn dispatch(&mut self, code: CommandCode, cmd: &[u8], reply: &mut Reply<'_>) -> Result<()> {
        match code {
            CommandCode::Init => self.handle_init(reply),
            CommandCode::SetConfig => self.handle_set_config(cmd, reply),
            CommandCode::GetConfig => self.handle_get_config(reply),
            CommandCode::Reset => self.handle_reset(),
            CommandCode::Enable => self.handle_enable(reply),
            CommandCode::Disable => self.handle_disable(reply),
            CommandCode::SetParam => self.handle_set_param(cmd, reply),
            CommandCode::GetParam => self.handle_get_param(cmd, reply),
            CommandCode::SetDevice => self.handle_set_device(cmd),
            CommandCode::SetVolume => self.handle_set_volume(cmd),
            CommandCode::Offload => self.handle_set_offload(cmd, reply),
            CommandCode::FirstPriority => self.handle_first_priority(),
        }
    }

    /// Opens the backend with the default configuration. Valid exactly once.
    fn handle_init(&mut self, reply: &mut Reply<'_>) -> Result<()> {
        self.state.expect(Lifecycle::Uninitialized, "init")?;
        reply.ensure_capacity(ACK_SIZE)?;

        let handle = self
            .backend
            .open(self.config.session(), &AudioConfig::default())?;
        self.handle = Some(handle);
        self.state.init()?;

        reply.put_i32_le(0)?;
        Ok(())
    }

    fn handle_set_config(&mut self, cmd: &[u8], reply: &mut Reply<'_>) -> Result<()> {
        reply.ensure_capacity(ACK_SIZE)?;
        let merged = self.config.apply(cmd)?;
        debug!(?merged, "configuration updated");
        reply.put_i32_le(0)?;
        Ok(())
    }

    fn handle_get_config(&mut self, reply: &mut Reply<'_>) -> Result<()> {
        encode_config(&self.config.current(), reply)?;
        Ok(())
    }

    /// Restores the default configuration; the backend handle stays open.
    fn handle_reset(&mut self) -> Result<()> {
        self.state.reset()?;
        self.config.reset();
        Ok(())
    }

    fn handle_enable(&mut self, reply: &mut Reply<'_>) -> Result<()> {
        reply.ensure_capacity(ACK_SIZE)?;
        self.state.enable()?;
        reply.put_i32_le(0)?;
        Ok(())
    }

    fn handle_disable(&mut self, reply: &mut Reply<'_>) -> Result<()> {
        reply.ensure_capacity(ACK_SIZE)?;
        self.state.disable()?;
        reply.put_i32_le(0)?;
        Ok(())
    }

    fn handle_set_param(&mut self, cmd: &[u8], reply: &mut Reply<'_>) -> Result<()> {
        reply.ensure_capacity(ACK_SIZE)?;
        let block = decode_param(cmd)?;
        self.backend.set_parameter(&block)?;
        reply.put_i32_le(0)?;
        Ok(())
    }

    /// Decodes the requested tag, queries the backend, and encodes the full
    /// parameter block into the reply.
    fn handle_get_param(&mut self, cmd: &[u8], reply: &mut Reply<'_>) -> Result<()> {
        let mut reader = PayloadReader::new(cmd);
        let _status = reader.i32_le()?;
        let psize = reader.u32_le()?;
        // The request's declared value size is advisory; the reply capacity
        // is the binding limit.
        let _vsize = reader.u32_le()?;
        if psize as usize != PARAM_KEY_SIZE {
            return Err(WireError::BadKeySize(psize).into());
        }
        let tag = reader.u32_le()?;

        let block: ParamBlock = self.backend.get_parameter(tag)?;
        encode_param(&block, reply)?;
        Ok(())
    }

    fn handle_set_device(&mut self, cmd: &[u8]) -> Result<()> {
        let device = PayloadReader::new(cmd).u32_le()?;
        self.backend.set_device(device)?;
        Ok(())
    }

    fn handle_set_volume(&mut self, cmd: &[u8]) -> Result<()> {
        let mut reader = PayloadReader::new(cmd);
        let left = reader.u32_le()?;
        let right = reader.u32_le()?;
        self.backend.set_volume(left, right)?;
        Ok(())
    }

    fn handle_set_offload(&mut self, cmd: &[u8], reply: &mut Reply<'_>) -> Result<()> {
        reply.ensure_capacity(ACK_SIZE)?;
        if cmd.len() < OFFLOAD_SIZE {
            return Err(WireError::TooShort {
                need: OFFLOAD_SIZE,
                got: cmd.len(),
            }
            .into());
        }
        let mut reader = PayloadReader::new(cmd);
        let is_offload = reader.u32_le()? != 0;
        let io_handle = reader.i32_le()?;
        self.backend.set_offload(OffloadParam {
            is_offload,
            io_handle,
        })?;
        reply.put_i32_le(0)?;
        Ok(())
    }

    fn handle_first_priority(&mut self) -> Result<()> {
        self.backend.set_first_priority()?;
        Ok(())
    }
}

impl<B: EffectBackend> Drop for EffectBridge<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(err) = self.backend.close(handle) {
                warn!(error = %err, "failed closing effect handle");
            }
        }
    }
}
