use crate::buffer::{PayloadReader, Reply};
use crate::error::{Result, WireError};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default channel mask: front-left | front-right.
pub const CHANNEL_LAYOUT_STEREO: u32 = 0x3;

/// Default frame count per processing block.
pub const DEFAULT_FRAME_COUNT: u32 = 0x100;

/// Wire size of a non-empty set-config payload and of a get-config reply.
pub const CONFIG_WIRE_SIZE: usize = 20;

/// Field-mask bit: sample rate supplied by the caller.
pub const CONFIG_SAMPLE_RATE: u32 = 1 << 0;
/// Field-mask bit: channel mask supplied by the caller.
pub const CONFIG_CHANNEL_MASK: u32 = 1 << 1;
/// Field-mask bit: sample format supplied by the caller.
pub const CONFIG_FORMAT: u32 = 1 << 2;
/// Field-mask bit: frame count supplied by the caller.
pub const CONFIG_FRAME_COUNT: u32 = 1 << 3;

const CONFIG_ALL: u32 = CONFIG_SAMPLE_RATE | CONFIG_CHANNEL_MASK | CONFIG_FORMAT | CONFIG_FRAME_COUNT;

/// PCM sample format carried in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SampleFormat {
    /// 32-bit float samples.
    F32 = 0,
    /// 16-bit integer samples.
    I16 = 1,
    /// 24-bit integer samples.
    I24 = 2,
    /// 32-bit integer samples.
    I32 = 3,
}

impl SampleFormat {
    /// Parse the wire encoding of a sample format.
    pub fn from_raw(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(SampleFormat::F32),
            1 => Ok(SampleFormat::I16),
            2 => Ok(SampleFormat::I24),
            3 => Ok(SampleFormat::I32),
            other => Err(WireError::BadSampleFormat(other)),
        }
    }

    /// The wire encoding of this format.
    pub fn as_raw(self) -> u32 {
        self as u32
    }
}

/// Audio configuration of one effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channel_mask: u32,
    pub format: SampleFormat,
    pub frame_count: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channel_mask: CHANNEL_LAYOUT_STEREO,
            format: SampleFormat::F32,
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }
}

/// Decode a set-config payload, merging caller fields over the defaults.
///
/// Wire format (all integers little-endian):
/// ```text
/// ┌────────────┬─────────────┬──────────────┬──────────┬─────────────┐
/// │ Field mask │ Sample rate │ Channel mask │ Format   │ Frame count │
/// │ (4B)       │ (4B)        │ (4B)         │ (4B)     │ (4B)        │
/// └────────────┴─────────────┴──────────────┴──────────┴─────────────┘
/// ```
/// An empty payload means "all defaults". A non-empty payload carries all
/// five words; fields whose mask bit is clear take the default value.
pub fn decode_config(payload: &[u8]) -> Result<AudioConfig> {
    if payload.is_empty() {
        return Ok(AudioConfig::default());
    }
    if payload.len() > CONFIG_WIRE_SIZE {
        return Err(WireError::SizeMismatch {
            declared: payload.len(),
            available: CONFIG_WIRE_SIZE,
        });
    }

    let mut reader = PayloadReader::new(payload);
    let mask = reader.u32_le()?;
    if mask & !CONFIG_ALL != 0 {
        return Err(WireError::BadFieldMask(mask));
    }

    let sample_rate = reader.u32_le()?;
    let channel_mask = reader.u32_le()?;
    let format = reader.u32_le()?;
    let frame_count = reader.u32_le()?;

    let default = AudioConfig::default();
    let config = AudioConfig {
        sample_rate: if mask & CONFIG_SAMPLE_RATE != 0 {
            sample_rate
        } else {
            default.sample_rate
        },
        channel_mask: if mask & CONFIG_CHANNEL_MASK != 0 {
            channel_mask
        } else {
            default.channel_mask
        },
        format: if mask & CONFIG_FORMAT != 0 {
            SampleFormat::from_raw(format)?
        } else {
            default.format
        },
        frame_count: if mask & CONFIG_FRAME_COUNT != 0 {
            frame_count
        } else {
            default.frame_count
        },
    };
    tracing::trace!(?config, mask, "decoded configuration");

    Ok(config)
}

/// Encode a configuration into a reply buffer with a full field mask.
///
/// Size-checks before the first write; an undersized reply gets
/// [`WireError::InsufficientCapacity`] and no bytes.
pub fn encode_config(config: &AudioConfig, reply: &mut Reply<'_>) -> Result<usize> {
    reply.ensure_capacity(CONFIG_WIRE_SIZE)?;

    reply.put_u32_le(CONFIG_ALL)?;
    reply.put_u32_le(config.sample_rate)?;
    reply.put_u32_le(config.channel_mask)?;
    reply.put_u32_le(config.format.as_raw())?;
    reply.put_u32_le(config.frame_count)?;

    Ok(CONFIG_WIRE_SIZE)
}
