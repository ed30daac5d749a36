//! Bounds-checked wire codecs for the legacy effect-command ABI.
//!
//! The legacy ABI hands this layer raw `(pointer, size)` pairs: a command
//! payload of declared length and a reply buffer of declared capacity. This
//! crate replaces those with checked views:
//! - [`PayloadReader`] validates every read against the declared length
//! - [`Reply`] makes writes past the declared capacity impossible
//!
//! On top of the views sit the two payload codecs: tagged parameter blocks
//! ([`param`]) and the audio configuration with field-mask defaulting
//! ([`config`]).
//!
//! One malformed payload never reads or writes out of bounds.

pub mod buffer;
pub mod config;
pub mod error;
pub mod param;
pub mod status;

pub use buffer::{PayloadReader, Reply};
pub use config::{
    decode_config, encode_config, AudioConfig, SampleFormat, CHANNEL_LAYOUT_STEREO,
    CONFIG_CHANNEL_MASK, CONFIG_FORMAT, CONFIG_FRAME_COUNT, CONFIG_SAMPLE_RATE, CONFIG_WIRE_SIZE,
    DEFAULT_FRAME_COUNT, DEFAULT_SAMPLE_RATE,
};
pub use error::{Result, WireError};
pub use param::{decode_param, encode_param, ParamBlock, PARAM_HEADER_SIZE, PARAM_KEY_SIZE};
pub use status::StatusCode;
