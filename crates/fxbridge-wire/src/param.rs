use bytes::Bytes;

use crate::buffer::{PayloadReader, Reply};
use crate::error::{Result, WireError};

/// Parameter header: status (4) + key size (4) + value size (4) = 12 bytes.
pub const PARAM_HEADER_SIZE: usize = 12;

/// Key size this layer accepts: one 32-bit tag.
pub const PARAM_KEY_SIZE: usize = 4;

/// A tagged key/value unit carried inside set/get-parameter payloads.
///
/// Wire format:
/// ```text
/// ┌──────────────┬────────────┬────────────┬───────────────┬───────────────┐
/// │ Status (4B)  │ Key size   │ Value size │ Key            │ Value         │
/// │ i32 LE       │ (4B LE)    │ (4B LE)    │ (padded to 4B) │ (vsize bytes) │
/// └──────────────┴────────────┴────────────┴───────────────┴───────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamBlock {
    /// The 32-bit parameter tag.
    pub tag: u32,
    /// The opaque parameter value.
    pub value: Bytes,
}

impl ParamBlock {
    /// Create a new parameter block.
    pub fn new(tag: u32, value: impl Into<Bytes>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// The total wire size of this block (header + padded key + value).
    pub fn encoded_len(&self) -> usize {
        PARAM_HEADER_SIZE + pad4(PARAM_KEY_SIZE) + self.value.len()
    }
}

/// Round up to the next 4-byte boundary, as the legacy ABI pads keys.
fn pad4(n: usize) -> usize {
    (n + 3) & !3
}

/// Decode a parameter block from a command payload.
///
/// Validates the header length, the key size, and that the declared sizes
/// fit inside the payload before reading any field. The status word in the
/// header is caller-owned scratch and is ignored.
pub fn decode_param(payload: &[u8]) -> Result<ParamBlock> {
    let mut reader = PayloadReader::new(payload);
    let _status = reader.i32_le()?;
    let psize = reader.u32_le()?;
    let vsize = reader.u32_le()?;

    if psize as usize != PARAM_KEY_SIZE {
        return Err(WireError::BadKeySize(psize));
    }

    let declared = PARAM_HEADER_SIZE + pad4(psize as usize) + vsize as usize;
    if declared > payload.len() {
        return Err(WireError::SizeMismatch {
            declared,
            available: payload.len(),
        });
    }

    let tag = reader.u32_le()?;
    let value = Bytes::copy_from_slice(reader.take(vsize as usize)?);
    tracing::trace!(tag, vsize, "decoded parameter block");

    Ok(ParamBlock { tag, value })
}

/// Encode a parameter block into a reply buffer.
///
/// Computes the required size first; if the reply capacity is too small,
/// returns [`WireError::InsufficientCapacity`] carrying the required size
/// and commits no bytes. On success returns the number of bytes written.
pub fn encode_param(block: &ParamBlock, reply: &mut Reply<'_>) -> Result<usize> {
    let required = block.encoded_len();
    reply.ensure_capacity(required)?;

    reply.put_i32_le(0)?;
    reply.put_u32_le(PARAM_KEY_SIZE as u32)?;
    reply.put_u32_le(block.value.len() as u32)?;
    reply.put_u32_le(block.tag)?;
    reply.put_slice(&block.value)?;

    Ok(required)
}
