/// Errors that can occur while decoding command payloads or encoding replies.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload ended before a required field.
    #[error("payload too short ({got} bytes, need {need})")]
    TooShort { need: usize, got: usize },

    /// The reply buffer cannot hold the encoded result.
    /// `required` is the capacity the caller should retry with.
    #[error("reply buffer too small ({capacity} bytes, need {required})")]
    InsufficientCapacity { required: usize, capacity: usize },

    /// The parameter key size is not the single 32-bit tag this layer accepts.
    #[error("invalid parameter key size {0} (expected 4)")]
    BadKeySize(u32),

    /// The declared key/value sizes point past the end of the payload.
    #[error("declared sizes exceed payload ({declared} > {available})")]
    SizeMismatch { declared: usize, available: usize },

    /// The configuration field mask contains unknown bits.
    #[error("unknown config field mask {0:#010x}")]
    BadFieldMask(u32),

    /// The configuration names a sample format this layer does not know.
    #[error("unknown sample format {0}")]
    BadSampleFormat(u32),
}

pub type Result<T> = std::result::Result<T, WireError>;
