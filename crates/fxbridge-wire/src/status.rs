//! Integer status codes returned across the legacy command boundary.
//!
//! Values follow the POSIX errno convention the legacy callers expect:
//! zero for success, negated errno values for failures, and `i32::MIN`
//! for errors with no better classification.

/// Status code returned by `handle_command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StatusCode {
    /// Success.
    Ok = 0,
    /// Out of memory (-ENOMEM).
    NoMemory = -12,
    /// Malformed argument or payload (-EINVAL).
    BadValue = -22,
    /// Operation not valid in the current lifecycle state (-ENOSYS).
    InvalidOperation = -38,
    /// Reply buffer too small for the encoded result (-ENODATA).
    NotEnoughData = -61,
    /// Command or field has no backend equivalent (-EOPNOTSUPP).
    Unsupported = -95,
    /// Unclassified failure.
    Unknown = i32::MIN,
}

impl StatusCode {
    /// The raw integer carried back to the legacy caller.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable name for the status.
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NoMemory => "NO_MEMORY",
            StatusCode::BadValue => "BAD_VALUE",
            StatusCode::InvalidOperation => "INVALID_OPERATION",
            StatusCode::NotEnoughData => "NOT_ENOUGH_DATA",
            StatusCode::Unsupported => "UNSUPPORTED",
            StatusCode::Unknown => "UNKNOWN",
        }
    }
}
