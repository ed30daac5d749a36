use fxbridge_wire::{StatusCode, WireError};

use crate::backend::BackendError;

/// Errors that can occur while dispatching a command.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Payload decoding or reply encoding failed.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// The command is not valid in the current lifecycle state.
    #[error("invalid {op} while {state}")]
    InvalidTransition {
        op: &'static str,
        state: &'static str,
    },

    /// The command code is outside the recognized set.
    #[error("unsupported command code {0:#x}")]
    UnsupportedCommand(u32),

    /// The backend offers no equivalent for the requested operation.
    #[error("operation not supported by backend")]
    UnsupportedByBackend,

    /// The backend failed with a status that is propagated verbatim.
    #[error("backend returned status {0}")]
    Backend(i32),
}

impl BridgeError {
    /// The integer status carried back across the legacy boundary.
    pub fn status(&self) -> i32 {
        match self {
            BridgeError::Wire(WireError::InsufficientCapacity { .. }) => {
                StatusCode::NotEnoughData.as_i32()
            }
            BridgeError::Wire(_) => StatusCode::BadValue.as_i32(),
            BridgeError::InvalidTransition { .. } => StatusCode::InvalidOperation.as_i32(),
            BridgeError::UnsupportedCommand(_) | BridgeError::UnsupportedByBackend => {
                StatusCode::Unsupported.as_i32()
            }
            BridgeError::Backend(status) => *status,
        }
    }
}

impl From<BackendError> for BridgeError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unsupported => BridgeError::UnsupportedByBackend,
            BackendError::Status(status) => BridgeError::Backend(status),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_fixed_statuses() {
        let malformed = BridgeError::Wire(WireError::TooShort { need: 12, got: 3 });
        assert_eq!(malformed.status(), StatusCode::BadValue.as_i32());

        let undersized = BridgeError::Wire(WireError::InsufficientCapacity {
            required: 32,
            capacity: 8,
        });
        assert_eq!(undersized.status(), StatusCode::NotEnoughData.as_i32());

        let transition = BridgeError::InvalidTransition {
            op: "enable",
            state: "ACTIVE",
        };
        assert_eq!(transition.status(), StatusCode::InvalidOperation.as_i32());

        assert_eq!(
            BridgeError::UnsupportedCommand(99).status(),
            StatusCode::Unsupported.as_i32()
        );
        assert_eq!(
            BridgeError::UnsupportedByBackend.status(),
            StatusCode::Unsupported.as_i32()
        );
    }

    #[test]
    fn backend_status_propagates_verbatim() {
        assert_eq!(BridgeError::Backend(-7).status(), -7);
        assert_eq!(
            BridgeError::from(BackendError::Status(-123)).status(),
            -123
        );
    }
}
