//! Legacy command codes.
//!
//! The set is closed: these are the only codes the dispatcher recognizes.
//! Discriminants are fixed by the legacy ABI and must not change.

/// Command code selecting which control operation a raw command invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CommandCode {
    Init = 0,
    SetConfig = 1,
    Reset = 2,
    Enable = 3,
    Disable = 4,
    SetParam = 5,
    GetParam = 8,
    SetDevice = 9,
    SetVolume = 10,
    GetConfig = 14,
    Offload = 20,
    FirstPriority = 0x10000,
}

impl CommandCode {
    /// Map a raw code to a command, or `None` for anything outside the set.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(CommandCode::Init),
            1 => Some(CommandCode::SetConfig),
            2 => Some(CommandCode::Reset),
            3 => Some(CommandCode::Enable),
            4 => Some(CommandCode::Disable),
            5 => Some(CommandCode::SetParam),
            8 => Some(CommandCode::GetParam),
            9 => Some(CommandCode::SetDevice),
            10 => Some(CommandCode::SetVolume),
            14 => Some(CommandCode::GetConfig),
            20 => Some(CommandCode::Offload),
            0x10000 => Some(CommandCode::FirstPriority),
            _ => None,
        }
    }

    /// Returns a human-readable name for the command.
    pub fn name(self) -> &'static str {
        match self {
            CommandCode::Init => "INIT",
            CommandCode::SetConfig => "SET_CONFIG",
            CommandCode::Reset => "RESET",
            CommandCode::Enable => "ENABLE",
            CommandCode::Disable => "DISABLE",
            CommandCode::SetParam => "SET_PARAM",
            CommandCode::GetParam => "GET_PARAM",
            CommandCode::SetDevice => "SET_DEVICE",
            CommandCode::SetVolume => "SET_VOLUME",
            CommandCode::GetConfig => "GET_CONFIG",
            CommandCode::Offload => "OFFLOAD",
            CommandCode::FirstPriority => "FIRST_PRIORITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_roundtrip() {
        for code in [
            CommandCode::Init,
            CommandCode::SetConfig,
            CommandCode::Reset,
            CommandCode::Enable,
            CommandCode::Disable,
            CommandCode::SetParam,
            CommandCode::GetParam,
            CommandCode::SetDevice,
            CommandCode::SetVolume,
            CommandCode::GetConfig,
            CommandCode::Offload,
            CommandCode::FirstPriority,
        ] {
            assert_eq!(CommandCode::from_raw(code as u32), Some(code));
        }
    }

    #[test]
    fn codes_outside_the_set_are_unknown() {
        for raw in [6, 7, 11, 12, 13, 15, 19, 21, 0xFFFF, 0x10001, u32::MAX] {
            assert_eq!(CommandCode::from_raw(raw), None);
        }
    }
}
