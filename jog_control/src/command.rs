//! Keypress-to-command mapping.
//!
//! Fixed, case-sensitive single-character table. Anything unmapped
//! resolves to an invalid command that is reported to the operator and
//! touches no hardware.

use jog_common::motion::JogDirection;

/// Action resolved from one polled keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JogCommand {
    /// Drive one axis direction for the fixed distance, then reset.
    Jog(JogDirection),
    /// Reset, release the hardware, restore the keyboard, exit.
    Quit,
    /// Unmapped keypress; carries the offending byte for the report.
    Invalid(u8),
}

impl JogCommand {
    /// Resolve a polled byte to exactly one command.
    pub const fn from_key(key: u8) -> Self {
        match key {
            b'r' => Self::Jog(JogDirection::RightX),
            b'l' => Self::Jog(JogDirection::LeftX),
            b'f' => Self::Jog(JogDirection::ForwardY),
            b'b' => Self::Jog(JogDirection::BackwardY),
            b'u' => Self::Jog(JogDirection::UpZ),
            b'd' => Self::Jog(JogDirection::DownZ),
            b'q' => Self::Quit,
            other => Self::Invalid(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keys_map_to_their_axis_actions() {
        assert_eq!(
            JogCommand::from_key(b'r'),
            JogCommand::Jog(JogDirection::RightX)
        );
        assert_eq!(
            JogCommand::from_key(b'l'),
            JogCommand::Jog(JogDirection::LeftX)
        );
        assert_eq!(
            JogCommand::from_key(b'f'),
            JogCommand::Jog(JogDirection::ForwardY)
        );
        assert_eq!(
            JogCommand::from_key(b'b'),
            JogCommand::Jog(JogDirection::BackwardY)
        );
        assert_eq!(
            JogCommand::from_key(b'u'),
            JogCommand::Jog(JogDirection::UpZ)
        );
        assert_eq!(
            JogCommand::from_key(b'd'),
            JogCommand::Jog(JogDirection::DownZ)
        );
    }

    #[test]
    fn quit_key_maps_to_quit() {
        assert_eq!(JogCommand::from_key(b'q'), JogCommand::Quit);
    }

    #[test]
    fn mapping_is_case_sensitive() {
        assert_eq!(JogCommand::from_key(b'R'), JogCommand::Invalid(b'R'));
        assert_eq!(JogCommand::from_key(b'Q'), JogCommand::Invalid(b'Q'));
    }

    #[test]
    fn every_unmapped_byte_is_invalid() {
        let mapped = [b'r', b'l', b'f', b'b', b'u', b'd', b'q'];
        for byte in 0..=u8::MAX {
            let command = JogCommand::from_key(byte);
            if mapped.contains(&byte) {
                assert_ne!(command, JogCommand::Invalid(byte));
            } else {
                assert_eq!(command, JogCommand::Invalid(byte));
            }
        }
    }
}
