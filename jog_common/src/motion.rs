//! Axis and jog-direction types.
//!
//! `JogDirection` is the unit of operator intent: one direction, one
//! fixed-length pulse sequence. The direction→pattern mapping lives here
//! so it can be checked without hardware.

use crate::register::{self, PulsePattern};
use std::fmt;

/// Machine axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::Z => write!(f, "Z"),
        }
    }
}

/// Rotation sense encoded by which bit pair a pulse pattern asserts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Clockwise.
    Cw,
    /// Counter-clockwise.
    Ccw,
}

/// One of the six directions an operator can jog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JogDirection {
    /// Right along X.
    RightX,
    /// Left along X.
    LeftX,
    /// Forward along Y.
    ForwardY,
    /// Backward along Y.
    BackwardY,
    /// Up along Z.
    UpZ,
    /// Down along Z.
    DownZ,
}

impl JogDirection {
    /// All six directions, menu order.
    pub const ALL: [Self; 6] = [
        Self::RightX,
        Self::LeftX,
        Self::ForwardY,
        Self::BackwardY,
        Self::UpZ,
        Self::DownZ,
    ];

    /// Axis this direction moves.
    pub const fn axis(self) -> Axis {
        match self {
            Self::RightX | Self::LeftX => Axis::X,
            Self::ForwardY | Self::BackwardY => Axis::Y,
            Self::UpZ | Self::DownZ => Axis::Z,
        }
    }

    /// Rotation sense of this direction's pattern.
    pub const fn sense(self) -> Sense {
        match self {
            Self::RightX | Self::ForwardY | Self::UpZ => Sense::Cw,
            Self::LeftX | Self::BackwardY | Self::DownZ => Sense::Ccw,
        }
    }

    /// Pulse pattern latched for this direction.
    ///
    /// The Y axis on this machine is wired through the Z bit pair, so the
    /// Y commands drive the Z patterns. The nominal Y patterns
    /// ([`register::Y_FORWARD`], [`register::Y_BACKWARD`]) stay in the
    /// table and the operator menu's pin chart until the bench wiring is
    /// re-documented.
    pub const fn pattern(self) -> PulsePattern {
        match self {
            Self::RightX => register::X_RIGHT,
            Self::LeftX => register::X_LEFT,
            Self::ForwardY => register::Z_UP,
            Self::BackwardY => register::Z_DOWN,
            Self::UpZ => register::Z_UP,
            Self::DownZ => register::Z_DOWN,
        }
    }

    /// Short lowercase label for progress lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::RightX => "right",
            Self::LeftX => "left",
            Self::ForwardY => "forward",
            Self::BackwardY => "backward",
            Self::UpZ => "up",
            Self::DownZ => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_assignment() {
        assert_eq!(JogDirection::RightX.axis(), Axis::X);
        assert_eq!(JogDirection::LeftX.axis(), Axis::X);
        assert_eq!(JogDirection::ForwardY.axis(), Axis::Y);
        assert_eq!(JogDirection::BackwardY.axis(), Axis::Y);
        assert_eq!(JogDirection::UpZ.axis(), Axis::Z);
        assert_eq!(JogDirection::DownZ.axis(), Axis::Z);
    }

    #[test]
    fn x_and_z_drive_their_own_patterns() {
        assert_eq!(JogDirection::RightX.pattern(), register::X_RIGHT);
        assert_eq!(JogDirection::LeftX.pattern(), register::X_LEFT);
        assert_eq!(JogDirection::UpZ.pattern(), register::Z_UP);
        assert_eq!(JogDirection::DownZ.pattern(), register::Z_DOWN);
    }

    #[test]
    fn y_commands_drive_the_z_bit_pair() {
        // Installed wiring routes Y motion through the Z patterns.
        assert_eq!(JogDirection::ForwardY.pattern(), register::Z_UP);
        assert_eq!(JogDirection::BackwardY.pattern(), register::Z_DOWN);
    }

    #[test]
    fn senses_pair_up_per_axis() {
        assert_eq!(JogDirection::RightX.sense(), Sense::Cw);
        assert_eq!(JogDirection::LeftX.sense(), Sense::Ccw);
        assert_eq!(JogDirection::ForwardY.sense(), Sense::Cw);
        assert_eq!(JogDirection::BackwardY.sense(), Sense::Ccw);
        assert_eq!(JogDirection::UpZ.sense(), Sense::Cw);
        assert_eq!(JogDirection::DownZ.sense(), Sense::Ccw);
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::X.to_string(), "X");
        assert_eq!(Axis::Y.to_string(), "Y");
        assert_eq!(Axis::Z.to_string(), "Z");
    }
}
