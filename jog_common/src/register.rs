//! Data-register lines and pulse patterns.
//!
//! The parallel-port data register drives three step/direction bit pairs,
//! one per axis. A pulse pattern is the ordered pair of byte values
//! latched alternately to produce one step of motion: the first phase
//! asserts the step line, the second releases it while the direction
//! line holds its level.

use bitflags::bitflags;
use static_assertions::const_assert_eq;

bitflags! {
    /// Step/direction lines on the data register, one pair per axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RegisterLines: u8 {
        /// X-axis step line.
        const X_STEP = 0b0000_0001;
        /// X-axis direction line.
        const X_DIR  = 0b0000_0010;
        /// Y-axis step line.
        const Y_STEP = 0b0000_0100;
        /// Y-axis direction line.
        const Y_DIR  = 0b0000_1000;
        /// Z-axis step line.
        const Z_STEP = 0b0001_0000;
        /// Z-axis direction line.
        const Z_DIR  = 0b0010_0000;
    }
}

/// Ordered pair of register bytes emitted alternately for one pulse cycle.
///
/// Every cycle latches `first` then `second`, in that order, each held
/// for the fixed phase duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulsePattern {
    /// First-phase byte.
    pub first: u8,
    /// Second-phase byte.
    pub second: u8,
}

impl PulsePattern {
    /// Build a pattern from the lines asserted in each phase.
    pub const fn from_lines(first: RegisterLines, second: RegisterLines) -> Self {
        Self {
            first: first.bits(),
            second: second.bits(),
        }
    }
}

/// Drive right along X, clockwise: (3,2).
pub const X_RIGHT: PulsePattern = PulsePattern::from_lines(
    RegisterLines::X_DIR.union(RegisterLines::X_STEP),
    RegisterLines::X_DIR,
);

/// Drive left along X, counter-clockwise: (1,0).
pub const X_LEFT: PulsePattern =
    PulsePattern::from_lines(RegisterLines::X_STEP, RegisterLines::empty());

/// Drive forward along Y, clockwise: (12,8).
pub const Y_FORWARD: PulsePattern = PulsePattern::from_lines(
    RegisterLines::Y_DIR.union(RegisterLines::Y_STEP),
    RegisterLines::Y_DIR,
);

/// Drive backward along Y, counter-clockwise: (4,0).
pub const Y_BACKWARD: PulsePattern =
    PulsePattern::from_lines(RegisterLines::Y_STEP, RegisterLines::empty());

/// Drive up along Z, clockwise: (16,0).
pub const Z_UP: PulsePattern =
    PulsePattern::from_lines(RegisterLines::Z_STEP, RegisterLines::empty());

/// Drive down along Z, counter-clockwise: (48,32).
pub const Z_DOWN: PulsePattern = PulsePattern::from_lines(
    RegisterLines::Z_DIR.union(RegisterLines::Z_STEP),
    RegisterLines::Z_DIR,
);

/// All-lines-released byte written by the safety reset.
pub const REGISTER_CLEAR: u8 = 0;

// The six lines fill exactly the low six bits of the data register.
const_assert_eq!(RegisterLines::all().bits(), 0b0011_1111);

// Documented byte values per direction.
const_assert_eq!(X_RIGHT.first, 3);
const_assert_eq!(X_RIGHT.second, 2);
const_assert_eq!(X_LEFT.first, 1);
const_assert_eq!(Y_FORWARD.first, 12);
const_assert_eq!(Y_FORWARD.second, 8);
const_assert_eq!(Y_BACKWARD.first, 4);
const_assert_eq!(Z_UP.first, 16);
const_assert_eq!(Z_DOWN.first, 48);
const_assert_eq!(Z_DOWN.second, 32);
