//! Two-phase pulse driver and safety reset.
//!
//! A jog emits a fixed-length alternating byte sequence, each value held
//! for the phase duration. The safety reset zeroes the register ten times
//! with fixed pacing so no direction line stays asserted while the loop
//! is idle or the process is exiting.

use crate::port::{PortError, RegisterPort};
use jog_common::consts::{JOG_DISTANCE, PHASE_HOLD_US, RESET_HOLD_US, RESET_WRITES};
use jog_common::motion::JogDirection;
use jog_common::register::REGISTER_CLEAR;
use std::thread;
use std::time::Duration;

/// Timed pulse-sequence driver.
///
/// Holds the fixed pulse timing and jog distance. Production code uses
/// [`AxisDriver::new`]; tests inject their own timing via
/// [`AxisDriver::with_timing`].
pub struct AxisDriver {
    phase_hold: Duration,
    reset_hold: Duration,
    distance: u32,
}

impl Default for AxisDriver {
    fn default() -> Self {
        Self {
            phase_hold: Duration::from_micros(PHASE_HOLD_US),
            reset_hold: Duration::from_micros(RESET_HOLD_US),
            distance: JOG_DISTANCE,
        }
    }
}

impl AxisDriver {
    /// Driver with the fixed production timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver with explicit timing and distance.
    pub fn with_timing(phase_hold: Duration, reset_hold: Duration, distance: u32) -> Self {
        Self {
            phase_hold,
            reset_hold,
            distance,
        }
    }

    /// Pulse count per jog.
    #[inline]
    pub const fn distance(&self) -> u32 {
        self.distance
    }

    /// Run one complete jog: exactly `2 × distance` register writes,
    /// strictly alternating the direction's two pattern bytes, each
    /// followed by the phase hold. Runs to completion once started — the
    /// keyboard is not polled mid-move. The safety reset always follows.
    pub fn jog(
        &self,
        port: &mut dyn RegisterPort,
        direction: JogDirection,
    ) -> Result<(), PortError> {
        let pattern = direction.pattern();
        for _ in 0..self.distance {
            port.write(pattern.first)?;
            thread::sleep(self.phase_hold);
            port.write(pattern.second)?;
            thread::sleep(self.phase_hold);
        }
        self.reset(port)
    }

    /// Safety reset: latch zero [`RESET_WRITES`] times with fixed pacing.
    ///
    /// Invoked unconditionally at control-loop start, after every
    /// completed move and before shutdown.
    pub fn reset(&self, port: &mut dyn RegisterPort) -> Result<(), PortError> {
        for _ in 0..RESET_WRITES {
            port.write(REGISTER_CLEAR)?;
            thread::sleep(self.reset_hold);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jog_common::register;

    struct RecordingPort {
        writes: Vec<u8>,
    }

    impl RecordingPort {
        fn new() -> Self {
            Self { writes: Vec::new() }
        }
    }

    impl RegisterPort for RecordingPort {
        fn write(&mut self, value: u8) -> Result<(), PortError> {
            self.writes.push(value);
            Ok(())
        }
    }

    fn fast_driver(distance: u32) -> AxisDriver {
        AxisDriver::with_timing(Duration::ZERO, Duration::ZERO, distance)
    }

    #[test]
    fn jog_emits_two_writes_per_step_alternating() {
        let mut port = RecordingPort::new();
        let driver = fast_driver(4);
        driver.jog(&mut port, JogDirection::RightX).unwrap();

        let pulses = &port.writes[..8];
        assert_eq!(pulses, &[3, 2, 3, 2, 3, 2, 3, 2]);
    }

    #[test]
    fn jog_always_ends_with_a_reset() {
        let mut port = RecordingPort::new();
        let driver = fast_driver(2);
        driver.jog(&mut port, JogDirection::DownZ).unwrap();

        assert_eq!(port.writes.len(), 2 * 2 + RESET_WRITES as usize);
        assert_eq!(&port.writes[..4], &[48, 32, 48, 32]);
        assert!(port.writes[4..].iter().all(|&b| b == REGISTER_CLEAR));
    }

    #[test]
    fn reset_emits_ten_zeros() {
        let mut port = RecordingPort::new();
        fast_driver(1).reset(&mut port).unwrap();
        assert_eq!(port.writes, vec![0; RESET_WRITES as usize]);
    }

    #[test]
    fn every_direction_drives_its_pattern() {
        for direction in JogDirection::ALL {
            let mut port = RecordingPort::new();
            fast_driver(1).jog(&mut port, direction).unwrap();
            let pattern = direction.pattern();
            assert_eq!(port.writes[0], pattern.first, "{direction:?}");
            assert_eq!(port.writes[1], pattern.second, "{direction:?}");
        }
    }

    #[test]
    fn forward_y_drives_the_up_pattern() {
        // Installed wiring: Y forward runs through the Z bit pair.
        let mut port = RecordingPort::new();
        fast_driver(1)
            .jog(&mut port, JogDirection::ForwardY)
            .unwrap();
        assert_eq!(port.writes[0], register::Z_UP.first);
        assert_eq!(port.writes[1], register::Z_UP.second);
    }

    #[test]
    fn default_driver_uses_the_fixed_distance() {
        assert_eq!(AxisDriver::new().distance(), JOG_DISTANCE);
    }
}
