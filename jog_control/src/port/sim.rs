//! Simulation backend: records writes instead of touching hardware.
//!
//! Mirrors the production port's observable behavior for bench-less
//! operation (`--simulate`). No privileges required.

use super::{PortError, RegisterPort};
use tracing::trace;

/// Register port that logs writes and tracks the last latched value.
#[derive(Debug, Default)]
pub struct SimulatedPort {
    last_value: u8,
    writes: u64,
}

impl SimulatedPort {
    /// New simulated port with a cleared register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last byte latched.
    #[inline]
    pub const fn last_value(&self) -> u8 {
        self.last_value
    }

    /// Total writes since startup.
    #[inline]
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl RegisterPort for SimulatedPort {
    fn write(&mut self, value: u8) -> Result<(), PortError> {
        self.last_value = value;
        self.writes += 1;
        trace!(value, "register write (simulated)");
        Ok(())
    }
}
