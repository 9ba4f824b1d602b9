//! Hardware register port abstraction.
//!
//! The jogging core drives motion through this narrow interface. The
//! production implementation latches bytes onto the parallel-port data
//! register; the simulation implementation records them for bench-less
//! runs and tests.

pub mod parallel;
pub mod sim;

pub use parallel::ParallelPort;
pub use sim::SimulatedPort;

use thiserror::Error;

/// Error types for port setup and writes.
#[derive(Debug, Error)]
pub enum PortError {
    /// I/O privilege elevation failed (requires root).
    #[error("{call} failed: {source}")]
    Privilege {
        /// The failing syscall.
        call: &'static str,
        /// OS error.
        source: std::io::Error,
    },

    /// Device node could not be opened.
    #[error("cannot open {device}: {source}")]
    DeviceUnavailable {
        /// Device node path.
        device: String,
        /// OS error.
        source: std::io::Error,
    },

    /// Raw port I/O is not available on this architecture.
    #[error("raw port I/O is not supported on this architecture")]
    Unsupported,
}

/// Narrow interface to the hardware output register.
///
/// One operation: latch a byte. No read-back. Production implementations
/// perform the privileged port write; test implementations record the
/// write sequence for assertion.
pub trait RegisterPort {
    /// Latch `value` onto the output register.
    fn write(&mut self, value: u8) -> Result<(), PortError>;
}
