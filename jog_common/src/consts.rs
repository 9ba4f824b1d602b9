//! System-wide constants for the jogging workspace.
//!
//! Single source of truth for port defaults and pulse timing.
//! Imported by all crates — no duplication permitted.

/// Default parallel-port base address (standard on-board port).
///
/// Add-on PCMCIA cards report a different address (e.g. 0x5010); override
/// via `jog.toml` in that case.
pub const DEFAULT_BASE_ADDRESS: u16 = 0x378;

/// Default parallel-port device node, held open as the exclusivity handle.
pub const DEFAULT_PARPORT_DEVICE: &str = "/dev/lp0";

/// Parallel-port interrupt line (reported at startup, not serviced).
pub const PARPORT_IRQ: u8 = 5;

/// Number of consecutive I/O ports granted by `ioperm` from the base
/// address (covers the data, status and control registers).
pub const PARPORT_SPAN: u16 = 5;

/// Hold time for each pulse phase [µs].
pub const PHASE_HOLD_US: u64 = 500;

/// Fixed pulse count for one jog command.
pub const JOG_DISTANCE: u32 = 500;

/// Number of zero writes in one safety reset.
pub const RESET_WRITES: u32 = 10;

/// Pacing between safety-reset writes [µs].
pub const RESET_HOLD_US: u64 = 500;
