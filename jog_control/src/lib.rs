//! # Jog Control Library
//!
//! Interactive keyboard jogging console for a parallel-port CNC stage.
//! One keypress drives one axis direction for a fixed pulse count; every
//! move is followed by an unconditional safety reset so no direction line
//! stays asserted while the loop is idle.
//!
//! ## Architecture
//!
//! - [`port`] — narrow register-port abstraction (hardware + simulation)
//! - [`keyboard`] — raw terminal mode and the one-byte lookahead poller
//! - [`driver`] — timed two-phase pulse sequences and the safety reset
//! - [`command`] — keypress-to-command mapping
//! - [`session`] — the Idle/Executing/ShuttingDown control loop
//! - [`menu`] — operator help text
//!
//! Single-threaded and cooperative: the only suspension points are the
//! fixed-duration holds inside the driver and the blocking read after a
//! successful poll.

pub mod command;
pub mod driver;
pub mod error;
pub mod keyboard;
pub mod menu;
pub mod port;
pub mod session;
