//! Top-level error type for the jogging console.

use crate::keyboard::TerminalError;
use crate::port::PortError;
use jog_common::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by session setup and the control loop.
///
/// Setup errors are unrecoverable: `main` logs them and exits non-zero
/// before the control loop starts. Per-keypress errors never reach this
/// type — invalid commands are reported and recovered locally.
#[derive(Debug, Error)]
pub enum JogError {
    /// Hardware port setup or write failure.
    #[error("port error: {0}")]
    Port(#[from] PortError),

    /// Terminal mode or input failure.
    #[error("terminal error: {0}")]
    Terminal(#[from] TerminalError),

    /// Configuration loading failure.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Signal-handler installation failure.
    #[error("signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}
