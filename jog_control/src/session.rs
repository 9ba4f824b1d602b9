//! Top-level jogging session and control loop.
//!
//! The session owns the register port and the keyboard for its entire
//! lifetime — no other component holds a reference to them. The loop
//! never polls while a dispatch is executing; quit and the external
//! shutdown flag are honored only between dispatches.

use crate::command::JogCommand;
use crate::driver::AxisDriver;
use crate::error::JogError;
use crate::keyboard::{InputSource, KeyboardPoller};
use crate::port::RegisterPort;
use jog_common::motion::JogDirection;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Control-loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Polling for the next keypress.
    Idle,
    /// A dispatch is running to completion.
    Executing,
    /// Quit observed; reset and release in progress. Terminal.
    ShuttingDown,
}

/// Interactive jogging session.
pub struct JogSession<P: RegisterPort, S: InputSource> {
    port: P,
    keyboard: KeyboardPoller<S>,
    driver: AxisDriver,
    state: SessionState,
    running: Arc<AtomicBool>,
}

impl<P: RegisterPort, S: InputSource> JogSession<P, S> {
    /// New session in the `Idle` state.
    ///
    /// `running` is cleared by the signal handler; the loop leaves at the
    /// next poll so the register and terminal are still torn down
    /// cleanly on an outside termination request.
    pub fn new(
        port: P,
        keyboard: KeyboardPoller<S>,
        driver: AxisDriver,
        running: Arc<AtomicBool>,
    ) -> Self {
        Self {
            port,
            keyboard,
            driver,
            state: SessionState::Idle,
            running,
        }
    }

    /// Current loop state.
    #[inline]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The owned register port (tests assert on recorded writes).
    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Run the command-to-motion loop until quit.
    ///
    /// The register is zeroed before the first poll, after every move
    /// (inside the driver) and again before returning. Dropping the
    /// session afterwards releases the port handle and restores the
    /// terminal mode.
    pub fn run(&mut self) -> Result<(), JogError> {
        self.driver.reset(&mut self.port)?;
        info!("jogging loop started");

        while self.state != SessionState::ShuttingDown {
            if !self.running.load(Ordering::SeqCst) {
                info!("shutdown signal observed, leaving jogging loop");
                self.state = SessionState::ShuttingDown;
                break;
            }
            if !self.keyboard.poll() {
                continue;
            }
            let key = self.keyboard.read_char()?;
            self.state = SessionState::Executing;
            self.dispatch(key)?;
            if self.state == SessionState::Executing {
                self.state = SessionState::Idle;
            }
        }

        self.driver.reset(&mut self.port)?;
        info!("output register cleared for shutdown");
        Ok(())
    }

    /// Process one keypress to completion.
    fn dispatch(&mut self, key: u8) -> Result<(), JogError> {
        match JogCommand::from_key(key) {
            JogCommand::Jog(direction) => self.jog(direction),
            JogCommand::Quit => {
                info!("quit command received");
                self.state = SessionState::ShuttingDown;
                Ok(())
            }
            JogCommand::Invalid(byte) => {
                warn!(
                    key = %char::from(byte).escape_default(),
                    code = byte,
                    "invalid command",
                );
                Ok(())
            }
        }
    }

    /// One axis move: full pulse sequence plus the trailing reset.
    fn jog(&mut self, direction: JogDirection) -> Result<(), JogError> {
        let pattern = direction.pattern();
        info!(
            axis = %direction.axis(),
            direction = direction.label(),
            first = pattern.first,
            second = pattern.second,
            steps = self.driver.distance(),
            "jogging",
        );
        self.driver.jog(&mut self.port, direction)?;
        info!(
            axis = %direction.axis(),
            direction = direction.label(),
            "jog complete",
        );
        Ok(())
    }
}
