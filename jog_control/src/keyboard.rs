//! Raw keyboard input with a one-character lookahead.
//!
//! [`RawTerminal`] owns the termios raw-mode acquisition and restores the
//! saved settings on drop, on every exit path. [`KeyboardPoller`] layers
//! the non-blocking poll / blocking read contract over any
//! [`InputSource`], buffering at most one lookahead byte.

use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Error types for terminal mode control and raw reads.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// A termios get/set call failed.
    #[error("terminal attribute call failed: {0}")]
    Attr(#[from] nix::Error),

    /// A raw stdin read failed.
    #[error("stdin read failed: {0}")]
    Read(#[from] std::io::Error),

    /// Stdin reached end of file during a blocking read.
    #[error("stdin closed during blocking read")]
    Closed,
}

/// Source of raw input bytes.
///
/// `poll_byte` must return without blocking; `read_byte` blocks until one
/// byte arrives. [`RawTerminal`] is the production implementation; tests
/// script their own.
pub trait InputSource {
    /// One non-blocking read attempt: `Some` if a byte was pending.
    fn poll_byte(&mut self) -> Result<Option<u8>, TerminalError>;

    /// Blocking read of exactly one byte.
    fn read_byte(&mut self) -> Result<u8, TerminalError>;
}

/// Scoped raw-mode acquisition of the controlling terminal.
///
/// Clears ICANON, ECHO and ISIG; VMIN=1/VTIME=0 so blocking reads return
/// exactly one byte. Dropping restores the saved settings; a failed
/// restore is reported but never fatal.
pub struct RawTerminal {
    saved: Termios,
    raw: Termios,
}

impl RawTerminal {
    /// Switch the terminal into raw mode, saving the prior settings.
    pub fn acquire() -> Result<Self, TerminalError> {
        let stdin = std::io::stdin();
        let saved = termios::tcgetattr(&stdin)?;
        let mut raw = saved.clone();
        raw.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO | LocalFlags::ISIG);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        termios::tcsetattr(&stdin, SetArg::TCSANOW, &raw)?;
        debug!("terminal raw mode acquired");
        Ok(Self { saved, raw })
    }

    /// Set the minimum-read-count, leaving the other raw settings alone.
    fn set_min_chars(&mut self, vmin: u8) -> Result<(), TerminalError> {
        self.raw.control_chars[SpecialCharacterIndices::VMIN as usize] = vmin;
        termios::tcsetattr(&std::io::stdin(), SetArg::TCSANOW, &self.raw)?;
        Ok(())
    }
}

impl InputSource for RawTerminal {
    fn poll_byte(&mut self) -> Result<Option<u8>, TerminalError> {
        // VMIN=0 turns the next read into an availability check. The
        // minimum must be back at 1 when this returns, success or not.
        self.set_min_chars(0)?;
        let result = read_stdin_byte();
        let restored = self.set_min_chars(1);
        let byte = result?;
        restored?;
        Ok(byte)
    }

    fn read_byte(&mut self) -> Result<u8, TerminalError> {
        match read_stdin_byte()? {
            Some(byte) => Ok(byte),
            None => Err(TerminalError::Closed),
        }
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        // Restoration failure is a non-fatal teardown error.
        match termios::tcsetattr(&std::io::stdin(), SetArg::TCSANOW, &self.saved) {
            Ok(()) => debug!("terminal settings restored"),
            Err(e) => warn!("failed to restore terminal settings: {e}"),
        }
    }
}

/// One raw `read(2)` on stdin. `None` means no byte was pending (only
/// possible while VMIN is zero).
fn read_stdin_byte() -> Result<Option<u8>, TerminalError> {
    let mut buf = [0u8; 1];
    let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), 1) };
    match n {
        -1 => Err(TerminalError::Read(std::io::Error::last_os_error())),
        0 => Ok(None),
        _ => Ok(Some(buf[0])),
    }
}

/// Non-blocking keyboard poller with a single-byte lookahead.
///
/// A byte read during a poll is buffered and handed out by the next
/// [`read_char`](Self::read_char); the buffer never holds more than one
/// byte.
pub struct KeyboardPoller<S: InputSource> {
    source: S,
    lookahead: Option<u8>,
}

impl<S: InputSource> KeyboardPoller<S> {
    /// New poller with an empty lookahead.
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: None,
        }
    }

    /// True when a key is waiting.
    ///
    /// Returns immediately. If the lookahead is already populated no new
    /// input is consumed; otherwise one non-blocking read attempt is made
    /// and a pending byte is buffered. A failed read reports no input.
    pub fn poll(&mut self) -> bool {
        if self.lookahead.is_some() {
            return true;
        }
        match self.source.poll_byte() {
            Ok(Some(byte)) => {
                self.lookahead = Some(byte);
                true
            }
            Ok(None) => false,
            Err(e) => {
                trace!("input poll failed: {e}");
                false
            }
        }
    }

    /// Next input byte: the buffered lookahead if present, otherwise a
    /// blocking single-byte read.
    pub fn read_char(&mut self) -> Result<u8, TerminalError> {
        if let Some(byte) = self.lookahead.take() {
            return Ok(byte);
        }
        self.source.read_byte()
    }

    /// Whether a lookahead byte is currently buffered.
    #[inline]
    pub const fn has_lookahead(&self) -> bool {
        self.lookahead.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted source: pops bytes in order; `fail_polls` forces poll
    /// errors first.
    struct Scripted {
        bytes: VecDeque<u8>,
        fail_polls: u32,
        polls: u32,
        blocking_reads: u32,
    }

    impl Scripted {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.iter().copied().collect(),
                fail_polls: 0,
                polls: 0,
                blocking_reads: 0,
            }
        }
    }

    impl InputSource for Scripted {
        fn poll_byte(&mut self) -> Result<Option<u8>, TerminalError> {
            self.polls += 1;
            if self.fail_polls > 0 {
                self.fail_polls -= 1;
                return Err(TerminalError::Closed);
            }
            Ok(self.bytes.pop_front())
        }

        fn read_byte(&mut self) -> Result<u8, TerminalError> {
            self.blocking_reads += 1;
            self.bytes.pop_front().ok_or(TerminalError::Closed)
        }
    }

    #[test]
    fn poll_buffers_one_byte() {
        let mut poller = KeyboardPoller::new(Scripted::new(b"r"));
        assert!(poller.poll());
        assert!(poller.has_lookahead());
    }

    #[test]
    fn repeated_polls_consume_no_extra_input() {
        let mut poller = KeyboardPoller::new(Scripted::new(b"rq"));
        assert!(poller.poll());
        assert!(poller.poll());
        // One source read for two polls; 'q' still queued.
        assert_eq!(poller.source.polls, 1);
        assert_eq!(poller.source.bytes.len(), 1);
    }

    #[test]
    fn read_char_drains_the_lookahead() {
        let mut poller = KeyboardPoller::new(Scripted::new(b"r"));
        assert!(poller.poll());
        assert_eq!(poller.read_char().unwrap(), b'r');
        assert!(!poller.has_lookahead());
    }

    #[test]
    fn read_char_blocks_through_the_source_when_empty() {
        let mut poller = KeyboardPoller::new(Scripted::new(b"u"));
        assert_eq!(poller.read_char().unwrap(), b'u');
        assert_eq!(poller.source.blocking_reads, 1);
    }

    #[test]
    fn poll_without_input_reports_none() {
        let mut poller = KeyboardPoller::new(Scripted::new(b""));
        assert!(!poller.poll());
        assert!(!poller.has_lookahead());
    }

    #[test]
    fn poll_swallows_read_failures() {
        let mut source = Scripted::new(b"r");
        source.fail_polls = 1;
        let mut poller = KeyboardPoller::new(source);
        assert!(!poller.poll());
        // Next poll succeeds and buffers the byte.
        assert!(poller.poll());
        assert_eq!(poller.read_char().unwrap(), b'r');
    }
}
