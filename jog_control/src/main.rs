//! # CNC Jogging Console
//!
//! Manually positions the spindle of a parallel-port CNC stage from the
//! keyboard: one keypress drives one axis direction for a fixed pulse
//! count, with an unconditional safety reset between and after moves.
//! Runs until the operator presses `q`.
//!
//! # Usage
//!
//! ```bash
//! # Drive the real port (requires root for iopl/ioperm)
//! sudo jog_control
//!
//! # Bench-less run against the simulated port
//! jog_control --simulate
//!
//! # Verbose logging
//! jog_control -v
//! ```

use clap::Parser;
use jog_common::config::{ConfigError, JogConfig};
use jog_control::driver::AxisDriver;
use jog_control::error::JogError;
use jog_control::keyboard::{KeyboardPoller, RawTerminal};
use jog_control::menu;
use jog_control::port::{ParallelPort, RegisterPort, SimulatedPort};
use jog_control::session::JogSession;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// CNC jogging console — keyboard-driven spindle positioning
#[derive(Parser, Debug)]
#[command(name = "jog_control")]
#[command(version)]
#[command(about = "Keyboard jogging console for a parallel-port CNC stage")]
struct Args {
    /// Path to the jogging configuration TOML.
    #[arg(long, default_value = "config/jog.toml")]
    config: PathBuf,

    /// Use the simulated register port (no hardware, no privileges).
    #[arg(short = 's', long)]
    simulate: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("CNC jogging console v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("raw register access requires root (iopl/ioperm)");

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("jogging console shutdown complete");
}

fn run(args: &Args) -> Result<(), JogError> {
    let config = load_config(&args.config)?;

    // Outside termination requests are honored between dispatches so the
    // register and terminal are still torn down cleanly.
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    if args.simulate {
        info!("simulation mode enabled, writes are recorded only");
        drive(SimulatedPort::new(), running)
    } else {
        let port = ParallelPort::open(&config.port)?;
        drive(port, running)
    }
}

/// Print the menu, acquire the keyboard and run the session to quit.
///
/// Dropping the session on return releases the port handle and restores
/// the terminal mode.
fn drive<P: RegisterPort>(port: P, running: Arc<AtomicBool>) -> Result<(), JogError> {
    menu::print_menu();
    let keyboard = KeyboardPoller::new(RawTerminal::acquire()?);
    let mut session = JogSession::new(port, keyboard, AxisDriver::new(), running);
    session.run()
}

/// Load `jog.toml`. A missing file falls back to defaults; a file that
/// is present but invalid is a fatal setup error.
fn load_config(path: &Path) -> Result<JogConfig, JogError> {
    match JogConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "configuration loaded");
            Ok(config)
        }
        Err(ConfigError::FileNotFound) => {
            info!(path = %path.display(), "no configuration file, using defaults");
            Ok(JogConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
