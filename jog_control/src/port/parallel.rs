//! Privileged parallel-port backend.
//!
//! Setup raises the I/O privilege level (`iopl`), grants register access
//! (`ioperm`) and opens the device node write-only as the exclusivity
//! handle. Writes latch bytes straight to the data register with an
//! `out` instruction; there is no read-back protocol.

use super::{PortError, RegisterPort};
use jog_common::config::PortConfig;
use jog_common::consts::{PARPORT_IRQ, PARPORT_SPAN};
use std::fs::{File, OpenOptions};
use tracing::info;

/// Exclusive handle on the parallel-port data register.
///
/// Acquired once at startup, released once on drop. Dropping closes the
/// device node and logs the release.
pub struct ParallelPort {
    base_address: u16,
    device: String,
    // Held open for the session lifetime; closing releases the port.
    _handle: File,
}

impl ParallelPort {
    /// Elevate I/O privileges and acquire the port.
    ///
    /// Requires root. Any failure here is fatal: the control loop must
    /// never start without the output register.
    pub fn open(config: &PortConfig) -> Result<Self, PortError> {
        raise_io_privileges(config.base_address)?;

        let handle = OpenOptions::new()
            .write(true)
            .open(&config.device)
            .map_err(|e| PortError::DeviceUnavailable {
                device: config.device.clone(),
                source: e,
            })?;
        info!(
            device = %config.device,
            base_address = %format_args!("{:#06x}", config.base_address),
            irq = PARPORT_IRQ,
            "parallel port acquired",
        );

        Ok(Self {
            base_address: config.base_address,
            device: config.device.clone(),
            _handle: handle,
        })
    }

    /// I/O base address of the data register.
    #[inline]
    pub const fn base_address(&self) -> u16 {
        self.base_address
    }
}

impl RegisterPort for ParallelPort {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    fn write(&mut self, value: u8) -> Result<(), PortError> {
        // Writes are assumed to succeed once the port is open.
        unsafe { outb(self.base_address, value) };
        Ok(())
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    fn write(&mut self, _value: u8) -> Result<(), PortError> {
        Err(PortError::Unsupported)
    }
}

impl Drop for ParallelPort {
    fn drop(&mut self) {
        info!(device = %self.device, "parallel port released");
    }
}

/// Raise the I/O privilege level and grant access to the port registers.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn raise_io_privileges(base_address: u16) -> Result<(), PortError> {
    let rc = unsafe { libc::iopl(3) };
    if rc != 0 {
        return Err(PortError::Privilege {
            call: "iopl",
            source: std::io::Error::last_os_error(),
        });
    }
    info!("I/O privilege level raised (iopl 3)");

    let rc = unsafe {
        libc::ioperm(
            base_address as libc::c_ulong,
            PARPORT_SPAN as libc::c_ulong,
            1,
        )
    };
    if rc != 0 {
        return Err(PortError::Privilege {
            call: "ioperm",
            source: std::io::Error::last_os_error(),
        });
    }
    info!(
        base_address = %format_args!("{base_address:#06x}"),
        span = PARPORT_SPAN,
        "port I/O permissions granted",
    );
    Ok(())
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn raise_io_privileges(_base_address: u16) -> Result<(), PortError> {
    Err(PortError::Unsupported)
}

/// Latch one byte onto an I/O port.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
unsafe fn outb(port: u16, value: u8) {
    unsafe {
        std::arch::asm!(
            "out dx, al",
            in("dx") port,
            in("al") value,
            options(nostack, preserves_flags),
        );
    }
}
