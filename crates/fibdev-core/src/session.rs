//! Exclusive device sessions.
//!
//! At most one session is active per device at a time. Opening uses a
//! non-blocking try-acquire: a second open while one is held fails
//! immediately with [`FibError::ResourceBusy`] instead of queuing, and the
//! gate is released when the [`Session`] guard drops, on every exit path.

use parking_lot::{Mutex, MutexGuard};

use crate::digits::DigitBuffer;
use crate::error::FibError;
use crate::generator::fib_sequence;
use crate::seek::{clamp_position, Whence};

/// The Fibonacci device: an exclusive gate around the sequence generator.
pub struct FibDevice {
    gate: Mutex<()>,
}

impl FibDevice {
    /// Create an unheld device.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gate: Mutex::new(()),
        }
    }

    /// Open an exclusive session.
    ///
    /// Fails fast with [`FibError::ResourceBusy`] while another session is
    /// active; never blocks or queues.
    pub fn open(&self) -> Result<Session<'_>, FibError> {
        match self.gate.try_lock() {
            Some(guard) => {
                tracing::debug!("session opened");
                Ok(Session {
                    _gate: guard,
                    position: 0,
                })
            }
            None => {
                tracing::warn!("device is in use");
                Err(FibError::ResourceBusy)
            }
        }
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide device, one per process like a single device node.
#[must_use]
pub fn device() -> &'static FibDevice {
    static DEVICE: FibDevice = FibDevice::new();
    &DEVICE
}

/// An open session: holds the device gate and a sticky read position.
///
/// Dropping the session releases the gate; [`Session::close`] consumes the
/// guard, so releasing twice is unrepresentable.
#[derive(Debug)]
pub struct Session<'a> {
    _gate: MutexGuard<'a, ()>,
    position: i64,
}

impl Session<'_> {
    /// Current read position, always in `[0, MAX_INDEX]`.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Move the read position and return the new value.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        self.position = clamp_position(offset, whence, self.position);
        self.position
    }

    /// Compute the Fibonacci value at the current position.
    pub fn read(&self) -> Result<DigitBuffer, FibError> {
        // The clamp keeps position non-negative, so the sign loss is vacuous.
        #[allow(clippy::cast_sign_loss)]
        let k = self.position as u64;
        self.compute(k)
    }

    /// Compute the Fibonacci value at an explicit index.
    pub fn compute(&self, k: u64) -> Result<DigitBuffer, FibError> {
        fib_sequence(k)
    }

    /// Release the session.
    pub fn close(self) {}
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        tracing::debug!("session closed");
    }
}
