//! Error handling and exit codes.

use fibdev_core::exit_codes;
use fibdev_core::FibError;

/// Map a run error to the binary's exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::ResourceBusy) => exit_codes::ERROR_BUSY,
        Some(FibError::CapacityExceeded { .. } | FibError::SequenceOverflow { .. }) => {
            exit_codes::ERROR_OVERFLOW
        }
        Some(FibError::InvalidPosition { .. }) => exit_codes::ERROR_RANGE,
        None => exit_codes::ERROR_GENERIC,
    }
}
