//! Error type for the Fibonacci engine.

/// Error type for device and computation failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibError {
    /// The device is already held by another session.
    #[error("device is busy: another session is active")]
    ResourceBusy,

    /// An addition result would not fit the digit buffer.
    #[error("capacity exceeded: result needs {needed} digits, buffer holds {capacity}")]
    CapacityExceeded {
        /// Digits the result would require.
        needed: usize,
        /// Usable digits in the buffer.
        capacity: usize,
    },

    /// Capacity ran out while generating the sequence.
    #[error("sequence overflow at index {index}")]
    SequenceOverflow {
        /// The index whose value did not fit.
        index: u64,
    },

    /// Index outside the supported range, bypassing the position clamp.
    #[error("invalid position {index}: supported range is 0..={max}")]
    InvalidPosition {
        /// The rejected index.
        index: u64,
        /// Highest supported index.
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            FibError::ResourceBusy.to_string(),
            "device is busy: another session is active"
        );
        assert_eq!(
            FibError::CapacityExceeded {
                needed: 256,
                capacity: 255
            }
            .to_string(),
            "capacity exceeded: result needs 256 digits, buffer holds 255"
        );
        assert_eq!(
            FibError::SequenceOverflow { index: 1300 }.to_string(),
            "sequence overflow at index 1300"
        );
        assert_eq!(
            FibError::InvalidPosition {
                index: 151,
                max: 150
            }
            .to_string(),
            "invalid position 151: supported range is 0..=150"
        );
    }
}
