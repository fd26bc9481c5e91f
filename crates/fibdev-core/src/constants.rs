//! Constants for the decimal-string Fibonacci engine.

/// Highest sequence position the engine serves.
///
/// Independent of [`MAX_DIGITS`]: F(150) has only 31 decimal digits, so the
/// default buffer capacity leaves a wide margin. Raising this constant past
/// ~1219 (where Fibonacci values grow beyond 255 digits) makes large reads
/// fail with a capacity error instead of producing wrong digits.
pub const MAX_INDEX: u64 = 150;

/// Raw digit buffer size in bytes.
pub const BUF_CAPACITY: usize = 256;

/// Usable digit positions per buffer. One slot of [`BUF_CAPACITY`] is kept
/// in reserve, matching the terminator byte of the original layout.
pub const MAX_DIGITS: usize = BUF_CAPACITY - 1;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93, used as ground truth in
/// tests. F(94) would overflow `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Exit codes for the `fibdev` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The device is held by another session.
    pub const ERROR_BUSY: i32 = 2;
    /// The result would not fit the digit buffer.
    pub const ERROR_OVERFLOW: i32 = 3;
    /// Requested position outside the supported range.
    pub const ERROR_RANGE: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }

    #[test]
    fn capacity_reserves_one_slot() {
        assert_eq!(MAX_DIGITS, BUF_CAPACITY - 1);
    }
}
