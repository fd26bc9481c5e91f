//! # fibdev-core
//!
//! Bounded decimal-string Fibonacci engine: a fixed-capacity digit buffer,
//! a carry-propagating decimal adder, an iterative sequence generator, and
//! an exclusive, seekable session gate around them.

pub mod adder;
pub mod constants;
pub mod digits;
pub mod error;
pub mod generator;
pub mod seek;
pub mod session;

// Re-exports
pub use adder::add;
pub use constants::{exit_codes, FIB_TABLE, MAX_DIGITS, MAX_FIB_U64, MAX_INDEX};
pub use digits::DigitBuffer;
pub use error::FibError;
pub use generator::fib_sequence;
pub use seek::{clamp_position, Whence};
pub use session::{device, FibDevice, Session};

/// Compute F(n) as a decimal string.
///
/// Convenience function for simple use cases. For session-scoped access with
/// seek semantics, use [`FibDevice`] directly.
///
/// # Example
/// ```
/// assert_eq!(fibdev_core::fibonacci(10).unwrap(), "55");
/// assert_eq!(fibdev_core::fibonacci(0).unwrap(), "0");
/// ```
pub fn fibonacci(n: u64) -> Result<String, FibError> {
    fib_sequence(n).map(|buf| buf.to_string())
}
