//! Bounded digit buffer holding one big-decimal value.
//!
//! Digits are stored in natural reading order (most significant first) as
//! ASCII bytes. The adder temporarily reverses buffers to walk them from the
//! units digit; see [`crate::adder`].

use crate::constants::{BUF_CAPACITY, MAX_DIGITS};
use crate::error::FibError;

/// Fixed-capacity, length-tracked sequence of decimal digits.
///
/// Every mutation is bounds-checked against [`MAX_DIGITS`]; overflowing the
/// buffer is a [`FibError::CapacityExceeded`], never silent truncation.
#[derive(Clone)]
pub struct DigitBuffer {
    digits: [u8; BUF_CAPACITY],
    len: usize,
}

impl PartialEq for DigitBuffer {
    fn eq(&self, other: &Self) -> bool {
        // Bytes past `len` are stale and do not take part in equality.
        self.digits[..self.len] == other.digits[..other.len]
    }
}

impl Eq for DigitBuffer {}

impl DigitBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digits: [0; BUF_CAPACITY],
            len: 0,
        }
    }

    /// Buffer seeded with the single digit `0`.
    #[must_use]
    pub const fn zero() -> Self {
        let mut buf = Self::new();
        buf.digits[0] = b'0';
        buf.len = 1;
        buf
    }

    /// Buffer seeded with the single digit `1`.
    #[must_use]
    pub const fn one() -> Self {
        let mut buf = Self::new();
        buf.digits[0] = b'1';
        buf.len = 1;
        buf
    }

    /// Parse a decimal string.
    ///
    /// `s` must contain only ASCII digits; fails with
    /// [`FibError::CapacityExceeded`] when it is longer than [`MAX_DIGITS`].
    pub fn from_decimal(s: &str) -> Result<Self, FibError> {
        debug_assert!(s.bytes().all(|b| b.is_ascii_digit()));
        if s.len() > MAX_DIGITS {
            return Err(FibError::CapacityExceeded {
                needed: s.len(),
                capacity: MAX_DIGITS,
            });
        }
        let mut buf = Self::new();
        buf.digits[..s.len()].copy_from_slice(s.as_bytes());
        buf.len = s.len();
        Ok(buf)
    }

    /// Number of digits currently stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Usable digit capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        MAX_DIGITS
    }

    /// Value (0..=9) of the digit at `i`.
    ///
    /// Panics if `i >= len()`.
    #[must_use]
    pub fn digit(&self, i: usize) -> u8 {
        assert!(i < self.len, "digit index {i} out of bounds (len {})", self.len);
        self.digits[i] - b'0'
    }

    /// Append one digit value (0..=9).
    pub fn push(&mut self, d: u8) -> Result<(), FibError> {
        if self.len == MAX_DIGITS {
            return Err(FibError::CapacityExceeded {
                needed: self.len + 1,
                capacity: MAX_DIGITS,
            });
        }
        self.push_unchecked(d);
        Ok(())
    }

    /// Append without the capacity check. Callers must have verified that
    /// the final length fits, as the adder does before its loops.
    pub(crate) fn push_unchecked(&mut self, d: u8) {
        debug_assert!(self.len < MAX_DIGITS);
        debug_assert!(d < 10);
        self.digits[self.len] = d + b'0';
        self.len += 1;
    }

    /// Remove all digits.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replace this buffer's contents with a copy of `src`.
    pub fn copy_from(&mut self, src: &DigitBuffer) -> Result<(), FibError> {
        if src.len > self.capacity() {
            return Err(FibError::CapacityExceeded {
                needed: src.len,
                capacity: self.capacity(),
            });
        }
        self.digits[..src.len].copy_from_slice(&src.digits[..src.len]);
        self.len = src.len;
        Ok(())
    }

    /// Reverse the stored digits in place with pairwise exchange.
    /// An odd middle digit stays put. Applying twice restores the original.
    pub fn reverse(&mut self) {
        let n = self.len;
        for i in 0..n / 2 {
            self.digits.swap(i, n - 1 - i);
        }
    }

    /// The digits as a string slice, most significant first.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // The buffer only ever holds ASCII digits.
        std::str::from_utf8(&self.digits[..self.len]).unwrap_or_default()
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitBuffer({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds() {
        assert_eq!(DigitBuffer::zero().as_str(), "0");
        assert_eq!(DigitBuffer::one().as_str(), "1");
        assert_eq!(DigitBuffer::new().len(), 0);
        assert!(DigitBuffer::new().is_empty());
    }

    #[test]
    fn from_decimal_roundtrip() {
        let buf = DigitBuffer::from_decimal("12586269025").unwrap();
        assert_eq!(buf.len(), 11);
        assert_eq!(buf.as_str(), "12586269025");
        assert_eq!(buf.to_string(), "12586269025");
    }

    #[test]
    fn from_decimal_too_long() {
        let s = "9".repeat(MAX_DIGITS + 1);
        let err = DigitBuffer::from_decimal(&s).unwrap_err();
        assert_eq!(
            err,
            FibError::CapacityExceeded {
                needed: MAX_DIGITS + 1,
                capacity: MAX_DIGITS
            }
        );
    }

    #[test]
    fn from_decimal_at_capacity() {
        let s = "9".repeat(MAX_DIGITS);
        let buf = DigitBuffer::from_decimal(&s).unwrap();
        assert_eq!(buf.len(), MAX_DIGITS);
    }

    #[test]
    fn digit_values() {
        let buf = DigitBuffer::from_decimal("907").unwrap();
        assert_eq!(buf.digit(0), 9);
        assert_eq!(buf.digit(1), 0);
        assert_eq!(buf.digit(2), 7);
    }

    #[test]
    fn push_until_full() {
        let mut buf = DigitBuffer::new();
        for _ in 0..MAX_DIGITS {
            buf.push(5).unwrap();
        }
        assert_eq!(buf.len(), MAX_DIGITS);
        assert!(matches!(
            buf.push(5),
            Err(FibError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn copy_from_replaces_contents() {
        let src = DigitBuffer::from_decimal("6765").unwrap();
        let mut dst = DigitBuffer::from_decimal("55").unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(dst.as_str(), "6765");
    }

    #[test]
    fn reverse_even_and_odd() {
        let mut buf = DigitBuffer::from_decimal("1234").unwrap();
        buf.reverse();
        assert_eq!(buf.as_str(), "4321");

        let mut buf = DigitBuffer::from_decimal("123").unwrap();
        buf.reverse();
        assert_eq!(buf.as_str(), "321");
    }

    #[test]
    fn reverse_is_involution() {
        let mut buf = DigitBuffer::from_decimal("10946").unwrap();
        buf.reverse();
        buf.reverse();
        assert_eq!(buf.as_str(), "10946");
    }

    #[test]
    fn reverse_single_digit() {
        let mut buf = DigitBuffer::one();
        buf.reverse();
        assert_eq!(buf.as_str(), "1");
    }

    #[test]
    fn clear_empties() {
        let mut buf = DigitBuffer::from_decimal("89").unwrap();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.as_str(), "");
    }
}
