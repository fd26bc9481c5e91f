//! Decimal addition over digit buffers.

use crate::digits::DigitBuffer;
use crate::error::FibError;

/// Compute the exact decimal sum of `a` and `b` into `result`.
///
/// Both operands are reversed in place so the loops walk them from the units
/// digit, then reversed back before returning; callers observe them
/// unmodified. Operand order does not matter: the pairwise loop runs over
/// the shorter length and the tail loop over the longer operand's remaining
/// digits.
///
/// Fails with [`FibError::CapacityExceeded`] when the sum might need more
/// than `result`'s capacity, before any buffer is touched.
pub fn add(result: &mut DigitBuffer, a: &mut DigitBuffer, b: &mut DigitBuffer) -> Result<(), FibError> {
    let (la, lb) = (a.len(), b.len());
    let short = la.min(lb);
    let long = la.max(lb);

    // Worst case adds one carry digit on top of the longer operand.
    if long + 1 > result.capacity() {
        return Err(FibError::CapacityExceeded {
            needed: long + 1,
            capacity: result.capacity(),
        });
    }

    a.reverse();
    b.reverse();
    result.clear();

    let mut carry = 0;
    for i in 0..short {
        let s = a.digit(i) + b.digit(i) + carry;
        result.push_unchecked(s % 10);
        carry = s / 10;
    }

    let tail: &DigitBuffer = if la >= lb { a } else { b };
    for i in short..long {
        let s = tail.digit(i) + carry;
        result.push_unchecked(s % 10);
        carry = s / 10;
    }

    if carry != 0 {
        result.push_unchecked(carry);
    }

    result.reverse();
    a.reverse();
    b.reverse();
    Ok(())
}
