//! Iterative Fibonacci sequence generation over digit buffers.

use crate::adder::add;
use crate::constants::MAX_INDEX;
use crate::digits::DigitBuffer;
use crate::error::FibError;

/// Compute F(k) as a digit buffer.
///
/// `k` must already be validated (the position clamp guarantees this for
/// session reads); an out-of-range index fails with
/// [`FibError::InvalidPosition`] rather than being clamped here.
///
/// Runs k-1 additions over three rotating slots, exactly the cost profile of
/// the naive recurrence. A capacity error from the adder surfaces as
/// [`FibError::SequenceOverflow`] tagged with the offending index; no
/// partial value escapes.
pub fn fib_sequence(k: u64) -> Result<DigitBuffer, FibError> {
    if k > MAX_INDEX {
        return Err(FibError::InvalidPosition {
            index: k,
            max: MAX_INDEX,
        });
    }
    if k == 0 {
        return Ok(DigitBuffer::zero());
    }
    if k == 1 {
        return Ok(DigitBuffer::one());
    }

    let mut prev = DigitBuffer::zero();
    let mut curr = DigitBuffer::one();
    let mut scratch = DigitBuffer::new();

    for i in 1..k {
        add(&mut scratch, &mut prev, &mut curr).map_err(|err| match err {
            FibError::CapacityExceeded { .. } => FibError::SequenceOverflow { index: i + 1 },
            other => other,
        })?;
        prev.copy_from(&curr)?;
        curr.copy_from(&scratch)?;
    }

    tracing::trace!(k, digits = curr.len(), "sequence generated");
    Ok(curr)
}
