//! Seek-style position addressing.

use crate::constants::MAX_INDEX;

#[allow(clippy::cast_possible_wrap)] // MAX_INDEX is far below i64::MAX
const MAX_POSITION: i64 = MAX_INDEX as i64;

/// Origin for a position change, mirroring lseek's whence argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Position relative to index 0.
    Start,
    /// Position relative to the session's current position.
    Current,
    /// Position counted back from [`MAX_INDEX`].
    End,
}

/// Map a requested offset to a valid sequence position.
///
/// Pure function, callable without a session. The returned value is always
/// in `[0, MAX_INDEX]` regardless of input magnitude; intermediate
/// arithmetic saturates instead of wrapping.
#[must_use]
pub fn clamp_position(requested: i64, whence: Whence, current: i64) -> i64 {
    let new = match whence {
        Whence::Start => requested,
        Whence::Current => current.saturating_add(requested),
        Whence::End => MAX_POSITION.saturating_sub(requested),
    };
    new.clamp(0, MAX_POSITION)
}
