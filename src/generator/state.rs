//! Sequence allocation state
//!
//! One window per second: the first allocation in a new second opens a
//! window at sequence 0, later allocations in the same second count up.

use crate::error::RandflakeError;
use crate::layout::MAX_SEQUENCE;

/// Open allocation window: its second and the last sequence issued in it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    rollover: i64,
    sequence: u32,
}

impl State {
    #[inline(always)]
    pub const fn new(rollover: i64, sequence: u32) -> Self {
        Self { rollover, sequence }
    }

    /// State of a generator that has not issued anything yet; the first
    /// allocation at or after `lease_start` opens a window
    #[inline(always)]
    pub const fn fresh(lease_start: i64) -> Self {
        Self::new(lease_start - 1, 0)
    }

    #[inline(always)]
    pub const fn rollover(self) -> i64 {
        self.rollover
    }

    #[inline(always)]
    pub const fn sequence(self) -> u32 {
        self.sequence
    }

    /// Compute the state after one allocation at `now`
    ///
    /// On error the current state stays valid and nothing was issued.
    #[inline]
    pub fn advance(self, now: i64) -> Result<Self, RandflakeError> {
        if now > self.rollover {
            return Ok(Self::new(now, 0));
        }
        if now < self.rollover {
            return Err(RandflakeError::ConsistencyViolation {
                now,
                last: self.rollover,
            });
        }

        let sequence = self.sequence + 1;
        if sequence > MAX_SEQUENCE {
            return Err(RandflakeError::ResourceExhausted { timestamp: now });
        }
        Ok(Self::new(now, sequence))
    }
}
