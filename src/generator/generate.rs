//! ID generation logic
//!
//! Allocates a raw ID inside the lease and encrypts it into an opaque ID

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{Generator, TimeSource};
use crate::error::RandflakeError;
use crate::layout::{from_block, pack, to_block, EPOCH_OFFSET};

impl<T: TimeSource> Generator<T> {
    /// Generate a new opaque ID
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), fields(node_id = self.node_id))
    )]
    #[inline]
    pub fn generate(&mut self) -> Result<i64, RandflakeError> {
        let raw = self.generate_raw()?;
        let block = self.cipher.encrypt_block(to_block(raw as i64));
        Ok(from_block(block))
    }

    /// Allocate the next raw (unencrypted) ID
    pub(crate) fn generate_raw(&mut self) -> Result<u64, RandflakeError> {
        let now = self.now();
        if !self.lease.contains(now) {
            return Err(RandflakeError::InvalidLease);
        }

        let next = self
            .state
            .advance(now)
            .map_err(|err| self.rejected(err))?;

        #[cfg(feature = "tracing")]
        if next.rollover() != self.state.rollover() {
            tracing::trace!(node_id = self.node_id, rollover = now, "sequence window opened");
        }
        self.state = next;

        Ok(pack(
            (now - EPOCH_OFFSET) as u64,
            self.node_id,
            next.sequence(),
        ))
    }

    #[cold]
    fn rejected(&self, err: RandflakeError) -> RandflakeError {
        #[cfg(feature = "tracing")]
        match &err {
            RandflakeError::ConsistencyViolation { now, last } => {
                tracing::warn!(node_id = self.node_id, now, last, "clock moved backwards");
            }
            RandflakeError::ResourceExhausted { timestamp } => {
                tracing::debug!(node_id = self.node_id, timestamp, "sequence exhausted");
            }
            _ => {}
        }
        err
    }
}
