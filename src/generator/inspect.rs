//! Decode opaque IDs back into their fields

use super::{Generator, TimeSource};
use crate::error::RandflakeError;
use crate::layout::{from_block, to_block, unpack, EPOCH_OFFSET};

impl<T: TimeSource> Generator<T> {
    /// Decrypt an opaque ID into `(timestamp, node_id, sequence)`
    ///
    /// `timestamp` is in Unix seconds. A decrypted value with the sign bit
    /// set is rejected as `InvalidLease`, which also rejects genuine IDs
    /// minted once the timestamp offset reaches 2^29 (around 2041).
    pub fn inspect(&self, id: i64) -> Result<(i64, u32, u32), RandflakeError> {
        let raw = from_block(self.cipher.decrypt_block(to_block(id)));
        if raw < 0 {
            return Err(RandflakeError::InvalidLease);
        }

        let (timestamp_offset, node_id, sequence) = unpack(raw as u64);
        Ok((timestamp_offset as i64 + EPOCH_OFFSET, node_id, sequence))
    }
}
