//! Base32hex convenience methods for Randflake generator

use crate::base32::{decode_id as base32_decode_id, encode_id as base32_encode_id};
use crate::error::RandflakeError;

use super::{Generator, TimeSource};

impl<T: TimeSource> Generator<T> {
    /// Generate a new opaque ID in base32hex form
    pub fn generate_string(&mut self) -> Result<String, RandflakeError> {
        self.generate().map(base32_encode_id)
    }

    /// Decode a base32hex ID into `(timestamp, node_id, sequence)`
    pub fn inspect_string(&self, encoded: &str) -> Result<(i64, u32, u32), RandflakeError> {
        let id = base32_decode_id(encoded)?;
        self.inspect(id)
    }
}
