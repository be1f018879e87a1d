use thiserror::Error;

use crate::base32::DecodeError;

/// Represents errors that can occur during Randflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandflakeError {
    /// Cipher key is not exactly 16 bytes
    #[error("invalid key length {len}, key must be 16 bytes long")]
    InvalidKey { len: usize },
    /// Cipher source or destination block is not exactly 8 bytes
    #[error("invalid buffer length {len}, buffer must be 8 bytes long")]
    InvalidBuffer { len: usize },
    /// Generator secret is not exactly 16 bytes
    #[error("invalid secret length {len}, secret must be 16 bytes long")]
    InvalidSecret { len: usize },
    /// Node ID exceeds the 17-bit range
    #[error("node id {node_id} is invalid, node id must be between 0 and {max}")]
    InvalidNode { node_id: u32, max: u32 },
    /// Lease is malformed, not started yet or already expired
    #[error("invalid lease, lease expired or not started yet")]
    InvalidLease,
    /// Lease reaches beyond the last representable timestamp
    #[error("lease end {lease_end} is past the last representable timestamp {max}")]
    RandflakeDead { lease_end: i64, max: i64 },
    /// Every sequence number of the current second has been issued
    #[error("resource exhausted at {timestamp}, shard load across more generator instances")]
    ResourceExhausted { timestamp: i64 },
    /// Clock is behind the last allocation
    #[error("timestamp consistency violation, current time {now} is before last allocation {last}")]
    ConsistencyViolation { now: i64, last: i64 },
    /// String form of an ID could not be decoded
    #[error("invalid id: {0}")]
    InvalidId(#[from] DecodeError),
}
