//! Configuration for Randflake generator

mod builder;

pub use builder::GeneratorConfigBuilder;

use crate::error::RandflakeError;
use crate::layout::{EPOCH_OFFSET, MAX_NODE, MAX_TIMESTAMP};

/// Lease window `[start, end]` in Unix seconds, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lease {
    start: i64,
    end: i64,
}

impl Lease {
    /// Validate and create a lease window
    pub fn new(start: i64, end: i64) -> Result<Self, RandflakeError> {
        if end < start || start < EPOCH_OFFSET {
            return Err(RandflakeError::InvalidLease);
        }
        if end > MAX_TIMESTAMP {
            return Err(RandflakeError::RandflakeDead {
                lease_end: end,
                max: MAX_TIMESTAMP,
            });
        }
        Ok(Self { start, end })
    }

    #[inline(always)]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[inline(always)]
    pub const fn end(&self) -> i64 {
        self.end
    }

    #[inline(always)]
    pub const fn contains(&self, now: i64) -> bool {
        self.start <= now && now <= self.end
    }

    /// Merge a renewed lease into this one
    ///
    /// Only a strictly later end for the same start is accepted, so applying
    /// renewals out of order or more than once is harmless.
    pub fn extend(&mut self, start: i64, end: i64) -> bool {
        if start != self.start || end < start || end > MAX_TIMESTAMP || end <= self.end {
            return false;
        }
        self.end = end;
        true
    }
}

/// Validated node and lease settings for a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    node_id: u32,
    lease: Lease,
}

impl GeneratorConfig {
    /// Validate inputs in a fixed order: lease ordering, node range, lease
    /// start, lease end
    pub fn new(node_id: u32, lease_start: i64, lease_end: i64) -> Result<Self, RandflakeError> {
        if lease_end < lease_start {
            return Err(RandflakeError::InvalidLease);
        }
        if node_id > MAX_NODE {
            return Err(RandflakeError::InvalidNode {
                node_id,
                max: MAX_NODE,
            });
        }
        let lease = Lease::new(lease_start, lease_end)?;
        Ok(Self { node_id, lease })
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u32 {
        self.node_id
    }

    #[inline(always)]
    pub const fn lease(&self) -> Lease {
        self.lease
    }
}
