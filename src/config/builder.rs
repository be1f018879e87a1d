//! GeneratorConfig builder for constructing configuration

use super::GeneratorConfig;
use crate::error::RandflakeError;

/// Builder for GeneratorConfig
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    node_id: u32,
    lease: Option<(i64, i64)>,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder for node 0 with no lease
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node ID (0-131071)
    pub const fn node_id(mut self, node_id: u32) -> Self {
        self.node_id = node_id;
        self
    }

    /// Set the lease window in Unix seconds
    pub const fn lease(mut self, start: i64, end: i64) -> Self {
        self.lease = Some((start, end));
        self
    }

    /// Validate and build the final GeneratorConfig
    pub fn build(self) -> Result<GeneratorConfig, RandflakeError> {
        let (start, end) = self.lease.ok_or(RandflakeError::InvalidLease)?;
        GeneratorConfig::new(self.node_id, start, end)
    }
}
