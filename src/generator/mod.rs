//! Core Randflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Per-second sequence window
//! - `time` - Time sources
//! - `generate` - Raw allocation and encryption
//! - `inspect` - Decryption back to fields
//! - `base32_methods` - String forms of generate and inspect

mod base32_methods;
mod generate;
mod inspect;
mod state;
mod time;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::config::{GeneratorConfig, Lease};
use crate::error::RandflakeError;
use crate::sparx64::{Sparx64, KEY_SIZE};

pub(crate) use state::State;
pub use time::{SystemClock, TimeSource};

/// Lease-bounded ID generator for a single node
///
/// Not internally synchronized: `generate` and `update_lease` take
/// `&mut self`. Share one instance across threads through a `Mutex`.
/// Dropping the generator wipes its cipher key schedule.
#[derive(Debug)]
pub struct Generator<T: TimeSource = SystemClock> {
    state: State,
    lease: Lease,
    node_id: u32,
    cipher: Sparx64,
    clock: T,
}

impl Generator<SystemClock> {
    /// Create a generator driven by the system clock
    pub fn new(
        node_id: u32,
        lease_start: i64,
        lease_end: i64,
        secret: &[u8],
    ) -> Result<Self, RandflakeError> {
        Self::with_clock(node_id, lease_start, lease_end, secret, SystemClock)
    }
}

impl<T: TimeSource> Generator<T> {
    /// Create a generator with a custom time source
    pub fn with_clock(
        node_id: u32,
        lease_start: i64,
        lease_end: i64,
        secret: &[u8],
        clock: T,
    ) -> Result<Self, RandflakeError> {
        let config = GeneratorConfig::new(node_id, lease_start, lease_end)?;
        Self::with_config(config, secret, clock)
    }

    /// Create a generator from a validated configuration
    pub fn with_config(
        config: GeneratorConfig,
        secret: &[u8],
        clock: T,
    ) -> Result<Self, RandflakeError> {
        if secret.len() != KEY_SIZE {
            return Err(RandflakeError::InvalidSecret { len: secret.len() });
        }
        let lease = config.lease();
        Ok(Self {
            state: State::fresh(lease.start()),
            lease,
            node_id: config.node_id(),
            cipher: Sparx64::new(secret)?,
            clock,
        })
    }

    /// Extend the lease end for the same lease start
    ///
    /// Returns `false` and changes nothing unless `lease_start` matches,
    /// `lease_end` is representable and it is later than the current end.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn update_lease(&mut self, lease_start: i64, lease_end: i64) -> bool {
        let previous_end = self.lease.end();
        let extended = self.lease.extend(lease_start, lease_end);

        #[cfg(feature = "tracing")]
        if extended {
            tracing::debug!(node_id = self.node_id, previous_end, lease_end, "lease extended");
        } else {
            tracing::trace!(node_id = self.node_id, previous_end, lease_end, "lease update ignored");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = previous_end;

        extended
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u32 {
        self.node_id
    }

    #[inline(always)]
    pub const fn lease_start(&self) -> i64 {
        self.lease.start()
    }

    #[inline(always)]
    pub const fn lease_end(&self) -> i64 {
        self.lease.end()
    }

    /// Whether the current time falls inside the lease window
    pub fn is_active(&self) -> bool {
        self.lease.contains(self.now())
    }

    #[inline(always)]
    pub fn clock(&self) -> &T {
        &self.clock
    }

    #[inline(always)]
    pub(crate) fn now(&self) -> i64 {
        self.clock.current_secs()
    }

    #[inline(always)]
    #[allow(dead_code)] // Used in tests
    pub(crate) fn state(&self) -> State {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn seed_state(&mut self, rollover: i64, sequence: u32) {
        self.state = State::new(rollover, sequence);
    }
}
