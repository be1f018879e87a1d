//! # Randflake
//!
//! Snowflake-style 64-bit IDs that do not leak how they were made.
//!
//! Each raw ID packs a 30-bit timestamp, a 17-bit node ID and a 17-bit
//! sequence, and is then encrypted with SPARX-64/128 under a shared 16-byte
//! secret. Outsiders see random-looking integers; holders of the secret can
//! [`Generator::inspect`] them back into their fields.
//!
//! A generator only issues IDs inside its lease window. Leases are granted
//! and renewed by an external coordinator and fed in through
//! [`Generator::update_lease`].
//!
//! ```
//! use randflake::{Generator, EPOCH_OFFSET};
//!
//! let now = EPOCH_OFFSET + 3_706_297;
//! let secret = [0x5au8; 16];
//! let mut generator = Generator::with_clock(42, now - 60, now + 3600, &secret, move || now)?;
//!
//! let id = generator.generate()?;
//! assert_eq!(generator.inspect(id)?, (now, 42, 0));
//! # Ok::<(), randflake::RandflakeError>(())
//! ```

#![forbid(unsafe_code)]

pub mod base32;
mod config;
mod error;
pub mod layout;
mod generator;
pub mod sparx64;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{GeneratorConfig, GeneratorConfigBuilder, Lease};
pub use error::RandflakeError;
pub use generator::{Generator, SystemClock, TimeSource};
pub use sparx64::Sparx64;

pub use base32::DecodeError as Base32DecodeError;
pub use base32::{decode_id as decode_string, encode_id as encode_string};
pub use layout::{EPOCH_OFFSET, MAX_NODE, MAX_SEQUENCE, MAX_TIMESTAMP};
