//! Bit layout of a raw Randflake ID
//!
//! `timestamp (30) | node (17) | sequence (17)`, most significant bit first.
//! All 64 bits are used, so the top timestamp bit doubles as the sign bit
//! of the signed representation.

/// Sunday, October 27, 2024 3:33:20 AM UTC
pub const EPOCH_OFFSET: i64 = 1_730_000_000;

pub const TIMESTAMP_BITS: u32 = 30;
pub const NODE_BITS: u32 = 17;
pub const SEQUENCE_BITS: u32 = 17;

/// Tuesday, November 5, 2058 5:10:23 PM UTC
pub const MAX_TIMESTAMP: i64 = EPOCH_OFFSET + (1 << TIMESTAMP_BITS) - 1;
pub const MAX_NODE: u32 = (1 << NODE_BITS) - 1;
pub const MAX_SEQUENCE: u32 = (1 << SEQUENCE_BITS) - 1;

const NODE_SHIFT: u32 = SEQUENCE_BITS;
const TIMESTAMP_SHIFT: u32 = NODE_BITS + SEQUENCE_BITS;
const TIMESTAMP_MASK: u64 = (1 << TIMESTAMP_BITS) - 1;

/// Assemble a raw ID from its fields, masking each to its width
#[inline(always)]
pub const fn pack(timestamp_offset: u64, node_id: u32, sequence: u32) -> u64 {
    ((timestamp_offset & TIMESTAMP_MASK) << TIMESTAMP_SHIFT)
        | (((node_id & MAX_NODE) as u64) << NODE_SHIFT)
        | ((sequence & MAX_SEQUENCE) as u64)
}

/// Split a raw ID into `(timestamp_offset, node_id, sequence)`
#[inline(always)]
pub const fn unpack(raw: u64) -> (u64, u32, u32) {
    let timestamp_offset = raw >> TIMESTAMP_SHIFT;
    let node_id = ((raw >> NODE_SHIFT) as u32) & MAX_NODE;
    let sequence = (raw as u32) & MAX_SEQUENCE;
    (timestamp_offset, node_id, sequence)
}

/// Cipher input for an ID: its little-endian byte representation
#[inline(always)]
pub const fn to_block(id: i64) -> [u8; 8] {
    id.to_le_bytes()
}

#[inline(always)]
pub const fn from_block(block: [u8; 8]) -> i64 {
    i64::from_le_bytes(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(TIMESTAMP_BITS + NODE_BITS + SEQUENCE_BITS, 64);
        assert_eq!(MAX_NODE, 131071);
        assert_eq!(MAX_SEQUENCE, 131071);
        assert_eq!(MAX_TIMESTAMP, 2_803_741_823);
    }

    #[test]
    fn test_pack_unpack() {
        let raw = pack(3706297, 42, 1);
        assert_eq!(raw, (3706297 << 34) | (42 << 17) | 1);
        assert_eq!(unpack(raw), (3706297, 42, 1));
    }

    #[test]
    fn test_component_boundaries() {
        let max_ts = (1u64 << TIMESTAMP_BITS) - 1;
        let raw = pack(max_ts, MAX_NODE, MAX_SEQUENCE);
        assert_eq!(raw, u64::MAX);
        assert_eq!(unpack(raw), (max_ts, MAX_NODE, MAX_SEQUENCE));
        assert_eq!(pack(0, 0, 0), 0);
    }

    #[test]
    fn test_fields_do_not_bleed() {
        assert_eq!(pack(0, MAX_NODE + 1, 0), 0);
        assert_eq!(pack(0, 0, MAX_SEQUENCE + 1), 0);
        assert_eq!(unpack(pack(0, 1, 0)), (0, 1, 0));
        assert_eq!(unpack(pack(0, 0, 1)), (0, 0, 1));
    }

    #[test]
    fn test_high_timestamp_bit_is_sign_bit() {
        let raw = pack(1 << 29, 0, 0);
        assert!((raw as i64) < 0);
        assert!((pack((1 << 29) - 1, MAX_NODE, MAX_SEQUENCE) as i64) > 0);
    }

    #[test]
    fn test_block_is_little_endian() {
        assert_eq!(to_block(1), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(to_block(-1), [0xff; 8]);
        assert_eq!(from_block(to_block(i64::MIN)), i64::MIN);
        assert_eq!(from_block([0, 0, 0, 0, 0, 0, 0, 0x80]), i64::MIN);
    }
}
