/// Base32hex encoding and decoding for Randflake IDs
///
/// Digits `0-9a-v`, most significant digit first, no padding. Negative IDs
/// are encoded through their two's-complement bit pattern.
use once_cell::sync::Lazy;

/// Character set for base32hex encoding (0-9, a-v)
const BASE32_CHARS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Lookup table for decoding base32hex characters, accepting A-V as well
static DECODE_MAP: Lazy<[i8; 128]> = Lazy::new(|| {
    let mut map = [-1i8; 128];
    for (i, &c) in BASE32_CHARS.iter().enumerate() {
        map[c as usize] = i as i8;
        map[c.to_ascii_uppercase() as usize] = i as i8;
    }
    map
});

/// Maximum length of a base32hex encoded u64 (13 characters)
pub const MAX_LEN: usize = 13;

/// Encode a u64 to a base32hex string
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return "0".to_string();
    }

    let mut buffer = [0u8; MAX_LEN];
    let mut position = MAX_LEN;

    while id > 0 {
        position -= 1;
        buffer[position] = BASE32_CHARS[(id & 0x1f) as usize];
        id >>= 5;
    }

    String::from_utf8_lossy(&buffer[position..]).into_owned()
}

/// Encode a signed ID through its unsigned bit pattern
#[inline]
pub fn encode_id(id: i64) -> String {
    encode(id as u64)
}

/// Decode a base32hex string to a u64
///
/// Decoding stops at the first `=`, so padded input is accepted.
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    let digits = encoded.split('=').next().unwrap_or_default();
    if digits.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let mut result: u64 = 0;
    for c in digits.chars() {
        let value = match DECODE_MAP.get(c as usize) {
            Some(&v) if v >= 0 => v as u64,
            _ => return Err(DecodeError::InvalidCharacter(c)),
        };

        result = result.checked_mul(32).ok_or(DecodeError::Overflow)? | value;
    }

    Ok(result)
}

/// Decode a base32hex string back into a signed ID
#[inline]
pub fn decode_id(encoded: &str) -> Result<i64, DecodeError> {
    decode(encoded).map(|v| v as i64)
}

/// Errors that can occur during base32hex decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("cannot decode an empty string")]
    EmptyString,

    /// The input string contains an invalid character
    #[error("invalid base32hex character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("decoded value would overflow u64")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let test_cases = [
            0u64,
            1,
            31,
            32,
            1000,
            1_000_000_000_000,
            i64::MAX as u64,
            u64::MAX / 2 + 1,
            u64::MAX,
        ];

        for &id in &test_cases {
            let encoded = encode(id);
            assert!(encoded.len() <= MAX_LEN);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(decoded, id, "Failed roundtrip for {}", id);
        }
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(31), "v");
        assert_eq!(encode(32), "10");
        assert_eq!(encode(1000), "v8");
        assert_eq!(encode(u64::MAX), "fvvvvvvvvvvvv");
        assert_eq!(encode(4594531474933654033), "3vgoe12ccb8gh");
    }

    #[test]
    fn test_negative_ids_use_bit_pattern() {
        assert_eq!(encode_id(-1), "fvvvvvvvvvvvv");
        assert_eq!(encode_id(i64::MIN), "8000000000000");
        assert_eq!(decode_id("fvvvvvvvvvvvv"), Ok(-1));
        assert_eq!(decode_id(&encode_id(i64::MIN)), Ok(i64::MIN));
    }

    #[test]
    fn test_decode_case_and_padding() {
        assert_eq!(decode("3VGOE12CCB8GH"), Ok(4594531474933654033));
        assert_eq!(decode("v8==="), Ok(1000));
        assert_eq!(decode("V8"), Ok(1000));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode(""), Err(DecodeError::EmptyString));
        assert_eq!(decode("==="), Err(DecodeError::EmptyString));
        assert_eq!(decode("w"), Err(DecodeError::InvalidCharacter('w')));
        assert_eq!(decode("a!b"), Err(DecodeError::InvalidCharacter('!')));
        assert_eq!(decode("1é"), Err(DecodeError::InvalidCharacter('é')));
        assert_eq!(decode("g000000000000"), Err(DecodeError::Overflow));
        assert_eq!(decode("10000000000000"), Err(DecodeError::Overflow));
    }
}
