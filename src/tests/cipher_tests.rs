#[cfg(test)]
mod tests {
    use crate::sparx64::{Sparx64, BLOCK_SIZE};
    use crate::tests::test_utils::{assert_unique_ids, hex_bytes};
    use crate::RandflakeError;
    use rand::Rng;

    const KEY: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const PLAINTEXT: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
    const CIPHERTEXT: [u8; 8] = [0x2b, 0xbe, 0xf1, 0x52, 0x01, 0xf5, 0x5f, 0x98];

    #[test]
    fn test_known_answer() {
        let s = Sparx64::new(&KEY).unwrap();

        let mut encrypted = [0u8; 8];
        s.encrypt(&mut encrypted, &PLAINTEXT).unwrap();
        assert_eq!(encrypted, CIPHERTEXT);

        let mut decrypted = [0u8; 8];
        s.decrypt(&mut decrypted, &encrypted).unwrap();
        assert_eq!(decrypted, PLAINTEXT);
    }

    #[test]
    fn test_known_answer_block_api() {
        let s = Sparx64::new(&hex_bytes("00112233445566778899aabbccddeeff")).unwrap();
        assert_eq!(s.encrypt_block(PLAINTEXT), CIPHERTEXT);
        assert_eq!(s.decrypt_block(CIPHERTEXT), PLAINTEXT);
    }

    #[test]
    fn test_random_roundtrip() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut key = [0u8; 16];
            rng.fill(&mut key);
            let s = Sparx64::new(&key).unwrap();

            for _ in 0..20 {
                let mut block = [0u8; BLOCK_SIZE];
                rng.fill(&mut block);
                assert_eq!(s.decrypt_block(s.encrypt_block(block)), block);
            }
        }
    }

    #[test]
    fn test_edge_blocks_roundtrip() {
        let s = Sparx64::new(&KEY).unwrap();
        for block in [[0u8; 8], [0xff; 8], [0x80, 0, 0, 0, 0, 0, 0, 0]] {
            let encrypted = s.encrypt_block(block);
            assert_ne!(encrypted, block);
            assert_eq!(s.decrypt_block(encrypted), block);
        }
    }

    #[test]
    fn test_distinct_plaintexts_stay_distinct() {
        let s = Sparx64::new(&KEY).unwrap();
        let ciphertexts: Vec<[u8; 8]> = (0u64..4096)
            .map(|i| s.encrypt_block(i.to_le_bytes()))
            .collect();
        assert_unique_ids(&ciphertexts, 4096);
    }

    #[test]
    fn test_key_changes_ciphertext() {
        let a = Sparx64::new(&KEY).unwrap();
        let mut other = KEY;
        other[15] ^= 1;
        let b = Sparx64::new(&other).unwrap();
        assert_ne!(a.encrypt_block(PLAINTEXT), b.encrypt_block(PLAINTEXT));
    }

    #[test]
    fn test_invalid_key() {
        for len in [0usize, 8, 15, 17, 32] {
            let key = vec![0u8; len];
            assert_eq!(
                Sparx64::new(&key).unwrap_err(),
                RandflakeError::InvalidKey { len }
            );
        }
    }

    #[test]
    fn test_invalid_buffer() {
        let s = Sparx64::new(&KEY).unwrap();

        let mut dst = [0u8; 8];
        assert_eq!(
            s.encrypt(&mut dst, &[0u8; 7]),
            Err(RandflakeError::InvalidBuffer { len: 7 })
        );
        assert_eq!(
            s.decrypt(&mut dst, &[0u8; 9]),
            Err(RandflakeError::InvalidBuffer { len: 9 })
        );

        let mut short = [0u8; 4];
        assert_eq!(
            s.encrypt(&mut short, &PLAINTEXT),
            Err(RandflakeError::InvalidBuffer { len: 4 })
        );
        let mut long = [0u8; 16];
        assert_eq!(
            s.decrypt(&mut long, &CIPHERTEXT),
            Err(RandflakeError::InvalidBuffer { len: 16 })
        );
        assert_eq!(dst, [0u8; 8], "failed calls must not touch dst");
    }

    #[test]
    fn test_wipe_changes_output() {
        let mut s = Sparx64::new(&KEY).unwrap();
        s.wipe();
        assert_ne!(s.encrypt_block(PLAINTEXT), CIPHERTEXT);
    }
}
