//! SPARX-64/128 block cipher
//!
//! ARX cipher with a 64-bit block and a 128-bit key (8 steps of 3 rounds
//! over 2 branches). Blocks and keys are read as big-endian 16-bit words.
//!
//! The derived key schedule is zeroed by [`Sparx64::wipe`] and on drop. This
//! only clears the buffer owned by the cipher; copies the compiler made
//! earlier (moves, spills) are out of reach.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::RandflakeError;

/// Block size in bytes
pub const BLOCK_SIZE: usize = 8;

/// Key size in bytes
pub const KEY_SIZE: usize = 16;

const N_STEPS: usize = 8;
const ROUNDS_PER_STEP: usize = 3;
const N_BRANCHES: usize = 2;
const K_SIZE: usize = 4;

const SUBKEY_SLOTS: usize = N_BRANCHES * N_STEPS + 1;
const SLOT_WORDS: usize = 2 * ROUNDS_PER_STEP;

type Block = [u16; 2 * N_BRANCHES];
type KeyRegister = [u16; 2 * K_SIZE];
type Subkeys = [[u16; SLOT_WORDS]; SUBKEY_SLOTS];

/// Keyless SPECK-32 round
#[inline(always)]
const fn arx(l: u16, r: u16) -> (u16, u16) {
    let l = l.rotate_left(9).wrapping_add(r);
    let r = r.rotate_left(2) ^ l;
    (l, r)
}

#[inline(always)]
const fn arx_inv(l: u16, r: u16) -> (u16, u16) {
    let r = (r ^ l).rotate_right(2);
    let l = l.wrapping_sub(r).rotate_right(9);
    (l, r)
}

/// Linear layer mixing both branches, then swapping them
#[inline(always)]
fn linear(x: &mut Block) {
    let tmp = (x[0] ^ x[1]).rotate_left(8);
    x[2] ^= x[0] ^ tmp;
    x[3] ^= x[1] ^ tmp;
    x.swap(0, 2);
    x.swap(1, 3);
}

#[inline(always)]
fn linear_inv(x: &mut Block) {
    x.swap(0, 2);
    x.swap(1, 3);
    let tmp = (x[0] ^ x[1]).rotate_left(8);
    x[2] ^= x[0] ^ tmp;
    x[3] ^= x[1] ^ tmp;
}

fn permute_key(k: &mut KeyRegister, c: u16) {
    (k[0], k[1]) = arx(k[0], k[1]);
    k[2] = k[2].wrapping_add(k[0]);
    k[3] = k[3].wrapping_add(k[1]);
    k[7] = k[7].wrapping_add(c);
    k.rotate_right(2);
}

fn key_schedule(master: &mut KeyRegister) -> Subkeys {
    let mut subkeys = [[0u16; SLOT_WORDS]; SUBKEY_SLOTS];
    for (c, slot) in subkeys.iter_mut().enumerate() {
        slot.copy_from_slice(&master[..SLOT_WORDS]);
        permute_key(master, (c + 1) as u16);
    }
    subkeys
}

fn load(bytes: &[u8; BLOCK_SIZE]) -> Block {
    let mut x = [0u16; 2 * N_BRANCHES];
    for (word, pair) in x.iter_mut().zip(bytes.chunks_exact(2)) {
        *word = u16::from_be_bytes([pair[0], pair[1]]);
    }
    x
}

fn store(x: &Block) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (pair, word) in out.chunks_exact_mut(2).zip(x) {
        pair.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// SPARX-64/128 cipher instance holding a derived key schedule
pub struct Sparx64 {
    subkeys: Subkeys,
}

impl Sparx64 {
    /// Derive the key schedule from a 16-byte key
    pub fn new(key: &[u8]) -> Result<Self, RandflakeError> {
        if key.len() != KEY_SIZE {
            return Err(RandflakeError::InvalidKey { len: key.len() });
        }

        let mut master: KeyRegister = [0u16; 2 * K_SIZE];
        for (word, pair) in master.iter_mut().zip(key.chunks_exact(2)) {
            *word = u16::from_be_bytes([pair[0], pair[1]]);
        }

        let subkeys = key_schedule(&mut master);
        master.zeroize();

        Ok(Self { subkeys })
    }

    #[inline(always)]
    pub const fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Encrypt a single 8-byte block
    #[inline]
    pub fn encrypt_block(&self, block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let k = &self.subkeys;
        let mut x = load(&block);

        for s in 0..N_STEPS {
            for b in 0..N_BRANCHES {
                let slot = &k[N_BRANCHES * s + b];
                for r in 0..ROUNDS_PER_STEP {
                    x[2 * b] ^= slot[2 * r];
                    x[2 * b + 1] ^= slot[2 * r + 1];
                    (x[2 * b], x[2 * b + 1]) = arx(x[2 * b], x[2 * b + 1]);
                }
            }
            linear(&mut x);
        }

        let whitening = &k[N_BRANCHES * N_STEPS];
        for b in 0..N_BRANCHES {
            x[2 * b] ^= whitening[2 * b];
            x[2 * b + 1] ^= whitening[2 * b + 1];
        }

        store(&x)
    }

    /// Decrypt a single 8-byte block
    #[inline]
    pub fn decrypt_block(&self, block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let k = &self.subkeys;
        let mut x = load(&block);

        let whitening = &k[N_BRANCHES * N_STEPS];
        for b in 0..N_BRANCHES {
            x[2 * b] ^= whitening[2 * b];
            x[2 * b + 1] ^= whitening[2 * b + 1];
        }

        for s in (0..N_STEPS).rev() {
            linear_inv(&mut x);
            for b in 0..N_BRANCHES {
                let slot = &k[N_BRANCHES * s + b];
                for r in (0..ROUNDS_PER_STEP).rev() {
                    (x[2 * b], x[2 * b + 1]) = arx_inv(x[2 * b], x[2 * b + 1]);
                    x[2 * b] ^= slot[2 * r];
                    x[2 * b + 1] ^= slot[2 * r + 1];
                }
            }
        }

        store(&x)
    }

    /// Encrypt `src` into `dst`; both must be exactly one block long
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), RandflakeError> {
        let block = Self::check_buffers(dst, src)?;
        dst.copy_from_slice(&self.encrypt_block(block));
        Ok(())
    }

    /// Decrypt `src` into `dst`; both must be exactly one block long
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), RandflakeError> {
        let block = Self::check_buffers(dst, src)?;
        dst.copy_from_slice(&self.decrypt_block(block));
        Ok(())
    }

    fn check_buffers(dst: &[u8], src: &[u8]) -> Result<[u8; BLOCK_SIZE], RandflakeError> {
        if dst.len() != BLOCK_SIZE {
            return Err(RandflakeError::InvalidBuffer { len: dst.len() });
        }
        src.try_into()
            .map_err(|_| RandflakeError::InvalidBuffer { len: src.len() })
    }

    /// Zero the derived key schedule in place
    pub fn wipe(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for Sparx64 {
    fn zeroize(&mut self) {
        self.subkeys.zeroize();
    }
}

impl Drop for Sparx64 {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl ZeroizeOnDrop for Sparx64 {}

impl fmt::Debug for Sparx64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sparx64").finish_non_exhaustive()
    }
}
