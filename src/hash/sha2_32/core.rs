//! SHA-2 (32-bit) core hashing functions
//!
//! This module implements the shared core logic behind SHA-224 and SHA-256,
//! as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a streaming [`Sha2_32`] context parameterized by initial state and
//!   digest length
//! - the SHA-224 and SHA-256 one-shot convenience functions
//!
//! SHA-224 and SHA-256 share every round of compression; they differ only
//! in their initial state and in how much of the final state is emitted
//! (SHA-224 drops the last 32-bit word). Representing that as one
//! generic context avoids duplicating the compression loop per variant.

use crate::error::Error;
use crate::hash::buffer::BlockBuffer;
use crate::hash::sha2_32::computations::all_rounds;

const BLOCK_BYTES: usize = 64;

pub(crate) const H224_INIT: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

pub(crate) const H256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Compresses a single 512-bit message block, updating `state` in place.
///
/// Input words are interpreted as big-endian, as required by SHA-2.
fn compress(block: &[u8; BLOCK_BYTES], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// A streaming SHA-224/SHA-256 context.
///
/// The full 32-byte state is always computed; `digest_len` (28 or 32)
/// controls how many leading bytes of its big-endian serialization are
/// returned from `finalize` — SHA-224's output is exactly that
/// truncation of a state run under a distinct initial vector (FIPS
/// 180-4 §5.3.2).
#[derive(Clone)]
pub struct Sha2_32 {
    buffer: BlockBuffer<BLOCK_BYTES>,
    state: [u32; 8],
    digest_len: usize,
}

impl Sha2_32 {
    const fn new(iv: [u32; 8], digest_len: usize) -> Self {
        Self {
            buffer: BlockBuffer::new(),
            state: iv,
            digest_len,
        }
    }

    /// Creates a fresh SHA-224 context.
    pub const fn new_224() -> Self {
        Self::new(H224_INIT, 28)
    }

    /// Creates a fresh SHA-256 context.
    pub const fn new_256() -> Self {
        Self::new(H256_INIT, 32)
    }

    /// Absorbs more input into the running message.
    pub fn absorb(&mut self, input: &[u8]) {
        let state = &mut self.state;
        self.buffer.absorb(input, |block| compress(block, state));
    }

    /// Applies SHA-2 padding, finishes compression, and returns the
    /// digest (28 bytes for SHA-224, 32 for SHA-256), consuming the
    /// context.
    pub fn finalize(self) -> Vec<u8> {
        let digest_len = self.digest_len;
        let mut state = self.state;
        self.buffer.finalize_padded(
            8,
            |bits, dst| dst.copy_from_slice(&(bits as u64).to_be_bytes()),
            |block| compress(block, &mut state),
        );

        let mut full = [0u8; 32];
        for (word, chunk) in state.iter().zip(full.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        full[..digest_len].to_vec()
    }

    /// Like [`Sha2_32::finalize`], but writes the digest into a
    /// caller-supplied buffer instead of allocating.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), Error> {
        let digest_len = self.digest_len;
        if out.len() < digest_len {
            return Err(Error::BufferTooSmall {
                needed: digest_len,
                provided: out.len(),
            });
        }
        let digest = self.finalize();
        out[..digest_len].copy_from_slice(&digest);
        Ok(())
    }
}

/// Computes the SHA-224 digest of `input` in one call.
pub fn sha224(input: &[u8]) -> [u8; 28] {
    let mut ctx = Sha2_32::new_224();
    ctx.absorb(input);
    ctx.finalize().try_into().unwrap()
}

/// Computes the SHA-256 digest of `input` in one call.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut ctx = Sha2_32::new_256();
    ctx.absorb(input);
    ctx.finalize().try_into().unwrap()
}

/// Like [`sha224`], but writes into a caller-supplied buffer.
pub fn sha224_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_32::new_224();
    ctx.absorb(input);
    ctx.finalize_into(out)
}

/// Like [`sha256`], but writes into a caller-supplied buffer.
pub fn sha256_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_32::new_256();
    ctx.absorb(input);
    ctx.finalize_into(out)
}
