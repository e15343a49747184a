//! MD5 core hashing functions
//!
//! This module implements the core logic of the MD5 cryptographic hash
//! function as defined in RFC 1321.
//!
//! It provides:
//! - a streaming [`Md5`] context for incremental absorption
//! - a complete one-shot [`md5`] function for arbitrary-length input
//!
//! Unlike SHA-1 and the SHA-2 family, MD5 loads its message words and
//! emits its state in little-endian order.

use crate::error::Error;
use crate::hash::buffer::BlockBuffer;
use crate::hash::md5::computations::all_rounds;

const BLOCK_BYTES: usize = 64;

const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Compresses a single 512-bit message block, updating `state` in place.
///
/// Message words are interpreted as little-endian, as required by MD5.
fn compress(block: &[u8; BLOCK_BYTES], state: &mut [u32; 4]) {
    let mut schedule = [0u32; 16];
    for (slot, chunk) in schedule.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, schedule);
}

/// A streaming MD5 context.
///
/// `absorb` may be called any number of times with any chunking; the
/// digest produced by `finalize` depends only on the concatenation of all
/// absorbed bytes.
#[derive(Clone)]
pub struct Md5 {
    buffer: BlockBuffer<BLOCK_BYTES>,
    state: [u32; 4],
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5 {
    /// Creates a fresh context with MD5's initial state.
    pub const fn new() -> Self {
        Self {
            buffer: BlockBuffer::new(),
            state: H0,
        }
    }

    /// Absorbs more input into the running message.
    pub fn absorb(&mut self, input: &[u8]) {
        let state = &mut self.state;
        self.buffer.absorb(input, |block| compress(block, state));
    }

    /// Applies MD5 padding, finishes compression, and returns the 16-byte
    /// digest, consuming the context.
    pub fn finalize(self) -> [u8; 16] {
        let mut state = self.state;
        self.buffer.finalize_padded(
            8,
            |bits, dst| dst.copy_from_slice(&(bits as u64).to_le_bytes()),
            |block| compress(block, &mut state),
        );

        let mut out = [0u8; 16];
        for (word, chunk) in state.iter().zip(out.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Like [`Md5::finalize`], but writes the digest into a caller-supplied
    /// buffer instead of allocating a new array.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), Error> {
        let digest = self.finalize();
        if out.len() < digest.len() {
            return Err(Error::BufferTooSmall {
                needed: digest.len(),
                provided: out.len(),
            });
        }
        out[..digest.len()].copy_from_slice(&digest);
        Ok(())
    }
}

/// Computes the MD5 digest of `input` in one call.
pub fn md5(input: &[u8]) -> [u8; 16] {
    let mut ctx = Md5::new();
    ctx.absorb(input);
    ctx.finalize()
}

/// Like [`md5`], but writes into a caller-supplied buffer.
pub fn md5_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Md5::new();
    ctx.absorb(input);
    ctx.finalize_into(out)
}
