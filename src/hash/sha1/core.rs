//! SHA-1 core hashing functions
//!
//! Implements SHA-1 as defined in FIPS 180-4: a 5-word big-endian state
//! over 64-byte blocks, 80-round compression with on-the-fly message
//! schedule expansion.

use crate::error::Error;
use crate::hash::buffer::BlockBuffer;
use crate::hash::sha1::computations::all_rounds;

const BLOCK_BYTES: usize = 64;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

fn compress(block: &[u8; BLOCK_BYTES], state: &mut [u32; 5]) {
    let mut w = [0u32; 16];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// A streaming SHA-1 context.
#[derive(Clone)]
pub struct Sha1 {
    buffer: BlockBuffer<BLOCK_BYTES>,
    state: [u32; 5],
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    /// Creates a fresh context with SHA-1's initial state.
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

    /// Applies SHA-1 padding, finishes compression, and returns the
    /// 20-byte digest, consuming the context.
    pub fn finalize(self) -> [u8; 20] {
        let mut state = self.state;
        self.buffer.finalize_padded(
            8,
            |bits, dst| dst.copy_from_slice(&(bits as u64).to_be_bytes()),
            |block| compress(block, &mut state),
        );

        let mut out = [0u8; 20];
        for (word, chunk) in state.iter().zip(out.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Like [`Sha1::finalize`], but writes the digest into a caller-supplied
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

/// Computes the SHA-1 digest of `input` in one call.
pub fn sha1(input: &[u8]) -> [u8; 20] {
    let mut ctx = Sha1::new();
    ctx.absorb(input);
    ctx.finalize()
}

/// Like [`sha1`], but writes into a caller-supplied buffer.
pub fn sha1_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha1::new();
    ctx.absorb(input);
    ctx.finalize_into(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vector() {
        assert_eq!(
            hex::encode(sha1(b"")),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn abc_vector() {
        assert_eq!(
            hex::encode(sha1(b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn chunked_matches_one_shot() {
        let msg = [0x61u8; 1_000_000];
        let whole = sha1(&msg);

        let mut ctx = Sha1::new();
        for chunk in msg.chunks(4099) {
            ctx.absorb(chunk);
        }
        assert_eq!(ctx.finalize(), whole);
    }
}
