//! SHA-2 (64-bit) core hashing functions
//!
//! This module implements the shared core logic behind SHA-384, SHA-512,
//! SHA-512/224, SHA-512/256, and the parametric SHA-512/t, as defined in
//! FIPS 180-4.
//!
//! All five variants share one compression function over 1024-bit blocks
//! and a 128-bit bit-length counter; they differ only in their initial
//! state and in how much of the final 64-byte big-endian state is kept.
//! SHA-512/t additionally needs a run-time-derived initial state (§5.3.6.1
//! of the standard), computed once per `t` by hashing the literal text
//! `"SHA-512/<t>"` under a dedicated generator IV.

use crate::error::Error;
use crate::hash::buffer::BlockBuffer;
use crate::hash::sha2_64::computations::all_rounds;

const BLOCK_BYTES: usize = 128;

pub(crate) const H384_INIT: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

pub(crate) const H512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

pub(crate) const H512_224_INIT: [u64; 8] = [
    0x8c3d37c819544da2, 0x73e1996689dcd4d6, 0x1dfab7ae32ff9c82, 0x679dd514582f9fcf,
    0x0f6d2b697bd44da8, 0x77e36f7304c48942, 0x3f9d85a86a1d36c8, 0x1112e6ad91d692a1,
];

pub(crate) const H512_256_INIT: [u64; 8] = [
    0x22312194fc2bf72c, 0x9f555fa3c84c64c2, 0x2393b86b6f53b151, 0x963877195940eabd,
    0x96283ee2a88effe3, 0xbe5e1e2553863992, 0x2b0199fc2c85b8aa, 0x0eb72ddc81c52ca2,
];

/// Generator IV for SHA-512/t (FIPS 180-4 §5.3.6): each word equals the
/// standard SHA-512 IV word XOR the repeating byte `0xa5`.
const fn generator_iv() -> [u64; 8] {
    let mut out = [0u64; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = H512_INIT[i] ^ 0xa5a5a5a5a5a5a5a5;
        i += 1;
    }
    out
}

const T_GENERATOR_IV: [u64; 8] = generator_iv();

/// Compresses a single 1024-bit message block, updating `state` in place.
///
/// Message words are interpreted as big-endian, as required by SHA-2.
fn compress(block: &[u8; BLOCK_BYTES], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Serializes the full 8-word state big-endian and derives it into a new
/// run-time IV by hashing `"SHA-512/<t>"` under the generator IV, per FIPS
/// 180-4 §5.3.6.1. This is the one piece of SHA-512/t that cannot be
/// expressed as "construct with IV X"; it runs a private SHA-512-shaped
/// hash ahead of the caller's actual message.
fn derive_t_iv(t: u32) -> [u64; 8] {
    let label = format!("SHA-512/{t}");

    let mut state = T_GENERATOR_IV;
    let mut buffer = BlockBuffer::<BLOCK_BYTES>::new();
    buffer.absorb(label.as_bytes(), |block| compress(block, &mut state));
    buffer.finalize_padded(
        16,
        |bits, dst| dst.copy_from_slice(&bits.to_be_bytes()),
        |block| compress(block, &mut state),
    );

    state
}

/// A streaming SHA-384/SHA-512/SHA-512-224/SHA-512-256/SHA-512-t context.
///
/// The full 64-byte state is always computed; `digest_len` controls how
/// many leading bytes of its big-endian serialization `finalize` returns.
/// Every fixed-output variant's digest is exactly that truncation of a
/// state run under its own initial vector — this holds even for
/// SHA-512/224, whose 28-byte digest is the first 24 bytes plus the top
/// 4 bytes of the state's fourth word, which is simply its first 28
/// big-endian bytes.
#[derive(Clone)]
pub struct Sha2_64 {
    buffer: BlockBuffer<BLOCK_BYTES>,
    state: [u64; 8],
    digest_len: usize,
}

impl Sha2_64 {
    const fn with_iv(iv: [u64; 8], digest_len: usize) -> Self {
        Self {
            buffer: BlockBuffer::new(),
            state: iv,
            digest_len,
        }
    }

    /// Creates a fresh SHA-384 context.
    pub const fn new_384() -> Self {
        Self::with_iv(H384_INIT, 48)
    }

    /// Creates a fresh SHA-512 context.
    pub const fn new_512() -> Self {
        Self::with_iv(H512_INIT, 64)
    }

    /// Creates a fresh SHA-512/224 context.
    pub const fn new_512_224() -> Self {
        Self::with_iv(H512_224_INIT, 28)
    }

    /// Creates a fresh SHA-512/256 context.
    pub const fn new_512_256() -> Self {
        Self::with_iv(H512_256_INIT, 32)
    }

    /// Creates a fresh SHA-512/t context for the given bit length `t`.
    ///
    /// `t` must be a positive integer less than 512, other than 384
    /// (`t == 384` would collide with the distinctly-seeded SHA-384 and is
    /// excluded by the standard; `t >= 512` either has no representation in
    /// the 64-byte state this engine produces or, at exactly 512, simply
    /// duplicates plain SHA-512 rather than deriving a distinct IV, which
    /// FIPS 180-4 does not define. SHA-512/224 and SHA-512/256 should be
    /// reached via their own constructors, which use the standard's
    /// precomputed IVs rather than re-deriving them).
    pub fn new_t(t: u32) -> Result<Self, Error> {
        if t == 0 || t == 384 || t >= 512 {
            return Err(Error::InvalidParameter(
                "SHA-512/t requires 0 < t < 512 and t != 384",
            ));
        }

        let digest_len = ((t as usize) + 7) / 8;
        Ok(Self::with_iv(derive_t_iv(t), digest_len))
    }

    /// Absorbs more input into the running message.
    pub fn absorb(&mut self, input: &[u8]) {
        let state = &mut self.state;
        self.buffer.absorb(input, |block| compress(block, state));
    }

    /// Applies SHA-2 padding, finishes compression, and returns the
    /// digest, consuming the context.
    pub fn finalize(self) -> Vec<u8> {
        let digest_len = self.digest_len;
        let mut state = self.state;
        self.buffer.finalize_padded(
            16,
            |bits, dst| dst.copy_from_slice(&bits.to_be_bytes()),
            |block| compress(block, &mut state),
        );

        let mut full = [0u8; 64];
        for (word, chunk) in state.iter().zip(full.chunks_exact_mut(8)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        full[..digest_len].to_vec()
    }

    /// Like [`Sha2_64::finalize`], but writes the digest into a
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

/// Computes the SHA-384 digest of `input` in one call.
pub fn sha384(input: &[u8]) -> [u8; 48] {
    let mut ctx = Sha2_64::new_384();
    ctx.absorb(input);
    ctx.finalize().try_into().unwrap()
}

/// Computes the SHA-512 digest of `input` in one call.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut ctx = Sha2_64::new_512();
    ctx.absorb(input);
    ctx.finalize().try_into().unwrap()
}

/// Computes the SHA-512/224 digest of `input` in one call.
pub fn sha512_224(input: &[u8]) -> [u8; 28] {
    let mut ctx = Sha2_64::new_512_224();
    ctx.absorb(input);
    ctx.finalize().try_into().unwrap()
}

/// Computes the SHA-512/256 digest of `input` in one call.
pub fn sha512_256(input: &[u8]) -> [u8; 32] {
    let mut ctx = Sha2_64::new_512_256();
    ctx.absorb(input);
    ctx.finalize().try_into().unwrap()
}

/// Computes the SHA-512/t digest of `input` in one call, `t` bits wide
/// (`⌈t/8⌉` bytes). `t` must satisfy `0 < t < 512` and `t != 384`.
pub fn sha512t(input: &[u8], t: u32) -> Result<Vec<u8>, Error> {
    let mut ctx = Sha2_64::new_t(t)?;
    ctx.absorb(input);
    Ok(ctx.finalize())
}

/// Like [`sha384`], but writes into a caller-supplied buffer.
pub fn sha384_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_64::new_384();
    ctx.absorb(input);
    ctx.finalize_into(out)
}

/// Like [`sha512`], but writes into a caller-supplied buffer.
pub fn sha512_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_64::new_512();
    ctx.absorb(input);
    ctx.finalize_into(out)
}

/// Like [`sha512_224`], but writes into a caller-supplied buffer.
pub fn sha512_224_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_64::new_512_224();
    ctx.absorb(input);
    ctx.finalize_into(out)
}

/// Like [`sha512_256`], but writes into a caller-supplied buffer.
pub fn sha512_256_into(input: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_64::new_512_256();
    ctx.absorb(input);
    ctx.finalize_into(out)
}

/// Like [`sha512t`], but writes into a caller-supplied buffer.
pub fn sha512t_into(input: &[u8], t: u32, out: &mut [u8]) -> Result<(), Error> {
    let mut ctx = Sha2_64::new_t(t)?;
    ctx.absorb(input);
    ctx.finalize_into(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha384_abc_vector() {
        assert_eq!(
            hex::encode(sha384(b"abc")),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5be\
             d8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn sha512_empty_vector() {
        assert_eq!(
            hex::encode(sha512(b"")),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9c\
             e47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn sha512_abc_vector() {
        assert_eq!(
            hex::encode(sha512(b"abc")),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39\
             a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn sha512_224_abc_vector() {
        assert_eq!(
            hex::encode(sha512_224(b"abc")),
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
        );
    }

    #[test]
    fn sha512_256_abc_vector() {
        assert_eq!(
            hex::encode(sha512_256(b"abc")),
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    #[test]
    fn sha512t_224_matches_sha512_224() {
        let msg = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(sha512t(msg, 224).unwrap(), sha512_224(msg));
    }

    #[test]
    fn sha512t_256_matches_sha512_256() {
        let msg = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(sha512t(msg, 256).unwrap(), sha512_256(msg));
    }

    #[test]
    fn sha512t_rejects_384() {
        assert!(Sha2_64::new_t(384).is_err());
    }

    #[test]
    fn sha512t_rejects_zero() {
        assert!(Sha2_64::new_t(0).is_err());
    }

    #[test]
    fn sha512t_rejects_over_512() {
        assert!(Sha2_64::new_t(513).is_err());
        assert!(Sha2_64::new_t(600).is_err());
        assert!(Sha2_64::new_t(512).is_err());
        assert!(Sha2_64::new_t(511).is_ok());
    }

    #[test]
    fn chunked_matches_one_shot() {
        let msg = [0x61u8; 1_000_000];
        let whole = sha512(&msg);

        let mut ctx = Sha2_64::new_512();
        for chunk in msg.chunks(4099) {
            ctx.absorb(chunk);
        }
        assert_eq!(&ctx.finalize()[..], &whole[..]);
    }
}
