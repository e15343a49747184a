//! Cryptographic hash primitives: MD5, SHA-1, the SHA-2 family, and the
//! SHA-3/Keccak family.
//!
//! Every algorithm here exposes the same two layers:
//!
//! - a streaming context (`Md5`, `Sha1`, `Sha2_32`, `Sha2_64`, `Keccak`)
//!   with `absorb`/`finalize` for incremental input, and
//! - stateless one-shot functions (`md5`, `sha256`, `sha3_256`, ...) for
//!   the common case of hashing a single buffer.
//!
//! `absorb` is associative: splitting input into any chunking produces
//! an identical digest to hashing it whole. Every one-shot function has
//! a `_into` counterpart that writes into a caller-supplied buffer
//! instead of allocating one, surfacing [`crate::error::Error`] when
//! that buffer (or a variable-length request) is invalid.
//!
//! Block buffering, padding, and the full/partial-block absorb loop are
//! factored once in [`buffer`] and shared by the four Merkle–Damgård
//! engines (MD5, SHA-1, SHA-2-32, SHA-2-64); Keccak's sponge uses a
//! run-time bitrate instead and keeps its own buffering (see
//! `keccak::core`).

pub(crate) mod buffer;

pub mod keccak;
pub mod md5;
pub mod sha1;
pub mod sha2_32;
pub mod sha2_64;

pub use keccak::{
    Keccak, keccak as keccak_hash, keccak_into, rawshake128l, rawshake256l, sha3_224,
    sha3_224_into, sha3_256, sha3_256_into, sha3_384, sha3_384_into, sha3_512, sha3_512_into,
    shake128, shake128l, shake128l_into, shake256, shake256l, shake256l_into,
};
pub use md5::{Md5, md5, md5_into};
pub use sha1::{Sha1, sha1, sha1_into};
pub use sha2_32::{Sha2_32, sha224, sha224_into, sha256, sha256_into};
pub use sha2_64::{
    Sha2_64, sha384, sha384_into, sha512, sha512_224, sha512_224_into, sha512_256,
    sha512_256_into, sha512_into, sha512t, sha512t_into,
};
