//! SHA-2 (64-bit) family (FIPS 180-4): 8-word big-endian state over
//! 128-byte blocks, 80-round compression, shared by SHA-384, SHA-512,
//! SHA-512/224, SHA-512/256, and the parametric SHA-512/t.

mod computations;
mod core;

pub use core::{
    Sha2_64, sha384, sha384_into, sha512, sha512_224, sha512_224_into, sha512_256,
    sha512_256_into, sha512_into, sha512t, sha512t_into,
};
