//! SHA-2 (32-bit) family (FIPS 180-4): 8-word big-endian state, 64-round
//! compression, shared by SHA-224 and SHA-256.

mod computations;
mod core;

pub use core::{Sha2_32, sha224, sha224_into, sha256, sha256_into};
