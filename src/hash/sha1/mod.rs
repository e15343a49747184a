//! SHA-1 (FIPS 180-4): 5-word big-endian state, 80-round compression.

mod computations;
mod core;

pub use core::{sha1, sha1_into, Sha1};
