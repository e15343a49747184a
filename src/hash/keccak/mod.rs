//! Keccak-f[1600] and the SHA-3/SHAKE family (FIPS 202): 5×5 lane state,
//! 24-round permutation, sponge absorb/squeeze.

mod computations;
mod core;

pub use core::{
    Keccak, keccak, keccak_into, rawshake128l, rawshake256l, sha3_224, sha3_224_into, sha3_256,
    sha3_256_into, sha3_384, sha3_384_into, sha3_512, sha3_512_into, shake128, shake128l,
    shake128l_into, shake256, shake256l, shake256l_into,
};
