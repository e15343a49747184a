//! Splitting input into any chunking must produce the same digest as
//! absorbing it whole, for every streaming context in the crate.

use cryptal::hash::{Keccak, Md5, Sha1, Sha2_32, Sha2_64};
use proptest::collection::vec;
use proptest::prelude::*;

fn split_at(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for &cut in cuts {
        let end = (start + cut).min(data.len());
        pieces.push(data[start..end].to_vec());
        start = end;
    }
    pieces.push(data[start..].to_vec());
    pieces
}

proptest! {
    #[test]
    fn md5_chunking_is_associative(data in vec(any::<u8>(), 0..4096), cuts in vec(1usize..200, 0..20)) {
        let whole = {
            let mut ctx = Md5::new();
            ctx.absorb(&data);
            ctx.finalize()
        };
        let chunked = {
            let mut ctx = Md5::new();
            for piece in split_at(&data, &cuts) {
                ctx.absorb(&piece);
            }
            ctx.finalize()
        };
        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn sha1_chunking_is_associative(data in vec(any::<u8>(), 0..4096), cuts in vec(1usize..200, 0..20)) {
        let whole = {
            let mut ctx = Sha1::new();
            ctx.absorb(&data);
            ctx.finalize()
        };
        let chunked = {
            let mut ctx = Sha1::new();
            for piece in split_at(&data, &cuts) {
                ctx.absorb(&piece);
            }
            ctx.finalize()
        };
        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn sha256_chunking_is_associative(data in vec(any::<u8>(), 0..4096), cuts in vec(1usize..200, 0..20)) {
        let whole = {
            let mut ctx = Sha2_32::new_256();
            ctx.absorb(&data);
            ctx.finalize()
        };
        let chunked = {
            let mut ctx = Sha2_32::new_256();
            for piece in split_at(&data, &cuts) {
                ctx.absorb(&piece);
            }
            ctx.finalize()
        };
        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn sha512_chunking_is_associative(data in vec(any::<u8>(), 0..4096), cuts in vec(1usize..300, 0..20)) {
        let whole = {
            let mut ctx = Sha2_64::new_512();
            ctx.absorb(&data);
            ctx.finalize()
        };
        let chunked = {
            let mut ctx = Sha2_64::new_512();
            for piece in split_at(&data, &cuts) {
                ctx.absorb(&piece);
            }
            ctx.finalize()
        };
        prop_assert_eq!(whole, chunked);
    }

    #[test]
    fn sha3_256_chunking_is_associative(data in vec(any::<u8>(), 0..4096), cuts in vec(1usize..200, 0..20)) {
        let whole = {
            let mut ctx = Keccak::new_sha3_256();
            ctx.absorb(&data);
            ctx.finalize()
        };
        let chunked = {
            let mut ctx = Keccak::new_sha3_256();
            for piece in split_at(&data, &cuts) {
                ctx.absorb(&piece);
            }
            ctx.finalize()
        };
        prop_assert_eq!(whole, chunked);
    }
}
