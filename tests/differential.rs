//! Cross-checks against the RustCrypto reference implementations, over
//! randomized inputs, for every algorithm family this crate implements.

use digest::Digest;
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn md5_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::md5(&data);
        let theirs = md5::Md5::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha1_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha1(&data);
        let theirs = sha1::Sha1::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha224_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha224(&data);
        let theirs = sha2::Sha224::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha256_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha256(&data);
        let theirs = sha2::Sha256::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha384_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha384(&data);
        let theirs = sha2::Sha384::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha512_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha512(&data);
        let theirs = sha2::Sha512::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha3_256_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha3_256(&data);
        let theirs = sha3::Sha3_256::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }

    #[test]
    fn sha3_512_matches_reference(data in vec(any::<u8>(), 0..8192)) {
        let ours = cryptal::hash::sha3_512(&data);
        let theirs = sha3::Sha3_512::digest(&data);
        prop_assert_eq!(&ours[..], &theirs[..]);
    }
}
