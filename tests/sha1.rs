use cryptal::hash::sha1;

fn hex(input: &[u8]) -> String {
    hex::encode(sha1(input))
}

// FIPS 180-4 §B test suite.
#[test]
fn fips_vectors() {
    assert_eq!(hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89");
    assert_eq!(
        hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );
}

#[test]
fn empty_and_long_vectors() {
    assert_eq!(hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");

    let million_a = vec![b'a'; 1_000_000];
    assert_eq!(hex(&million_a), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

#[test]
fn block_boundary() {
    let _ = sha1(&vec![0x41u8; 55]);
    let _ = sha1(&vec![0x42u8; 64]);
    let _ = sha1(&vec![0x43u8; 1000]);
}
