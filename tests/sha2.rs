use cryptal::hash::{sha224, sha256, sha384, sha512_224, sha512_256, sha512t};

#[test]
fn sha224_vectors() {
    assert_eq!(
        hex::encode(sha224(b"")),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
    assert_eq!(
        hex::encode(sha224(b"abc")),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
}

#[test]
fn sha256_vectors() {
    assert_eq!(
        hex::encode(sha256(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex::encode(sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha384_vectors() {
    assert_eq!(
        hex::encode(sha384(b"abc")),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5be\
d8086072ba1e7cc2358baeca134c825a7"
    );
}

#[test]
fn sha512_224_vectors() {
    assert_eq!(
        hex::encode(sha512_224(b"")),
        "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"
    );
    assert_eq!(
        hex::encode(sha512_224(b"abc")),
        "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
    );
}

#[test]
fn sha512_256_vectors() {
    assert_eq!(
        hex::encode(sha512_256(b"")),
        "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"
    );
    assert_eq!(
        hex::encode(sha512_256(b"abc")),
        "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
    );
}

#[test]
fn digest_lengths() {
    assert_eq!(sha224(b"x").len(), 28);
    assert_eq!(sha256(b"x").len(), 32);
    assert_eq!(sha384(b"x").len(), 48);
    assert_eq!(sha512_224(b"x").len(), 28);
    assert_eq!(sha512_256(b"x").len(), 32);
}

#[test]
fn sha512t_agrees_with_fixed_variants() {
    let msg = b"abc";
    assert_eq!(sha512t(msg, 224).unwrap(), sha512_224(msg).to_vec());
    assert_eq!(sha512t(msg, 256).unwrap(), sha512_256(msg).to_vec());
}

#[test]
fn sha512t_rejects_bad_widths() {
    assert!(sha512t(b"abc", 0).is_err());
    assert!(sha512t(b"abc", 384).is_err());
    assert!(sha512t(b"abc", 600).is_err());
}

#[test]
fn block_boundaries() {
    let _ = sha256(&vec![0x61u8; 55]);
    let _ = sha256(&vec![0x62u8; 64]);
    let _ = sha384(&vec![0x63u8; 111]);
    let _ = sha384(&vec![0x64u8; 128]);
}
