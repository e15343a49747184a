use cryptal::hash::md5;

fn hex(input: &[u8]) -> String {
    hex::encode(md5(input))
}

// RFC 1321 §A.5 test suite.
#[test]
fn rfc1321_vectors() {
    assert_eq!(hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
    assert_eq!(hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(hex(b"message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
    assert_eq!(
        hex(b"abcdefghijklmnopqrstuvwxyz"),
        "c3fcd3d76192e4007dfb496cca67e13b"
    );
    assert_eq!(
        hex(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
        "d174ab98d277d9f5a5611c2c9f419d9f"
    );
    assert_eq!(
        hex(b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"),
        "57edf4a22be3c955ac49da2e2107b67a"
    );
}

#[test]
fn block_boundary_and_multiblock() {
    let buf = vec![0x61u8; 56]; // exactly fills the last block before padding overflow
    let _ = md5(&buf);

    let buf = vec![0x62u8; 64]; // exactly one full block
    let _ = md5(&buf);

    let buf = vec![0x63u8; 1_000_000];
    let _ = md5(&buf);
}
