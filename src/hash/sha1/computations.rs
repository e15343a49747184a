//! SHA-1 internal computations
//!
//! Per-round nonlinear mixer, round constant, and the 80-round compression
//! loop, as defined in FIPS 180-4 §6.1.2. Kept separate from the public
//! entry point for the same reason the SHA-2 engines split
//! `computations`/`core`.

/// SHA-1 round function, selected by which quartet `t` falls in.
#[inline(always)]
fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => (b & c) ^ (!b & d),
        40..=59 => (b & c) ^ (b & d) ^ (c & d),
        _ => b ^ c ^ d,
    }
}

/// SHA-1 round constant, selected by which quartet `t` falls in.
#[inline(always)]
fn k(t: usize) -> u32 {
    match t {
        0..=19 => 0x5a827999,
        20..=39 => 0x6ed9eba1,
        40..=59 => 0x8f1bbcdc,
        _ => 0xca62c1d6,
    }
}

/// Executes all 80 rounds of the SHA-1 compression function.
///
/// `w` holds the first 16 big-endian message words of the current block;
/// the remaining 64 are expanded on the fly using a 16-word circular
/// buffer.
pub(crate) fn all_rounds(state: &mut [u32; 5], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for t in 0..80 {
        if t >= 16 {
            let next = (w[(t - 3) & 15] ^ w[(t - 8) & 15] ^ w[(t - 14) & 15] ^ w[(t - 16) & 15])
                .rotate_left(1);
            w[t & 15] = next;
        }

        let temp = a
            .rotate_left(5)
            .wrapping_add(f(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(k(t))
            .wrapping_add(w[t & 15]);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
