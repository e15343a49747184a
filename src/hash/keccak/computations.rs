//! Keccak-f[1600] internal computations
//!
//! The 24-round permutation that underlies every SHA-3/SHAKE/Keccak
//! variant, as defined in FIPS 202 §3.2. Kept separate from the public
//! sponge entry point for the same reason the Merkle–Damgård engines
//! separate `computations` from `core`: it isolates the
//! specification-defined bit-twiddling (θ, ρ, π, χ, ι) from the
//! absorb/squeeze machinery built on top of it.
//!
//! State is addressed `state[x][y]`, a 5×5 lattice of 64-bit lanes, x and
//! y both running mod 5.

/// Per-round rotation offsets for ρ, indexed in the same (x, y) order as
/// [`RHO_X`]/[`RHO_Y`] below. Triangular numbers mod 64, per FIPS 202.
const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane coordinates visited by ρ/π in traversal order (lane (0,0) is
/// fixed and never appears here).
const RHO_X: [usize; 24] = [1, 0, 2, 1, 2, 3, 3, 0, 1, 3, 1, 4, 4, 0, 3, 4, 3, 2, 2, 0, 4, 2, 4, 1];
const RHO_Y: [usize; 24] = [0, 2, 1, 2, 3, 3, 0, 1, 3, 1, 4, 4, 0, 3, 4, 3, 2, 2, 0, 4, 2, 4, 1, 1];

/// π's lane permutation, `pi_x[x][y]` giving the source x-coordinate for
/// destination `(x, y)`: `(x, y) <- (y, 2x + 3y mod 5)` read backwards.
const PI_X: [[usize; 5]; 5] = [
    [0, 3, 1, 4, 2],
    [1, 4, 2, 0, 3],
    [2, 0, 3, 1, 4],
    [3, 1, 4, 2, 0],
    [4, 2, 0, 3, 1],
];

/// Round constants for ι, generated by the standard LFSR and given here
/// precomputed per FIPS 202 §3.2.5.
const IOTA_RC: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Runs the 24 rounds of Keccak-f[1600] over the 5×5 lane state in place.
pub(crate) fn keccak_f(a: &mut [[u64; 5]; 5]) {
    let mut c = [0u64; 5];
    let mut d = [0u64; 5];
    let mut pi = [[0u64; 5]; 5];

    for round in 0..24 {
        // theta: column parity, XORed into every lane of the adjacent columns.
        for x in 0..5 {
            c[x] = a[x][0] ^ a[x][1] ^ a[x][2] ^ a[x][3] ^ a[x][4];
        }
        for x in 0..5 {
            d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        }
        for x in 0..5 {
            for y in 0..5 {
                a[x][y] ^= d[x];
            }
        }

        // rho: rotate every lane but (0,0) by its fixed offset.
        for i in 0..24 {
            let (x, y) = (RHO_X[i], RHO_Y[i]);
            a[x][y] = a[x][y].rotate_left(RHO_OFFSETS[i]);
        }

        // pi: permute lanes into a scratch array, then copy back.
        for x in 0..5 {
            for y in 0..5 {
                pi[x][y] = a[PI_X[x][y]][x];
            }
        }

        // chi: row-wise nonlinear mixing.
        for y in 0..5 {
            for x in 0..5 {
                a[x][y] = pi[x][y] ^ (!pi[(x + 1) % 5][y] & pi[(x + 2) % 5][y]);
            }
        }

        // iota: break the round's symmetry.
        a[0][0] ^= IOTA_RC[round];
    }
}
