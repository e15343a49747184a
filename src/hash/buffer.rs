//! Shared Merkle–Damgård block buffering, used by MD5, SHA-1, and both
//! SHA-2 engines.
//!
//! Each of those algorithms buffers partial blocks, compresses full ones as
//! they arrive, and finishes with the same shape of padding: a single
//! `0x80` byte, zero fill, and a big- or little-endian bit-length field in
//! the tail of the last block (with an extra all-zero block inserted first
//! when the length field does not fit). Only the block size, the
//! length-field width, and the compression function differ per algorithm,
//! so that shape lives here once instead of four times.

/// A block buffer of fixed capacity `N` bytes plus a running bit-length
/// counter.
///
/// `N` is the algorithm's block size: 64 for MD5 / SHA-1 / SHA-2-32, 128
/// for SHA-2-64.
#[derive(Clone)]
pub(crate) struct BlockBuffer<const N: usize> {
    buf: [u8; N],
    used: usize,
    bit_len: u128,
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0u8; N],
            used: 0,
            bit_len: 0,
        }
    }

    /// Folds `input` into the buffer, invoking `compress` once per full
    /// block (the just-filled buffer, and then any further full-size
    /// strides taken directly from `input`). At most `N - 1` bytes remain
    /// buffered afterwards.
    pub(crate) fn absorb(&mut self, mut input: &[u8], mut compress: impl FnMut(&[u8; N])) {
        self.bit_len = self.bit_len.wrapping_add((input.len() as u128) * 8);

        if self.used > 0 {
            let need = N - self.used;
            let take = need.min(input.len());
            self.buf[self.used..self.used + take].copy_from_slice(&input[..take]);
            self.used += take;
            input = &input[take..];

            if self.used < N {
                return;
            }

            compress(&self.buf);
            self.used = 0;
        }

        while input.len() >= N {
            let block: &[u8; N] = input[..N].try_into().unwrap();
            compress(block);
            input = &input[N..];
        }

        self.buf[..input.len()].copy_from_slice(input);
        self.used = input.len();
    }

    /// Applies the shared padding rule and runs the final one or two
    /// compressions.
    ///
    /// `len_field_bytes` is the width of the trailing bit-length field (8
    /// for MD5/SHA-1/SHA-2-32, 16 for SHA-2-64). `write_len` encodes the
    /// total bit count into that trailing slice, in whatever endianness the
    /// caller's algorithm uses.
    pub(crate) fn finalize_padded(
        self,
        len_field_bytes: usize,
        write_len: impl FnOnce(u128, &mut [u8]),
        mut compress: impl FnMut(&[u8; N]),
    ) {
        let used = self.used;
        let mut block = self.buf;

        block[used] = 0x80;
        for b in &mut block[used + 1..] {
            *b = 0;
        }

        if N - used - 1 < len_field_bytes {
            compress(&block);
            block = [0u8; N];
        }

        write_len(self.bit_len, &mut block[N - len_field_bytes..]);
        compress(&block);
    }
}
