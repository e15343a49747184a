//! Error type shared by every hash variant in this crate.
//!
//! A bare enum matched directly by the caller rather than a boxed
//! `std::error::Error` trait object.

/// Validation and buffer-sizing failures surfaced by this crate.
///
/// No hashing operation can fail once its parameters have been validated;
/// every variant here is returned before any state change happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A constructor argument does not meet the algorithm's requirements
    /// (e.g. a non-lane-aligned Keccak capacity, or `t == 384`/`t >= 512`
    /// for SHA-512/t). Carries a short, static description of which
    /// requirement was violated.
    InvalidParameter(&'static str),
    /// A caller-supplied output buffer (via a `_into` method) is shorter
    /// than the digest it was asked to receive.
    BufferTooSmall {
        /// Bytes required to hold the digest.
        needed: usize,
        /// Bytes actually available in the caller's buffer.
        provided: usize,
    },
}
