//! Cryptographic hash primitives.
//!
//! This crate provides a small set of hash functions implemented
//! byte-exact to their governing specifications: MD5 (RFC 1321), SHA-1
//! and the SHA-2 family (FIPS 180-4), and the SHA-3/SHAKE/Keccak family
//! (FIPS 202).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Every
//! algorithm exposes the same shape: a streaming context supporting
//! incremental `absorb`/`finalize`, and stateless one-shot functions for
//! the common case of hashing a single buffer in one call.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions: MD5, SHA-1, SHA-2 (32-bit and 64-bit
//!   variants), and SHA-3/Keccak. These implementations are intended for
//!   internal use and protocol-level constructions.
//!
//! - `error`
//!   The crate's error surface: invalid parameters (e.g. an unsupported
//!   `SHA-512/t` width) and output buffers too small for a requested
//!   digest.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Identical streaming behavior across every algorithm family
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for hashing needs elsewhere in the stack.

pub mod error;
pub mod hash;

pub use error::Error;
