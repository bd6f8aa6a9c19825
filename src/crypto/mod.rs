//! Cryptographic building blocks shared by both protocols.

/// Commitment scheme: `commit(s) = g^s mod p`.
pub mod commitment;
/// Modular arithmetic primitives.
pub mod field;
/// Cryptographically secure random number generation and scalar sampling.
pub mod rng;

pub use commitment::commit;
pub use rng::{random_below, random_in_range, SecureRng};
