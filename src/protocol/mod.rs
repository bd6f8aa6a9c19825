//! The token-bound Schnorr identity protocol.
//!
//! A three-move sigma protocol proving knowledge of the discrete logarithm
//! underlying an enrolled public value, with the token identifier mixed into
//! the exponent so proofs cannot be replayed across tokens:
//!
//! 1. Prover sends the commitment `t = g^r mod p`.
//! 2. Verifier sends a uniform challenge `c` in `[0, p)`.
//! 3. Prover sends `z = (r + c * x * token_id) mod (p - 1)`.
//! 4. Verifier accepts iff `g^z == t * y^c (mod p)`.
//!
//! The steps are strictly ordered and each session's ephemeral state is
//! single-use: [`Nonce`] and [`VerifierSession`] are consumed by the calls
//! that complete them.

/// Core protocol types (parameters, witness, statement, proof).
pub mod gadgets;
/// Prover implementation for generating proofs.
pub mod prover;
/// Verifier implementation for validating proofs.
pub mod verifier;

pub use gadgets::{
    Challenge, Commitment, GroupParameters, Proof, Response, Statement, TokenId, Witness,
};
pub use prover::{Nonce, Prover};
pub use verifier::{Verifier, VerifierSession};
