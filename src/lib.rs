//! Token-bound Schnorr proofs of knowledge over a prime-order multiplicative
//! group, plus a commitment-based range assertion.
//!
//! The identity protocol is a three-move sigma protocol: the prover commits
//! to ephemeral randomness, the verifier issues a uniform challenge, and the
//! prover's response lets the verifier check `g^z == t * y^c (mod p)` against
//! the enrolled public value `y = g^(x * token_id) mod p`. Mixing the token
//! identifier into the exponent binds every proof to one specific token.
//!
//! All arithmetic is arbitrary-precision, so group parameters of any size
//! work; parameters are externally supplied, trusted inputs and must be
//! generated elsewhere. Rejected proofs are reported as `Ok(false)`, while
//! `Err` always means a malformed input.
//!
//! # Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use schnorr_token_zkp::{GroupParameters, Prover, SecureRng, TokenId, Verifier, Witness};
//!
//! // Demo-sized parameters; production use needs a large prime.
//! let params = GroupParameters::new(BigUint::from(101u32), BigUint::from(2u32))?;
//! let mut rng = SecureRng::new();
//!
//! let prover = Prover::new(params.clone(), Witness::new(BigUint::from(20u32)), TokenId::new(1))?;
//! let verifier = Verifier::new(params, prover.statement().clone())?;
//!
//! let (commitment, nonce) = prover.commit(&mut rng)?;
//! let (challenge, session) = verifier.challenge(commitment, &mut rng)?;
//! let response = prover.respond(nonce, &challenge)?;
//! assert!(verifier.verify(session, &response)?);
//! # Ok::<(), schnorr_token_zkp::Error>(())
//! ```

/// Success collaborators and the in-process two-party flows.
pub mod collaborators;
/// Cryptographic building blocks (modular arithmetic, commitments, randomness).
pub mod crypto;
/// Error types.
pub mod error;
/// The token-bound Schnorr identity protocol.
pub mod protocol;
/// Interval assertion over a committed secret.
pub mod range;

pub use collaborators::{grant_in_range, prove_ownership, MintCollaborator, SpawnCollaborator};
pub use crypto::{commit, random_below, random_in_range, SecureRng};
pub use error::Error;
pub use protocol::{
    Challenge, Commitment, GroupParameters, Nonce, Proof, Prover, Response, Statement, TokenId,
    Verifier, VerifierSession, Witness,
};
pub use range::{prove_range, Interval, RangeCheck};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
