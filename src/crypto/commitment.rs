//! Exponentiation-based commitments.

use num_bigint::BigUint;

use crate::crypto::field;
use crate::Result;

/// Commits to a secret scalar: `commit(s) = generator^s mod modulus`.
///
/// Deterministic given its inputs and free of side effects. Both the identity
/// protocol (public value `y` and per-session commitment `t`) and the range
/// assertion build on this single primitive.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`](crate::Error::InvalidParams) if
/// `modulus <= 1`.
pub fn commit(secret: &BigUint, generator: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    field::mod_pow(generator, secret, modulus)
}
