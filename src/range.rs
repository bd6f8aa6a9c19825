//! Interval assertion over a committed secret.
//!
//! Commits to the secret and to both interval endpoints with the same
//! exponentiation commitment the identity protocol uses, then decides by
//! comparing the secret against the endpoints directly. The commitments are
//! binding material for a future proof transcript; the decision itself is a
//! plaintext comparison, so this check is *not* zero-knowledge — the party
//! evaluating it sees the secret. A cryptographic range proof
//! (bit-decomposition commitments or a Bulletproofs-style argument) would
//! replace the comparison without changing this module's interface.

use num_bigint::BigUint;

use crate::crypto::commitment::commit;
use crate::protocol::GroupParameters;
use crate::{Error, Result};

/// A closed integer interval `[min, max]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interval {
    min: BigUint,
    max: BigUint,
}

impl Interval {
    /// Creates an interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if `max < min`.
    pub fn new(min: BigUint, max: BigUint) -> Result<Self> {
        if max < min {
            return Err(Error::InvalidParams(
                "interval maximum must not be below minimum".to_string(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Returns the lower endpoint.
    pub fn min(&self) -> &BigUint {
        &self.min
    }

    /// Returns the upper endpoint.
    pub fn max(&self) -> &BigUint {
        &self.max
    }

    /// Returns whether `value` lies in the interval, endpoints included.
    pub fn contains(&self, value: &BigUint) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Outcome of a range check: the decision plus the commitments that bind
/// the checked values.
#[derive(Clone, Debug)]
pub struct RangeCheck {
    accepted: bool,
    commitment: BigUint,
    min_commitment: BigUint,
    max_commitment: BigUint,
}

impl RangeCheck {
    /// Returns whether the secret lies in the interval.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Returns the commitment to the secret.
    pub fn commitment(&self) -> &BigUint {
        &self.commitment
    }

    /// Returns the commitment to the interval minimum.
    pub fn min_commitment(&self) -> &BigUint {
        &self.min_commitment
    }

    /// Returns the commitment to the interval maximum.
    pub fn max_commitment(&self) -> &BigUint {
        &self.max_commitment
    }
}

/// Asserts that `secret` lies in `interval`, committing to all three values.
///
/// Accepts iff `min <= secret <= max`; the commitments are returned alongside
/// the decision. See the module docs for the zero-knowledge caveat.
///
/// # Errors
///
/// Returns [`Error::InvalidParams`](crate::Error::InvalidParams) if the group
/// parameters are degenerate.
pub fn prove_range(
    secret: &BigUint,
    interval: &Interval,
    params: &GroupParameters,
) -> Result<RangeCheck> {
    let commitment = commit(secret, params.generator(), params.modulus())?;
    let min_commitment = commit(interval.min(), params.generator(), params.modulus())?;
    let max_commitment = commit(interval.max(), params.generator(), params.modulus())?;

    Ok(RangeCheck {
        accepted: interval.contains(secret),
        commitment,
        min_commitment,
        max_commitment,
    })
}
