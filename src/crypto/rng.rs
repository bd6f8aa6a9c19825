//! Cryptographically secure random number generation and scalar sampling.
//!
//! The sampling functions are generic over [`CryptoRngCore`] so the entropy
//! source is injected by the caller and can be swapped for a deterministic
//! generator in tests. [`SecureRng`] is the production source, backed by the
//! operating system.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};

use crate::{Error, Result};

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library. `OsRng` is a stateless
/// handle to the operating system's entropy source, so independent proof
/// sessions may each hold their own `SecureRng` and sample concurrently.
/// Entropy exhaustion is unrecoverable and aborts rather than degrading to
/// predictable output.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Samples a scalar uniformly distributed in `[0, limit)`.
///
/// # Errors
///
/// Returns [`Error::InvalidScalar`] if `limit` is zero.
pub fn random_below<R: CryptoRngCore>(rng: &mut R, limit: &BigUint) -> Result<BigUint> {
    if limit.is_zero() {
        return Err(Error::InvalidScalar(
            "sampling limit must be positive".to_string(),
        ));
    }
    Ok(rng.gen_biguint_below(limit))
}

/// Samples a scalar uniformly distributed in the inclusive range `[min, max]`.
///
/// # Errors
///
/// Returns [`Error::InvalidScalar`] if `max < min`.
pub fn random_in_range<R: CryptoRngCore>(
    rng: &mut R,
    min: &BigUint,
    max: &BigUint,
) -> Result<BigUint> {
    if max < min {
        return Err(Error::InvalidScalar(
            "range maximum must not be below minimum".to_string(),
        ));
    }
    let span = max - min + BigUint::one();
    Ok(min + random_below(rng, &span)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_below_stays_under_limit() {
        let mut rng = SecureRng::new();
        let limit = BigUint::from(100u32);
        for _ in 0..1000 {
            let value = random_below(&mut rng, &limit).unwrap();
            assert!(value < limit);
        }
    }

    #[test]
    fn random_below_rejects_zero_limit() {
        let mut rng = SecureRng::new();
        assert!(random_below(&mut rng, &BigUint::zero()).is_err());
    }

    #[test]
    fn random_in_range_is_inclusive() {
        let mut rng = SecureRng::new();
        let min = BigUint::from(10u32);
        let max = BigUint::from(12u32);

        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            let value = random_in_range(&mut rng, &min, &max).unwrap();
            assert!(value >= min && value <= max);
            seen_min |= value == min;
            seen_max |= value == max;
        }
        // Over 1000 draws from 3 values, missing an endpoint is ~2e-176.
        assert!(seen_min, "minimum endpoint never drawn");
        assert!(seen_max, "maximum endpoint never drawn");
    }

    #[test]
    fn random_in_range_single_point() {
        let mut rng = SecureRng::new();
        let point = BigUint::from(42u32);
        let value = random_in_range(&mut rng, &point, &point).unwrap();
        assert_eq!(value, point);
    }

    #[test]
    fn sampler_accepts_an_injected_deterministic_rng() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let limit = BigUint::from(1_000_000u32);
        assert_eq!(
            random_below(&mut a, &limit).unwrap(),
            random_below(&mut b, &limit).unwrap()
        );
    }

    #[test]
    fn random_in_range_rejects_inverted_bounds() {
        let mut rng = SecureRng::new();
        let result = random_in_range(&mut rng, &BigUint::from(5u32), &BigUint::from(4u32));
        assert!(result.is_err());
    }
}
