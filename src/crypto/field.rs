//! Modular arithmetic over arbitrary-precision non-negative integers.
//!
//! All operations reduce their result into `[0, modulus)`. A modulus of 0 or
//! 1 is a caller error and is rejected immediately rather than producing a
//! silently wrong value downstream.

use num_bigint::BigUint;
use num_traits::One;

use crate::{Error, Result};

fn check_modulus(modulus: &BigUint) -> Result<()> {
    if *modulus <= BigUint::one() {
        return Err(Error::InvalidParams(
            "modulus must be greater than 1".to_string(),
        ));
    }
    Ok(())
}

/// Computes `base^exp mod modulus`.
///
/// An exponent of 0 yields 1. Delegates to `BigUint::modpow`, which uses
/// Montgomery multiplication for odd moduli.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    check_modulus(modulus)?;
    Ok(base.modpow(exp, modulus))
}

/// Computes `(a * b) mod modulus`.
pub fn mod_mul(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    check_modulus(modulus)?;
    Ok((a * b) % modulus)
}

/// Computes `(a + b) mod modulus`.
pub fn mod_add(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    check_modulus(modulus)?;
    Ok((a + b) % modulus)
}

/// Computes `(a - b) mod modulus`, returning the non-negative representative.
pub fn mod_sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    check_modulus(modulus)?;
    let a = a % modulus;
    let b = b % modulus;
    Ok((a + modulus - b) % modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn mod_pow_basic() {
        // 2^20 mod 101 = 95
        let result = mod_pow(&big(2), &big(20), &big(101)).unwrap();
        assert_eq!(result, big(95));
    }

    #[test]
    fn mod_pow_zero_exponent_is_one() {
        let result = mod_pow(&big(7), &big(0), &big(101)).unwrap();
        assert_eq!(result, big(1));
    }

    #[test]
    fn mod_mul_reduces() {
        let result = mod_mul(&big(50), &big(3), &big(101)).unwrap();
        assert_eq!(result, big(49));
    }

    #[test]
    fn mod_add_reduces() {
        let result = mod_add(&big(100), &big(2), &big(101)).unwrap();
        assert_eq!(result, big(1));
    }

    #[test]
    fn mod_sub_wraps_below_zero() {
        let result = mod_sub(&big(3), &big(5), &big(101)).unwrap();
        assert_eq!(result, big(99));
    }

    #[test]
    fn mod_sub_reduces_operands_first() {
        let result = mod_sub(&big(205), &big(102), &big(101)).unwrap();
        assert_eq!(result, big(2));
    }

    #[test]
    fn rejects_modulus_of_one_or_less() {
        assert!(mod_pow(&big(2), &big(3), &big(1)).is_err());
        assert!(mod_mul(&big(2), &big(3), &big(0)).is_err());
        assert!(mod_add(&big(2), &big(3), &big(1)).is_err());
        assert!(mod_sub(&big(2), &big(3), &big(0)).is_err());
    }
}
