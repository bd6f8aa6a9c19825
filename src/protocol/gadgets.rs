//! Protocol gadgets for the token-bound Schnorr proof.
//!
//! This module contains the core data structures used in the protocol:
//! group parameters, token identifier, witness, statement, commitment,
//! challenge, response, and proof.

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::crypto::commitment::commit;
use crate::{Error, Result};

/// Protocol version for serialization compatibility.
const PROTOCOL_VERSION: u8 = 1;

/// Public parameters for the token-bound Schnorr protocol.
///
/// The protocol operates in the multiplicative group modulo a prime `p` with
/// a fixed public generator `g`. Both parties share the parameters read-only;
/// they are immutable once constructed.
///
/// # Security
///
/// The modulus is treated as an externally supplied, trusted input: it must
/// be a prime large enough that computing discrete logarithms is infeasible,
/// and the generator must generate a correspondingly large subgroup. Neither
/// property is checked here — a toy modulus produces a protocol that runs
/// but offers no security margin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupParameters {
    modulus: BigUint,
    generator: BigUint,
}

impl GroupParameters {
    /// Creates new parameters from a prime modulus and a generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if:
    /// - `modulus <= 2`
    /// - `generator <= 1` or `generator >= modulus`
    pub fn new(modulus: BigUint, generator: BigUint) -> Result<Self> {
        if modulus <= BigUint::from(2u32) {
            return Err(Error::InvalidParams(
                "modulus must be greater than 2".to_string(),
            ));
        }
        if generator <= BigUint::one() || generator >= modulus {
            return Err(Error::InvalidParams(
                "generator must lie strictly between 1 and the modulus".to_string(),
            ));
        }
        Ok(Self { modulus, generator })
    }

    /// Returns the prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns the generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Returns `p - 1`, the modulus of the exponent arithmetic.
    pub fn order(&self) -> BigUint {
        &self.modulus - BigUint::one()
    }
}

/// Public identifier of the token a proof is bound to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TokenId(u64);

impl TokenId {
    /// Creates a token identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from(self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secret witness: the prover's private scalar `x`.
///
/// The witness never leaves the prover. The bound value `x * token_id` is
/// recomputed for each proof session and discarded with it.
///
/// # Security
///
/// The contained scalar is overwritten with zero when the witness is dropped.
/// `BigUint` offers no in-place memory scrub, so this clears the value at the
/// type level rather than guaranteeing the old limbs are wiped.
#[derive(Clone, Debug)]
pub struct Witness {
    x: BigUint,
}

impl Witness {
    /// Creates a new witness from a secret scalar.
    ///
    /// Bounds against the group parameters are checked when the witness is
    /// handed to [`Prover::new`](crate::Prover::new).
    pub fn new(x: BigUint) -> Self {
        Self { x }
    }

    pub(crate) fn secret(&self) -> &BigUint {
        &self.x
    }

    /// Computes the bound value `x * token_id`.
    pub(crate) fn bind(&self, token_id: TokenId) -> BigUint {
        &self.x * token_id.to_biguint()
    }
}

impl Zeroize for Witness {
    fn zeroize(&mut self) {
        self.x.set_zero();
    }
}

impl Drop for Witness {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Public statement: the prover's enrolled identity for one token.
///
/// Holds `y = g^(x * token_id) mod p` together with the token identifier the
/// exponent was bound to. For a fixed `(secret, token_id)` pair the statement
/// is stable across sessions, so a verifier may cache it as the prover's
/// enrolled identity. The same secret bound to a different token yields a
/// different `y`, which is what prevents replaying a proof for another token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Statement {
    y: BigUint,
    token_id: TokenId,
}

impl Statement {
    /// Creates a statement from an already-computed public value.
    pub fn new(y: BigUint, token_id: TokenId) -> Self {
        Self { y, token_id }
    }

    /// Computes the statement from a witness: `y = g^(x * token_id) mod p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if the parameters are degenerate.
    pub fn from_witness(
        params: &GroupParameters,
        witness: &Witness,
        token_id: TokenId,
    ) -> Result<Self> {
        let mut combined = witness.bind(token_id);
        let y = commit(&combined, params.generator(), params.modulus())?;
        combined.set_zero();
        Ok(Self { y, token_id })
    }

    /// Returns the public value `y`.
    pub fn public_value(&self) -> &BigUint {
        &self.y
    }

    /// Returns the token identifier this statement is bound to.
    pub fn token_id(&self) -> TokenId {
        self.token_id
    }

    /// Validates that the public value lies in `[1, modulus)`.
    pub fn validate(&self, params: &GroupParameters) -> Result<()> {
        if self.y.is_zero() || self.y >= *params.modulus() {
            return Err(Error::InvalidGroupElement(
                "public value must lie in [1, modulus)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Commitment: first message from the prover, `t = g^r mod p` for the
/// session's ephemeral randomness `r`. Single-use.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commitment {
    t: BigUint,
}

impl Commitment {
    /// Creates a new commitment from a group element.
    pub fn new(t: BigUint) -> Self {
        Self { t }
    }

    /// Returns the commitment value `t`.
    pub fn value(&self) -> &BigUint {
        &self.t
    }
}

/// Challenge: second message, sampled by the verifier uniformly in
/// `[0, modulus)`. Single-use.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Challenge {
    c: BigUint,
}

impl Challenge {
    /// Creates a new challenge from a scalar.
    pub fn new(c: BigUint) -> Self {
        Self { c }
    }

    /// Returns the challenge scalar `c`.
    pub fn value(&self) -> &BigUint {
        &self.c
    }
}

/// Response: third message, `z = (r + c * x * token_id) mod (p - 1)`.
///
/// The scalar is public protocol output, but it belongs to exactly one
/// session and is cleared on drop so stale session state cannot be reused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    z: BigUint,
}

impl Response {
    /// Creates a new response from a scalar.
    pub fn new(z: BigUint) -> Self {
        Self { z }
    }

    /// Returns the response scalar `z`.
    pub fn value(&self) -> &BigUint {
        &self.z
    }
}

impl Zeroize for Response {
    fn zeroize(&mut self) {
        self.z.set_zero();
    }
}

impl Drop for Response {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Complete proof transcript: `(y, t, c, z)` plus the token binding.
///
/// Sufficient for any verifier holding the group parameters to check the
/// relation offline via [`Verifier::verify_proof`](crate::Verifier::verify_proof),
/// without interacting with the prover.
///
/// # Serialization
///
/// [`Proof::to_bytes`] and [`Proof::from_bytes`] use a versioned format with
/// big-endian magnitudes and explicit length prefixes, so arbitrarily large
/// group parameters round-trip losslessly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proof {
    version: u8,
    statement: Statement,
    commitment: Commitment,
    challenge: Challenge,
    response: Response,
}

impl Proof {
    /// Assembles a proof from the messages of one completed session.
    pub fn new(
        statement: Statement,
        commitment: Commitment,
        challenge: Challenge,
        response: Response,
    ) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            statement,
            commitment,
            challenge,
            response,
        }
    }

    /// Returns the protocol version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the statement the proof was generated for.
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Returns the commitment `t`.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Returns the challenge `c`.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Returns the response `z`.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Serializes the proof to bytes.
    ///
    /// Format: `[version (1)][token_id (8, BE)]` followed by `y`, `t`, `c`,
    /// `z`, each as `[len (4, BE)][big-endian magnitude]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(self.version);
        out.extend_from_slice(&self.statement.token_id().value().to_be_bytes());
        for scalar in [
            self.statement.public_value(),
            self.commitment.value(),
            self.challenge.value(),
            self.response.value(),
        ] {
            let bytes = scalar.to_bytes_be();
            out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
            out.extend_from_slice(&bytes);
        }
        out
    }

    /// Deserializes a proof from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] on a truncated buffer, an unsupported
    /// version, an oversized field, or trailing garbage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const MAX_SCALAR_SIZE: usize = 4096;

        if bytes.is_empty() {
            return Err(Error::InvalidParams("empty proof".to_string()));
        }
        let version = bytes[0];
        if version != PROTOCOL_VERSION {
            return Err(Error::InvalidParams(format!(
                "unsupported proof version: {version}"
            )));
        }

        let mut pos = 1;
        if pos + 8 > bytes.len() {
            return Err(Error::InvalidParams(
                "truncated proof: missing token id".to_string(),
            ));
        }
        let token_id = u64::from_be_bytes(
            bytes[pos..pos + 8]
                .try_into()
                .unwrap_or_else(|_| unreachable!("slice is exactly 8 bytes")),
        );
        pos += 8;

        let mut fields = Vec::with_capacity(4);
        for name in ["y", "t", "c", "z"] {
            if pos + 4 > bytes.len() {
                return Err(Error::InvalidParams(format!(
                    "truncated proof: missing {name} length"
                )));
            }
            let len = u32::from_be_bytes(
                bytes[pos..pos + 4]
                    .try_into()
                    .unwrap_or_else(|_| unreachable!("slice is exactly 4 bytes")),
            ) as usize;
            pos += 4;

            if len == 0 || len > MAX_SCALAR_SIZE {
                return Err(Error::InvalidParams(format!("invalid {name} length: {len}")));
            }
            if pos + len > bytes.len() {
                return Err(Error::InvalidParams(format!(
                    "truncated proof: {name} shorter than its length prefix"
                )));
            }
            fields.push(BigUint::from_bytes_be(&bytes[pos..pos + len]));
            pos += len;
        }
        if pos != bytes.len() {
            return Err(Error::InvalidParams(
                "trailing bytes after proof".to_string(),
            ));
        }

        let z = fields.pop().unwrap_or_else(|| unreachable!("4 fields parsed"));
        let c = fields.pop().unwrap_or_else(|| unreachable!("4 fields parsed"));
        let t = fields.pop().unwrap_or_else(|| unreachable!("4 fields parsed"));
        let y = fields.pop().unwrap_or_else(|| unreachable!("4 fields parsed"));

        Ok(Self {
            version,
            statement: Statement::new(y, TokenId::new(token_id)),
            commitment: Commitment::new(t),
            challenge: Challenge::new(c),
            response: Response::new(z),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_params() -> GroupParameters {
        GroupParameters::new(BigUint::from(101u32), BigUint::from(2u32)).unwrap()
    }

    #[test]
    fn parameters_reject_small_modulus() {
        assert!(GroupParameters::new(BigUint::from(2u32), BigUint::from(1u32)).is_err());
    }

    #[test]
    fn parameters_reject_out_of_range_generator() {
        assert!(GroupParameters::new(BigUint::from(101u32), BigUint::from(1u32)).is_err());
        assert!(GroupParameters::new(BigUint::from(101u32), BigUint::from(101u32)).is_err());
    }

    #[test]
    fn order_is_modulus_minus_one() {
        assert_eq!(demo_params().order(), BigUint::from(100u32));
    }

    #[test]
    fn statement_binds_token_id() {
        let params = demo_params();
        let witness = Witness::new(BigUint::from(20u32));

        let s1 = Statement::from_witness(&params, &witness, TokenId::new(1)).unwrap();
        let s2 = Statement::from_witness(&params, &witness, TokenId::new(2)).unwrap();

        // y = 2^20 mod 101 = 95 for token 1; token 2 doubles the exponent.
        assert_eq!(*s1.public_value(), BigUint::from(95u32));
        assert_ne!(s1.public_value(), s2.public_value());
    }

    #[test]
    fn statement_validation_bounds() {
        let params = demo_params();
        assert!(Statement::new(BigUint::from(0u32), TokenId::new(1))
            .validate(&params)
            .is_err());
        assert!(Statement::new(BigUint::from(101u32), TokenId::new(1))
            .validate(&params)
            .is_err());
        assert!(Statement::new(BigUint::from(95u32), TokenId::new(1))
            .validate(&params)
            .is_ok());
    }

    #[test]
    fn witness_zeroizes_on_drop() {
        let mut witness = Witness::new(BigUint::from(20u32));
        witness.zeroize();
        assert!(witness.secret().is_zero());
    }

    #[test]
    fn proof_roundtrip() {
        let proof = Proof::new(
            Statement::new(BigUint::from(95u32), TokenId::new(7)),
            Commitment::new(BigUint::from(33u32)),
            Challenge::new(BigUint::from(58u32)),
            Response::new(BigUint::from(12u32)),
        );

        let bytes = proof.to_bytes();
        let decoded = Proof::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, proof);
    }

    #[test]
    fn proof_rejects_truncation_and_trailing_bytes() {
        let proof = Proof::new(
            Statement::new(BigUint::from(95u32), TokenId::new(7)),
            Commitment::new(BigUint::from(33u32)),
            Challenge::new(BigUint::from(58u32)),
            Response::new(BigUint::from(12u32)),
        );
        let bytes = proof.to_bytes();

        assert!(Proof::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(Proof::from_bytes(&[]).is_err());

        let mut extended = bytes.clone();
        extended.push(0);
        assert!(Proof::from_bytes(&extended).is_err());
    }

    #[test]
    fn proof_rejects_unknown_version() {
        let proof = Proof::new(
            Statement::new(BigUint::from(95u32), TokenId::new(7)),
            Commitment::new(BigUint::from(33u32)),
            Challenge::new(BigUint::from(58u32)),
            Response::new(BigUint::from(12u32)),
        );
        let mut bytes = proof.to_bytes();
        bytes[0] = 99;
        assert!(Proof::from_bytes(&bytes).is_err());
    }
}
