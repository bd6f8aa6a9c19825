//! Verifier side of the token-bound Schnorr protocol.

use num_traits::Zero;
use rand_core::CryptoRngCore;

use super::{Challenge, Commitment, GroupParameters, Proof, Response, Statement};
use crate::crypto::{field, rng};
use crate::{Error, Result};

/// Verifier for the token-bound Schnorr proof-of-knowledge.
///
/// A verifier is constructed with the statement it *expects*: the enrolled
/// public value `y` and the token id it was bound to. Every check runs
/// against that enrolled statement, so a proof generated for a different
/// token (hence a different `y`) fails the verification equation.
///
/// An interactive session runs `challenge` then `verify`; a recorded
/// transcript is checked offline with [`Verifier::verify_proof`].
///
/// Rejection is a normal protocol outcome reported as `Ok(false)`; `Err` is
/// reserved for malformed inputs, so callers can always distinguish "proof
/// is cryptographically invalid" from "caller misused the API". A rejected
/// session is terminal: rerunning it cannot succeed, only an entirely fresh
/// session with fresh randomness can.
pub struct Verifier {
    params: GroupParameters,
    statement: Statement,
}

impl Verifier {
    /// Creates a verifier enrolled with the given statement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGroupElement`] if the statement's public
    /// value is outside `[1, modulus)`.
    pub fn new(params: GroupParameters, statement: Statement) -> Result<Self> {
        statement.validate(&params)?;
        Ok(Self { params, statement })
    }

    /// Returns the enrolled statement.
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Second move: accepts the prover's commitment and samples a challenge
    /// uniformly in `[0, modulus)`.
    ///
    /// Returns the challenge (to send to the prover) and the session state
    /// needed to verify the response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGroupElement`] if the commitment is outside
    /// `[1, modulus)`.
    pub fn challenge<R: CryptoRngCore>(
        &self,
        commitment: Commitment,
        rng: &mut R,
    ) -> Result<(Challenge, VerifierSession)> {
        if commitment.value().is_zero() || commitment.value() >= self.params.modulus() {
            return Err(Error::InvalidGroupElement(
                "commitment must lie in [1, modulus)".to_string(),
            ));
        }

        let c = rng::random_below(rng, self.params.modulus())?;
        let challenge = Challenge::new(c);
        let session = VerifierSession {
            commitment,
            challenge: challenge.clone(),
        };
        Ok((challenge, session))
    }

    /// Fourth move: checks `g^z == t * y^c (mod p)` for the session's
    /// commitment and challenge.
    ///
    /// Consumes the session; a mismatch is a definitive rejection, returned
    /// as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalar`] if the response is not in
    /// `[0, modulus - 1)`, the range every honestly computed response
    /// occupies.
    pub fn verify(&self, session: VerifierSession, response: &Response) -> Result<bool> {
        if *response.value() >= self.params.order() {
            return Err(Error::InvalidScalar(
                "response must be less than modulus - 1".to_string(),
            ));
        }
        self.check_equation(&session.commitment, &session.challenge, response)
    }

    /// Checks a complete recorded transcript without interaction.
    ///
    /// The proof's statement must match the enrolled one exactly (public
    /// value and token id); a mismatch means the proof was generated for a
    /// different identity or token binding and is rejected as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the proof's commitment, challenge, or response is
    /// outside its domain.
    pub fn verify_proof(&self, proof: &Proof) -> Result<bool> {
        if *proof.statement() != self.statement {
            tracing::debug!(
                expected = %self.statement.token_id(),
                received = %proof.statement().token_id(),
                "statement mismatch, rejecting proof"
            );
            return Ok(false);
        }
        if proof.commitment().value().is_zero()
            || proof.commitment().value() >= self.params.modulus()
        {
            return Err(Error::InvalidGroupElement(
                "commitment must lie in [1, modulus)".to_string(),
            ));
        }
        if proof.challenge().value() >= self.params.modulus() {
            return Err(Error::InvalidScalar(
                "challenge must be less than the modulus".to_string(),
            ));
        }
        if *proof.response().value() >= self.params.order() {
            return Err(Error::InvalidScalar(
                "response must be less than modulus - 1".to_string(),
            ));
        }
        self.check_equation(proof.commitment(), proof.challenge(), proof.response())
    }

    fn check_equation(
        &self,
        commitment: &Commitment,
        challenge: &Challenge,
        response: &Response,
    ) -> Result<bool> {
        let p = self.params.modulus();
        let left = field::mod_pow(self.params.generator(), response.value(), p)?;
        let y_c = field::mod_pow(self.statement.public_value(), challenge.value(), p)?;
        let right = field::mod_mul(commitment.value(), &y_c, p)?;
        Ok(left == right)
    }
}

/// Verifier-side state of one proof session, between issuing the challenge
/// and receiving the response. Consumed by [`Verifier::verify`].
#[derive(Debug)]
pub struct VerifierSession {
    commitment: Commitment,
    challenge: Challenge,
}

impl VerifierSession {
    /// Returns the challenge issued for this session.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Returns the commitment this session was opened with.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }
}
