//! Prover side of the token-bound Schnorr protocol.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use super::{Challenge, Commitment, GroupParameters, Response, Statement, TokenId, Witness};
use crate::crypto::{commitment::commit, field, rng};
use crate::{Error, Result};

/// Prover for the token-bound Schnorr proof-of-knowledge.
///
/// Proves knowledge of the bound value `x * token_id` underlying the public
/// statement `y = g^(x * token_id) mod p`, without revealing `x`. Because the
/// token identifier enters the exponent, a proof generated for one token
/// cannot be replayed for another.
///
/// A proof session runs `commit` then `respond`:
///
/// ```rust
/// use num_bigint::BigUint;
/// use schnorr_token_zkp::{GroupParameters, Prover, SecureRng, TokenId, Verifier, Witness};
///
/// let params = GroupParameters::new(BigUint::from(101u32), BigUint::from(2u32))?;
/// let witness = Witness::new(BigUint::from(20u32));
/// let mut rng = SecureRng::new();
///
/// let prover = Prover::new(params.clone(), witness, TokenId::new(1))?;
/// let verifier = Verifier::new(params, prover.statement().clone())?;
///
/// let (commitment, nonce) = prover.commit(&mut rng)?;
/// let (challenge, session) = verifier.challenge(commitment, &mut rng)?;
/// let response = prover.respond(nonce, &challenge)?;
/// assert!(verifier.verify(session, &response)?);
/// # Ok::<(), schnorr_token_zkp::Error>(())
/// ```
///
/// # Security
///
/// - Always use [`SecureRng`](crate::SecureRng) (or another CSPRNG) for the
///   ephemeral randomness; a predictable `r` leaks the bound secret.
/// - A [`Nonce`] is consumed by [`Prover::respond`] and cannot answer a
///   second challenge; start a fresh session instead.
pub struct Prover {
    params: GroupParameters,
    witness: Witness,
    token_id: TokenId,
    statement: Statement,
}

impl Prover {
    /// Creates a new prover for one `(witness, token_id)` binding.
    ///
    /// The public statement `y = g^(x * token_id) mod p` is computed here and
    /// stays stable across sessions, so a verifier can enroll it once.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidScalar`] if the secret is zero or `>= modulus - 1`.
    /// - [`Error::InvalidParams`] if `token_id` is zero; a zero token id
    ///   collapses every secret to the same bound value.
    pub fn new(params: GroupParameters, witness: Witness, token_id: TokenId) -> Result<Self> {
        if witness.secret().is_zero() {
            return Err(Error::InvalidScalar("secret must be nonzero".to_string()));
        }
        if *witness.secret() >= params.order() {
            return Err(Error::InvalidScalar(
                "secret must be less than modulus - 1".to_string(),
            ));
        }
        if token_id.value() == 0 {
            return Err(Error::InvalidParams(
                "token id must be nonzero".to_string(),
            ));
        }

        let statement = Statement::from_witness(&params, &witness, token_id)?;
        Ok(Self {
            params,
            witness,
            token_id,
            statement,
        })
    }

    /// Returns the public statement (the enrolled identity).
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// First move: samples ephemeral randomness `r` uniformly in
    /// `[0, modulus - 1)` and commits to it as `t = g^r mod p`.
    ///
    /// The returned [`Nonce`] is the session's private state; the commitment
    /// is sent to the verifier.
    pub fn commit<R: CryptoRngCore>(&self, rng: &mut R) -> Result<(Commitment, Nonce)> {
        let r = rng::random_below(rng, &self.params.order())?;
        let t = commit(&r, self.params.generator(), self.params.modulus())?;
        Ok((Commitment::new(t), Nonce::new(r)))
    }

    /// Third move: answers the verifier's challenge with
    /// `z = (r + c * x * token_id) mod (modulus - 1)`.
    ///
    /// Consumes the nonce; the ephemeral `r` and the recomputed bound value
    /// are cleared before returning, ending the session on the prover side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalar`] if the challenge is not in
    /// `[0, modulus)`.
    pub fn respond(&self, nonce: Nonce, challenge: &Challenge) -> Result<Response> {
        if *challenge.value() >= *self.params.modulus() {
            return Err(Error::InvalidScalar(
                "challenge must be less than the modulus".to_string(),
            ));
        }

        let order = self.params.order();
        let mut combined = self.witness.bind(self.token_id);
        let cx = field::mod_mul(challenge.value(), &combined, &order)?;
        let z = field::mod_add(nonce.r(), &cx, &order)?;
        combined.set_zero();
        drop(nonce);

        Ok(Response::new(z))
    }
}

/// Ephemeral randomness of one proof session.
///
/// Private to the prover; cleared on drop. Consumed by [`Prover::respond`]
/// so a session can answer exactly one challenge.
#[derive(Debug)]
pub struct Nonce {
    r: BigUint,
}

impl Nonce {
    /// Wraps a freshly sampled ephemeral scalar.
    pub fn new(r: BigUint) -> Self {
        Self { r }
    }

    fn r(&self) -> &BigUint {
        &self.r
    }
}

impl Zeroize for Nonce {
    fn zeroize(&mut self) {
        self.r.set_zero();
    }
}

impl Drop for Nonce {
    fn drop(&mut self) {
        self.zeroize();
    }
}
