//! Success collaborators and the in-process two-party flows.
//!
//! The proof logic never performs side effects itself. Callers inject
//! collaborators that are invoked only after a verification accepts; on
//! rejection the collaborator is never touched and the flow reports `false`.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use tracing::{info, warn};

use crate::crypto::rng;
use crate::protocol::{GroupParameters, Prover, TokenId, Verifier, Witness};
use crate::range::{prove_range, Interval};
use crate::Result;

/// Collaborator notified when an ownership proof is accepted.
pub trait MintCollaborator {
    /// Called with the proven token and the destination address.
    fn on_proof_accepted(&self, token_id: TokenId, address: &str);
}

/// Collaborator notified when a range assertion is accepted.
pub trait SpawnCollaborator {
    /// Called with the value selected from the asserted interval.
    fn on_range_accepted(&self, selected: &BigUint);
}

/// Runs a complete ownership proof session in-process and invokes the mint
/// collaborator on acceptance.
///
/// Drives both roles through the full commit / challenge / respond / verify
/// exchange, with the verifier enrolled from the prover's statement. The
/// message boundaries are exactly the values that would cross a transport in
/// a networked deployment.
///
/// Returns `Ok(true)` and calls `mint.on_proof_accepted` iff verification
/// accepts.
pub fn prove_ownership<R, M>(
    params: &GroupParameters,
    witness: Witness,
    token_id: TokenId,
    address: &str,
    rng: &mut R,
    mint: &M,
) -> Result<bool>
where
    R: CryptoRngCore,
    M: MintCollaborator,
{
    let prover = Prover::new(params.clone(), witness, token_id)?;
    let verifier = Verifier::new(params.clone(), prover.statement().clone())?;

    let (commitment, nonce) = prover.commit(rng)?;
    let (challenge, session) = verifier.challenge(commitment, rng)?;
    let response = prover.respond(nonce, &challenge)?;
    let accepted = verifier.verify(session, &response)?;

    if accepted {
        info!(%token_id, address, "ownership proof accepted");
        mint.on_proof_accepted(token_id, address);
    } else {
        warn!(%token_id, "ownership proof rejected");
    }
    Ok(accepted)
}

/// Runs the range assertion and, on acceptance, selects a uniform value from
/// the interval and hands it to the spawn collaborator.
///
/// Returns `Ok(true)` and calls `spawn.on_range_accepted` iff the secret lies
/// in the interval.
pub fn grant_in_range<R, S>(
    secret: &BigUint,
    interval: &Interval,
    params: &GroupParameters,
    rng: &mut R,
    spawn: &S,
) -> Result<bool>
where
    R: CryptoRngCore,
    S: SpawnCollaborator,
{
    let check = prove_range(secret, interval, params)?;

    if check.accepted() {
        let selected = rng::random_in_range(rng, interval.min(), interval.max())?;
        info!(%selected, "range assertion accepted");
        spawn.on_range_accepted(&selected);
        Ok(true)
    } else {
        warn!("range assertion rejected");
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::SecureRng;

    #[derive(Default)]
    struct RecordingMint {
        minted: RefCell<Vec<(TokenId, String)>>,
    }

    impl MintCollaborator for RecordingMint {
        fn on_proof_accepted(&self, token_id: TokenId, address: &str) {
            self.minted.borrow_mut().push((token_id, address.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingSpawn {
        spawned: RefCell<Vec<BigUint>>,
    }

    impl SpawnCollaborator for RecordingSpawn {
        fn on_range_accepted(&self, selected: &BigUint) {
            self.spawned.borrow_mut().push(selected.clone());
        }
    }

    fn demo_params() -> GroupParameters {
        GroupParameters::new(BigUint::from(101u32), BigUint::from(2u32)).unwrap()
    }

    #[test]
    fn honest_flow_mints_once() {
        let mut rng = SecureRng::new();
        let mint = RecordingMint::default();

        let accepted = prove_ownership(
            &demo_params(),
            Witness::new(BigUint::from(20u32)),
            TokenId::new(1),
            "0x123456789ABCDEF",
            &mut rng,
            &mint,
        )
        .unwrap();

        assert!(accepted);
        let minted = mint.minted.borrow();
        assert_eq!(minted.len(), 1);
        assert_eq!(minted[0], (TokenId::new(1), "0x123456789ABCDEF".to_string()));
    }

    #[test]
    fn range_flow_spawns_within_interval() {
        let mut rng = SecureRng::new();
        let spawn = RecordingSpawn::default();
        let interval = Interval::new(BigUint::from(1u32), BigUint::from(100u32)).unwrap();

        let accepted = grant_in_range(
            &BigUint::from(50u32),
            &interval,
            &demo_params(),
            &mut rng,
            &spawn,
        )
        .unwrap();

        assert!(accepted);
        let spawned = spawn.spawned.borrow();
        assert_eq!(spawned.len(), 1);
        assert!(interval.contains(&spawned[0]));
    }

    #[test]
    fn range_flow_skips_spawn_on_rejection() {
        let mut rng = SecureRng::new();
        let spawn = RecordingSpawn::default();
        let interval = Interval::new(BigUint::from(1u32), BigUint::from(100u32)).unwrap();

        let accepted = grant_in_range(
            &BigUint::from(501u32),
            &interval,
            &demo_params(),
            &mut rng,
            &spawn,
        )
        .unwrap();

        assert!(!accepted);
        assert!(spawn.spawned.borrow().is_empty());
    }
}
