// Competition Join Operation
// Entering a competition stakes the entry amount into its prize pool.

use log::{debug, trace};

use crate::error::{ArenaError, ArenaResult};
use crate::ledger::{ArenaStorage, CompetitionId, PetId, RuntimeContext};

/// Enter a competition with a pet owned by the caller
///
/// Checks, in order, reporting the first failure:
/// 1. Competition and pet exist (`NotFound`)
/// 2. Caller owns the pet (`Unauthorized`)
/// 3. Current block is before the end block (`Expired`)
/// 4. Caller balance covers the stake (`InsufficientFunds`)
///
/// Every check and every new value is computed before the first write, so a
/// failed join leaves storage untouched.
///
/// # Returns
/// - `Ok(true)`: Stake moved into the prize pool, caller appended to participants
pub fn join_competition<S: ArenaStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    competition_id: CompetitionId,
    pet_id: PetId,
) -> ArenaResult<bool> {
    // Step 1: Resolve competition and pet
    let competition = storage.get_competition(competition_id);
    let pet = storage.get_pet(pet_id);
    let (mut competition, pet) = match (competition, pet) {
        (Some(competition), Some(pet)) => (competition, pet),
        _ => {
            trace!(
                "Join rejected: competition {} or pet {} not found",
                competition_id,
                pet_id
            );
            return Err(ArenaError::NotFound);
        }
    };

    // Step 2: Ownership
    if !pet.is_owned_by(&ctx.caller) {
        trace!(
            "Join rejected: {} does not own pet {} (owner {})",
            ctx.caller,
            pet_id,
            pet.owner
        );
        return Err(ArenaError::Unauthorized);
    }

    // Step 3: Window
    if !competition.is_open_at(ctx.block_height) {
        trace!(
            "Join rejected: competition {} ended at {}, current block {}",
            competition_id,
            competition.end_block,
            ctx.block_height
        );
        return Err(ArenaError::Expired);
    }

    // Step 4: Funds
    let balance = storage.get_balance(&ctx.caller);
    if balance < competition.stake_amount {
        trace!(
            "Join rejected: {} has {} but stake is {}",
            ctx.caller,
            balance,
            competition.stake_amount
        );
        return Err(ArenaError::InsufficientFunds);
    }

    // Step 5: Compute new state
    let new_balance = balance - competition.stake_amount;
    competition.prize_pool = competition
        .prize_pool
        .checked_add(competition.stake_amount)
        .ok_or(ArenaError::Overflow)?;
    competition.participants.push(ctx.caller.clone());

    // Step 6: Apply
    storage.set_balance(&ctx.caller, new_balance)?;
    storage.set_competition(&competition)?;

    debug!(
        "{} joined competition {} with pet {}: staked {}, pool now {}",
        ctx.caller, competition_id, pet_id, competition.stake_amount, competition.prize_pool
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountId;
    use crate::competition::{create_competition, Competition, CreateCompetitionParams};
    use crate::crypto::random::seeded_rng;
    use crate::ledger::LedgerState;
    use crate::pet::mint_pet;

    const WALLET1: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
    const WALLET2: &str = "ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
    const DEPLOYER: &str = "ST3PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

    fn account(id: &str) -> AccountId {
        AccountId::new(id).unwrap()
    }

    // wallet1 owns pet 1, competition 1 was created at block 1
    fn setup(duration: u64, stake: u64) -> LedgerState {
        let mut storage = LedgerState::default();
        for id in [WALLET1, WALLET2, DEPLOYER] {
            storage.set_balance(&account(id), 1000).unwrap();
        }
        mint_pet(
            &mut storage,
            &RuntimeContext::new(account(WALLET1), 1),
            &mut seeded_rng(0),
            "Competitor",
        )
        .unwrap();
        create_competition(
            &mut storage,
            &RuntimeContext::new(account(DEPLOYER), 1),
            CreateCompetitionParams::new("Quick Race", duration, stake),
        )
        .unwrap();
        storage
    }

    fn competition(storage: &LedgerState) -> Competition {
        storage.get_competition(1).unwrap()
    }

    #[test]
    fn test_join_success() {
        let mut storage = setup(100, 50);
        let ctx = RuntimeContext::new(account(WALLET1), 1);

        assert_eq!(join_competition(&mut storage, &ctx, 1, 1), Ok(true));

        let c = competition(&storage);
        assert_eq!(c.participants, vec![account(WALLET1)]);
        assert_eq!(c.prize_pool, 50);
        assert_eq!(storage.get_balance(&account(WALLET1)), 950);
    }

    #[test]
    fn test_join_twice_is_allowed() {
        let mut storage = setup(100, 50);
        let ctx = RuntimeContext::new(account(WALLET1), 1);

        join_competition(&mut storage, &ctx, 1, 1).unwrap();
        join_competition(&mut storage, &ctx, 1, 1).unwrap();

        let c = competition(&storage);
        assert_eq!(c.participants.len(), 2);
        assert_eq!(c.prize_pool, 100);
        assert_eq!(storage.get_balance(&account(WALLET1)), 900);
    }

    #[test]
    fn test_join_not_found() {
        let mut storage = setup(100, 50);
        let ctx = RuntimeContext::new(account(WALLET1), 1);

        assert_eq!(
            join_competition(&mut storage, &ctx, 2, 1),
            Err(ArenaError::NotFound)
        );
        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 2),
            Err(ArenaError::NotFound)
        );
    }

    #[test]
    fn test_join_with_someone_elses_pet() {
        let mut storage = setup(100, 50);
        let before = competition(&storage);
        let ctx = RuntimeContext::new(account(WALLET2), 1);

        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 1),
            Err(ArenaError::Unauthorized)
        );
        assert_eq!(competition(&storage), before);
        assert_eq!(storage.get_balance(&account(WALLET2)), 1000);
        assert_eq!(storage.get_balance(&account(WALLET1)), 1000);
    }

    #[test]
    fn test_join_after_end() {
        let mut storage = setup(10, 50);
        let ctx = RuntimeContext::new(account(WALLET1), 12);

        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 1),
            Err(ArenaError::Expired)
        );
        assert_eq!(storage.get_balance(&account(WALLET1)), 1000);
    }

    #[test]
    fn test_join_at_end_block() {
        let mut storage = setup(10, 50);
        let last_open = RuntimeContext::new(account(WALLET1), 10);
        let end = RuntimeContext::new(account(WALLET1), 11);

        assert_eq!(
            join_competition(&mut storage, &end, 1, 1),
            Err(ArenaError::Expired)
        );
        assert_eq!(join_competition(&mut storage, &last_open, 1, 1), Ok(true));
    }

    #[test]
    fn test_join_insufficient_balance() {
        let mut storage = setup(100, 2000);
        let ctx = RuntimeContext::new(account(WALLET1), 1);

        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 1),
            Err(ArenaError::InsufficientFunds)
        );
        assert_eq!(competition(&storage).prize_pool, 0);
        assert_eq!(storage.get_balance(&account(WALLET1)), 1000);
    }

    #[test]
    fn test_join_exact_balance() {
        let mut storage = setup(100, 1000);
        let ctx = RuntimeContext::new(account(WALLET1), 1);

        assert_eq!(join_competition(&mut storage, &ctx, 1, 1), Ok(true));
        assert_eq!(storage.get_balance(&account(WALLET1)), 0);
    }

    #[test]
    fn test_join_unknown_account_has_zero_balance() {
        let mut storage = setup(100, 1);
        let stranger = account("ST9STRANGER");
        let pet = mint_pet(
            &mut storage,
            &RuntimeContext::new(stranger.clone(), 1),
            &mut seeded_rng(3),
            "Stray",
        )
        .unwrap();

        assert_eq!(
            join_competition(&mut storage, &RuntimeContext::new(stranger, 1), 1, pet),
            Err(ArenaError::InsufficientFunds)
        );
    }

    #[test]
    fn test_join_check_order() {
        // Wrong owner and expired: ownership is reported first
        let mut storage = setup(10, 2000);
        let ctx = RuntimeContext::new(account(WALLET2), 50);
        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 1),
            Err(ArenaError::Unauthorized)
        );

        // Expired and underfunded: expiry is reported first
        let ctx = RuntimeContext::new(account(WALLET1), 50);
        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 1),
            Err(ArenaError::Expired)
        );
    }

    #[test]
    fn test_join_prize_pool_overflow() {
        let mut storage = setup(100, 10);
        let mut c = competition(&storage);
        c.prize_pool = u64::MAX - 5;
        storage.set_competition(&c).unwrap();

        let ctx = RuntimeContext::new(account(WALLET1), 1);
        assert_eq!(
            join_competition(&mut storage, &ctx, 1, 1),
            Err(ArenaError::Overflow)
        );
        assert_eq!(competition(&storage), c);
        assert_eq!(storage.get_balance(&account(WALLET1)), 1000);
    }
}
