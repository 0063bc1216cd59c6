// In-Memory Ledger
// Process-local stand-in for chain state. Holds pets, competitions and
// balances, plus the block counter that an external driver advances between
// operations. Nothing is persisted; a new ledger starts empty at block 1.

use indexmap::IndexMap;
use log::debug;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::competition::{self, Competition, CreateCompetitionParams};
use crate::config::INITIAL_BLOCK_HEIGHT;
use crate::crypto::random::{entropy_rng, seeded_rng};
use crate::error::{ArenaError, ArenaResult};
use crate::pet::{self, BreedParams, Pet};

use super::{Amount, ArenaStorage, BlockHeight, CompetitionId, PetId, RuntimeContext};

// ========================================
// Ledger State
// ========================================

/// Entity tables, kept in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub pets: IndexMap<PetId, Pet>,
    pub competitions: IndexMap<CompetitionId, Competition>,
    pub balances: IndexMap<AccountId, Amount>,
}

impl ArenaStorage for LedgerState {
    fn get_pet(&self, id: PetId) -> Option<Pet> {
        self.pets.get(&id).cloned()
    }

    fn set_pet(&mut self, pet: &Pet) -> ArenaResult<()> {
        self.pets.insert(pet.id, pet.clone());
        Ok(())
    }

    fn pet_count(&self) -> u64 {
        self.pets.len() as u64
    }

    fn get_competition(&self, id: CompetitionId) -> Option<Competition> {
        self.competitions.get(&id).cloned()
    }

    fn set_competition(&mut self, competition: &Competition) -> ArenaResult<()> {
        self.competitions
            .insert(competition.id, competition.clone());
        Ok(())
    }

    fn competition_count(&self) -> u64 {
        self.competitions.len() as u64
    }

    fn get_balance(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn set_balance(&mut self, account: &AccountId, amount: Amount) -> ArenaResult<()> {
        self.balances.insert(account.clone(), amount);
        Ok(())
    }

    fn pets(&self) -> Vec<Pet> {
        self.pets.values().cloned().collect()
    }
}

/// Serializable view of a whole ledger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub block_height: BlockHeight,
    pub state: LedgerState,
}

// ========================================
// Memory Ledger
// ========================================

/// The ledger-state mock
///
/// Every mutation takes `&mut self`, so exactly one operation runs at a time
/// and the block counter cannot move while an operation is in flight.
#[derive(Debug)]
pub struct MemoryLedger {
    state: LedgerState,
    block_height: BlockHeight,
    rng: StdRng,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    /// Empty ledger at the initial height, genetic tags drawn from OS entropy
    pub fn new() -> Self {
        Self::with_rng(entropy_rng())
    }

    /// Empty ledger whose genetic tags are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(seeded_rng(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: LedgerState::default(),
            block_height: INITIAL_BLOCK_HEIGHT,
            rng,
        }
    }

    /// Seed account balances, replacing any previous value
    pub fn with_balances<I>(mut self, balances: I) -> Self
    where
        I: IntoIterator<Item = (AccountId, Amount)>,
    {
        self.state.balances.extend(balances);
        self
    }

    fn context(&self, caller: &AccountId) -> RuntimeContext {
        RuntimeContext::new(caller.clone(), self.block_height)
    }

    // ========================================
    // Chain driver
    // ========================================

    pub fn block_height(&self) -> BlockHeight {
        self.block_height
    }

    /// Move the chain forward by `blocks`
    pub fn advance_blocks(&mut self, blocks: u64) -> ArenaResult<BlockHeight> {
        self.block_height = self
            .block_height
            .checked_add(blocks)
            .ok_or(ArenaError::Overflow)?;
        debug!("Advanced {} blocks to height {}", blocks, self.block_height);
        Ok(self.block_height)
    }

    /// Jump to an absolute height; the chain never goes backwards
    pub fn set_block_height(&mut self, height: BlockHeight) -> ArenaResult<()> {
        if height < self.block_height {
            return Err(ArenaError::InvalidBlockHeight);
        }
        self.block_height = height;
        Ok(())
    }

    // ========================================
    // Balances
    // ========================================

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.state.get_balance(account)
    }

    pub fn set_balance(&mut self, account: &AccountId, amount: Amount) -> ArenaResult<()> {
        self.state.set_balance(account, amount)
    }

    /// Add funds to an account
    pub fn credit(&mut self, account: &AccountId, amount: Amount) -> ArenaResult<Amount> {
        let balance = self
            .balance_of(account)
            .checked_add(amount)
            .ok_or(ArenaError::Overflow)?;
        self.state.set_balance(account, balance)?;
        Ok(balance)
    }

    // ========================================
    // Operations
    // ========================================

    pub fn mint_pet(&mut self, caller: &AccountId, name: impl Into<String>) -> ArenaResult<PetId> {
        let ctx = self.context(caller);
        pet::mint_pet(&mut self.state, &ctx, &mut self.rng, name)
    }

    pub fn breed_pets(
        &mut self,
        caller: &AccountId,
        parent_a: PetId,
        parent_b: PetId,
        name: impl Into<String>,
    ) -> ArenaResult<PetId> {
        let ctx = self.context(caller);
        pet::breed_pets(
            &mut self.state,
            &ctx,
            &mut self.rng,
            BreedParams::new(parent_a, parent_b, name),
        )
    }

    pub fn create_competition(
        &mut self,
        caller: &AccountId,
        name: impl Into<String>,
        duration: u64,
        stake_amount: Amount,
    ) -> ArenaResult<CompetitionId> {
        let ctx = self.context(caller);
        competition::create_competition(
            &mut self.state,
            &ctx,
            CreateCompetitionParams::new(name, duration, stake_amount),
        )
    }

    pub fn join_competition(
        &mut self,
        caller: &AccountId,
        competition_id: CompetitionId,
        pet_id: PetId,
    ) -> ArenaResult<bool> {
        let ctx = self.context(caller);
        competition::join_competition(&mut self.state, &ctx, competition_id, pet_id)
    }

    // ========================================
    // Queries
    // ========================================

    pub fn pet(&self, id: PetId) -> ArenaResult<Pet> {
        pet::get_pet(&self.state, id)
    }

    pub fn pets_of(&self, owner: &AccountId) -> Vec<Pet> {
        pet::pets_of(&self.state, owner)
    }

    pub fn competition(&self, id: CompetitionId) -> ArenaResult<Competition> {
        competition::get_competition(&self.state, id)
    }

    pub fn competition_status(
        &self,
        id: CompetitionId,
    ) -> ArenaResult<competition::CompetitionStatus> {
        competition::competition_status(&self.state, id, self.block_height)
    }

    pub fn storage(&self) -> &LedgerState {
        &self.state
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            block_height: self.block_height,
            state: self.state.clone(),
        }
    }
}
