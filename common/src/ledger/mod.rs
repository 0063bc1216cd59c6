// Ledger Module
// This module holds the storage abstraction shared by pet and competition
// operations, plus the in-memory ledger that stands in for chain state.
//
// Operations never touch a concrete store: storage is reached through the
// `ArenaStorage` trait and the caller and block height arrive in a
// `RuntimeContext`.

mod memory;

pub use memory::*;

use crate::account::AccountId;
use crate::competition::Competition;
use crate::error::ArenaResult;
use crate::pet::Pet;

/// Pet identifier, sequential from 1
pub type PetId = u64;

/// Competition identifier, sequential from 1
pub type CompetitionId = u64;

/// Height of the simulated chain
pub type BlockHeight = u64;

/// Balance and stake amounts
pub type Amount = u64;

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for ledger operations
/// Runtime implementations provide concrete storage backends
pub trait ArenaStorage {
    // Pet operations
    fn get_pet(&self, id: PetId) -> Option<Pet>;
    fn set_pet(&mut self, pet: &Pet) -> ArenaResult<()>;
    fn pet_count(&self) -> u64;

    // Competition operations
    fn get_competition(&self, id: CompetitionId) -> Option<Competition>;
    fn set_competition(&mut self, competition: &Competition) -> ArenaResult<()>;
    fn competition_count(&self) -> u64;

    // Balance operations
    fn get_balance(&self, account: &AccountId) -> Amount;
    fn set_balance(&mut self, account: &AccountId, amount: Amount) -> ArenaResult<()>;

    // All pets in creation order
    fn pets(&self) -> Vec<Pet> {
        (1..=self.pet_count())
            .filter_map(|id| self.get_pet(id))
            .collect()
    }
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing caller and block information
#[derive(Clone, Debug)]
pub struct RuntimeContext {
    /// Account submitting the operation
    pub caller: AccountId,
    /// Current block height
    pub block_height: BlockHeight,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: AccountId, block_height: BlockHeight) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

/// Allocate the next sequential identifier from an entity count
pub(crate) fn next_id(count: u64) -> ArenaResult<u64> {
    count
        .checked_add(crate::config::FIRST_ID)
        .ok_or(crate::error::ArenaError::Overflow)
}
