// Pet Query Operations
// This module contains read-only query functions.

use crate::account::AccountId;
use crate::error::{ArenaError, ArenaResult};
use crate::ledger::{ArenaStorage, PetId};
use crate::pet::Pet;

/// Get a pet by ID
pub fn get_pet<S: ArenaStorage + ?Sized>(storage: &S, id: PetId) -> ArenaResult<Pet> {
    storage.get_pet(id).ok_or(ArenaError::PetNotFound)
}

/// Get the owner of a pet
pub fn owner_of<S: ArenaStorage + ?Sized>(storage: &S, id: PetId) -> ArenaResult<AccountId> {
    get_pet(storage, id).map(|pet| pet.owner)
}

/// All pets owned by an account, in creation order
pub fn pets_of<S: ArenaStorage + ?Sized>(storage: &S, owner: &AccountId) -> Vec<Pet> {
    storage
        .pets()
        .into_iter()
        .filter(|pet| pet.is_owned_by(owner))
        .collect()
}
