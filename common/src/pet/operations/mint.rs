// Pet Mint Operation
// This module contains the mint operation logic.

use log::debug;
use rand::RngCore;

use crate::error::ArenaResult;
use crate::ledger::{next_id, ArenaStorage, PetId, RuntimeContext};
use crate::pet::{Dna, Pet};

/// Mint a new pet owned by the caller
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller, block height)
/// - `rng`: Entropy for the genetic tag
/// - `name`: Display name, stored as given
///
/// # Returns
/// - `Ok(PetId)`: The new pet ID (pet count + 1)
/// - `Err(ArenaError)`: Only on identifier overflow or storage failure
pub fn mint_pet<S, R>(
    storage: &mut S,
    ctx: &RuntimeContext,
    rng: &mut R,
    name: impl Into<String>,
) -> ArenaResult<PetId>
where
    S: ArenaStorage + ?Sized,
    R: RngCore + ?Sized,
{
    let name = name.into();

    // Step 1: Allocate pet ID
    let id = next_id(storage.pet_count())?;

    // Step 2: Create pet
    let dna = Dna::generate(rng, &ctx.caller, &name, ctx.block_height);
    let pet = Pet {
        id,
        owner: ctx.caller.clone(),
        dna,
        name,
        birth_block: ctx.block_height,
        parents: None,
    };

    // Step 3: Store pet
    storage.set_pet(&pet)?;

    debug!(
        "Minted pet {} '{}' for {} at block {}",
        id, pet.name, pet.owner, pet.birth_block
    );
    Ok(id)
}
