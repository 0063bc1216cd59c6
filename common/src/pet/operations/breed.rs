// Pet Breed Operation
// Breeding creates a new pet from two distinct pets held by the caller.

use log::{debug, trace};
use rand::RngCore;

use crate::error::{ArenaError, ArenaResult};
use crate::ledger::{next_id, ArenaStorage, PetId, RuntimeContext};
use crate::pet::{Dna, Pet};

/// Parameters for breeding a pet
#[derive(Clone, Debug)]
pub struct BreedParams {
    /// First parent
    pub parent_a: PetId,
    /// Second parent
    pub parent_b: PetId,
    /// Name of the offspring
    pub name: String,
}

impl BreedParams {
    pub fn new(parent_a: PetId, parent_b: PetId, name: impl Into<String>) -> Self {
        Self {
            parent_a,
            parent_b,
            name: name.into(),
        }
    }
}

/// Breed two pets owned by the caller
///
/// Checks, in order:
/// 1. Both parents exist (`PetNotFound`)
/// 2. Parents are distinct (`SameParent`)
/// 3. Caller owns both parents (`Unauthorized`)
///
/// # Returns
/// - `Ok(PetId)`: The offspring ID, allocated like a minted pet
pub fn breed_pets<S, R>(
    storage: &mut S,
    ctx: &RuntimeContext,
    rng: &mut R,
    params: BreedParams,
) -> ArenaResult<PetId>
where
    S: ArenaStorage + ?Sized,
    R: RngCore + ?Sized,
{
    let a = storage
        .get_pet(params.parent_a)
        .ok_or(ArenaError::PetNotFound)?;
    let b = storage
        .get_pet(params.parent_b)
        .ok_or(ArenaError::PetNotFound)?;

    if a.id == b.id {
        return Err(ArenaError::SameParent);
    }

    if !a.is_owned_by(&ctx.caller) || !b.is_owned_by(&ctx.caller) {
        trace!(
            "{} tried to breed pets {} and {} it does not own",
            ctx.caller,
            a.id,
            b.id
        );
        return Err(ArenaError::Unauthorized);
    }

    let id = next_id(storage.pet_count())?;
    let pet = Pet {
        id,
        owner: ctx.caller.clone(),
        dna: Dna::crossover(rng, &a.dna, &b.dna),
        name: params.name,
        birth_block: ctx.block_height,
        parents: Some([a.id, b.id]),
    };
    storage.set_pet(&pet)?;

    debug!(
        "Bred pet {} from {} and {} for {}",
        id, a.id, b.id, pet.owner
    );
    Ok(id)
}
