// Pet Types
// This module defines the pet record and its genetic tag.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::account::AccountId;
use crate::config::{DNA_PREFIX, DNA_SIZE};
use crate::crypto::{hash, Hash};
use crate::ledger::{BlockHeight, PetId};

// ========================================
// Genetic Tag
// ========================================

/// Pseudo-random genetic tag carried by every pet
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dna(Hash);

impl Dna {
    pub const fn new(bytes: [u8; DNA_SIZE]) -> Self {
        Self(Hash::new(bytes))
    }

    /// Derive a fresh tag for a newly minted pet
    ///
    /// Uses: owner + name + birth block + random salt
    pub fn generate<R: RngCore + ?Sized>(
        rng: &mut R,
        owner: &AccountId,
        name: &str,
        birth_block: BlockHeight,
    ) -> Self {
        let mut salt = [0u8; DNA_SIZE];
        rng.fill_bytes(&mut salt);

        let mut preimage = Vec::with_capacity(owner.as_str().len() + name.len() + 8 + DNA_SIZE);
        preimage.extend_from_slice(owner.as_str().as_bytes());
        preimage.extend_from_slice(name.as_bytes());
        preimage.extend_from_slice(&birth_block.to_le_bytes());
        preimage.extend_from_slice(&salt);
        Self(hash(&preimage))
    }

    /// Byte-wise crossover of two parent tags
    ///
    /// Every byte of the child comes from exactly one parent; one random
    /// bit per byte picks which.
    pub fn crossover<R: RngCore + ?Sized>(rng: &mut R, a: &Dna, b: &Dna) -> Self {
        let mut mask = [0u8; DNA_SIZE];
        rng.fill_bytes(&mut mask);

        let mut child = [0u8; DNA_SIZE];
        for (i, byte) in child.iter_mut().enumerate() {
            *byte = if mask[i] & 1 == 0 {
                a.as_bytes()[i]
            } else {
                b.as_bytes()[i]
            };
        }
        Self::new(child)
    }

    pub fn as_bytes(&self) -> &[u8; DNA_SIZE] {
        self.0.as_bytes()
    }
}

impl Display for Dna {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", DNA_PREFIX, self.0)
    }
}

// ========================================
// Pet
// ========================================

/// A pet entity
///
/// Created once by minting or breeding; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Sequential identifier, starting at 1
    pub id: PetId,
    /// Owning account
    pub owner: AccountId,
    /// Genetic tag
    pub dna: Dna,
    /// Display name (not validated)
    pub name: String,
    /// Block height at creation
    pub birth_block: BlockHeight,
    /// Parent pets, set only by breeding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<[PetId; 2]>,
}

impl Pet {
    pub fn is_owned_by(&self, account: &AccountId) -> bool {
        self.owner == *account
    }

    pub fn is_bred(&self) -> bool {
        self.parents.is_some()
    }
}
