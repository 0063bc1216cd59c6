// Competition Query Operations

use crate::competition::{Competition, CompetitionStatus};
use crate::error::{ArenaError, ArenaResult};
use crate::ledger::{ArenaStorage, BlockHeight, CompetitionId};

/// Get a competition by ID
pub fn get_competition<S: ArenaStorage + ?Sized>(
    storage: &S,
    id: CompetitionId,
) -> ArenaResult<Competition> {
    storage
        .get_competition(id)
        .ok_or(ArenaError::CompetitionNotFound)
}

/// Status of a competition at the given height
pub fn competition_status<S: ArenaStorage + ?Sized>(
    storage: &S,
    id: CompetitionId,
    height: BlockHeight,
) -> ArenaResult<CompetitionStatus> {
    get_competition(storage, id).map(|c| c.status_at(height))
}

/// Blocks left before a competition stops accepting entries
pub fn blocks_remaining<S: ArenaStorage + ?Sized>(
    storage: &S,
    id: CompetitionId,
    height: BlockHeight,
) -> ArenaResult<u64> {
    get_competition(storage, id).map(|c| c.blocks_remaining(height))
}

/// Number of entries, counting repeated entries by the same account
pub fn participant_count<S: ArenaStorage + ?Sized>(
    storage: &S,
    id: CompetitionId,
) -> ArenaResult<usize> {
    get_competition(storage, id).map(|c| c.participants.len())
}
