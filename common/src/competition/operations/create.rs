// Competition Create Operation

use log::debug;

use crate::competition::Competition;
use crate::error::{ArenaError, ArenaResult};
use crate::ledger::{next_id, Amount, ArenaStorage, CompetitionId, RuntimeContext};

/// Parameters for creating a competition
#[derive(Clone, Debug)]
pub struct CreateCompetitionParams {
    /// Display name
    pub name: String,
    /// Number of blocks the competition accepts entries
    pub duration: u64,
    /// Amount each entrant stakes
    pub stake_amount: Amount,
}

impl CreateCompetitionParams {
    pub fn new(name: impl Into<String>, duration: u64, stake_amount: Amount) -> Self {
        Self {
            name: name.into(),
            duration,
            stake_amount,
        }
    }
}

/// Create a new competition
///
/// Any account may create a competition; the caller is not recorded.
/// The competition starts at the current block and refuses entries from
/// `start + duration` onwards.
///
/// # Returns
/// - `Ok(CompetitionId)`: The new competition ID (competition count + 1)
/// - `Err(ArenaError)`: Only on arithmetic overflow or storage failure
pub fn create_competition<S: ArenaStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    params: CreateCompetitionParams,
) -> ArenaResult<CompetitionId> {
    // Step 1: Compute window
    let end_block = ctx
        .block_height
        .checked_add(params.duration)
        .ok_or(ArenaError::Overflow)?;

    // Step 2: Allocate competition ID
    let id = next_id(storage.competition_count())?;

    // Step 3: Store competition
    let competition = Competition {
        id,
        name: params.name,
        start_block: ctx.block_height,
        end_block,
        stake_amount: params.stake_amount,
        prize_pool: 0,
        participants: Vec::new(),
    };
    storage.set_competition(&competition)?;

    debug!(
        "Competition {} '{}' created by {}: blocks {}..{}, stake {}",
        id,
        competition.name,
        ctx.caller,
        competition.start_block,
        competition.end_block,
        competition.stake_amount
    );
    Ok(id)
}
