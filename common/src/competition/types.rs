// Competition Types

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::account::AccountId;
use crate::ledger::{Amount, BlockHeight, CompetitionId};

/// Whether a competition still accepts entries at a given height
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CompetitionStatus {
    /// Entries accepted
    Open,
    /// End block reached
    Ended,
}

/// A staked competition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    /// Sequential identifier, starting at 1
    pub id: CompetitionId,
    /// Display name
    pub name: String,
    /// Block height at creation
    pub start_block: BlockHeight,
    /// First block at which entries are refused
    pub end_block: BlockHeight,
    /// Amount each entrant stakes
    pub stake_amount: Amount,
    /// Sum of all stakes
    pub prize_pool: Amount,
    /// Entrants in join order, duplicates allowed
    pub participants: Vec<AccountId>,
}

impl Competition {
    /// Entries are refused from `end_block` onwards, the end block included
    pub fn is_open_at(&self, height: BlockHeight) -> bool {
        height < self.end_block
    }

    pub fn status_at(&self, height: BlockHeight) -> CompetitionStatus {
        if self.is_open_at(height) {
            CompetitionStatus::Open
        } else {
            CompetitionStatus::Ended
        }
    }

    /// Blocks left before entries close, zero once ended
    pub fn blocks_remaining(&self, height: BlockHeight) -> u64 {
        self.end_block.saturating_sub(height)
    }

    pub fn duration(&self) -> u64 {
        self.end_block - self.start_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(start: BlockHeight, end: BlockHeight) -> Competition {
        Competition {
            id: 1,
            name: "Quick Race".to_string(),
            start_block: start,
            end_block: end,
            stake_amount: 50,
            prize_pool: 0,
            participants: Vec::new(),
        }
    }

    #[test]
    fn test_end_block_is_closed() {
        let c = competition(1, 11);
        assert!(c.is_open_at(10));
        assert!(!c.is_open_at(11));
        assert_eq!(c.status_at(11), CompetitionStatus::Ended);
        assert_eq!(c.status_at(1), CompetitionStatus::Open);
    }

    #[test]
    fn test_blocks_remaining_saturates() {
        let c = competition(1, 11);
        assert_eq!(c.blocks_remaining(1), 10);
        assert_eq!(c.blocks_remaining(40), 0);
        assert_eq!(c.duration(), 10);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(CompetitionStatus::Open.to_string(), "open");
        assert_eq!(
            serde_json::to_string(&CompetitionStatus::Ended).unwrap(),
            "\"ended\""
        );
    }
}
