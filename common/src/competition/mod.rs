// Competitions
// A competition accepts entries until its end block. Entering stakes a fixed
// amount from the entrant's balance into the competition's prize pool.
//
// Module Structure:
// - types: Competition record and status
// - operations: create, join and read-only queries

pub mod operations;
mod types;

pub use operations::*;
pub use types::*;
