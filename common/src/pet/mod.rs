// Pets
// Pets are the entry tokens for competitions. An account mints a pet with a
// fresh genetic tag, or breeds a new one from two pets it already owns.
//
// Module Structure:
// - types: Pet record and genetic tag
// - operations: mint, breed and read-only queries

pub mod operations;
mod types;

pub use operations::*;
pub use types::*;
