// Pet Operations Module
// This module contains the core business logic for pet operations.

mod breed;
mod mint;
mod query;

pub use breed::*;
pub use mint::*;
pub use query::*;
