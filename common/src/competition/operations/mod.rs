// Competition Operations Module
// This module contains the core business logic for competition operations.

mod create;
mod join;
mod query;

pub use create::*;
pub use join::*;
pub use query::*;
