mod hash;

pub mod random;

pub use hash::*;
