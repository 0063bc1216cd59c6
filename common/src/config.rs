// Ledger protocol constants

/// Block height of a freshly created ledger
pub const INITIAL_BLOCK_HEIGHT: u64 = 1;

/// First identifier handed out for pets and competitions
// Identifiers are "count + 1"; nothing is ever deleted so they never collide
pub const FIRST_ID: u64 = 1;

/// Prefix used when displaying a genetic tag
pub const DNA_PREFIX: &str = "DNA_";

/// Size in bytes of a genetic tag
pub const DNA_SIZE: usize = 32;
