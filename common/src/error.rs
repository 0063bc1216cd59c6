// Pet Arena - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 1-99: Lookup errors
// - 100-199: Permission errors
// - 200-299: Competition errors
// - 300-399: Input validation errors
// - 900-999: System errors

use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Ledger operation result type
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumIter, EnumString, IntoStaticStr)]
#[repr(u64)]
pub enum ArenaError {
    // ========================================
    // Lookup errors (1-99)
    // ========================================
    #[error("Competition or pet not found")]
    NotFound = 1,

    #[error("Pet not found")]
    PetNotFound = 2,

    #[error("Competition not found")]
    CompetitionNotFound = 3,

    // ========================================
    // Permission errors (100-199)
    // ========================================
    #[error("Not pet owner")]
    Unauthorized = 100,

    // ========================================
    // Competition errors (200-299)
    // ========================================
    #[error("Competition ended")]
    Expired = 200,

    #[error("Insufficient balance")]
    InsufficientFunds = 201,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Account identifier is empty")]
    EmptyAccountId = 300,

    #[error("A pet cannot be bred with itself")]
    SameParent = 301,

    #[error("Block height cannot go backwards")]
    InvalidBlockHeight = 302,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    StorageError = 901,
}

impl ArenaError {
    /// Get the numeric error code
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Resolve an error from its numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::NotFound),
            2 => Some(Self::PetNotFound),
            3 => Some(Self::CompetitionNotFound),
            100 => Some(Self::Unauthorized),
            200 => Some(Self::Expired),
            201 => Some(Self::InsufficientFunds),
            300 => Some(Self::EmptyAccountId),
            301 => Some(Self::SameParent),
            302 => Some(Self::InvalidBlockHeight),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            _ => None,
        }
    }

    /// Stable variant name, used by scenario files to name expected failures
    pub fn name(&self) -> &'static str {
        self.into()
    }
}
