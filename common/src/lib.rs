//! Pet Arena common library
//!
//! In-memory ledger for a virtual-pet competition: accounts mint pets,
//! anyone opens a competition for a fixed number of blocks, and pet owners
//! enter it by staking into the prize pool.
//!
//! ```
//! use arena_common::{account::AccountId, ledger::MemoryLedger};
//!
//! let alice = AccountId::new("alice").unwrap();
//! let mut ledger = MemoryLedger::with_seed(0).with_balances([(alice.clone(), 1000)]);
//!
//! let pet = ledger.mint_pet(&alice, "Fluffy").unwrap();
//! let cup = ledger.create_competition(&alice, "Pet Olympics", 100, 10).unwrap();
//! assert!(ledger.join_competition(&alice, cup, pet).unwrap());
//! assert_eq!(ledger.balance_of(&alice), 990);
//! ```

pub mod account;
pub mod competition;
pub mod config;
pub mod crypto;
pub mod error;
pub mod ledger;
pub mod pet;
