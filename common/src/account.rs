use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{ArenaError, ArenaResult};

/// Ledger account identifier
///
/// Any non-empty string is accepted, e.g. a chain address such as
/// `ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> ArenaResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ArenaError::EmptyAccountId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'a> Deserialize<'a> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let id = String::deserialize(deserializer)?;
        AccountId::new(id).map_err(SerdeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_rejected() {
        assert_eq!(AccountId::new(""), Err(ArenaError::EmptyAccountId));
        assert_eq!("".parse::<AccountId>(), Err(ArenaError::EmptyAccountId));
    }

    #[test]
    fn test_account_serde_transparent() {
        let id = AccountId::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM\"");
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<AccountId>("\"\"").is_err());
    }
}
