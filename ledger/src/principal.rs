//! # Account Principals
//!
//! A [`Principal`] identifies an account: the key under which balances are
//! stored and the value held by the ownership register. The ledger treats
//! it as fully opaque — equality, hashing, and ordering are all it ever
//! needs. Whatever address format the host uses (bech32, hex pubkeys,
//! human-readable test names) passes through unchanged.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An opaque account identifier.
///
/// Wraps the host-supplied address string. Serializes transparently, so a
/// `HashMap<Principal, _>` round-trips through JSON as a plain object with
/// string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wraps a host address as a principal.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Principal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Principal::new("alice"), Principal::from("alice"));
        assert_ne!(Principal::new("alice"), Principal::new("bob"));
    }

    #[test]
    fn usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(Principal::new("alice"), 42u128);
        assert_eq!(map.get(&Principal::new("alice")), Some(&42));
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&Principal::new("alice")).unwrap();
        assert_eq!(json, "\"alice\"");

        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "alice");
    }
}
