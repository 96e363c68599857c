//! # Token Metadata
//!
//! Display metadata for the asset. Name, symbol, and decimal count are
//! fixed at genesis; only the token URI can change afterwards, and only
//! through the owner-gated setter on the ledger. `None` for the URI means
//! "never set" (or cleared) — distinct from an empty string, on purpose.

use serde::{Deserialize, Serialize};

/// Immutable display fields plus the one mutable URI slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Display name, fixed at genesis.
    name: String,

    /// Ticker symbol, fixed at genesis.
    symbol: String,

    /// Decimal places for display. The ledger itself never divides.
    decimals: u8,

    /// Optional metadata URI. Starts unset.
    token_uri: Option<String>,
}

impl TokenMetadata {
    /// Creates metadata with the URI unset.
    pub fn new(name: String, symbol: String, decimals: u8) -> Self {
        Self {
            name,
            symbol,
            decimals,
            token_uri: None,
        }
    }

    /// The token's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display decimal places.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The metadata URI, if one has been set.
    pub fn token_uri(&self) -> Option<&str> {
        self.token_uri.as_deref()
    }

    /// Replaces the URI. `None` clears it back to unset.
    ///
    /// Authorization lives in the ledger dispatcher; this is the raw field
    /// write.
    pub(crate) fn set_token_uri(&mut self, uri: Option<String>) {
        self.token_uri = uri;
    }
}
