//! # Configuration & Constants
//!
//! Every magic number in the ledger lives here. The error codes in
//! particular are a wire contract: hosts and clients match on the numeric
//! values, so changing one after deployment breaks interoperability for
//! everyone. Don't.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::principal::Principal;

// ---------------------------------------------------------------------------
// Error code registry
// ---------------------------------------------------------------------------

/// Caller is not the contract owner on an owner-gated call.
pub const ERR_OWNER_ONLY: u32 = 100;

/// Caller tried to move or burn tokens held by a different principal.
pub const ERR_NOT_TOKEN_OWNER: u32 = 101;

/// Reserved. Never emitted by any code path; the gap is deliberate and the
/// registry must not be renumbered to close it.
pub const ERR_RESERVED: u32 = 102;

/// A zero amount was supplied where a positive one is required.
pub const ERR_INVALID_AMOUNT: u32 = 103;

/// Trap code: debit exceeded the stored balance. Surfaced by the token
/// accounting primitive itself, hence the separate low number range.
pub const TRAP_INSUFFICIENT_FUNDS: u32 = 1;

/// Trap code: credit would wrap the balance width.
pub const TRAP_OVERFLOW: u32 = 2;

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

/// Maximum byte length of the token display name.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of the ticker symbol.
pub const MAX_SYMBOL_LEN: usize = 32;

/// Maximum byte length of the token URI. Matches the host wire type for
/// the URI field; the setter itself does not re-validate — by the time a
/// call reaches the ledger the host has already sized the buffer.
pub const MAX_TOKEN_URI_LEN: usize = 256;

/// Maximum byte length of a transfer memo, per the host wire format.
pub const MAX_MEMO_LEN: usize = 34;

// ---------------------------------------------------------------------------
// Genesis configuration
// ---------------------------------------------------------------------------

/// Errors rejected by [`GenesisConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// The token name is empty.
    #[error("genesis: token name must not be empty")]
    EmptyName,

    /// The token name exceeds [`MAX_NAME_LEN`] bytes.
    #[error("genesis: token name is {len} bytes, maximum is {MAX_NAME_LEN}")]
    NameTooLong {
        /// Actual byte length supplied.
        len: usize,
    },

    /// The ticker symbol is empty.
    #[error("genesis: token symbol must not be empty")]
    EmptySymbol,

    /// The ticker symbol exceeds [`MAX_SYMBOL_LEN`] bytes.
    #[error("genesis: token symbol is {len} bytes, maximum is {MAX_SYMBOL_LEN}")]
    SymbolTooLong {
        /// Actual byte length supplied.
        len: usize,
    },
}

/// Everything fixed at deployment time, in one serializable struct.
///
/// A host loads this from its deployment manifest (the CLI reads it from a
/// JSON file) and hands it to [`Ledger::new`](crate::ledger::Ledger::new).
/// The `treasury` principal receives the entire initial supply and becomes
/// the initial contract owner — the "deployer" in chain terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Display name, e.g. "Aurum".
    pub name: String,

    /// Ticker symbol, e.g. "AUR".
    pub symbol: String,

    /// Display decimal places. Purely presentational: all amounts in the
    /// ledger are integers in the smallest unit, and the ledger never
    /// divides.
    pub decimals: u8,

    /// Total supply minted at genesis, in smallest units.
    pub initial_supply: u128,

    /// The principal credited with the full initial supply. Also the
    /// initial contract owner.
    pub treasury: Principal,
}

impl GenesisConfig {
    /// Checks the field bounds the host wire format would enforce.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound. An `initial_supply` of zero is
    /// permitted — a mint-only token is a legitimate deployment.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.name.is_empty() {
            return Err(GenesisError::EmptyName);
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(GenesisError::NameTooLong {
                len: self.name.len(),
            });
        }
        if self.symbol.is_empty() {
            return Err(GenesisError::EmptySymbol);
        }
        if self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(GenesisError::SymbolTooLong {
                len: self.symbol.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenesisConfig {
        GenesisConfig {
            name: "Aurum".to_string(),
            symbol: "AUR".to_string(),
            decimals: 6,
            initial_supply: 1_000_000_000_000_000,
            treasury: Principal::new("deployer"),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn zero_supply_is_allowed() {
        let mut cfg = config();
        cfg.initial_supply = 0;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn empty_name_rejected() {
        let mut cfg = config();
        cfg.name.clear();
        assert_eq!(cfg.validate(), Err(GenesisError::EmptyName));
    }

    #[test]
    fn overlong_name_rejected() {
        let mut cfg = config();
        cfg.name = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            cfg.validate(),
            Err(GenesisError::NameTooLong {
                len: MAX_NAME_LEN + 1
            })
        );
    }

    #[test]
    fn overlong_symbol_rejected() {
        let mut cfg = config();
        cfg.symbol = "A".repeat(MAX_SYMBOL_LEN + 1);
        assert!(matches!(
            cfg.validate(),
            Err(GenesisError::SymbolTooLong { .. })
        ));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let cfg = config();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GenesisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
