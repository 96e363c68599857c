//! # Error Taxonomy
//!
//! Every way a ledger operation can fail, as a value. There are three
//! families:
//!
//! - **Authorization** — the caller lacks the required capability
//!   ([`LedgerError::OwnerOnly`], [`LedgerError::NotTokenOwner`]).
//! - **Validation** — an argument violates a precondition
//!   ([`LedgerError::InvalidAmount`]).
//! - **Accounting** — the arithmetic itself refuses
//!   ([`LedgerError::InsufficientFunds`], [`LedgerError::Overflow`]).
//!
//! All of them are detected *before* any state is touched, so a failed
//! call never needs rollback — there is nothing to roll back.
//!
//! Hosts interoperate on numeric codes, not on Rust enums; [`LedgerError::code`]
//! maps each variant to its stable number from [`crate::config`]. Code 102
//! is reserved and has no variant on purpose.

use thiserror::Error;

use crate::config;
use crate::principal::Principal;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors returned by ledger operations.
///
/// Variants carry enough context to produce a useful log line without a
/// second lookup. Derives `PartialEq` so tests can assert on exact failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The operation is gated on the contract-owner capability and the
    /// caller does not hold it.
    #[error("owner only: {caller} does not hold the contract-owner capability")]
    OwnerOnly {
        /// The principal that attempted the call.
        caller: Principal,
    },

    /// The caller tried to move or destroy tokens held by someone else.
    ///
    /// "Token owner" here means the holder of the balance being touched —
    /// a different capability from the contract owner.
    #[error("not token owner: {caller} cannot act on tokens held by {holder}")]
    NotTokenOwner {
        /// The principal that attempted the call.
        caller: Principal,
        /// The principal whose balance was targeted.
        holder: Principal,
    },

    /// A zero amount was supplied to transfer, mint, or burn.
    #[error("invalid amount: zero-amount operations are rejected")]
    InvalidAmount,

    /// A debit was larger than the holder's stored balance.
    #[error("insufficient funds: {holder} holds {available}, requested {requested}")]
    InsufficientFunds {
        /// The principal being debited.
        holder: Principal,
        /// The balance on record.
        available: u128,
        /// The amount the call asked for.
        requested: u128,
    },

    /// A credit would wrap the 128-bit balance width.
    ///
    /// At realistic supplies this is unreachable through transfers (a
    /// balance can never exceed total supply); it guards mint and direct
    /// credits.
    #[error("balance overflow: current {current}, credit {credit}")]
    Overflow {
        /// The balance or supply before the failed credit.
        current: u128,
        /// The amount that would have wrapped it.
        credit: u128,
    },
}

impl LedgerError {
    /// Returns the stable numeric code for this error.
    ///
    /// 100/101/103 are the contract-level registry (102 reserved, never
    /// emitted); 1 and 2 are the accounting trap codes surfaced by the
    /// host's token primitive rather than by contract asserts.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::OwnerOnly { .. } => config::ERR_OWNER_ONLY,
            LedgerError::NotTokenOwner { .. } => config::ERR_NOT_TOKEN_OWNER,
            LedgerError::InvalidAmount => config::ERR_INVALID_AMOUNT,
            LedgerError::InsufficientFunds { .. } => config::TRAP_INSUFFICIENT_FUNDS,
            LedgerError::Overflow { .. } => config::TRAP_OVERFLOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_registry() {
        let caller = Principal::new("mallory");
        let holder = Principal::new("alice");

        assert_eq!(
            LedgerError::OwnerOnly {
                caller: caller.clone()
            }
            .code(),
            100
        );
        assert_eq!(
            LedgerError::NotTokenOwner {
                caller,
                holder: holder.clone()
            }
            .code(),
            101
        );
        assert_eq!(LedgerError::InvalidAmount.code(), 103);
        assert_eq!(
            LedgerError::InsufficientFunds {
                holder,
                available: 1,
                requested: 2
            }
            .code(),
            1
        );
        assert_eq!(
            LedgerError::Overflow {
                current: u128::MAX,
                credit: 1
            }
            .code(),
            2
        );
    }

    #[test]
    fn reserved_code_is_never_produced() {
        // No variant maps to 102; keep it that way.
        assert_eq!(config::ERR_RESERVED, 102);
    }

    #[test]
    fn display_carries_context() {
        let err = LedgerError::InsufficientFunds {
            holder: Principal::new("alice"),
            available: 100,
            requested: 250,
        };
        let msg = err.to_string();
        assert!(msg.contains("alice"));
        assert!(msg.contains("100"));
        assert!(msg.contains("250"));
    }
}
