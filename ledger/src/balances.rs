//! # Balance Store
//!
//! The ledger's accounting core: a map from [`Principal`] to a 128-bit
//! balance. Absence of a key *is* a balance of zero — the store never needs
//! to materialize zero entries, and callers never see the difference.
//!
//! Two invariants are enforced here and nowhere else:
//!
//! 1. **Non-negativity** — balances are unsigned and every debit checks
//!    the stored amount first. There is no code path to a negative balance.
//! 2. **No half-applied moves** — [`BalanceStore::transfer`] validates both
//!    legs before mutating either, so a debited sender with an uncredited
//!    receiver is unobservable, even across an error return.
//!
//! Supply tracking lives one level up in [`crate::ledger::Ledger`]; the
//! store only knows about individual accounts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};
use crate::principal::Principal;

/// Per-principal balances for a single asset.
///
/// Not `Sync` by itself; concurrent hosts wrap the whole ledger in
/// [`crate::shared::SharedLedger`] instead of locking the store separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceStore {
    /// Stored balances in smallest units. Missing key ≡ 0.
    balances: HashMap<Principal, u128>,
}

impl BalanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Creates a store holding the genesis allocation: the full initial
    /// supply credited to a single principal.
    pub fn genesis(treasury: Principal, initial_supply: u128) -> Self {
        let mut balances = HashMap::new();
        if initial_supply > 0 {
            balances.insert(treasury, initial_supply);
        }
        Self { balances }
    }

    /// Returns the stored balance, or 0 for an unknown principal.
    pub fn get(&self, principal: &Principal) -> u128 {
        self.balances.get(principal).copied().unwrap_or(0)
    }

    /// Credits (adds) `amount` to a principal's balance, creating the entry
    /// if needed. Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the credit would wrap `u128`.
    /// The entry is untouched on failure.
    pub fn credit(&mut self, principal: &Principal, amount: u128) -> Result<u128> {
        let current = self.get(principal);
        let updated = current
            .checked_add(amount)
            .ok_or(LedgerError::Overflow {
                current,
                credit: amount,
            })?;
        self.balances.insert(principal.clone(), updated);
        Ok(updated)
    }

    /// Debits (subtracts) `amount` from a principal's balance. Returns the
    /// new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the stored balance is
    /// smaller than `amount`. The entry is untouched on failure.
    pub fn debit(&mut self, principal: &Principal, amount: u128) -> Result<u128> {
        let current = self.get(principal);
        if current < amount {
            return Err(LedgerError::InsufficientFunds {
                holder: principal.clone(),
                available: current,
                requested: amount,
            });
        }
        let updated = current - amount;
        self.balances.insert(principal.clone(), updated);
        Ok(updated)
    }

    /// Moves `amount` from one principal to another as a single atomic step.
    ///
    /// Both legs are validated before either balance is written: the sender
    /// must hold at least `amount`, and the receiver's balance must not wrap.
    /// A self-move with sufficient funds succeeds as a net no-op.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientFunds`] or [`LedgerError::Overflow`]; on
    /// either, the store is exactly as it was before the call.
    pub fn transfer(&mut self, from: &Principal, to: &Principal, amount: u128) -> Result<()> {
        let from_balance = self.get(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientFunds {
                holder: from.clone(),
                available: from_balance,
                requested: amount,
            });
        }

        if from == to {
            return Ok(());
        }

        let to_balance = self.get(to);
        let to_updated = to_balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow {
                current: to_balance,
                credit: amount,
            })?;

        // Both legs validated; commit.
        self.balances.insert(from.clone(), from_balance - amount);
        self.balances.insert(to.clone(), to_updated);
        Ok(())
    }

    /// Returns all principals with a non-zero balance.
    pub fn holders(&self) -> Vec<(Principal, u128)> {
        self.balances
            .iter()
            .filter(|(_, balance)| **balance > 0)
            .map(|(principal, balance)| (principal.clone(), *balance))
            .collect()
    }

    /// Sums every stored balance, or `None` if the sum itself would wrap.
    ///
    /// Used by conservation audits; a ledger created through the public
    /// operations can never actually wrap here, since every balance is
    /// bounded by a supply that was itself checked on the way up.
    pub fn checked_total(&self) -> Option<u128> {
        self.balances
            .values()
            .try_fold(0u128, |acc, balance| acc.checked_add(*balance))
    }

    /// Number of materialized entries, zero balances included.
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }
}
