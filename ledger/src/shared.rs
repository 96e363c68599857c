//! # Shared Ledger Handle
//!
//! The ledger itself assumes a host that serializes mutating calls. A host
//! that is genuinely concurrent — threads handling independent requests —
//! needs exactly one mutual-exclusion boundary around the whole ledger
//! state, and this is it. [`SharedLedger`] wraps the ledger in an
//! `Arc<parking_lot::RwLock<_>>` and delegates the full operation surface:
//! mutations take the write lock, queries the read lock.
//!
//! Cloning the handle shares the same underlying ledger.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::Result;
use crate::ledger::Ledger;
use crate::principal::Principal;

/// A cloneable, thread-safe handle to a single ledger.
///
/// Each operation holds the lock only for the duration of that one call,
/// which preserves the per-call atomicity the ledger relies on: no two
/// mutations interleave, and a reader never observes a half-applied move.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wraps a ledger for shared use.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    // -----------------------------------------------------------------------
    // Mutations (write lock)
    // -----------------------------------------------------------------------

    /// See [`Ledger::transfer`].
    pub fn transfer(
        &self,
        caller: &Principal,
        amount: u128,
        from: &Principal,
        to: &Principal,
        memo: Option<&[u8]>,
    ) -> Result<()> {
        self.inner.write().transfer(caller, amount, from, to, memo)
    }

    /// See [`Ledger::mint`].
    pub fn mint(&self, caller: &Principal, amount: u128, to: &Principal) -> Result<()> {
        self.inner.write().mint(caller, amount, to)
    }

    /// See [`Ledger::burn`].
    pub fn burn(&self, caller: &Principal, amount: u128, holder: &Principal) -> Result<()> {
        self.inner.write().burn(caller, amount, holder)
    }

    /// See [`Ledger::set_token_uri`].
    pub fn set_token_uri(&self, caller: &Principal, uri: Option<String>) -> Result<()> {
        self.inner.write().set_token_uri(caller, uri)
    }

    /// See [`Ledger::transfer_ownership`].
    pub fn transfer_ownership(&self, caller: &Principal, new_owner: Principal) -> Result<()> {
        self.inner.write().transfer_ownership(caller, new_owner)
    }

    // -----------------------------------------------------------------------
    // Queries (read lock)
    // -----------------------------------------------------------------------

    /// See [`Ledger::get_balance`].
    pub fn get_balance(&self, principal: &Principal) -> u128 {
        self.inner.read().get_balance(principal)
    }

    /// See [`Ledger::get_total_supply`].
    pub fn get_total_supply(&self) -> u128 {
        self.inner.read().get_total_supply()
    }

    /// See [`Ledger::get_name`]. Returns an owned string because the lock
    /// guard cannot escape.
    pub fn get_name(&self) -> String {
        self.inner.read().get_name().to_string()
    }

    /// See [`Ledger::get_symbol`].
    pub fn get_symbol(&self) -> String {
        self.inner.read().get_symbol().to_string()
    }

    /// See [`Ledger::get_decimals`].
    pub fn get_decimals(&self) -> u8 {
        self.inner.read().get_decimals()
    }

    /// See [`Ledger::get_token_uri`].
    pub fn get_token_uri(&self) -> Option<String> {
        self.inner.read().get_token_uri().map(str::to_string)
    }

    /// See [`Ledger::get_contract_owner`].
    pub fn get_contract_owner(&self) -> Principal {
        self.inner.read().get_contract_owner().clone()
    }

    /// Clones out the full ledger state, e.g. for persistence.
    pub fn snapshot(&self) -> Ledger {
        self.inner.read().clone()
    }
}
