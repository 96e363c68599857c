//! # The Ledger
//!
//! One [`Ledger`] instance is one deployment: a balance store, a supply
//! tracker, an ownership register, and token metadata, mutated only through
//! the operations defined here. There are no module-level globals — hosts
//! own the struct explicitly, and tests can spin up as many independent
//! ledgers as they like.
//!
//! ## Calling Convention
//!
//! Every mutating operation takes the caller principal as its first
//! argument. The host is responsible for authenticating that identity
//! (signature checks, session auth, whatever it does); the ledger is
//! responsible for deciding what that identity may do.
//!
//! ## Validation Order
//!
//! All mutating operations validate in the same order, and every failure
//! short-circuits before any state is written:
//!
//! 1. amount is non-zero (where an amount argument exists),
//! 2. the caller holds the required capability,
//! 3. the accounting itself goes through (sufficient funds, no overflow).
//!
//! ## Serialization
//!
//! The host guarantees mutating calls are serially ordered — one runs to
//! completion before the next begins — so the ledger needs no internal
//! locking. Embeddings in genuinely concurrent hosts wrap the whole thing
//! in [`crate::shared::SharedLedger`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::balances::BalanceStore;
use crate::config::{GenesisConfig, GenesisError};
use crate::errors::{LedgerError, Result};
use crate::metadata::TokenMetadata;
use crate::principal::Principal;

/// The complete state of one token deployment.
///
/// Serializable as a single blob so a host can persist or snapshot it
/// between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// The contract owner: holds the mint / set-uri / transfer-ownership
    /// capability. Always exactly one principal; there is no operation
    /// that leaves the ledger ownerless.
    owner: Principal,

    /// Per-principal balances.
    balances: BalanceStore,

    /// Sum of all balances. Changed only by mint and burn, never by
    /// transfer.
    total_supply: u128,

    /// Display metadata; only the URI is mutable.
    metadata: TokenMetadata,

    /// When this ledger was created.
    created_at: DateTime<Utc>,
}

impl Ledger {
    /// Creates a ledger in its genesis state: the full initial supply
    /// credited to the treasury, the treasury as contract owner, and the
    /// token URI unset.
    ///
    /// # Errors
    ///
    /// Returns a [`GenesisError`] if the configuration violates a field
    /// bound (empty or over-long name/symbol).
    pub fn new(genesis: GenesisConfig) -> std::result::Result<Self, GenesisError> {
        genesis.validate()?;

        let GenesisConfig {
            name,
            symbol,
            decimals,
            initial_supply,
            treasury,
        } = genesis;

        info!(
            %treasury,
            initial_supply,
            name = %name,
            symbol = %symbol,
            "ledger created at genesis"
        );

        Ok(Self {
            balances: BalanceStore::genesis(treasury.clone(), initial_supply),
            owner: treasury,
            total_supply: initial_supply,
            metadata: TokenMetadata::new(name, symbol, decimals),
            created_at: Utc::now(),
        })
    }

    // -----------------------------------------------------------------------
    // Mutating operations
    // -----------------------------------------------------------------------

    /// Moves `amount` from `from` to `to`. Supply is unchanged.
    ///
    /// The caller must be `from` — only the holder of a balance may move it.
    /// The optional memo is recorded in the log for observability and has
    /// no effect on state.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] (103) if `amount` is zero.
    /// - [`LedgerError::NotTokenOwner`] (101) if `caller != from`.
    /// - [`LedgerError::InsufficientFunds`] / [`LedgerError::Overflow`] from
    ///   the accounting layer.
    pub fn transfer(
        &mut self,
        caller: &Principal,
        amount: u128,
        from: &Principal,
        to: &Principal,
        memo: Option<&[u8]>,
    ) -> Result<()> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if caller != from {
            return Err(LedgerError::NotTokenOwner {
                caller: caller.clone(),
                holder: from.clone(),
            });
        }

        self.balances.transfer(from, to, amount)?;

        match memo {
            Some(memo) => debug!(%from, %to, amount, memo = %hex::encode(memo), "transfer"),
            None => debug!(%from, %to, amount, "transfer"),
        }
        Ok(())
    }

    /// Creates `amount` new units and credits them to `to`. Supply grows by
    /// `amount`; there is no supply cap.
    ///
    /// Owner-gated.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] (103) if `amount` is zero.
    /// - [`LedgerError::OwnerOnly`] (100) if the caller is not the contract
    ///   owner.
    /// - [`LedgerError::Overflow`] if supply or the recipient balance would
    ///   wrap.
    pub fn mint(&mut self, caller: &Principal, amount: u128, to: &Principal) -> Result<()> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if caller != &self.owner {
            return Err(LedgerError::OwnerOnly {
                caller: caller.clone(),
            });
        }

        let new_supply =
            self.total_supply
                .checked_add(amount)
                .ok_or(LedgerError::Overflow {
                    current: self.total_supply,
                    credit: amount,
                })?;
        // The recipient credit cannot fail once the supply add succeeded
        // (any single balance is bounded by supply), but it stays checked.
        self.balances.credit(to, amount)?;
        self.total_supply = new_supply;

        info!(%to, amount, total_supply = self.total_supply, "mint");
        Ok(())
    }

    /// Destroys `amount` units from `holder`'s balance. Supply shrinks by
    /// `amount`.
    ///
    /// The caller must be `holder` — only the holder of a balance may
    /// destroy it. The contract owner has no special burn power over other
    /// accounts.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] (103) if `amount` is zero.
    /// - [`LedgerError::NotTokenOwner`] (101) if `caller != holder`.
    /// - [`LedgerError::InsufficientFunds`] if the balance is short.
    pub fn burn(&mut self, caller: &Principal, amount: u128, holder: &Principal) -> Result<()> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if caller != holder {
            return Err(LedgerError::NotTokenOwner {
                caller: caller.clone(),
                holder: holder.clone(),
            });
        }

        self.balances.debit(holder, amount)?;
        // Conservation bounds every balance by the supply, so after a
        // successful debit this subtraction cannot wrap.
        self.total_supply -= amount;

        info!(%holder, amount, total_supply = self.total_supply, "burn");
        Ok(())
    }

    /// Sets or clears the token URI. `None` clears it back to unset.
    ///
    /// Owner-gated.
    ///
    /// # Errors
    ///
    /// [`LedgerError::OwnerOnly`] (100) if the caller is not the contract
    /// owner.
    pub fn set_token_uri(&mut self, caller: &Principal, uri: Option<String>) -> Result<()> {
        if caller != &self.owner {
            return Err(LedgerError::OwnerOnly {
                caller: caller.clone(),
            });
        }

        debug!(uri = uri.as_deref().unwrap_or("<unset>"), "set token uri");
        self.metadata.set_token_uri(uri);
        Ok(())
    }

    /// Hands the contract-owner capability to `new_owner`.
    ///
    /// The handoff is a single field assignment: the old owner loses every
    /// owner-gated privilege and the new owner gains them in the same call,
    /// with no window where both or neither hold them.
    ///
    /// # Errors
    ///
    /// [`LedgerError::OwnerOnly`] (100) if the caller is not the current
    /// owner.
    pub fn transfer_ownership(&mut self, caller: &Principal, new_owner: Principal) -> Result<()> {
        if caller != &self.owner {
            return Err(LedgerError::OwnerOnly {
                caller: caller.clone(),
            });
        }

        info!(old_owner = %self.owner, %new_owner, "ownership transferred");
        self.owner = new_owner;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read-only queries
    // -----------------------------------------------------------------------

    /// Stored balance for a principal; 0 if none. Never fails.
    pub fn get_balance(&self, principal: &Principal) -> u128 {
        self.balances.get(principal)
    }

    /// Current total supply. Never fails.
    pub fn get_total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Token display name.
    pub fn get_name(&self) -> &str {
        self.metadata.name()
    }

    /// Ticker symbol.
    pub fn get_symbol(&self) -> &str {
        self.metadata.symbol()
    }

    /// Display decimal places.
    pub fn get_decimals(&self) -> u8 {
        self.metadata.decimals()
    }

    /// The token URI, if set.
    pub fn get_token_uri(&self) -> Option<&str> {
        self.metadata.token_uri()
    }

    /// The current contract owner.
    pub fn get_contract_owner(&self) -> &Principal {
        &self.owner
    }

    /// When this ledger was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// All principals holding a non-zero balance. Summing the amounts
    /// always reproduces [`Self::get_total_supply`].
    pub fn holders(&self) -> Vec<(Principal, u128)> {
        self.balances.holders()
    }
}
