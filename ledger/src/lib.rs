// Copyright (c) 2026 Tally Contributors. MIT License.
// See LICENSE for details.

//! # Tally — Core Ledger Library
//!
//! A single-asset fungible-token ledger: one divisible asset, a set of
//! addressable accounts, and the small state machine that moves value
//! between them without ever losing a unit. The interesting part is not
//! the data structures — a map and a counter — it is the discipline:
//! every mutation is validated before anything is touched, every failure
//! leaves state byte-for-byte unchanged, and the sum of all balances
//! equals the tracked supply at every observable instant.
//!
//! ## Architecture
//!
//! - **principal** — Opaque account identifiers. The ledger never looks inside.
//! - **errors** — The error taxonomy and the stable numeric code registry.
//! - **config** — Genesis configuration and every constant in one place.
//! - **balances** — The balance store: credit, debit, and atomic moves.
//! - **metadata** — Token display metadata (name, symbol, decimals, URI).
//! - **ledger** — The operation dispatcher: transfer, mint, burn, and the
//!   ownership register.
//! - **shared** — A mutual-exclusion wrapper for embedding in concurrent hosts.
//!
//! ## Design Philosophy
//!
//! 1. All monetary arithmetic is checked — wrapping arithmetic and money
//!    do not mix.
//! 2. The caller principal is an explicit parameter, never ambient context.
//!    The logic is testable without a host runtime.
//! 3. Expected failures (bad caller, zero amount, short balance) are values,
//!    not panics. Hosts match on codes, not on stack traces.
//! 4. Every public state type is serializable so hosts can persist or
//!    snapshot the ledger as a single blob.

pub mod balances;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod metadata;
pub mod principal;
pub mod shared;

pub use balances::BalanceStore;
pub use config::{GenesisConfig, GenesisError};
pub use errors::{LedgerError, Result};
pub use ledger::Ledger;
pub use metadata::TokenMetadata;
pub use principal::Principal;
pub use shared::SharedLedger;
