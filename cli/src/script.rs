//! # Operation Scripts
//!
//! A script is a JSON array of operations replayed in order against a
//! fresh deployment. Each entry names the operation, the caller, and the
//! operation's arguments — the same explicit-caller convention the ledger
//! API uses, since there is no ambient identity outside a real host.
//!
//! A rejected operation does not halt the replay; its numeric error code
//! is recorded in the report and the script continues, the same way a
//! chain records failed transactions without aborting the block.
//!
//! ```json
//! [
//!   { "op": "transfer", "caller": "deployer", "amount": 1000000,
//!     "from": "deployer", "to": "wallet_1", "memo": "00ab" },
//!   { "op": "mint", "caller": "deployer", "amount": 5, "to": "wallet_1" }
//! ]
//! ```

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tally_ledger::{config, Ledger, Principal};

/// One scripted ledger call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    /// Move tokens between principals. The memo, if present, is a hex
    /// string of at most [`config::MAX_MEMO_LEN`] bytes.
    Transfer {
        caller: Principal,
        amount: u128,
        from: Principal,
        to: Principal,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        memo: Option<String>,
    },
    /// Create new supply (owner-gated).
    Mint {
        caller: Principal,
        amount: u128,
        to: Principal,
    },
    /// Destroy part of a holder's balance.
    Burn {
        caller: Principal,
        amount: u128,
        owner: Principal,
    },
    /// Set or clear the token URI (owner-gated). Omitting `uri` clears it.
    SetTokenUri {
        caller: Principal,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        uri: Option<String>,
    },
    /// Hand the contract-owner capability to a new principal (owner-gated).
    TransferOwnership {
        caller: Principal,
        new_owner: Principal,
    },
}

impl Operation {
    /// The operation name as it appears in scripts and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Transfer { .. } => "transfer",
            Operation::Mint { .. } => "mint",
            Operation::Burn { .. } => "burn",
            Operation::SetTokenUri { .. } => "set-token-uri",
            Operation::TransferOwnership { .. } => "transfer-ownership",
        }
    }
}

/// Result of one scripted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum OpResult {
    /// The call committed.
    Ok,
    /// The call was rejected; state is unchanged.
    Err {
        /// Stable numeric error code.
        code: u32,
        /// Human-readable error message.
        error: String,
    },
}

/// One line of the replay report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Zero-based position in the script.
    pub index: usize,
    /// Operation name.
    pub op: String,
    /// What happened.
    #[serde(flatten)]
    pub result: OpResult,
}

/// Final ledger state after a replay, in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub contract_owner: Principal,
    pub total_supply: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    /// Non-zero balances, sorted by principal for stable output.
    pub balances: BTreeMap<Principal, u128>,
}

impl StateSummary {
    /// Captures the current ledger state.
    pub fn capture(ledger: &Ledger) -> Self {
        Self {
            name: ledger.get_name().to_string(),
            symbol: ledger.get_symbol().to_string(),
            decimals: ledger.get_decimals(),
            contract_owner: ledger.get_contract_owner().clone(),
            total_supply: ledger.get_total_supply(),
            token_uri: ledger.get_token_uri().map(str::to_string),
            balances: ledger.holders().into_iter().collect(),
        }
    }
}

/// Full replay report: per-operation outcomes plus the final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    pub final_state: StateSummary,
}

/// Decodes and bounds-checks a script memo.
///
/// Malformed memos are script errors, not ledger outcomes — the host wire
/// format would never have delivered them — so they abort the replay.
fn decode_memo(memo: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(memo).context("memo is not valid hex")?;
    if bytes.len() > config::MAX_MEMO_LEN {
        bail!(
            "memo is {} bytes, maximum is {}",
            bytes.len(),
            config::MAX_MEMO_LEN
        );
    }
    Ok(bytes)
}

/// Replays a script against the ledger and collects the report.
pub fn execute(ledger: &mut Ledger, operations: &[Operation]) -> Result<Report> {
    let mut outcomes = Vec::with_capacity(operations.len());

    for (index, operation) in operations.iter().enumerate() {
        let result = match operation {
            Operation::Transfer {
                caller,
                amount,
                from,
                to,
                memo,
            } => {
                let memo_bytes = memo
                    .as_deref()
                    .map(decode_memo)
                    .transpose()
                    .with_context(|| format!("operation {index}"))?;
                ledger.transfer(caller, *amount, from, to, memo_bytes.as_deref())
            }
            Operation::Mint { caller, amount, to } => ledger.mint(caller, *amount, to),
            Operation::Burn {
                caller,
                amount,
                owner,
            } => ledger.burn(caller, *amount, owner),
            Operation::SetTokenUri { caller, uri } => ledger.set_token_uri(caller, uri.clone()),
            Operation::TransferOwnership { caller, new_owner } => {
                ledger.transfer_ownership(caller, new_owner.clone())
            }
        };

        let result = match result {
            Ok(()) => OpResult::Ok,
            Err(err) => {
                warn!(index, op = operation.name(), code = err.code(), %err, "operation rejected");
                OpResult::Err {
                    code: err.code(),
                    error: err.to_string(),
                }
            }
        };

        outcomes.push(Outcome {
            index,
            op: operation.name().to_string(),
            result,
        });
    }

    Ok(Report {
        final_state: StateSummary::capture(ledger),
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_ledger::GenesisConfig;

    fn deploy() -> Ledger {
        Ledger::new(GenesisConfig {
            name: "Aurum".into(),
            symbol: "AUR".into(),
            decimals: 6,
            initial_supply: 1_000_000,
            treasury: Principal::new("deployer"),
        })
        .unwrap()
    }

    #[test]
    fn script_parses_kebab_case_tags() {
        let json = r#"[
            { "op": "transfer", "caller": "deployer", "amount": 100,
              "from": "deployer", "to": "wallet_1" },
            { "op": "set-token-uri", "caller": "deployer",
              "uri": "https://example.com/t.json" },
            { "op": "transfer-ownership", "caller": "deployer",
              "new_owner": "wallet_1" }
        ]"#;

        let ops: Vec<Operation> = serde_json::from_str(json).unwrap();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].name(), "transfer");
        assert_eq!(ops[2].name(), "transfer-ownership");
    }

    #[test]
    fn replay_records_registry_codes_and_continues() {
        let mut ledger = deploy();
        let ops = vec![
            // ok
            Operation::Transfer {
                caller: Principal::new("deployer"),
                amount: 500,
                from: Principal::new("deployer"),
                to: Principal::new("wallet_1"),
                memo: None,
            },
            // 101: wrong caller
            Operation::Transfer {
                caller: Principal::new("wallet_2"),
                amount: 1,
                from: Principal::new("deployer"),
                to: Principal::new("wallet_1"),
                memo: None,
            },
            // 100: non-owner mint
            Operation::Mint {
                caller: Principal::new("wallet_1"),
                amount: 1,
                to: Principal::new("wallet_1"),
            },
            // 103: zero burn
            Operation::Burn {
                caller: Principal::new("wallet_1"),
                amount: 0,
                owner: Principal::new("wallet_1"),
            },
        ];

        let report = execute(&mut ledger, &ops).unwrap();
        assert_eq!(report.outcomes[0].result, OpResult::Ok);

        let codes: Vec<u32> = report.outcomes[1..]
            .iter()
            .map(|o| match &o.result {
                OpResult::Err { code, .. } => *code,
                OpResult::Ok => panic!("expected rejection"),
            })
            .collect();
        assert_eq!(codes, vec![101, 100, 103]);

        // The successful transfer still landed.
        assert_eq!(
            report.final_state.balances.get(&Principal::new("wallet_1")),
            Some(&500)
        );
        assert_eq!(report.final_state.total_supply, 1_000_000);
    }

    #[test]
    fn memo_decodes_from_hex() {
        let mut ledger = deploy();
        let ops = vec![Operation::Transfer {
            caller: Principal::new("deployer"),
            amount: 1,
            from: Principal::new("deployer"),
            to: Principal::new("wallet_1"),
            memo: Some("00ab34".into()),
        }];
        let report = execute(&mut ledger, &ops).unwrap();
        assert_eq!(report.outcomes[0].result, OpResult::Ok);
    }

    #[test]
    fn oversized_memo_aborts_replay() {
        let mut ledger = deploy();
        let ops = vec![Operation::Transfer {
            caller: Principal::new("deployer"),
            amount: 1,
            from: Principal::new("deployer"),
            to: Principal::new("wallet_1"),
            memo: Some("00".repeat(config::MAX_MEMO_LEN + 1)),
        }];
        assert!(execute(&mut ledger, &ops).is_err());
    }

    #[test]
    fn report_serializes_with_flattened_status() {
        let mut ledger = deploy();
        let ops = vec![Operation::Mint {
            caller: Principal::new("wallet_1"),
            amount: 1,
            to: Principal::new("wallet_1"),
        }];
        let report = execute(&mut ledger, &ops).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][0]["status"], "err");
        assert_eq!(json["outcomes"][0]["code"], 100);
    }
}
