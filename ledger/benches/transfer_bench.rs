//! Throughput benchmarks for the hot ledger paths.
//!
//! Transfers dominate real call volume, with balance queries a close
//! second. Both should be effectively free next to whatever the host
//! spends on signatures and persistence.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_ledger::{GenesisConfig, Ledger, Principal};

fn deploy() -> Ledger {
    Ledger::new(GenesisConfig {
        name: "Aurum".into(),
        symbol: "AUR".into(),
        decimals: 6,
        initial_supply: u128::MAX / 2,
        treasury: Principal::new("deployer"),
    })
    .expect("valid genesis")
}

fn bench_transfer(c: &mut Criterion) {
    let deployer = Principal::new("deployer");
    let wallet = Principal::new("wallet_1");
    let mut ledger = deploy();

    c.bench_function("transfer_single_unit", |b| {
        b.iter(|| {
            ledger
                .transfer(
                    black_box(&deployer),
                    black_box(1),
                    &deployer,
                    &wallet,
                    None,
                )
                .expect("funded transfer succeeds")
        })
    });
}

fn bench_get_balance(c: &mut Criterion) {
    let deployer = Principal::new("deployer");
    let ledger = deploy();

    c.bench_function("get_balance", |b| {
        b.iter(|| black_box(ledger.get_balance(black_box(&deployer))))
    });
}

fn bench_mint(c: &mut Criterion) {
    let deployer = Principal::new("deployer");
    let wallet = Principal::new("wallet_1");
    let mut ledger = Ledger::new(GenesisConfig {
        name: "Aurum".into(),
        symbol: "AUR".into(),
        decimals: 6,
        initial_supply: 0,
        treasury: Principal::new("deployer"),
    })
    .expect("valid genesis");

    c.bench_function("mint_single_unit", |b| {
        b.iter(|| {
            ledger
                .mint(black_box(&deployer), black_box(1), &wallet)
                .expect("mint succeeds")
        })
    });
}

criterion_group!(benches, bench_transfer, bench_get_balance, bench_mint);
criterion_main!(benches);
