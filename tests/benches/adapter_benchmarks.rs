//! Fee adapter benchmarks.
//!
//! Run with: cargo bench -p fee-adapter-tests

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fee_adapter::algorithms::{compute_fee_accrual, mul_div};
use fee_adapter::{
    AdapterConfig, FeeAdapter, FeeAdapterApi, FeePct, FungibleToken, InMemoryToken,
    InMemoryVault, Rounding, ONE,
};
use primitive_types::U256;

const ADAPTER: [u8; 20] = [0xAD; 20];
const ALICE: [u8; 20] = [0xA1; 20];

fn units(n: u64) -> U256 {
    U256::from(n) * ONE
}

fn world() -> FeeAdapter<InMemoryVault, InMemoryToken> {
    let asset = Arc::new(InMemoryToken::new([0x70; 20], "AST", 18));
    asset.mint(&ALICE, units(1_000_000)).unwrap();
    asset.approve(&ALICE, &ADAPTER, U256::MAX).unwrap();
    let vault = Arc::new(InMemoryVault::new([0x5A; 20], asset.clone()));
    let config = AdapterConfig::new(ONE / 10, [0xC0; 20], [0x0E; 20]).unwrap();
    let mut adapter = FeeAdapter::new(ADAPTER, vault.clone(), asset, config).unwrap();
    adapter.deposit(&ALICE, units(1_000), &ALICE).unwrap();
    vault.accrue_yield(units(100)).unwrap();
    adapter
}

fn bench_math(c: &mut Criterion) {
    let x = U256::MAX / 3;
    let y = units(7);
    let den = units(9);
    c.bench_function("mul_div_512", |b| {
        b.iter(|| mul_div(black_box(x), black_box(y), black_box(den), Rounding::Ceil))
    });

    let pct = FeePct::new(ONE / 10).unwrap();
    c.bench_function("compute_fee_accrual", |b| {
        b.iter(|| {
            compute_fee_accrual(
                black_box(units(1_100)),
                black_box(units(1_000)),
                pct,
                black_box(units(1_000)),
            )
        })
    });
}

fn bench_adapter(c: &mut Criterion) {
    let adapter = world();
    c.bench_function("max_withdraw_settled_view", |b| {
        b.iter(|| adapter.max_withdraw(black_box(&ALICE)))
    });

    c.bench_function("deposit_with_settlement", |b| {
        b.iter_batched(
            world,
            |mut adapter| adapter.deposit(&ALICE, units(10), &ALICE),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_math, bench_adapter);
criterion_main!(benches);
