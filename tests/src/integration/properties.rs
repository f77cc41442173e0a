//! # Randomized Checks
//!
//! Rounding always favours the adapter, fee shares never outvalue the fee,
//! and arbitrary operation sequences conserve supply and stay solvent.

#[cfg(test)]
mod tests {
    use fee_adapter::algorithms::{assets_to_shares, compute_fee_accrual, shares_to_assets};
    use fee_adapter::{FeeAdapterApi, FeePct, Rounding, ONE};
    use primitive_types::U256;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::integration::support::*;

    const MAX_AMOUNT: u128 = 1_000_000_000_000_000_000_000_000_000_000;

    fn amount() -> impl Strategy<Value = U256> {
        (1u128..MAX_AMOUNT).prop_map(U256::from)
    }

    // =============================================================================
    // CONVERSION ROUNDING
    // =============================================================================

    proptest! {
        #[test]
        fn prop_floor_never_exceeds_ceil(assets in amount(), supply in amount(), total in amount()) {
            let floor = assets_to_shares(assets, supply, total, Rounding::Floor).unwrap();
            let ceil = assets_to_shares(assets, supply, total, Rounding::Ceil).unwrap();
            prop_assert!(floor <= ceil);
            prop_assert!(ceil - floor <= U256::one());
        }

        #[test]
        fn prop_round_trip_never_gains(assets in amount(), supply in amount(), total in amount()) {
            let shares = assets_to_shares(assets, supply, total, Rounding::Floor).unwrap();
            let back = shares_to_assets(shares, supply, total, Rounding::Floor).unwrap();
            prop_assert!(back <= assets);

            // Paying for `shares` at the ceiling costs at least what they redeem for
            let cost = shares_to_assets(shares, supply, total, Rounding::Ceil).unwrap();
            prop_assert!(cost >= back);
        }
    }

    // =============================================================================
    // FEE PRICING
    // =============================================================================

    proptest! {
        #[test]
        fn prop_fee_shares_worth_at_most_fee(
            checkpoint in amount(),
            gain in amount(),
            supply in amount(),
            pct in 1u64..=1_000_000_000_000_000_000u64,
        ) {
            let valuation = checkpoint + gain;
            let fee_pct = FeePct::new(U256::from(pct)).unwrap();

            let accrual = compute_fee_accrual(valuation, checkpoint, fee_pct, supply).unwrap();

            prop_assert_eq!(accrual.gain, gain);
            prop_assert!(accrual.fee_assets <= gain);
            let worth = shares_to_assets(
                accrual.fee_shares,
                supply + accrual.fee_shares,
                valuation,
                Rounding::Floor,
            )
            .unwrap();
            prop_assert!(worth <= accrual.fee_assets);
        }

        #[test]
        fn prop_loss_never_charges(checkpoint in amount(), loss in amount(), supply in amount()) {
            let valuation = checkpoint.saturating_sub(loss);
            let fee_pct = FeePct::new(ONE).unwrap();

            let accrual = compute_fee_accrual(valuation, checkpoint, fee_pct, supply).unwrap();

            prop_assert!(accrual.is_empty());
        }
    }

    // =============================================================================
    // OPERATION SEQUENCES
    // =============================================================================

    #[derive(Clone, Debug)]
    enum Op {
        Deposit(usize, u64),
        Mint(usize, u64),
        Withdraw(usize, u64),
        RedeemMax(usize),
        Transfer(usize, usize, u64),
        Yield(u64),
        Drain(u64),
    }

    const HOLDERS: [fee_adapter::Address; 3] = [ALICE, BOB, CAROL];

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..3usize, 1..500u64).prop_map(|(h, a)| Op::Deposit(h, a)),
            (0..3usize, 1..500u64).prop_map(|(h, a)| Op::Mint(h, a)),
            (0..3usize, 1..500u64).prop_map(|(h, a)| Op::Withdraw(h, a)),
            (0..3usize).prop_map(Op::RedeemMax),
            (0..3usize, 0..3usize, 1..500u64).prop_map(|(f, t, a)| Op::Transfer(f, t, a)),
            (1..300u64).prop_map(Op::Yield),
            (1..300u64).prop_map(Op::Drain),
        ]
    }

    fn funded() -> World {
        let world = World::standard();
        for who in HOLDERS {
            world.fund(&who, units(1_000_000));
        }
        world
    }

    /// Apply `op`; a rejected call must leave the adapter untouched.
    fn apply(world: &mut World, op: &Op) {
        let before = world.adapter.snapshot();
        let result = match *op {
            Op::Deposit(h, a) => world
                .adapter
                .deposit(&HOLDERS[h], units(a), &HOLDERS[h])
                .map(|_| ()),
            Op::Mint(h, a) => world
                .adapter
                .mint(&HOLDERS[h], units(a), &HOLDERS[h])
                .map(|_| ()),
            Op::Withdraw(h, a) => world
                .adapter
                .withdraw(&HOLDERS[h], units(a), &HOLDERS[h], &HOLDERS[h])
                .map(|_| ()),
            Op::RedeemMax(h) => {
                let shares = world.adapter.max_redeem(&HOLDERS[h]).unwrap();
                world
                    .adapter
                    .redeem(&HOLDERS[h], shares, &HOLDERS[h], &HOLDERS[h])
                    .map(|_| ())
            }
            Op::Transfer(f, t, a) => world.adapter.transfer(&HOLDERS[f], &HOLDERS[t], units(a)),
            Op::Yield(a) => {
                world.vault.accrue_yield(units(a)).unwrap();
                Ok(())
            }
            Op::Drain(a) => {
                let available = world.adapter.total_assets();
                // Keep something in the vault so shares stay priced
                let take = units(a).min(available / 2);
                world.vault.drain(take).unwrap();
                Ok(())
            }
        };
        if result.is_err() {
            assert_eq!(world.adapter.snapshot(), before, "{op:?} failed but changed state");
        }
    }

    fn assert_solvent(world: &World) {
        world.assert_conserved();

        let mut shares = U256::zero();
        let mut claims = U256::zero();
        for who in HOLDERS.iter().chain(std::iter::once(&COLLECTOR)) {
            let balance = world.adapter.balance_of(who).unwrap();
            shares += balance;
            claims += world.adapter.convert_to_assets(balance).unwrap();
        }
        assert_eq!(shares, world.adapter.total_supply().unwrap());
        assert!(claims <= world.adapter.total_assets());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_sequences_conserve_and_stay_solvent(ops in prop::collection::vec(op(), 1..25)) {
            let mut world = funded();
            for op in &ops {
                apply(&mut world, op);
                assert_solvent(&world);
            }
        }
    }

    #[test]
    fn test_seeded_random_walks_let_everyone_exit() {
        for seed in 0..16u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut world = funded();

            for _ in 0..40 {
                let op = match rng.gen_range(0..6) {
                    0 => Op::Deposit(rng.gen_range(0..3), rng.gen_range(1..1_000)),
                    1 => Op::Mint(rng.gen_range(0..3), rng.gen_range(1..1_000)),
                    2 => Op::Withdraw(rng.gen_range(0..3), rng.gen_range(1..200)),
                    3 => Op::Transfer(
                        rng.gen_range(0..3),
                        rng.gen_range(0..3),
                        rng.gen_range(1..200),
                    ),
                    4 => Op::Yield(rng.gen_range(1..500)),
                    _ => Op::Drain(rng.gen_range(1..200)),
                };
                apply(&mut world, &op);
                assert_solvent(&world);
            }

            // Fully liquid vault: whatever max_redeem leaves behind is worth at most one unit
            for who in HOLDERS.iter().chain(std::iter::once(&COLLECTOR)) {
                let shares = world.adapter.max_redeem(who).unwrap();
                let left = world.adapter.balance_of(who).unwrap() - shares;
                assert!(world.adapter.convert_to_assets(left).unwrap() <= U256::one());
                if shares.is_zero() {
                    continue;
                }
                let payout = world.adapter.preview_redeem(shares).unwrap();
                if payout.is_zero() {
                    continue;
                }
                world.adapter.redeem(who, shares, who, who).unwrap();
            }
            world.assert_conserved();
        }
    }
}
