//! # High-Water-Mark Fee Flows
//!
//! Alice deposits 100, the vault triples, Bob deposits 30, the vault doubles.
//! Fees are charged on each gain above the last checkpoint and paid to the
//! collector as newly minted shares.

#[cfg(test)]
mod tests {
    use fee_adapter::{AdapterEvent, FeeAdapterApi, ONE};
    use primitive_types::U256;

    use crate::integration::support::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Alice in at 100, vault grown to 300 (nothing settled yet).
    fn grown_world() -> World {
        let mut world = World::standard();
        world.fund(&ALICE, units(1_000));
        world.fund(&BOB, units(1_000));
        world.adapter.deposit(&ALICE, units(100), &ALICE).unwrap();
        world.vault.accrue_yield(units(200)).unwrap();
        world
    }

    // =============================================================================
    // SETTLEMENT
    // =============================================================================

    #[test]
    fn test_views_include_pending_fee_before_settlement() {
        let world = grown_world();

        // 20 of fee assets priced against 280 of holder value
        assert_eq!(world.adapter.pending_fee_shares().unwrap(), dec("7142857142857142857"));
        assert_eq!(world.adapter.balance_of(&COLLECTOR).unwrap(), dec("7142857142857142857"));
        assert_eq!(world.adapter.total_supply().unwrap(), dec("107142857142857142857"));

        // Nothing was minted yet
        assert!(world.adapter.ledger().balance_of(&COLLECTOR).is_zero());
        assert_eq!(world.adapter.previous_total_assets(), units(100));
    }

    #[test]
    fn test_second_deposit_settles_then_prices() {
        let mut world = grown_world();

        let shares = world.adapter.deposit(&BOB, units(30), &BOB).unwrap();

        assert_eq!(shares, dec("10714285714285714285"));
        assert_eq!(world.adapter.ledger().balance_of(&COLLECTOR), dec("7142857142857142857"));
        assert_eq!(world.adapter.previous_total_assets(), units(330));
        assert!(world.adapter.pending_fee_shares().unwrap().is_zero());
        world.assert_conserved();
    }

    #[test]
    fn test_full_cycle_to_660() {
        let mut world = grown_world();
        world.adapter.deposit(&BOB, units(30), &BOB).unwrap();
        world.vault.accrue_yield(units(330)).unwrap();

        // 33 of fee assets against 627: exactly supply / 19
        assert_eq!(world.adapter.pending_fee_shares().unwrap(), dec("6203007518796992481"));
        assert_eq!(world.adapter.total_assets(), units(660));

        let alice = world.adapter.balance_of(&ALICE).unwrap();
        let bob = world.adapter.balance_of(&BOB).unwrap();
        let collector = world.adapter.balance_of(&COLLECTOR).unwrap();
        assert_eq!(world.adapter.convert_to_assets(alice).unwrap(), dec("532000000000000000004"));
        assert_eq!(world.adapter.convert_to_assets(bob).unwrap(), dec("56999999999999999996"));
        assert_eq!(
            world.adapter.convert_to_assets(collector).unwrap(),
            dec("70999999999999999998")
        );
    }

    #[test]
    fn test_everyone_exits_after_full_cycle() {
        let mut world = grown_world();
        world.adapter.deposit(&BOB, units(30), &BOB).unwrap();
        world.vault.accrue_yield(units(330)).unwrap();

        for holder in [ALICE, BOB, COLLECTOR] {
            let shares = world.adapter.max_redeem(&holder).unwrap();
            assert_eq!(shares, world.adapter.balance_of(&holder).unwrap());
            world.adapter.redeem(&holder, shares, &holder, &holder).unwrap();
            world.assert_conserved();
        }

        assert!(world.adapter.ledger().total_supply().is_zero());
        assert_eq!(world.wallet(&ALICE), units(900) + dec("532000000000000000004"));
        assert_eq!(world.wallet(&BOB), units(970) + dec("56999999999999999996"));
        assert!(approx_eq(world.wallet(&COLLECTOR), units(71), 2));
        // Rounding dust stays in the vault, never the other way round
        assert!(world.adapter.total_assets() < U256::from(4u64));
    }

    #[test]
    fn test_checkpoint_tracks_principal_not_yield() {
        let mut world = grown_world();

        world.adapter.deposit(&BOB, units(30), &BOB).unwrap();
        // 300 settled plus 30 of principal
        assert_eq!(world.adapter.previous_total_assets(), units(330));

        world.adapter.withdraw(&BOB, units(12), &BOB, &BOB).unwrap();
        assert_eq!(world.adapter.previous_total_assets(), units(318));

        world
            .adapter
            .transfer(&ALICE, &BOB, units(1))
            .unwrap();
        assert_eq!(world.adapter.previous_total_assets(), units(318));
        world.assert_conserved();
    }

    #[test]
    fn test_no_fee_without_new_high() {
        let mut world = grown_world();
        world.adapter.deposit(&BOB, units(30), &BOB).unwrap();
        world.vault.drain(units(30)).unwrap();
        world.vault.accrue_yield(units(30)).unwrap();

        // Back at the checkpoint: nothing to charge
        assert!(world.adapter.pending_fee_shares().unwrap().is_zero());
    }

    #[test]
    fn test_fees_settled_event_emitted_once_per_gain() {
        let mut world = grown_world();
        world.adapter.deposit(&BOB, units(30), &BOB).unwrap();
        world.adapter.deposit(&BOB, units(30), &BOB).unwrap();

        let settled: Vec<_> = world
            .adapter
            .events()
            .iter()
            .filter_map(|e| match e {
                AdapterEvent::FeesSettled { collector, amount } => Some((*collector, *amount)),
                _ => None,
            })
            .collect();
        assert_eq!(settled, vec![(COLLECTOR, dec("7142857142857142857"))]);
    }

    // =============================================================================
    // ADMINISTRATION DURING ACCRUAL
    // =============================================================================

    #[test]
    fn test_outgoing_collector_keeps_accrued_fee() {
        let mut world = grown_world();

        world.adapter.set_fee_collector(&OWNER, &CAROL).unwrap();

        assert_eq!(world.adapter.ledger().balance_of(&COLLECTOR), dec("7142857142857142857"));
        assert!(world.adapter.balance_of(&CAROL).unwrap().is_zero());

        world.vault.accrue_yield(units(300)).unwrap();
        assert!(!world.adapter.balance_of(&CAROL).unwrap().is_zero());
        assert_eq!(world.adapter.balance_of(&COLLECTOR).unwrap(), dec("7142857142857142857"));
    }

    #[test]
    fn test_fee_cut_charges_old_rate_on_past_gain() {
        let mut world = grown_world();

        world.adapter.set_fee_pct(&OWNER, ONE / 20).unwrap();

        // Past gain priced at 10%
        assert_eq!(world.adapter.ledger().balance_of(&COLLECTOR), dec("7142857142857142857"));
        assert_eq!(world.adapter.fee_pct(), ONE / 20);

        // Next gain at 5%: 300 * 0.05 = 15 fee assets
        world.vault.accrue_yield(units(300)).unwrap();
        let fee_assets = world
            .adapter
            .convert_to_assets(world.adapter.pending_fee_shares().unwrap())
            .unwrap();
        assert!(approx_eq(fee_assets, units(15), 10));
    }

    #[test]
    fn test_collector_can_move_pending_fee_shares() {
        let mut world = grown_world();
        let shown = world.adapter.balance_of(&COLLECTOR).unwrap();

        world.adapter.transfer(&COLLECTOR, &CAROL, shown).unwrap();

        assert_eq!(world.adapter.balance_of(&CAROL).unwrap(), shown);
        assert!(world.adapter.balance_of(&COLLECTOR).unwrap().is_zero());
        world.assert_conserved();
    }
}
