//! # Failed Calls Leave No Trace
//!
//! Every rejected call, whether refused up front or failing inside the vault,
//! leaves ledger, checkpoint, fee parameters, journal and external balances
//! exactly as they were.

#[cfg(test)]
mod tests {
    use fee_adapter::{AdapterError, AdapterSnapshot, FeeAdapterApi, FungibleToken, TokenError, ONE};
    use primitive_types::U256;

    use crate::integration::support::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Alice in at 100 with 100 of unsettled yield; Bob funded but out.
    fn pending_world() -> World {
        let mut world = World::standard();
        world.fund(&ALICE, units(1_000));
        world.fund(&BOB, units(1_000));
        world.adapter.deposit(&ALICE, units(100), &ALICE).unwrap();
        world.vault.accrue_yield(units(100)).unwrap();
        world
    }

    struct Trace {
        snapshot: AdapterSnapshot,
        events: usize,
        wallets: Vec<U256>,
        vault_shares: U256,
        pending: U256,
    }

    fn trace(world: &World) -> Trace {
        Trace {
            snapshot: world.adapter.snapshot(),
            events: world.adapter.events().len(),
            wallets: [ALICE, BOB, CAROL, ADAPTER]
                .iter()
                .map(|who| world.wallet(who))
                .collect(),
            vault_shares: world.adapter_vault_shares(),
            pending: world.adapter.pending_fee_shares().unwrap(),
        }
    }

    fn assert_untouched(world: &World, before: &Trace) {
        let after = trace(world);
        assert_eq!(after.snapshot, before.snapshot);
        assert_eq!(after.events, before.events);
        assert_eq!(after.wallets, before.wallets);
        assert_eq!(after.vault_shares, before.vault_shares);
        assert_eq!(after.pending, before.pending);
        world.assert_conserved();
    }

    // =============================================================================
    // VAULT FAILURES
    // =============================================================================

    #[test]
    fn test_failed_vault_deposit_refunds_payer() {
        let mut world = pending_world();
        world.vault.set_fail_deposits(true);
        let before = trace(&world);

        let err = world.adapter.deposit(&BOB, units(30), &BOB).unwrap_err();

        assert!(matches!(err, AdapterError::Token(TokenError::CallFailed(_))));
        assert_eq!(err.kind(), "external");
        assert_untouched(&world, &before);
        assert!(world.asset.allowance(&ADAPTER, &VAULT).is_zero());
    }

    #[test]
    fn test_failed_vault_mint_refunds_payer() {
        let mut world = pending_world();
        world.vault.set_fail_deposits(true);
        let before = trace(&world);

        assert!(world.adapter.mint(&BOB, units(10), &BOB).is_err());
        assert_untouched(&world, &before);

        world.vault.set_fail_deposits(false);
        let paid = world.adapter.mint(&BOB, units(10), &BOB).unwrap();
        assert!(paid > units(10));
        assert_eq!(world.adapter.balance_of(&BOB).unwrap(), units(10));
    }

    #[test]
    fn test_payer_without_funds_changes_nothing() {
        let mut world = pending_world();
        let before = trace(&world);

        let err = world.adapter.deposit(&CAROL, units(5), &CAROL).unwrap_err();

        assert!(matches!(err, AdapterError::Token(_)));
        assert_untouched(&world, &before);
    }

    // =============================================================================
    // UP-FRONT REJECTIONS
    // =============================================================================

    #[test]
    fn test_rejections_do_not_settle_fees() {
        let mut world = pending_world();
        world.vault.set_liquidity_factor(ONE / 2);
        let before = trace(&world);

        let results = [
            world.adapter.deposit(&ALICE, U256::zero(), &ALICE).map(|_| ()),
            world.adapter.withdraw(&ALICE, units(150), &ALICE, &ALICE).map(|_| ()),
            world.adapter.redeem(&ALICE, units(100), &ALICE, &ALICE).map(|_| ()),
            world.adapter.redeem(&BOB, units(1), &BOB, &ALICE).map(|_| ()),
            world.adapter.transfer(&ALICE, &BOB, units(101)),
            world.adapter.transfer(&ALICE, &fee_adapter::ZERO_ADDRESS, units(1)),
            world.adapter.transfer_from(&BOB, &ALICE, &BOB, units(1)),
            world.adapter.set_fee_pct(&ALICE, ONE / 20),
            world.adapter.set_fee_pct(&OWNER, ONE / 5),
            world.adapter.set_fee_pct(&OWNER, U256::zero()),
            world.adapter.set_fee_collector(&OWNER, &fee_adapter::ZERO_ADDRESS),
            world.adapter.transfer_ownership(&BOB, &BOB),
        ];

        for result in results {
            assert!(result.is_err());
        }
        assert_untouched(&world, &before);
    }

    #[test]
    fn test_rejected_rescue_moves_nothing() {
        let mut world = pending_world();
        world.asset.mint(&ADAPTER, units(3)).unwrap();
        let before = trace(&world);
        let vault = world.vault.clone();
        let asset = world.asset.clone();

        assert!(matches!(
            world
                .adapter
                .rescue_funds(&OWNER, vault.as_ref(), &OWNER, units(1)),
            Err(AdapterError::TokenIsUnderlyingVault { .. })
        ));
        assert!(matches!(
            world
                .adapter
                .rescue_funds(&ALICE, asset.as_ref(), &ALICE, units(3)),
            Err(AdapterError::Unauthorized { .. })
        ));
        assert!(world
            .adapter
            .rescue_funds(&OWNER, asset.as_ref(), &OWNER, units(4))
            .is_err());

        assert_untouched(&world, &before);
    }

    #[test]
    fn test_success_after_failure_prices_like_fresh_call() {
        let mut world = pending_world();
        let mut twin = pending_world();

        world.vault.set_fail_deposits(true);
        assert!(world.adapter.deposit(&BOB, units(30), &BOB).is_err());
        world.vault.set_fail_deposits(false);

        let shares = world.adapter.deposit(&BOB, units(30), &BOB).unwrap();
        let twin_shares = twin.adapter.deposit(&BOB, units(30), &BOB).unwrap();

        assert_eq!(shares, twin_shares);
        assert_eq!(world.adapter.snapshot(), twin.adapter.snapshot());
    }
}
