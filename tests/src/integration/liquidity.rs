//! # Liquidity Clamp
//!
//! `max_withdraw` and `max_redeem` never promise more than the vault will
//! release to the adapter, whatever the holder's claim.

#[cfg(test)]
mod tests {
    use fee_adapter::{AdapterError, FeeAdapterApi, FungibleToken, UnderlyingVault, ONE};
    use primitive_types::U256;

    use crate::integration::support::*;

    fn world_with(factor: U256, deposits: &[(fee_adapter::Address, u64)]) -> World {
        let mut world = World::with_factor(ONE / 10, factor);
        for (who, amount) in deposits {
            world.fund(who, units(*amount));
            world.adapter.deposit(who, units(*amount), who).unwrap();
        }
        world
    }

    #[test]
    fn test_fully_liquid_vault_returns_whole_claim() {
        let world = world_with(ONE, &[(ALICE, 100), (BOB, 100)]);

        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(100));
        assert_eq!(world.adapter.max_redeem(&ALICE).unwrap(), units(100));
        assert_eq!(world.vault.max_withdraw(&ADAPTER), units(200));
    }

    #[test]
    fn test_half_liquid_vault_clamps_single_holder() {
        let mut world = world_with(ONE / 2, &[(ALICE, 100)]);

        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(50));
        assert_eq!(world.adapter.max_redeem(&ALICE).unwrap(), units(50));

        let err = world
            .adapter
            .withdraw(&ALICE, units(51), &ALICE, &ALICE)
            .unwrap_err();
        assert_eq!(
            err,
            AdapterError::ExceedsMaxWithdraw {
                requested: units(51),
                max: units(50)
            }
        );
        let err = world
            .adapter
            .redeem(&ALICE, units(51), &ALICE, &ALICE)
            .unwrap_err();
        assert_eq!(err.kind(), "liquidity");

        world
            .adapter
            .withdraw(&ALICE, units(50), &ALICE, &ALICE)
            .unwrap();
        assert_eq!(world.wallet(&ALICE), units(50));
        assert_eq!(world.adapter.balance_of(&ALICE).unwrap(), units(50));
    }

    #[test]
    fn test_half_liquid_vault_clamps_per_holder() {
        let world = world_with(ONE / 2, &[(ALICE, 100), (BOB, 300)]);

        // Vault releases 200 in total; each holder is capped by it separately
        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(100));
        assert_eq!(world.adapter.max_withdraw(&BOB).unwrap(), units(200));
        assert_eq!(world.adapter.max_redeem(&ALICE).unwrap(), units(100));
        assert_eq!(world.adapter.max_redeem(&BOB).unwrap(), units(200));
    }

    #[test]
    fn test_over_liquid_vault_never_exceeds_claim() {
        let world = world_with(ONE * 2, &[(ALICE, 100)]);

        assert_eq!(world.vault.max_withdraw(&ADAPTER), units(200));
        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(100));
        assert_eq!(world.adapter.max_redeem(&ALICE).unwrap(), units(100));
    }

    #[test]
    fn test_clamp_follows_factor_changes() {
        let mut world = world_with(ONE, &[(ALICE, 100)]);
        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(100));

        world.vault.set_liquidity_factor(ONE / 4);
        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(25));

        world.vault.set_liquidity_factor(U256::zero());
        assert!(world.adapter.max_withdraw(&ALICE).unwrap().is_zero());
        assert!(world.adapter.max_redeem(&ALICE).unwrap().is_zero());
        assert!(world
            .adapter
            .withdraw(&ALICE, U256::one(), &ALICE, &ALICE)
            .is_err());

        world.vault.set_liquidity_factor(ONE);
        let shares = world.adapter.max_redeem(&ALICE).unwrap();
        world.adapter.redeem(&ALICE, shares, &ALICE, &ALICE).unwrap();
        assert_eq!(world.wallet(&ALICE), units(100));
    }

    #[test]
    fn test_clamped_redeem_with_pending_fee() {
        let mut world = world_with(ONE / 2, &[(ALICE, 100)]);
        world.vault.accrue_yield(units(100)).unwrap();

        // Claim is 190 after the 10 fee; the vault releases 100
        assert_eq!(world.adapter.max_withdraw(&ALICE).unwrap(), units(100));
        let shares = world.adapter.max_redeem(&ALICE).unwrap();
        assert_eq!(shares, dec("52631578947368421052"));

        let assets = world.adapter.redeem(&ALICE, shares, &ALICE, &ALICE).unwrap();
        assert!(assets <= units(100));
        assert!(approx_eq(assets, units(100), 1));
        world.assert_conserved();
    }

    #[test]
    fn test_max_withdraw_of_stranger_is_zero() {
        let world = world_with(ONE, &[(ALICE, 100)]);

        assert!(world.adapter.max_withdraw(&CAROL).unwrap().is_zero());
        assert!(world.adapter.max_redeem(&CAROL).unwrap().is_zero());
        assert!(world.vault.balance_of(&CAROL).is_zero());
    }
}
