use anchor_lang::prelude::*;

use crate::constants::BASIS_POINTS_DIVISOR;
use crate::errors::SettlementError;
use crate::state::DistributionPolicy;

/// One transfer leg of a settlement: a beneficiary wallet and the base-unit
/// amount routed to it. Legs are ordered host, curator, platform; the order
/// only affects log readability since all legs land in one transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferLeg {
    pub wallet: Pubkey,
    pub amount: u64,
}

/// Full payout breakdown for one settlement.
#[derive(Clone, Debug)]
pub struct SettlementPlan {
    pub legs: [TransferLeg; 3],
    /// Sum of all legs. May deviate from the recorded amount by up to two
    /// base units; the difference is never redistributed.
    pub total_payout: u64,
}

/// Checks that the three shares sum to exactly one whole, in basis points.
pub fn validate_shares(shares: [u16; 3]) -> Result<()> {
    let sum: u64 = shares.iter().map(|s| *s as u64).sum();
    require!(sum == BASIS_POINTS_DIVISOR, SettlementError::InvalidShareSplit);
    Ok(())
}

/// Computes one beneficiary's share of `amount`, rounding to the nearest
/// base unit with ties away from zero.
pub fn split_share(amount: u64, share_bps: u16) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(share_bps as u128)
        .ok_or(SettlementError::ArithmeticOverflow)?
        .checked_add(BASIS_POINTS_DIVISOR as u128 / 2)
        .ok_or(SettlementError::ArithmeticOverflow)?;
    u128_to_u64(scaled / BASIS_POINTS_DIVISOR as u128)
}

/// Builds the three-leg plan for a recorded amount. Each leg rounds
/// independently; no remainder redistribution is performed.
pub fn build_settlement_plan(amount: u64, policy: &DistributionPolicy) -> Result<SettlementPlan> {
    require!(amount > 0, SettlementError::InvalidAmount);

    let legs = [
        TransferLeg {
            wallet: policy.host_wallet,
            amount: split_share(amount, policy.host_share_bps)?,
        },
        TransferLeg {
            wallet: policy.curator_wallet,
            amount: split_share(amount, policy.curator_share_bps)?,
        },
        TransferLeg {
            wallet: policy.platform_wallet,
            amount: split_share(amount, policy.platform_share_bps)?,
        },
    ];

    let mut total_payout: u64 = 0;
    for leg in &legs {
        total_payout = total_payout
            .checked_add(leg.amount)
            .ok_or(SettlementError::ArithmeticOverflow)?;
    }
    require!(total_payout > 0, SettlementError::EmptyDistribution);

    Ok(SettlementPlan { legs, total_payout })
}

fn u128_to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(SettlementError::ArithmeticOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        DEFAULT_CURATOR_SHARE_BPS, DEFAULT_HOST_SHARE_BPS, DEFAULT_PLATFORM_SHARE_BPS,
        DEFAULT_SETTLEMENT_TTL,
    };

    fn policy_with_shares(host: u16, curator: u16, platform: u16) -> DistributionPolicy {
        DistributionPolicy {
            authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            host_wallet: Pubkey::new_unique(),
            curator_wallet: Pubkey::new_unique(),
            platform_wallet: Pubkey::new_unique(),
            host_share_bps: host,
            curator_share_bps: curator,
            platform_share_bps: platform,
            settlement_ttl: DEFAULT_SETTLEMENT_TTL,
            next_settlement_id: 0,
            pending_amount: 0,
            bump: 255,
            treasury_authority_bump: 255,
        }
    }

    fn reference_policy() -> DistributionPolicy {
        policy_with_shares(
            DEFAULT_HOST_SHARE_BPS,
            DEFAULT_CURATOR_SHARE_BPS,
            DEFAULT_PLATFORM_SHARE_BPS,
        )
    }

    #[test]
    fn one_cent_reference_split() {
        // 0.01 of a 6-decimal token is 10_000 base units.
        let plan = build_settlement_plan(10_000, &reference_policy()).unwrap();
        assert_eq!(plan.legs[0].amount, 5_000);
        assert_eq!(plan.legs[1].amount, 3_000);
        assert_eq!(plan.legs[2].amount, 2_000);
        assert_eq!(plan.total_payout, 10_000);
    }

    #[test]
    fn ties_round_away_from_zero() {
        // 3 * 50% = 1.5 -> 2, 3 * 30% = 0.9 -> 1, 3 * 20% = 0.6 -> 1
        let plan = build_settlement_plan(3, &reference_policy()).unwrap();
        assert_eq!(plan.legs[0].amount, 2);
        assert_eq!(plan.legs[1].amount, 1);
        assert_eq!(plan.legs[2].amount, 1);
        // Overshoots the paid amount by one unit; accepted, never redistributed.
        assert_eq!(plan.total_payout, 4);
    }

    #[test]
    fn payout_sum_stays_within_two_units() {
        let policy = reference_policy();
        for amount in [1u64, 2, 3, 7, 9, 11, 13, 99, 101, 9_999, 10_001, 123_457] {
            let plan = build_settlement_plan(amount, &policy).unwrap();
            let drift = plan.total_payout.abs_diff(amount);
            assert!(drift <= 2, "amount {} drifted by {}", amount, drift);
        }
    }

    #[test]
    fn zero_amount_rejected() {
        assert!(build_settlement_plan(0, &reference_policy()).is_err());
    }

    #[test]
    fn all_dust_legs_rejected() {
        // A near-even three-way split rounds a single base unit down to
        // nothing on every leg.
        let policy = policy_with_shares(3_334, 3_333, 3_333);
        assert!(build_settlement_plan(1, &policy).is_err());
    }

    #[test]
    fn shares_must_sum_to_one_whole() {
        assert!(validate_shares([5_000, 3_000, 2_000]).is_ok());
        assert!(validate_shares([10_000, 0, 0]).is_ok());
        assert!(validate_shares([5_000, 3_000, 1_999]).is_err());
        assert!(validate_shares([5_000, 5_000, 5_000]).is_err());
    }

    #[test]
    fn no_overflow_at_u64_max() {
        assert_eq!(split_share(u64::MAX, 10_000).unwrap(), u64::MAX);
        assert!(split_share(u64::MAX, 5_000).is_ok());
    }
}
