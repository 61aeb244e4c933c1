use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, state::*};

/// Emit the current distribution configuration and treasury state
#[derive(Accounts)]
pub struct EmitDistributionConfig<'info> {
    #[account(
        seeds = [DISTRIBUTION_POLICY_SEED],
        bump = policy.bump,
        has_one = treasury,
    )]
    pub policy: Account<'info, DistributionPolicy>,

    pub treasury: Account<'info, TokenAccount>,
}

pub fn handler(ctx: Context<EmitDistributionConfig>) -> Result<()> {
    let policy = &ctx.accounts.policy;

    emit!(DistributionConfigSnapshot {
        policy: policy.key(),
        mint: policy.mint,
        host_wallet: policy.host_wallet,
        curator_wallet: policy.curator_wallet,
        platform_wallet: policy.platform_wallet,
        host_share_bps: policy.host_share_bps,
        curator_share_bps: policy.curator_share_bps,
        platform_share_bps: policy.platform_share_bps,
        settlement_ttl: policy.settlement_ttl,
        treasury_balance: ctx.accounts.treasury.amount,
        pending_amount: policy.pending_amount,
        next_settlement_id: policy.next_settlement_id,
    });

    Ok(())
}

#[event]
pub struct DistributionConfigSnapshot {
    pub policy: Pubkey,
    pub mint: Pubkey,
    pub host_wallet: Pubkey,
    pub curator_wallet: Pubkey,
    pub platform_wallet: Pubkey,
    pub host_share_bps: u16,
    pub curator_share_bps: u16,
    pub platform_share_bps: u16,
    pub settlement_ttl: i64,
    pub treasury_balance: u64,
    pub pending_amount: u64,
    pub next_settlement_id: u64,
}
