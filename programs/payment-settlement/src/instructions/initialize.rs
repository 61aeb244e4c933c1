use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::SettlementError, math, state::*};

/// Create the distribution policy, treasury, and treasury authority
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Settlement token mint
    pub mint: Account<'info, Mint>,

    /// Beneficiary receiving the host share
    /// CHECK: Wallet pubkey only, validated in the handler
    pub host_wallet: UncheckedAccount<'info>,

    /// Beneficiary receiving the curator share
    /// CHECK: Wallet pubkey only, validated in the handler
    pub curator_wallet: UncheckedAccount<'info>,

    /// Beneficiary receiving the platform share
    /// CHECK: Wallet pubkey only, validated in the handler
    pub platform_wallet: UncheckedAccount<'info>,

    /// Distribution policy PDA
    #[account(
        init,
        payer = authority,
        space = DistributionPolicy::LEN,
        seeds = [DISTRIBUTION_POLICY_SEED],
        bump
    )]
    pub policy: Account<'info, DistributionPolicy>,

    /// Program's settlement treasury (PDA-owned token account)
    #[account(
        init,
        payer = authority,
        seeds = [TREASURY_SEED],
        bump,
        token::mint = mint,
        token::authority = treasury_authority
    )]
    pub treasury: Account<'info, TokenAccount>,

    /// Treasury authority PDA
    /// CHECK: PDA that will own the treasury
    #[account(
        seeds = [TREASURY_AUTHORITY_SEED],
        bump
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<Initialize>,
    host_share_bps: u16,
    curator_share_bps: u16,
    platform_share_bps: u16,
    settlement_ttl: i64,
) -> Result<()> {
    math::validate_shares([host_share_bps, curator_share_bps, platform_share_bps])?;

    let host_wallet = ctx.accounts.host_wallet.key();
    let curator_wallet = ctx.accounts.curator_wallet.key();
    let platform_wallet = ctx.accounts.platform_wallet.key();
    require!(
        host_wallet != Pubkey::default()
            && curator_wallet != Pubkey::default()
            && platform_wallet != Pubkey::default(),
        SettlementError::InvalidBeneficiary
    );
    require!(settlement_ttl > 0, SettlementError::InvalidSettlementTtl);

    let policy_key = ctx.accounts.policy.key();
    let policy = &mut ctx.accounts.policy;
    policy.authority = ctx.accounts.authority.key();
    policy.mint = ctx.accounts.mint.key();
    policy.treasury = ctx.accounts.treasury.key();
    policy.host_wallet = host_wallet;
    policy.curator_wallet = curator_wallet;
    policy.platform_wallet = platform_wallet;
    policy.host_share_bps = host_share_bps;
    policy.curator_share_bps = curator_share_bps;
    policy.platform_share_bps = platform_share_bps;
    policy.settlement_ttl = settlement_ttl;
    policy.next_settlement_id = 0;
    policy.pending_amount = 0;
    policy.bump = ctx.bumps.policy;
    policy.treasury_authority_bump = ctx.bumps.treasury_authority;

    msg!(
        "Distribution policy initialized: {}-decimal token, shares {}/{}/{} bps, TTL {}s",
        ctx.accounts.mint.decimals,
        host_share_bps,
        curator_share_bps,
        platform_share_bps,
        settlement_ttl
    );

    emit!(DistributionPolicyInitialized {
        policy: policy_key,
        mint: ctx.accounts.mint.key(),
        treasury: ctx.accounts.treasury.key(),
        host_wallet,
        curator_wallet,
        platform_wallet,
        host_share_bps,
        curator_share_bps,
        platform_share_bps,
        settlement_ttl,
    });

    Ok(())
}

#[event]
pub struct DistributionPolicyInitialized {
    pub policy: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub host_wallet: Pubkey,
    pub curator_wallet: Pubkey,
    pub platform_wallet: Pubkey,
    pub host_share_bps: u16,
    pub curator_share_bps: u16,
    pub platform_share_bps: u16,
    pub settlement_ttl: i64,
}
