use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::SettlementError, math, state::*};

/// Distribute a pending settlement to the beneficiaries - permissionless
#[derive(Accounts)]
pub struct Settle<'info> {
    /// Permissionless caller
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_POLICY_SEED],
        bump = policy.bump,
        has_one = treasury,
    )]
    pub policy: Account<'info, DistributionPolicy>,

    #[account(
        mut,
        seeds = [SETTLEMENT_SEED, receipt.settlement_id.to_le_bytes().as_ref()],
        bump = receipt.bump,
        has_one = policy,
    )]
    pub receipt: Account<'info, SettlementReceipt>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    /// Treasury authority PDA
    /// CHECK: PDA that owns the treasury
    #[account(
        seeds = [TREASURY_AUTHORITY_SEED],
        bump = policy.treasury_authority_bump
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    /// Host's settlement token account
    #[account(
        mut,
        token::mint = policy.mint,
        constraint = host_token_account.owner == policy.host_wallet
            @ SettlementError::InvalidBeneficiaryAccount,
    )]
    pub host_token_account: Account<'info, TokenAccount>,

    /// Curator's settlement token account
    #[account(
        mut,
        token::mint = policy.mint,
        constraint = curator_token_account.owner == policy.curator_wallet
            @ SettlementError::InvalidBeneficiaryAccount,
    )]
    pub curator_token_account: Account<'info, TokenAccount>,

    /// Platform's settlement token account
    #[account(
        mut,
        token::mint = policy.mint,
        constraint = platform_token_account.owner == policy.platform_wallet
            @ SettlementError::InvalidBeneficiaryAccount,
    )]
    pub platform_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Settle>) -> Result<()> {
    require!(
        ctx.accounts.receipt.status == SettlementStatus::Pending,
        SettlementError::SettlementNotPending
    );

    let plan = math::build_settlement_plan(ctx.accounts.receipt.amount, &ctx.accounts.policy)?;

    // Rounding may overshoot the recorded amount by up to two base units;
    // the treasury float must cover the full payout.
    require!(
        ctx.accounts.treasury.amount >= plan.total_payout,
        SettlementError::InsufficientTreasuryBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[
        TREASURY_AUTHORITY_SEED,
        &[ctx.accounts.policy.treasury_authority_bump],
    ]];

    let beneficiary_accounts = [
        ctx.accounts.host_token_account.to_account_info(),
        ctx.accounts.curator_token_account.to_account_info(),
        ctx.accounts.platform_token_account.to_account_info(),
    ];

    // All legs land inside this one transaction or none do; a failed CPI
    // aborts the settlement and leaves the receipt pending for a later crank.
    for (leg, beneficiary) in plan.legs.iter().zip(beneficiary_accounts.iter()) {
        if leg.amount == 0 {
            continue;
        }
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.treasury.to_account_info(),
                    to: beneficiary.clone(),
                    authority: ctx.accounts.treasury_authority.to_account_info(),
                },
                signer_seeds,
            ),
            leg.amount,
        )?;
        msg!("Settled {} base units to {}", leg.amount, leg.wallet);
    }

    let clock = Clock::get()?;

    let receipt = &mut ctx.accounts.receipt;
    receipt.status = SettlementStatus::Complete;
    receipt.host_paid = plan.legs[0].amount;
    receipt.curator_paid = plan.legs[1].amount;
    receipt.platform_paid = plan.legs[2].amount;
    receipt.settled_at = clock.unix_timestamp;
    receipt.settlement_slot = clock.slot;

    let policy = &mut ctx.accounts.policy;
    policy.pending_amount = policy.pending_amount.saturating_sub(receipt.amount);

    emit!(SettlementExecuted {
        receipt: ctx.accounts.receipt.key(),
        settlement_id: ctx.accounts.receipt.settlement_id,
        amount: ctx.accounts.receipt.amount,
        host_paid: plan.legs[0].amount,
        curator_paid: plan.legs[1].amount,
        platform_paid: plan.legs[2].amount,
        total_payout: plan.total_payout,
        slot: clock.slot,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct SettlementExecuted {
    pub receipt: Pubkey,
    pub settlement_id: u64,
    pub amount: u64,
    pub host_paid: u64,
    pub curator_paid: u64,
    pub platform_paid: u64,
    pub total_payout: u64,
    pub slot: u64,
    pub timestamp: i64,
}
