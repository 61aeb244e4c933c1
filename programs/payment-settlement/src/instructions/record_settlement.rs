use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::SettlementError, state::*};

/// Record a verified payment and enqueue it for distribution
#[derive(Accounts)]
pub struct RecordSettlement<'info> {
    /// Collaborator recording a verified payment; funds the receipt rent
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_POLICY_SEED],
        bump = policy.bump,
        has_one = treasury,
    )]
    pub policy: Account<'info, DistributionPolicy>,

    /// Payer's token account holding the verified payment
    #[account(
        mut,
        token::mint = policy.mint,
        token::authority = payer,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    /// Settlement receipt PDA, sequenced by the policy counter
    #[account(
        init,
        payer = payer,
        space = SettlementReceipt::LEN,
        seeds = [SETTLEMENT_SEED, policy.next_settlement_id.to_le_bytes().as_ref()],
        bump
    )]
    pub receipt: Account<'info, SettlementReceipt>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RecordSettlement>, amount: u64) -> Result<()> {
    require!(amount > 0, SettlementError::InvalidAmount);

    let clock = Clock::get()?;

    // The deposit and the receipt share one transaction: a receipt can never
    // exist for an amount that was not actually paid.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer_token_account.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        amount,
    )?;

    let settlement_id = ctx.accounts.policy.next_settlement_id;

    let receipt = &mut ctx.accounts.receipt;
    receipt.policy = ctx.accounts.policy.key();
    receipt.settlement_id = settlement_id;
    receipt.payer = ctx.accounts.payer.key();
    receipt.amount = amount;
    receipt.status = SettlementStatus::Pending;
    receipt.host_paid = 0;
    receipt.curator_paid = 0;
    receipt.platform_paid = 0;
    receipt.recorded_at = clock.unix_timestamp;
    receipt.settled_at = 0;
    receipt.settlement_slot = 0;
    receipt.bump = ctx.bumps.receipt;

    let policy = &mut ctx.accounts.policy;
    policy.next_settlement_id = settlement_id
        .checked_add(1)
        .ok_or(SettlementError::ArithmeticOverflow)?;
    policy.pending_amount = policy
        .pending_amount
        .checked_add(amount)
        .ok_or(SettlementError::ArithmeticOverflow)?;

    msg!("Recorded settlement {} for {} base units", settlement_id, amount);

    emit!(SettlementRecorded {
        receipt: ctx.accounts.receipt.key(),
        settlement_id,
        payer: ctx.accounts.payer.key(),
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct SettlementRecorded {
    pub receipt: Pubkey,
    pub settlement_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
