use anchor_lang::prelude::*;

use crate::{constants::*, errors::SettlementError, state::*};

/// Void a pending settlement whose TTL has elapsed
#[derive(Accounts)]
pub struct VoidSettlement<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_POLICY_SEED],
        bump = policy.bump,
        has_one = authority,
    )]
    pub policy: Account<'info, DistributionPolicy>,

    #[account(
        mut,
        seeds = [SETTLEMENT_SEED, receipt.settlement_id.to_le_bytes().as_ref()],
        bump = receipt.bump,
        has_one = policy,
    )]
    pub receipt: Account<'info, SettlementReceipt>,
}

pub fn handler(ctx: Context<VoidSettlement>) -> Result<()> {
    let clock = Clock::get()?;

    require!(
        ctx.accounts.receipt.status == SettlementStatus::Pending,
        SettlementError::SettlementNotPending
    );

    // Voiding only stops waiting for the settlement; an already-landed
    // distribution cannot be undone and a voided one leaves its funds in
    // the treasury for surplus recovery.
    let expires_at = ctx
        .accounts
        .receipt
        .recorded_at
        .checked_add(ctx.accounts.policy.settlement_ttl)
        .ok_or(SettlementError::ArithmeticOverflow)?;
    require!(
        clock.unix_timestamp >= expires_at,
        SettlementError::SettlementNotExpired
    );

    let amount = ctx.accounts.receipt.amount;
    let settlement_id = ctx.accounts.receipt.settlement_id;

    let receipt = &mut ctx.accounts.receipt;
    receipt.status = SettlementStatus::Failed;
    receipt.settled_at = clock.unix_timestamp;
    receipt.settlement_slot = clock.slot;

    let policy = &mut ctx.accounts.policy;
    policy.pending_amount = policy.pending_amount.saturating_sub(amount);

    msg!("Voided settlement {} after TTL; funds remain in treasury", settlement_id);

    emit!(SettlementVoided {
        receipt: ctx.accounts.receipt.key(),
        settlement_id,
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct SettlementVoided {
    pub receipt: Pubkey,
    pub settlement_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}
