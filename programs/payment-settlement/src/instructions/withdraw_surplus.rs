use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::SettlementError, state::*};

/// Withdraw treasury balance not backing any pending settlement
#[derive(Accounts)]
pub struct WithdrawSurplus<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [DISTRIBUTION_POLICY_SEED],
        bump = policy.bump,
        has_one = authority,
        has_one = treasury,
    )]
    pub policy: Account<'info, DistributionPolicy>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    /// Treasury authority PDA
    /// CHECK: PDA that owns the treasury
    #[account(
        seeds = [TREASURY_AUTHORITY_SEED],
        bump = policy.treasury_authority_bump
    )]
    pub treasury_authority: UncheckedAccount<'info>,

    /// Destination for the recovered surplus
    #[account(
        mut,
        token::mint = policy.mint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawSurplus>, amount: u64) -> Result<()> {
    require!(amount > 0, SettlementError::InvalidAmount);

    // Only balance not backing a pending receipt may leave the treasury.
    let available = ctx
        .accounts
        .treasury
        .amount
        .saturating_sub(ctx.accounts.policy.pending_amount);
    require!(amount <= available, SettlementError::SurplusExceedsAvailable);

    let signer_seeds: &[&[&[u8]]] = &[&[
        TREASURY_AUTHORITY_SEED,
        &[ctx.accounts.policy.treasury_authority_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.treasury_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Withdrew {} surplus base units from treasury", amount);

    emit!(SurplusWithdrawn {
        destination: ctx.accounts.destination.key(),
        amount,
        pending_amount: ctx.accounts.policy.pending_amount,
    });

    Ok(())
}

#[event]
pub struct SurplusWithdrawn {
    pub destination: Pubkey,
    pub amount: u64,
    pub pending_amount: u64,
}
