use anchor_lang::prelude::*;

use crate::{constants::*, errors::SettlementError, state::*};

/// Close a terminal receipt and recover its rent
#[derive(Accounts)]
pub struct CloseReceipt<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTLEMENT_SEED, receipt.settlement_id.to_le_bytes().as_ref()],
        bump = receipt.bump,
        has_one = payer,
        close = payer,
        constraint = receipt.status.is_terminal() @ SettlementError::SettlementNotTerminal,
    )]
    pub receipt: Account<'info, SettlementReceipt>,
}

pub fn handler(ctx: Context<CloseReceipt>) -> Result<()> {
    msg!("Closed settlement receipt {}", ctx.accounts.receipt.settlement_id);
    Ok(())
}
