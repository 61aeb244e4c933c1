use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("4uZxW9VsmkjWukHwDShTqwc8EyhQxJ5rxaijnVXKbZaF");

#[program]
pub mod payment_settlement {
    use super::*;

    /// Create the distribution policy, treasury, and treasury authority
    pub fn initialize(
        ctx: Context<Initialize>,
        host_share_bps: u16,
        curator_share_bps: u16,
        platform_share_bps: u16,
        settlement_ttl: i64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            host_share_bps,
            curator_share_bps,
            platform_share_bps,
            settlement_ttl,
        )
    }

    /// Record a verified payment and enqueue it for distribution
    pub fn record_settlement(ctx: Context<RecordSettlement>, amount: u64) -> Result<()> {
        instructions::record_settlement::handler(ctx, amount)
    }

    /// Distribute a pending settlement to the beneficiaries - permissionless
    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        instructions::settle::handler(ctx)
    }

    /// Void a pending settlement whose TTL has elapsed
    pub fn void_settlement(ctx: Context<VoidSettlement>) -> Result<()> {
        instructions::void_settlement::handler(ctx)
    }

    /// Withdraw treasury balance not backing any pending settlement
    pub fn withdraw_surplus(ctx: Context<WithdrawSurplus>, amount: u64) -> Result<()> {
        instructions::withdraw_surplus::handler(ctx, amount)
    }

    /// Close a terminal receipt and recover its rent
    pub fn close_receipt(ctx: Context<CloseReceipt>) -> Result<()> {
        instructions::close_receipt::handler(ctx)
    }

    /// Emit the current distribution configuration and treasury state
    pub fn emit_distribution_config(ctx: Context<EmitDistributionConfig>) -> Result<()> {
        instructions::emit_distribution_config::handler(ctx)
    }
}
