use anchor_lang::prelude::*;

/// Configuration for the three-way payment split
#[account]
pub struct DistributionPolicy {
    /// Authority allowed to void stale receipts and withdraw surplus
    pub authority: Pubkey,

    /// Settlement token mint
    pub mint: Pubkey,

    /// PDA token account holding recorded payments until distribution
    pub treasury: Pubkey,

    /// Beneficiary receiving the host share
    pub host_wallet: Pubkey,

    /// Beneficiary receiving the curator share
    pub curator_wallet: Pubkey,

    /// Beneficiary receiving the platform share
    pub platform_wallet: Pubkey,

    /// Host share in basis points
    pub host_share_bps: u16,

    /// Curator share in basis points
    pub curator_share_bps: u16,

    /// Platform share in basis points
    pub platform_share_bps: u16,

    /// Seconds a settlement may stay pending before the authority can void it
    pub settlement_ttl: i64,

    /// Sequence number assigned to the next recorded settlement
    pub next_settlement_id: u64,

    /// Sum of all pending receipt amounts (treasury obligations)
    pub pending_amount: u64,

    /// Bump for PDA derivation
    pub bump: u8,

    /// Bump of the treasury authority PDA
    pub treasury_authority_bump: u8,
}

impl DistributionPolicy {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // mint
        32 + // treasury
        32 + // host_wallet
        32 + // curator_wallet
        32 + // platform_wallet
        2 +  // host_share_bps
        2 +  // curator_share_bps
        2 +  // platform_share_bps
        8 +  // settlement_ttl
        8 +  // next_settlement_id
        8 +  // pending_amount
        1 +  // bump
        1;   // treasury_authority_bump
}

/// Lifecycle of a recorded settlement
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementStatus {
    /// Recorded and waiting for a crank to distribute it
    Pending,
    /// Distributed to all beneficiaries
    Complete,
    /// Voided after the TTL elapsed without settlement
    Failed,
}

impl SettlementStatus {
    /// A terminal receipt will never transition again
    pub fn is_terminal(&self) -> bool {
        matches!(self, SettlementStatus::Complete | SettlementStatus::Failed)
    }
}

/// One recorded payment awaiting (or past) distribution
#[account]
pub struct SettlementReceipt {
    /// Policy this settlement belongs to
    pub policy: Pubkey,

    /// Sequence number assigned at recording
    pub settlement_id: u64,

    /// Account that recorded and funded this settlement; receives rent on close
    pub payer: Pubkey,

    /// Paid amount in token base units
    pub amount: u64,

    /// Current lifecycle status
    pub status: SettlementStatus,

    /// Host payout, zero until settled
    pub host_paid: u64,

    /// Curator payout, zero until settled
    pub curator_paid: u64,

    /// Platform payout, zero until settled
    pub platform_paid: u64,

    /// Unix time the settlement was recorded
    pub recorded_at: i64,

    /// Unix time the receipt reached a terminal status (0 while pending)
    pub settled_at: i64,

    /// Slot of the settling transaction, for explorer lookup (0 while pending)
    pub settlement_slot: u64,

    /// Bump for PDA derivation
    pub bump: u8,
}

impl SettlementReceipt {
    pub const LEN: usize = 8 + // discriminator
        32 + // policy
        8 +  // settlement_id
        32 + // payer
        8 +  // amount
        1 +  // status
        8 +  // host_paid
        8 +  // curator_paid
        8 +  // platform_paid
        8 +  // recorded_at
        8 +  // settled_at
        8 +  // settlement_slot
        1;   // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_not_terminal() {
        assert!(!SettlementStatus::Pending.is_terminal());
        assert!(SettlementStatus::Complete.is_terminal());
        assert!(SettlementStatus::Failed.is_terminal());
    }
}
