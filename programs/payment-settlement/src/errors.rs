use anchor_lang::prelude::*;

#[error_code]
pub enum SettlementError {
    #[msg("Beneficiary shares must sum to exactly 10000 basis points")]
    InvalidShareSplit,

    #[msg("Beneficiary wallet cannot be the default address")]
    InvalidBeneficiary,

    #[msg("Settlement TTL must be greater than zero")]
    InvalidSettlementTtl,

    #[msg("Settlement amount must be greater than zero")]
    InvalidAmount,

    #[msg("Every transfer leg rounded to zero - nothing to distribute")]
    EmptyDistribution,

    #[msg("Arithmetic overflow in settlement calculation")]
    ArithmeticOverflow,

    #[msg("Treasury balance cannot cover the settlement payout")]
    InsufficientTreasuryBalance,

    #[msg("Settlement receipt is not pending")]
    SettlementNotPending,

    #[msg("Settlement receipt has not reached a terminal status")]
    SettlementNotTerminal,

    #[msg("Settlement TTL has not elapsed - receipt cannot be voided yet")]
    SettlementNotExpired,

    #[msg("Requested amount exceeds the unobligated treasury balance")]
    SurplusExceedsAvailable,

    #[msg("Beneficiary token account does not match the policy")]
    InvalidBeneficiaryAccount,
}
