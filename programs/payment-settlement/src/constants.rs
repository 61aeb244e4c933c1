pub const DISTRIBUTION_POLICY_SEED: &[u8] = b"distribution_policy";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const TREASURY_AUTHORITY_SEED: &[u8] = b"treasury_authority";
pub const SETTLEMENT_SEED: &[u8] = b"settlement";

/// Basis points
pub const BASIS_POINTS_DIVISOR: u64 = 10_000;

/// Reference three-way split (host / curator / platform)
pub const DEFAULT_HOST_SHARE_BPS: u16 = 5_000;
pub const DEFAULT_CURATOR_SHARE_BPS: u16 = 3_000;
pub const DEFAULT_PLATFORM_SHARE_BPS: u16 = 2_000;

/// Default bound on how long a settlement may stay pending (24 hours)
pub const DEFAULT_SETTLEMENT_TTL: i64 = 86_400;
