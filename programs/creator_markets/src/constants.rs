//! Protocol-wide constants
//!
//! Settlement amounts are integers in the smallest unit of the collateral
//! token (6 decimals). Curve values use 18-decimal fixed point.

pub const CONFIG_SEED: &[u8] = b"config";
pub const MARKET_SEED: &[u8] = b"market";
pub const MARKET_VAULT_SEED: &[u8] = b"market_vault";
pub const POSITION_SEED: &[u8] = b"position";
pub const CREATOR_VOLUME_SEED: &[u8] = b"creator_volume";
pub const CREATOR_SHARES_SEED: &[u8] = b"creator_shares";
pub const SHARE_HOLDING_SEED: &[u8] = b"share_holding";
pub const CURVE_VAULT_SEED: &[u8] = b"curve_vault";
pub const DIVIDEND_VAULT_SEED: &[u8] = b"dividend_vault";
pub const VOLUME_REPORTER_SEED: &[u8] = b"volume_reporter";

/// 1 settlement token = 1_000_000 base units
pub const SETTLEMENT_DECIMALS: u8 = 6;
pub const SETTLEMENT_UNIT: u64 = 1_000_000;

pub const BPS_DENOMINATOR: u64 = 10_000;

// Market bounds
pub const MIN_OUTCOMES: usize = 2;
pub const MAX_OUTCOMES: usize = 4;
pub const MIN_MARKET_DURATION: i64 = 6 * 60 * 60;
pub const MAX_MARKET_DURATION: i64 = 7 * 24 * 60 * 60;
pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_OUTCOME_LABEL_LEN: usize = 64;
pub const MAX_METADATA_LEN: usize = 256;

/// Virtual reserve added to every outcome for pricing (5_000 tokens)
pub const DEFAULT_VIRTUAL_RESERVE: u64 = 5_000 * SETTLEMENT_UNIT;

// Fee schedule: 1.5% total, split 0.75% / 0.60% / 0.15%
pub const DEFAULT_TOTAL_FEE_BPS: u16 = 150;
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 75;
pub const DEFAULT_CREATOR_FEE_BPS: u16 = 60;
pub const DEFAULT_DIVIDEND_FEE_BPS: u16 = 15;
pub const MAX_TOTAL_FEE_BPS: u16 = 1_000;

/// Creator shares unlock once their markets have seen 10_000 tokens of volume
pub const UNLOCK_VOLUME_THRESHOLD: u64 = 10_000 * SETTLEMENT_UNIT;

// Quadratic curve: price(s) = s^2 / PRICE_DIVISOR
pub const PRICE_DIVISOR: u128 = 1_400;
pub const INTEGRAL_DIVISOR: u128 = 3 * PRICE_DIVISOR;
pub const WAD: u128 = 1_000_000_000_000_000_000;
/// WAD -> settlement units
pub const WAD_PER_SETTLEMENT_UNIT: u128 = WAD / SETTLEMENT_UNIT as u128;
pub const MAX_CREATOR_SUPPLY: u64 = 100_000;
