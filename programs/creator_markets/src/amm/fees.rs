//! # Fee Splitter
//!
//! Every bet and every share trade pays one fee, split three ways:
//!
//! ```text
//! fee        = amount × total_bps / 10000
//! creator    = fee × creator_bps  / total_bps
//! dividend   = fee × dividend_bps / total_bps
//! platform   = fee − creator − dividend      (takes the rounding residue)
//! ```
//!
//! The platform part absorbs the remainder so the parts always sum to `fee`.

use anchor_lang::prelude::*;

use crate::constants::{
    BPS_DENOMINATOR, DEFAULT_CREATOR_FEE_BPS, DEFAULT_DIVIDEND_FEE_BPS,
    DEFAULT_PLATFORM_FEE_BPS, DEFAULT_TOTAL_FEE_BPS, MAX_TOTAL_FEE_BPS,
};
use crate::errors::EngineError;

/// Fee rates in basis points
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub struct FeeSchedule {
    pub total_bps: u16,
    pub platform_bps: u16,
    pub creator_bps: u16,
    pub dividend_bps: u16,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            total_bps: DEFAULT_TOTAL_FEE_BPS,
            platform_bps: DEFAULT_PLATFORM_FEE_BPS,
            creator_bps: DEFAULT_CREATOR_FEE_BPS,
            dividend_bps: DEFAULT_DIVIDEND_FEE_BPS,
        }
    }
}

/// Result of splitting one transaction's fee
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FeeSplit {
    /// Amount the fee was charged on
    pub gross: u64,
    pub platform: u64,
    pub creator: u64,
    pub dividend: u64,
}

impl FeeSplit {
    pub fn total_fee(&self) -> u64 {
        self.platform + self.creator + self.dividend
    }

    /// Gross amount minus the fee
    pub fn net(&self) -> u64 {
        self.gross - self.total_fee()
    }
}

impl FeeSchedule {
    pub fn validate(&self) -> Result<()> {
        let parts = self.platform_bps as u32 + self.creator_bps as u32 + self.dividend_bps as u32;
        require!(
            parts == self.total_bps as u32 && self.total_bps <= MAX_TOTAL_FEE_BPS,
            EngineError::InvalidFeeSchedule
        );
        Ok(())
    }

    /// Split the fee owed on `amount`
    pub fn split(&self, amount: u64) -> Result<FeeSplit> {
        require!(amount > 0, EngineError::AmountCannotBeZero);

        let fee = mul_div(amount, self.total_bps as u64, BPS_DENOMINATOR)?;
        if fee == 0 || self.total_bps == 0 {
            return Ok(FeeSplit {
                gross: amount,
                ..FeeSplit::default()
            });
        }

        let creator = mul_div(fee, self.creator_bps as u64, self.total_bps as u64)?;
        let dividend = mul_div(fee, self.dividend_bps as u64, self.total_bps as u64)?;
        let platform = fee
            .checked_sub(creator)
            .and_then(|rest| rest.checked_sub(dividend))
            .ok_or(EngineError::MathOverflow)?;

        Ok(FeeSplit {
            gross: amount,
            platform,
            creator,
            dividend,
        })
    }
}

fn mul_div(a: u64, b: u64, denominator: u64) -> Result<u64> {
    let value = (a as u128)
        .checked_mul(b as u128)
        .ok_or(EngineError::MathOverflow)?
        / denominator as u128;

    u64::try_from(value).map_err(|_| error!(EngineError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_is_valid() {
        FeeSchedule::default().validate().unwrap();
    }

    #[test]
    fn test_hundred_token_bet() {
        // 100 tokens -> 1.5 token fee, 98.5 net
        let split = FeeSchedule::default().split(100_000_000).unwrap();
        assert_eq!(split.total_fee(), 1_500_000);
        assert_eq!(split.net(), 98_500_000);
        assert_eq!(split.platform, 750_000);
        assert_eq!(split.creator, 600_000);
        assert_eq!(split.dividend, 150_000);
    }

    #[test]
    fn test_residue_goes_to_platform() {
        // fee = 1003 * 150 / 10000 = 15
        // creator = 15 * 60 / 150 = 6, dividend = 15 * 15 / 150 = 1
        let split = FeeSchedule::default().split(1_003).unwrap();
        assert_eq!(split.total_fee(), 15);
        assert_eq!(split.creator, 6);
        assert_eq!(split.dividend, 1);
        assert_eq!(split.platform, 8);
    }

    #[test]
    fn test_parts_always_sum_to_fee() {
        let schedule = FeeSchedule::default();
        for amount in [1u64, 66, 67, 999, 12_345, 7_777_777, u64::MAX / 2] {
            let split = schedule.split(amount).unwrap();
            let expected = ((amount as u128 * 150) / 10_000) as u64;
            assert_eq!(split.total_fee(), expected, "amount={amount}");
            assert_eq!(split.net() + split.total_fee(), amount);
        }
    }

    #[test]
    fn test_dust_amount_pays_no_fee() {
        let split = FeeSchedule::default().split(66).unwrap();
        assert_eq!(split.total_fee(), 0);
        assert_eq!(split.net(), 66);
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            FeeSchedule::default().split(0).unwrap_err(),
            EngineError::AmountCannotBeZero.into()
        );
    }

    #[test]
    fn test_invalid_schedules() {
        let mismatched = FeeSchedule {
            total_bps: 150,
            platform_bps: 75,
            creator_bps: 60,
            dividend_bps: 10,
        };
        assert_eq!(
            mismatched.validate().unwrap_err(),
            EngineError::InvalidFeeSchedule.into()
        );

        let too_high = FeeSchedule {
            total_bps: 2_000,
            platform_bps: 2_000,
            creator_bps: 0,
            dividend_bps: 0,
        };
        assert!(too_high.validate().is_err());
    }
}
