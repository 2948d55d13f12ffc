//! Creator Share Ledger
//!
//! Supply and balances of one creator's shares. Shares are issued and
//! redeemed only through the quadratic curve, and only once the creator's
//! volume record is unlocked.
//!
//! ```text
//! buy:   buyer pays  curve_cost + fee      curve_cost → curve vault
//! sell:  seller gets curve_proceeds − fee  curve_proceeds ← curve vault
//! ```
//!
//! `reserve` mirrors the curve vault balance. Buys round up and sells round
//! down, so it always covers the exact integral of the outstanding supply.

use anchor_lang::prelude::*;

use crate::amm::{wad_to_settlement_ceil, wad_to_settlement_floor, FeeSchedule, FeeSplit, QuadraticCurve};
use crate::errors::EngineError;
use crate::state::CreatorVolume;

/// Per-creator share ledger
///
/// Seeds: ["creator_shares", creator]
///
/// Also the signing authority of the creator's curve and dividend vaults.
#[account]
#[derive(InitSpace)]
pub struct CreatorShares {
    pub creator: Pubkey,

    /// Shares outstanding, never above MAX_CREATOR_SUPPLY
    pub supply: u64,

    /// Settlement units backing the supply
    pub reserve: u64,

    /// Holders with a non-zero balance
    pub holders: u32,

    pub bump: u8,
}

/// One holder's balance of a creator's shares
///
/// Seeds: ["share_holding", creator, holder]
#[account]
#[derive(InitSpace)]
pub struct ShareHolding {
    pub creator: Pubkey,
    pub holder: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

/// Priced curve trade, in settlement units
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct CurveQuote {
    pub shares: u64,
    /// Curve cost (buy) or curve proceeds (sell)
    pub curve_amount: u64,
    pub fees: FeeSplit,
    /// What the trader pays (buy) or receives (sell)
    pub trader_amount: u64,
    pub supply_after: u64,
}

impl CurveQuote {
    /// Buyer's bound on cost plus fees
    pub fn ensure_max_cost(&self, max_total_cost: u64) -> Result<()> {
        require!(
            self.trader_amount <= max_total_cost,
            EngineError::SlippageExceeded
        );
        Ok(())
    }

    /// Seller's bound on proceeds net of fees
    pub fn ensure_min_proceeds(&self, min_net_proceeds: u64) -> Result<()> {
        require!(
            self.trader_amount >= min_net_proceeds,
            EngineError::SlippageExceeded
        );
        Ok(())
    }
}

impl CreatorShares {
    pub const SEED: &'static [u8] = crate::constants::CREATOR_SHARES_SEED;

    pub fn quote_buy(&self, amount: u64, fees: &FeeSchedule) -> Result<CurveQuote> {
        let cost_wad = QuadraticCurve::buy_cost(self.supply, amount)?;
        let curve_amount = wad_to_settlement_ceil(cost_wad)?;
        let split = fees.split(curve_amount)?;
        let trader_amount = curve_amount
            .checked_add(split.total_fee())
            .ok_or(EngineError::MathOverflow)?;

        Ok(CurveQuote {
            shares: amount,
            curve_amount,
            fees: split,
            trader_amount,
            supply_after: self.supply + amount,
        })
    }

    pub fn quote_sell(&self, amount: u64, fees: &FeeSchedule) -> Result<CurveQuote> {
        let proceeds_wad = QuadraticCurve::sell_proceeds(self.supply, amount)?;
        let curve_amount = wad_to_settlement_floor(proceeds_wad)?;
        let split = fees.split(curve_amount)?;

        Ok(CurveQuote {
            shares: amount,
            curve_amount,
            fees: split,
            trader_amount: split.net(),
            supply_after: self.supply - amount,
        })
    }

    /// Mint `amount` shares to `holding`, gated on the creator's unlock
    pub fn buy(
        &mut self,
        volume: &CreatorVolume,
        holding: &mut ShareHolding,
        amount: u64,
        fees: &FeeSchedule,
    ) -> Result<CurveQuote> {
        require_keys_eq!(volume.creator, self.creator, EngineError::AccountMismatch);
        volume.ensure_unlocked()?;

        let quote = self.quote_buy(amount, fees)?;
        let reserve = self
            .reserve
            .checked_add(quote.curve_amount)
            .ok_or(EngineError::MathOverflow)?;
        let balance = holding
            .balance
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;

        let holders = if holding.balance == 0 {
            self.holders
                .checked_add(1)
                .ok_or(EngineError::MathOverflow)?
        } else {
            self.holders
        };

        self.holders = holders;
        self.supply = quote.supply_after;
        self.reserve = reserve;
        holding.balance = balance;

        Ok(quote)
    }

    /// Burn `amount` shares from `holding`, gated on the creator's unlock
    pub fn sell(
        &mut self,
        volume: &CreatorVolume,
        holding: &mut ShareHolding,
        amount: u64,
        fees: &FeeSchedule,
    ) -> Result<CurveQuote> {
        require_keys_eq!(volume.creator, self.creator, EngineError::AccountMismatch);
        volume.ensure_unlocked()?;
        require!(amount > 0, EngineError::AmountCannotBeZero);
        require!(holding.balance >= amount, EngineError::InsufficientBalance);

        let quote = self.quote_sell(amount, fees)?;
        let reserve = self
            .reserve
            .checked_sub(quote.curve_amount)
            .ok_or(EngineError::InsufficientReserve)?;

        holding.balance -= amount;
        if holding.balance == 0 {
            self.holders = self.holders.saturating_sub(1);
        }
        self.supply = quote.supply_after;
        self.reserve = reserve;

        Ok(quote)
    }

    /// Marginal price at the current supply, WAD-scaled
    pub fn spot_price(&self) -> Result<u128> {
        QuadraticCurve::price_at(self.supply)
    }
}
