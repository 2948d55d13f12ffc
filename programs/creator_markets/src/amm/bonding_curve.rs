//! # Quadratic Bonding Curve
//!
//! Prices creator shares as a pure function of issued supply.
//!
//! ## The Pricing Law
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │              price(s) = s² / D                               │
//! │                                                              │
//! │   Where:                                                     │
//! │   • s = Shares currently issued                              │
//! │   • D = PRICE_DIVISOR (1400)                                 │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed-Form Integral
//!
//! The cost of moving supply from `s₁` to `s₂` is the area under the price
//! curve:
//!
//! ```text
//! cost(s₁ → s₂) = ∫ s²/D ds = (s₂³ − s₁³) / 3D
//! ```
//!
//! Selling the same span returns the same magnitude. Both directions run the
//! exact same integer expression with a single floor division at the end, so
//!
//! ```text
//! buy_cost(s, n) == sell_proceeds(s + n, n)
//! ```
//!
//! holds bit for bit. Results are WAD-scaled (1e18 per settlement token); the
//! issuance layer converts to 6-decimal settlement units with
//! [`wad_to_settlement_ceil`] for buys and [`wad_to_settlement_floor`] for
//! sells.

use anchor_lang::prelude::*;

use crate::constants::{
    INTEGRAL_DIVISOR, MAX_CREATOR_SUPPLY, PRICE_DIVISOR, WAD, WAD_PER_SETTLEMENT_UNIT,
};
use crate::errors::EngineError;

/// Quadratic bonding curve for creator shares
///
/// Implements price(s) = s² / 1400
pub struct QuadraticCurve;

impl QuadraticCurve {
    /// Marginal price of one share at `supply`, WAD-scaled
    ///
    /// # Example
    /// ```ignore
    /// // 1400 shares issued: 1400² / 1400 = 1400 tokens per share
    /// let price = QuadraticCurve::price_at(1_400)?;
    /// assert_eq!(price, 1_400 * WAD);
    /// ```
    pub fn price_at(supply: u64) -> Result<u128> {
        let s = supply as u128;
        let numerator = s
            .checked_mul(s)
            .and_then(|sq| sq.checked_mul(WAD))
            .ok_or(EngineError::MathOverflow)?;

        Ok(numerator / PRICE_DIVISOR)
    }

    /// Total cost to mint `amount` shares starting at `current_supply`
    ///
    /// # Arguments
    /// * `current_supply` - Shares issued before the purchase
    /// * `amount` - Shares to mint
    ///
    /// # Returns
    /// * WAD-scaled cost `((s + n)³ − s³) / 4200`
    pub fn buy_cost(current_supply: u64, amount: u64) -> Result<u128> {
        require!(amount > 0, EngineError::AmountCannotBeZero);

        let new_supply = current_supply
            .checked_add(amount)
            .ok_or(EngineError::SupplyExceedsMaximum)?;
        require!(
            new_supply <= MAX_CREATOR_SUPPLY,
            EngineError::SupplyExceedsMaximum
        );

        integral(current_supply, new_supply)
    }

    /// Total proceeds from burning `amount` shares starting at `current_supply`
    ///
    /// # Returns
    /// * WAD-scaled proceeds `(s³ − (s − n)³) / 4200`
    pub fn sell_proceeds(current_supply: u64, amount: u64) -> Result<u128> {
        require!(amount > 0, EngineError::AmountCannotBeZero);
        require!(amount <= current_supply, EngineError::InsufficientSupply);

        integral(current_supply - amount, current_supply)
    }

    pub fn average_buy_price(current_supply: u64, amount: u64) -> Result<u128> {
        let cost = Self::buy_cost(current_supply, amount)?;
        Ok(cost / amount as u128)
    }

    pub fn average_sell_price(current_supply: u64, amount: u64) -> Result<u128> {
        let proceeds = Self::sell_proceeds(current_supply, amount)?;
        Ok(proceeds / amount as u128)
    }
}

/// (upper³ − lower³) · WAD / 3D, floored once
fn integral(lower: u64, upper: u64) -> Result<u128> {
    let delta = cube(upper)?
        .checked_sub(cube(lower)?)
        .ok_or(EngineError::MathOverflow)?;

    let scaled = delta.checked_mul(WAD).ok_or(EngineError::MathOverflow)?;

    Ok(scaled / INTEGRAL_DIVISOR)
}

fn cube(x: u64) -> Result<u128> {
    let x = x as u128;
    x.checked_mul(x)
        .and_then(|sq| sq.checked_mul(x))
        .ok_or_else(|| error!(EngineError::MathOverflow))
}

/// WAD value to settlement units, rounding up (amounts the user pays)
pub fn wad_to_settlement_ceil(wad: u128) -> Result<u64> {
    let units = wad
        .checked_add(WAD_PER_SETTLEMENT_UNIT - 1)
        .ok_or(EngineError::MathOverflow)?
        / WAD_PER_SETTLEMENT_UNIT;

    u64::try_from(units).map_err(|_| error!(EngineError::MathOverflow))
}

/// WAD value to settlement units, rounding down (amounts the user receives)
pub fn wad_to_settlement_floor(wad: u128) -> Result<u64> {
    u64::try_from(wad / WAD_PER_SETTLEMENT_UNIT).map_err(|_| error!(EngineError::MathOverflow))
}
