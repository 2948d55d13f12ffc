//! # Virtual Liquidity Pricing
//!
//! Multi-outcome markets start with no real money in them. To keep the first
//! trades from swinging odds to the extremes, every outcome is priced as if it
//! held an extra, fixed virtual reserve `V`:
//!
//! ```text
//! effective_i     = real_i + V
//! effective_total = Σ (real_j + V)
//!
//! shares_out      = amount × effective_total / effective_i
//! probability_i   = effective_i / effective_total        (in bps)
//! ```
//!
//! `V` only ever appears in these ratios. It is never credited to a reserve
//! and never paid out, so claims draw exclusively from real deposits.
//!
//! At zero volume every outcome has `effective_i = V`, giving an even 1/N
//! split. Probabilities are floored per outcome and the rounding residue is
//! assigned to the last outcome, so the list always sums to exactly 10000.

use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::EngineError;

pub fn effective_reserve(real_reserve: u64, virtual_reserve: u64) -> Result<u128> {
    (real_reserve as u128)
        .checked_add(virtual_reserve as u128)
        .ok_or_else(|| error!(EngineError::MathOverflow))
}

pub fn effective_total(reserves: &[u64], virtual_reserve: u64) -> Result<u128> {
    reserves.iter().try_fold(0u128, |acc, &real| {
        acc.checked_add(effective_reserve(real, virtual_reserve)?)
            .ok_or_else(|| error!(EngineError::MathOverflow))
    })
}

/// Outcome shares granted for a post-fee `amount` placed on `outcome`,
/// priced against the reserves as they stood before the bet.
pub fn shares_for_bet(
    reserves: &[u64],
    virtual_reserve: u64,
    outcome: usize,
    amount: u64,
) -> Result<u64> {
    require!(outcome < reserves.len(), EngineError::InvalidOutcome);
    require!(amount > 0, EngineError::AmountCannotBeZero);

    let total = effective_total(reserves, virtual_reserve)?;
    let target = effective_reserve(reserves[outcome], virtual_reserve)?;
    require!(target > 0, EngineError::MathOverflow);

    let shares = (amount as u128)
        .checked_mul(total)
        .ok_or(EngineError::MathOverflow)?
        / target;

    u64::try_from(shares).map_err(|_| error!(EngineError::MathOverflow))
}

/// Implied probability of every outcome in basis points, summing to 10000
pub fn probabilities_bps(reserves: &[u64], virtual_reserve: u64) -> Result<Vec<u64>> {
    let count = reserves.len();
    require!(count > 0, EngineError::InvalidOutcomeCount);

    let total = effective_total(reserves, virtual_reserve)?;
    let mut probabilities = Vec::with_capacity(count);

    if total == 0 {
        let even = BPS_DENOMINATOR / count as u64;
        probabilities.resize(count, even);
    } else {
        for &real in reserves {
            let bps = effective_reserve(real, virtual_reserve)?
                .checked_mul(BPS_DENOMINATOR as u128)
                .ok_or(EngineError::MathOverflow)?
                / total;
            probabilities.push(bps as u64);
        }
    }

    let assigned: u64 = probabilities[..count - 1].iter().sum();
    probabilities[count - 1] = BPS_DENOMINATOR - assigned;

    Ok(probabilities)
}
