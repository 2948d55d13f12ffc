//! Reserve Ledger
//!
//! Bookkeeping of real value and outcome shares. No pricing happens here:
//! the market engine decides amounts, the ledger only records them.

use anchor_lang::prelude::*;

use crate::constants::MAX_OUTCOMES;
use crate::errors::EngineError;

/// Per-outcome real reserves and issued outcome shares of one market
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub struct ReserveLedger {
    pub outcome_count: u8,

    /// Real deposited value per outcome, net of fees
    pub real_reserves: [u64; 4],

    /// Outcome shares issued per outcome
    pub outcome_shares: [u64; 4],
}

impl ReserveLedger {
    pub fn new(outcome_count: usize) -> Self {
        debug_assert!(outcome_count <= MAX_OUTCOMES);
        Self {
            outcome_count: outcome_count as u8,
            ..Self::default()
        }
    }

    pub fn outcome_count(&self) -> usize {
        self.outcome_count as usize
    }

    /// Real reserves of the live outcomes
    pub fn reserves(&self) -> &[u64] {
        &self.real_reserves[..self.outcome_count()]
    }

    pub fn check_outcome(&self, outcome: usize) -> Result<()> {
        require!(outcome < self.outcome_count(), EngineError::InvalidOutcome);
        Ok(())
    }

    pub fn credit_outcome_reserve(&mut self, outcome: usize, amount: u64) -> Result<()> {
        self.check_outcome(outcome)?;
        self.real_reserves[outcome] = self.real_reserves[outcome]
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;
        Ok(())
    }

    pub fn debit_outcome_reserve(&mut self, outcome: usize, amount: u64) -> Result<()> {
        self.check_outcome(outcome)?;
        self.real_reserves[outcome] = self.real_reserves[outcome]
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientReserve)?;
        Ok(())
    }

    pub fn credit_outcome_shares(&mut self, outcome: usize, shares: u64) -> Result<()> {
        self.check_outcome(outcome)?;
        self.outcome_shares[outcome] = self.outcome_shares[outcome]
            .checked_add(shares)
            .ok_or(EngineError::MathOverflow)?;
        Ok(())
    }

    pub fn total_real_reserves(&self) -> u64 {
        // Bounded by the collateral held in the market vault
        self.reserves().iter().sum()
    }

    /// Pay `amount` out of the pooled reserves, draining outcomes in index order
    pub fn debit_pool(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.total_real_reserves(),
            EngineError::InsufficientReserve
        );

        let mut remaining = amount;
        for outcome in 0..self.outcome_count() {
            if remaining == 0 {
                break;
            }
            let take = remaining.min(self.real_reserves[outcome]);
            self.debit_outcome_reserve(outcome, take)?;
            remaining -= take;
        }

        Ok(())
    }
}

/// A user's stake in one market
///
/// Seeds: ["position", market, owner]
#[account]
#[derive(InitSpace, Debug)]
pub struct UserPosition {
    pub market: Pubkey,

    pub owner: Pubkey,

    /// Outcome shares held per outcome
    pub shares: [u64; 4],

    /// Net-of-fee amount deposited per outcome, refunded if the market is cancelled
    pub deposited: [u64; 4],

    /// Set once on claim or refund, never cleared
    pub claimed: bool,

    pub bump: u8,
}

impl UserPosition {
    /// Read a position from a raw account. A user who never bet has no
    /// position, which surfaces as `NoWinningsToClaim`.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            EngineError::NoWinningsToClaim
        );
        let data = info.try_borrow_data()?;
        UserPosition::try_deserialize(&mut &data[..])
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    pub fn credit_user_shares(&mut self, outcome: usize, shares: u64) -> Result<()> {
        require!(outcome < MAX_OUTCOMES, EngineError::InvalidOutcome);
        self.shares[outcome] = self.shares[outcome]
            .checked_add(shares)
            .ok_or(EngineError::MathOverflow)?;
        Ok(())
    }

    pub fn read_user_shares(&self, outcome: usize) -> u64 {
        self.shares.get(outcome).copied().unwrap_or(0)
    }

    pub fn record_deposit(&mut self, outcome: usize, amount: u64) -> Result<()> {
        require!(outcome < MAX_OUTCOMES, EngineError::InvalidOutcome);
        self.deposited[outcome] = self.deposited[outcome]
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;
        Ok(())
    }

    pub fn total_deposited(&self) -> u64 {
        self.deposited.iter().sum()
    }

    pub fn mark_claimed(&mut self) -> Result<()> {
        require!(!self.claimed, EngineError::AlreadyClaimed);
        self.claimed = true;
        Ok(())
    }
}
