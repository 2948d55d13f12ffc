//! Read-only instructions
//!
//! Simulated by clients to read live odds, unlock progress and curve quotes
//! through the program's return data.

use anchor_lang::prelude::*;

use crate::state::{Config, CreatorShares, CreatorVolume, CurveQuote, Market, UnlockProgress};

#[derive(Accounts)]
pub struct MarketView<'info> {
    pub market: Account<'info, Market>,
}

impl<'info> MarketView<'info> {
    pub fn market_probabilities(&self) -> Result<Vec<u64>> {
        self.market.probabilities()
    }
}

#[derive(Accounts)]
pub struct UnlockView<'info> {
    pub creator_volume: Account<'info, CreatorVolume>,
}

impl<'info> UnlockView<'info> {
    pub fn unlock_progress(&self) -> UnlockProgress {
        self.creator_volume.progress()
    }
}

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct CurveView<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Absent until the creator's first issuance
    #[account(
        seeds = [CreatorShares::SEED, creator.as_ref()],
        bump,
    )]
    pub creator_shares: Option<Account<'info, CreatorShares>>,
}

impl<'info> CurveView<'info> {
    pub fn curve_quote(&self, creator: Pubkey, amount: u64, is_buy: bool) -> Result<CurveQuote> {
        let ledger = match &self.creator_shares {
            Some(shares) => (**shares).clone(),
            None => CreatorShares {
                creator,
                supply: 0,
                reserve: 0,
                holders: 0,
                bump: 0,
            },
        };

        if is_buy {
            ledger.quote_buy(amount, &self.config.fees)
        } else {
            ledger.quote_sell(amount, &self.config.fees)
        }
    }
}
