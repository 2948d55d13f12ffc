//! Market Resolution
//!
//! ## Resolution Flow
//!
//! 1. Market end time passes
//! 2. The configured resolver calls `resolve_market` with the winning index
//! 3. The real pool and winning share count are snapshotted
//! 4. Winners claim pro-rata from the snapshot

use anchor_lang::prelude::*;

use crate::events::MarketResolved;
use crate::state::{Config, Market};

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    /// Must match `config.resolver`
    pub resolver: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,
}

impl<'info> ResolveMarket<'info> {
    pub fn resolve_market(&mut self, winning_outcome: u8) -> Result<()> {
        let clock = Clock::get()?;
        self.config.ensure_resolver(self.resolver.key())?;

        self.market
            .resolve(winning_outcome as usize, clock.unix_timestamp)?;

        emit!(MarketResolved {
            market_id: self.market.id,
            winning_outcome,
            resolver: self.resolver.key(),
            pool: self.market.resolved_pool,
            timestamp: clock.unix_timestamp,
        });

        msg!(
            "Market {} resolved: outcome {} wins a pool of {}",
            self.market.id,
            winning_outcome,
            self.market.resolved_pool
        );

        Ok(())
    }
}
