//! Administrative market controls: pause, unpause, cancel

use anchor_lang::prelude::*;

use crate::events::{MarketCancelled, MarketPauseChanged};
use crate::state::{Config, Market};

#[derive(Accounts)]
pub struct ManageMarket<'info> {
    pub admin: Signer<'info>,

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

impl<'info> ManageMarket<'info> {
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.config.ensure_admin(self.admin.key())?;

        let changed = if paused {
            self.market.pause()?
        } else {
            self.market.unpause()?
        };

        if changed {
            emit!(MarketPauseChanged {
                market_id: self.market.id,
                paused,
            });
        }

        Ok(())
    }

    pub fn cancel_market(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.config.ensure_admin(self.admin.key())?;
        self.market.cancel()?;

        msg!("Market {} cancelled", self.market.id);
        emit!(MarketCancelled {
            market_id: self.market.id,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
