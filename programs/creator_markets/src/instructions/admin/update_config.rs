use anchor_lang::prelude::*;

use crate::amm::FeeSchedule;
use crate::errors::EngineError;
use crate::events::ConfigUpdated;
use crate::state::Config;

/// Fields left as `None` keep their current value
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct ConfigUpdate {
    pub new_admin: Option<Pubkey>,
    pub resolver: Option<Pubkey>,
    pub treasury: Option<Pubkey>,
    pub fees: Option<FeeSchedule>,
    /// Applies to markets created afterwards
    pub virtual_reserve: Option<u64>,
    pub paused: Option<bool>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<()> {
        self.config.ensure_admin(self.admin.key())?;
        let config = &mut self.config;

        if let Some(fees) = update.fees {
            fees.validate()?;
            config.fees = fees;
        }
        if let Some(virtual_reserve) = update.virtual_reserve {
            require!(virtual_reserve > 0, EngineError::AmountCannotBeZero);
            config.virtual_reserve = virtual_reserve;
        }
        if let Some(resolver) = update.resolver {
            config.resolver = resolver;
        }
        if let Some(treasury) = update.treasury {
            config.treasury = treasury;
        }
        if let Some(paused) = update.paused {
            config.paused = paused;
        }
        if let Some(new_admin) = update.new_admin {
            msg!("Admin transferred to {}", new_admin);
            config.admin = new_admin;
        }

        emit!(ConfigUpdated {
            resolver: config.resolver,
            treasury: config.treasury,
            fees: config.fees,
            virtual_reserve: config.virtual_reserve,
            paused: config.paused,
        });

        Ok(())
    }
}
