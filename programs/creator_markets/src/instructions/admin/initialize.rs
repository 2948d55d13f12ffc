//! Protocol Initialization
//!
//! Sets up the global configuration. Called once during deployment.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::amm::FeeSchedule;
use crate::constants::{DEFAULT_VIRTUAL_RESERVE, SETTLEMENT_DECIMALS};
use crate::errors::EngineError;
use crate::events::ProtocolInitialized;
use crate::state::Config;

/// Accounts required for protocol initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Protocol administrator (becomes the admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Settlement token mint, must use 6 decimals
    #[account(
        constraint = collateral_mint.decimals == SETTLEMENT_DECIMALS @ EngineError::AccountMismatch,
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        resolver: Pubkey,
        treasury: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        let fees = FeeSchedule::default();
        fees.validate()?;

        self.config.set_inner(Config {
            admin: self.admin.key(),
            resolver,
            treasury,
            collateral_mint: self.collateral_mint.key(),
            fees,
            virtual_reserve: DEFAULT_VIRTUAL_RESERVE,
            market_count: 0,
            paused: false,
            bump: bumps.config,
        });

        msg!("Protocol initialized!");
        msg!("Admin: {}", self.admin.key());
        msg!("Resolver: {}", resolver);
        msg!("Fee: {} bps", fees.total_bps);

        emit!(ProtocolInitialized {
            admin: self.admin.key(),
            resolver,
            treasury,
            collateral_mint: self.collateral_mint.key(),
        });

        Ok(())
    }
}
