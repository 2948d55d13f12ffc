//! Volume Reporter Whitelist
//!
//! External market contexts (other programs, keepers) may feed volume into a
//! creator's record only while the admin keeps them whitelisted here.

use anchor_lang::prelude::*;

use crate::events::ReporterUpdated;
use crate::state::{Config, VolumeReporter};

#[derive(Accounts)]
#[instruction(reporter: Pubkey)]
pub struct SetReporter<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + VolumeReporter::INIT_SPACE,
        seeds = [VolumeReporter::SEED, reporter.as_ref()],
        bump,
    )]
    pub reporter_entry: Account<'info, VolumeReporter>,

    pub system_program: Program<'info, System>,
}

impl<'info> SetReporter<'info> {
    pub fn set_reporter(
        &mut self,
        reporter: Pubkey,
        active: bool,
        bumps: &SetReporterBumps,
    ) -> Result<()> {
        self.config.ensure_admin(self.admin.key())?;

        self.reporter_entry.set_inner(VolumeReporter {
            reporter,
            active,
            bump: bumps.reporter_entry,
        });

        emit!(ReporterUpdated { reporter, active });

        Ok(())
    }
}
