//! External Volume Reporting
//!
//! Bets placed through this program record volume directly. Whitelisted
//! reporters use this instruction to credit volume from other market venues.

use anchor_lang::prelude::*;

use crate::events::{CreatorUnlocked, VolumeRecorded};
use crate::state::{CreatorVolume, VolumeReporter};

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct ReportVolume<'info> {
    #[account(mut)]
    pub reporter: Signer<'info>,

    #[account(
        seeds = [VolumeReporter::SEED, reporter.key().as_ref()],
        bump = reporter_entry.bump,
    )]
    pub reporter_entry: Account<'info, VolumeReporter>,

    #[account(
        init_if_needed,
        payer = reporter,
        space = 8 + CreatorVolume::INIT_SPACE,
        seeds = [CreatorVolume::SEED, creator.as_ref()],
        bump,
    )]
    pub creator_volume: Account<'info, CreatorVolume>,

    pub system_program: Program<'info, System>,
}

impl<'info> ReportVolume<'info> {
    pub fn report_volume(
        &mut self,
        creator: Pubkey,
        amount: u64,
        bumps: &ReportVolumeBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        self.reporter_entry.ensure_active()?;

        let volume = &mut self.creator_volume;
        if volume.creator == Pubkey::default() {
            volume.creator = creator;
            volume.bump = bumps.creator_volume;
        }

        let unlocked = volume.record_volume(amount, clock.unix_timestamp)?;

        emit!(VolumeRecorded {
            creator,
            source: self.reporter.key(),
            amount,
            total_volume: volume.total_volume,
        });

        if unlocked {
            msg!("Creator {} unlocked share trading", creator);
            emit!(CreatorUnlocked {
                creator,
                total_volume: volume.total_volume,
                timestamp: clock.unix_timestamp,
            });
        }

        Ok(())
    }
}
