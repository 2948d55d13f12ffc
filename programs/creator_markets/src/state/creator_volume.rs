//! Creator Volume Record
//!
//! Tracks how much real volume a creator's markets have attracted. Crossing
//! the unlock threshold flips a one-way latch that opens the creator's share
//! curve for trading. The latch never resets.

use anchor_lang::prelude::*;

use crate::constants::UNLOCK_VOLUME_THRESHOLD;
use crate::errors::EngineError;

/// Per-creator volume account
///
/// Seeds: ["creator_volume", creator]
#[account]
#[derive(InitSpace)]
pub struct CreatorVolume {
    pub creator: Pubkey,

    /// Gross bet volume across all of the creator's markets
    pub total_volume: u64,

    pub markets_created: u32,

    pub unlocked: bool,

    /// Timestamp of the bet that crossed the threshold, 0 while locked
    pub unlocked_at: i64,

    pub bump: u8,
}

/// Progress snapshot returned to clients
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnlockProgress {
    pub total_volume: u64,
    pub threshold: u64,
    pub remaining: u64,
    pub unlocked: bool,
    pub unlocked_at: i64,
}

impl CreatorVolume {
    pub const SEED: &'static [u8] = crate::constants::CREATOR_VOLUME_SEED;

    /// Add `amount` of volume. Returns true only for the call that unlocks.
    pub fn record_volume(&mut self, amount: u64, now: i64) -> Result<bool> {
        require!(amount > 0, EngineError::AmountCannotBeZero);

        self.total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;

        if !self.unlocked && self.total_volume >= UNLOCK_VOLUME_THRESHOLD {
            self.unlocked = true;
            self.unlocked_at = now;
            return Ok(true);
        }

        Ok(false)
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn remaining_to_unlock(&self) -> u64 {
        if self.unlocked {
            return 0;
        }
        UNLOCK_VOLUME_THRESHOLD.saturating_sub(self.total_volume)
    }

    /// Gate for creator share trading
    pub fn ensure_unlocked(&self) -> Result<()> {
        require!(self.unlocked, EngineError::CreatorSharesLocked);
        Ok(())
    }

    pub fn progress(&self) -> UnlockProgress {
        UnlockProgress {
            total_volume: self.total_volume,
            threshold: UNLOCK_VOLUME_THRESHOLD,
            remaining: self.remaining_to_unlock(),
            unlocked: self.unlocked,
            unlocked_at: self.unlocked_at,
        }
    }
}

/// Whitelisted external volume source
///
/// Seeds: ["volume_reporter", reporter]
#[account]
#[derive(InitSpace)]
pub struct VolumeReporter {
    pub reporter: Pubkey,
    pub active: bool,
    pub bump: u8,
}

impl VolumeReporter {
    pub const SEED: &'static [u8] = crate::constants::VOLUME_REPORTER_SEED;

    pub fn ensure_active(&self) -> Result<()> {
        require!(self.active, EngineError::Unauthorized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CreatorVolume {
        CreatorVolume {
            creator: Pubkey::new_unique(),
            total_volume: 0,
            markets_created: 1,
            unlocked: false,
            unlocked_at: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_progress_before_unlock() {
        let mut volume = record();
        assert!(!volume.record_volume(UNLOCK_VOLUME_THRESHOLD / 4, 10).unwrap());
        assert!(!volume.is_unlocked());
        assert_eq!(
            volume.remaining_to_unlock(),
            UNLOCK_VOLUME_THRESHOLD - UNLOCK_VOLUME_THRESHOLD / 4
        );
        assert_eq!(
            volume.ensure_unlocked().unwrap_err(),
            EngineError::CreatorSharesLocked.into()
        );
    }

    #[test]
    fn test_unlocks_exactly_at_threshold() {
        let mut volume = record();
        volume.record_volume(UNLOCK_VOLUME_THRESHOLD - 1, 10).unwrap();
        assert!(!volume.is_unlocked());
        assert_eq!(volume.remaining_to_unlock(), 1);

        assert!(volume.record_volume(1, 20).unwrap());
        assert!(volume.is_unlocked());
        assert_eq!(volume.unlocked_at, 20);
        assert_eq!(volume.remaining_to_unlock(), 0);
        volume.ensure_unlocked().unwrap();
    }

    #[test]
    fn test_unlock_is_permanent() {
        let mut volume = record();
        volume.record_volume(UNLOCK_VOLUME_THRESHOLD * 2, 100).unwrap();
        assert!(volume.is_unlocked());

        // Later volume neither re-fires the latch nor moves the timestamp
        for t in 101..110 {
            assert!(!volume.record_volume(1, t).unwrap());
            assert!(volume.is_unlocked());
        }
        assert_eq!(volume.unlocked_at, 100);

        let progress = volume.progress();
        assert!(progress.unlocked);
        assert_eq!(progress.remaining, 0);
        assert_eq!(progress.threshold, UNLOCK_VOLUME_THRESHOLD);
    }

    #[test]
    fn test_zero_volume_rejected() {
        let mut volume = record();
        assert_eq!(
            volume.record_volume(0, 1).unwrap_err(),
            EngineError::AmountCannotBeZero.into()
        );
    }

    #[test]
    fn test_revoked_reporter_unauthorized() {
        let mut entry = VolumeReporter {
            reporter: Pubkey::new_unique(),
            active: true,
            bump: 254,
        };
        assert!(entry.ensure_active().is_ok());

        entry.active = false;
        assert_eq!(
            entry.ensure_active().unwrap_err(),
            EngineError::Unauthorized.into()
        );
    }
}
