//! Global Protocol Configuration
//!
//! This account stores protocol-wide settings that apply to all markets
//! and creator curves.

use anchor_lang::prelude::*;

use crate::amm::FeeSchedule;
use crate::errors::EngineError;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Protocol administrator: pauses, cancels, whitelists reporters
    pub admin: Pubkey,

    /// Address authorized to resolve markets
    pub resolver: Pubkey,

    /// Owner of the token account receiving the platform fee
    pub treasury: Pubkey,

    /// Settlement token mint (6 decimals)
    pub collateral_mint: Pubkey,

    pub fees: FeeSchedule,

    /// Virtual reserve per outcome given to newly created markets
    pub virtual_reserve: u64,

    /// Total markets created (used as incrementing ID)
    pub market_count: u64,

    /// Blocks market creation, betting and share trading
    pub paused: bool,

    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = crate::constants::CONFIG_SEED;

    pub fn next_market_id(&mut self) -> Result<u64> {
        let id = self.market_count;
        self.market_count = id.checked_add(1).ok_or(EngineError::MathOverflow)?;
        Ok(id)
    }

    pub fn ensure_live(&self) -> Result<()> {
        require!(!self.paused, EngineError::ProtocolPaused);
        Ok(())
    }

    pub fn ensure_admin(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(signer, self.admin, EngineError::Unauthorized);
        Ok(())
    }

    pub fn ensure_resolver(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(signer, self.resolver, EngineError::Unauthorized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            admin: Pubkey::new_unique(),
            resolver: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            collateral_mint: Pubkey::new_unique(),
            fees: FeeSchedule::default(),
            virtual_reserve: 1,
            market_count: 0,
            paused: false,
            bump: 255,
        }
    }

    #[test]
    fn test_market_ids_are_sequential() {
        let mut config = config();
        assert_eq!(config.next_market_id().unwrap(), 0);
        assert_eq!(config.next_market_id().unwrap(), 1);
        assert_eq!(config.market_count, 2);

        config.market_count = u64::MAX;
        assert_eq!(
            config.next_market_id().unwrap_err(),
            EngineError::MathOverflow.into()
        );
    }

    #[test]
    fn test_pause_blocks_entry() {
        let mut config = config();
        assert!(config.ensure_live().is_ok());
        config.paused = true;
        assert_eq!(
            config.ensure_live().unwrap_err(),
            EngineError::ProtocolPaused.into()
        );
    }

    #[test]
    fn test_admin_and_resolver_roles_are_separate() {
        let config = config();
        let stranger = Pubkey::new_unique();

        assert!(config.ensure_admin(config.admin).is_ok());
        assert!(config.ensure_resolver(config.resolver).is_ok());

        for result in [
            config.ensure_admin(stranger),
            config.ensure_admin(config.resolver),
            config.ensure_resolver(stranger),
            config.ensure_resolver(config.admin),
        ] {
            assert_eq!(result.unwrap_err(), EngineError::Unauthorized.into());
        }
    }
}
