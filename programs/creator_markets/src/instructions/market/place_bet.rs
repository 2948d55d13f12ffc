//! Betting
//!
//! A bet moves collateral in four legs:
//!
//! ```text
//! bettor ──net──────────▶ market vault      (credited to the outcome reserve)
//!        ──platform fee─▶ treasury
//!        ──creator fee──▶ market creator
//!        ──dividend fee─▶ creator's dividend vault
//! ```
//!
//! The gross amount is then reported as volume to the creator's record, which
//! may unlock their share curve.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::POSITION_SEED;
use crate::errors::EngineError;
use crate::events::{BetPlaced, CreatorUnlocked, VolumeRecorded};
use crate::instructions::move_collateral;
use crate::state::{Config, CreatorVolume, Market, UserPosition};

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub bettor: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    /// CHECK: Deserialized in the handler so a missing market surfaces as
    /// `MarketDoesNotExist`; the address is pinned by the seeds.
    #[account(
        mut,
        seeds = [Market::SEED, market_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = bettor,
        space = 8 + UserPosition::INIT_SPACE,
        seeds = [POSITION_SEED, market.key().as_ref(), bettor.key().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, UserPosition>>,

    /// Checked against the market's creator in the handler
    #[account(mut)]
    pub creator_volume: Box<Account<'info, CreatorVolume>>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = bettor,
    )]
    pub bettor_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub market_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = config.treasury,
    )]
    pub treasury_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = collateral_mint,
    )]
    pub creator_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub dividend_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn place_bet(
        &mut self,
        market_id: u64,
        outcome: u8,
        amount: u64,
        min_shares_out: u64,
        bumps: &PlaceBetBumps,
    ) -> Result<u64> {
        let clock = Clock::get()?;
        self.config.ensure_live()?;

        let market_info = self.market.to_account_info();
        let mut market = Market::load(&market_info)?;

        require_keys_eq!(
            self.creator_volume.creator,
            market.creator,
            EngineError::AccountMismatch
        );
        require_keys_eq!(
            self.creator_collateral.owner,
            market.creator,
            EngineError::AccountMismatch
        );
        require_keys_eq!(self.market_vault.key(), market.vault, EngineError::AccountMismatch);
        require_keys_eq!(
            self.dividend_vault.key(),
            market.dividend_vault,
            EngineError::AccountMismatch
        );

        if self.position.owner == Pubkey::default() {
            self.position.market = market_info.key();
            self.position.owner = self.bettor.key();
            self.position.bump = bumps.position;
        }

        let fill = market.place_bet(
            &mut self.position,
            outcome as usize,
            amount,
            &self.config.fees,
            clock.unix_timestamp,
        )?;
        fill.ensure_min_shares(min_shares_out)?;

        let unlocked = self
            .creator_volume
            .record_volume(amount, clock.unix_timestamp)?;

        market.store(&market_info)?;

        let bettor = self.bettor.to_account_info();
        for (to, leg) in [
            (self.market_vault.to_account_info(), fill.net_amount),
            (self.treasury_collateral.to_account_info(), fill.fees.platform),
            (self.creator_collateral.to_account_info(), fill.fees.creator),
            (self.dividend_vault.to_account_info(), fill.fees.dividend),
        ] {
            move_collateral(
                &self.token_program,
                &self.collateral_mint,
                self.bettor_collateral.to_account_info(),
                to,
                bettor.clone(),
                &[],
                leg,
            )?;
        }

        emit!(BetPlaced {
            market_id,
            bettor: self.bettor.key(),
            outcome,
            amount,
            net_amount: fill.net_amount,
            shares: fill.shares,
            platform_fee: fill.fees.platform,
            creator_fee: fill.fees.creator,
            dividend_fee: fill.fees.dividend,
        });

        emit!(VolumeRecorded {
            creator: market.creator,
            source: market_info.key(),
            amount,
            total_volume: self.creator_volume.total_volume,
        });

        if unlocked {
            msg!("Creator {} unlocked share trading", market.creator);
            emit!(CreatorUnlocked {
                creator: market.creator,
                total_volume: self.creator_volume.total_volume,
                timestamp: clock.unix_timestamp,
            });
        }

        Ok(fill.shares)
    }
}
