//! Permissionless Market Creation
//!
//! Any creator can open a market. The first market a creator opens also sets
//! up their volume record and the two vaults owned by their share ledger:
//!
//! - `curve_vault` backs the creator's bonding-curve supply
//! - `dividend_vault` collects the shareholder part of every fee

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{CURVE_VAULT_SEED, DIVIDEND_VAULT_SEED, MARKET_VAULT_SEED};
use crate::events::MarketCreated;
use crate::state::{Config, CreatorShares, CreatorVolume, Market, MarketParams};

#[derive(Accounts)]
pub struct CreateMarket<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = creator,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, config.market_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorVolume::INIT_SPACE,
        seeds = [CreatorVolume::SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_volume: Box<Account<'info, CreatorVolume>>,

    /// CHECK: PDA of the creator's share ledger, only used as vault authority
    #[account(
        seeds = [CreatorShares::SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_shares: UncheckedAccount<'info>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = market,
        token::token_program = token_program,
        seeds = [MARKET_VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = creator_shares,
        token::token_program = token_program,
        seeds = [DIVIDEND_VAULT_SEED, creator.key().as_ref()],
        bump,
    )]
    pub dividend_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = creator_shares,
        token::token_program = token_program,
        seeds = [CURVE_VAULT_SEED, creator.key().as_ref()],
        bump,
    )]
    pub curve_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        params: MarketParams,
        bumps: &CreateMarketBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        self.config.ensure_live()?;

        let market_id = self.config.next_market_id()?;
        let mut market = Market::open(
            market_id,
            self.creator.key(),
            params,
            self.config.virtual_reserve,
            clock.unix_timestamp,
        )?;
        market.vault = self.market_vault.key();
        market.dividend_vault = self.dividend_vault.key();
        market.bump = bumps.market;

        let outcome_count = market.outcome_count() as u8;
        let end_time = market.end_time;
        let virtual_reserve = market.virtual_reserve;
        self.market.set_inner(market);

        let volume = &mut self.creator_volume;
        if volume.creator == Pubkey::default() {
            volume.creator = self.creator.key();
            volume.bump = bumps.creator_volume;
        }
        volume.markets_created = volume.markets_created.saturating_add(1);

        emit!(MarketCreated {
            market_id,
            creator: self.creator.key(),
            outcome_count,
            end_time,
            virtual_reserve,
        });

        Ok(())
    }
}
