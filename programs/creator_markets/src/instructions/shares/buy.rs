//! Creator Share Issuance
//!
//! Mints creator shares along the quadratic curve. Only possible once the
//! creator's markets have crossed the unlock volume threshold.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{CURVE_VAULT_SEED, DIVIDEND_VAULT_SEED, SHARE_HOLDING_SEED};
use crate::errors::EngineError;
use crate::events::SharesBought;
use crate::instructions::move_collateral;
use crate::state::{Config, CreatorShares, CreatorVolume, ShareHolding};

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct BuyCreatorShares<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        seeds = [CreatorVolume::SEED, creator.as_ref()],
        bump = creator_volume.bump,
    )]
    pub creator_volume: Box<Account<'info, CreatorVolume>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + CreatorShares::INIT_SPACE,
        seeds = [CreatorShares::SEED, creator.as_ref()],
        bump,
    )]
    pub creator_shares: Box<Account<'info, CreatorShares>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + ShareHolding::INIT_SPACE,
        seeds = [SHARE_HOLDING_SEED, creator.as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub holding: Box<Account<'info, ShareHolding>>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = buyer,
    )]
    pub buyer_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [CURVE_VAULT_SEED, creator.as_ref()],
        bump,
    )]
    pub curve_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [DIVIDEND_VAULT_SEED, creator.as_ref()],
        bump,
    )]
    pub dividend_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = config.treasury,
    )]
    pub treasury_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        constraint = creator_collateral.owner == creator @ EngineError::AccountMismatch,
    )]
    pub creator_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> BuyCreatorShares<'info> {
    pub fn buy_creator_shares(
        &mut self,
        creator: Pubkey,
        amount: u64,
        max_total_cost: u64,
        bumps: &BuyCreatorSharesBumps,
    ) -> Result<u64> {
        self.config.ensure_live()?;

        // First issuance creates the ledger
        if self.creator_shares.creator == Pubkey::default() {
            self.creator_shares.creator = creator;
            self.creator_shares.bump = bumps.creator_shares;
        }
        if self.holding.holder == Pubkey::default() {
            self.holding.creator = creator;
            self.holding.holder = self.buyer.key();
            self.holding.bump = bumps.holding;
        }

        let quote = self.creator_shares.buy(
            &self.creator_volume,
            &mut self.holding,
            amount,
            &self.config.fees,
        )?;
        quote.ensure_max_cost(max_total_cost)?;

        let buyer = self.buyer.to_account_info();
        for (to, leg) in [
            (self.curve_vault.to_account_info(), quote.curve_amount),
            (self.treasury_collateral.to_account_info(), quote.fees.platform),
            (self.creator_collateral.to_account_info(), quote.fees.creator),
            (self.dividend_vault.to_account_info(), quote.fees.dividend),
        ] {
            move_collateral(
                &self.token_program,
                &self.collateral_mint,
                self.buyer_collateral.to_account_info(),
                to,
                buyer.clone(),
                &[],
                leg,
            )?;
        }

        emit!(SharesBought {
            creator,
            buyer: self.buyer.key(),
            shares: amount,
            cost: quote.curve_amount,
            fee: quote.fees.total_fee(),
            supply_after: quote.supply_after,
        });

        Ok(quote.trader_amount)
    }
}
