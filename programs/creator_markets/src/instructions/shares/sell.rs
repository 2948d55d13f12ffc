//! Creator Share Redemption
//!
//! Burns creator shares back into the curve. Proceeds and all three fee legs
//! leave the curve vault, signed by the creator's share ledger PDA.
//!
//! Exits stay open while the protocol is paused.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{CURVE_VAULT_SEED, DIVIDEND_VAULT_SEED, SHARE_HOLDING_SEED};
use crate::errors::EngineError;
use crate::events::SharesSold;
use crate::instructions::move_collateral;
use crate::state::{Config, CreatorShares, CreatorVolume, ShareHolding};

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct SellCreatorShares<'info> {
    pub seller: Signer<'info>,

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
        mut,
        seeds = [CreatorShares::SEED, creator.as_ref()],
        bump = creator_shares.bump,
    )]
    pub creator_shares: Box<Account<'info, CreatorShares>>,

    #[account(
        mut,
        seeds = [SHARE_HOLDING_SEED, creator.as_ref(), seller.key().as_ref()],
        bump = holding.bump,
    )]
    pub holding: Box<Account<'info, ShareHolding>>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = seller,
    )]
    pub seller_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

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
}

impl<'info> SellCreatorShares<'info> {
    pub fn sell_creator_shares(
        &mut self,
        creator: Pubkey,
        amount: u64,
        min_net_proceeds: u64,
    ) -> Result<u64> {
        let quote = self.creator_shares.sell(
            &self.creator_volume,
            &mut self.holding,
            amount,
            &self.config.fees,
        )?;
        quote.ensure_min_proceeds(min_net_proceeds)?;

        self.creator_shares.exit(&crate::ID)?;
        self.holding.exit(&crate::ID)?;

        let shares_seeds = &[
            CreatorShares::SEED,
            creator.as_ref(),
            &[self.creator_shares.bump],
        ];
        let shares_signer = &[&shares_seeds[..]];

        let authority = self.creator_shares.to_account_info();
        for (to, leg) in [
            (self.seller_collateral.to_account_info(), quote.trader_amount),
            (self.treasury_collateral.to_account_info(), quote.fees.platform),
            (self.creator_collateral.to_account_info(), quote.fees.creator),
            (self.dividend_vault.to_account_info(), quote.fees.dividend),
        ] {
            move_collateral(
                &self.token_program,
                &self.collateral_mint,
                self.curve_vault.to_account_info(),
                to,
                authority.clone(),
                shares_signer,
                leg,
            )?;
        }

        emit!(SharesSold {
            creator,
            seller: self.seller.key(),
            shares: amount,
            proceeds: quote.curve_amount,
            fee: quote.fees.total_fee(),
            supply_after: quote.supply_after,
        });

        Ok(quote.trader_amount)
    }
}
