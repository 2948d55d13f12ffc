//! Position Settlement
//!
//! After resolution, winners draw their share of the whole real pool:
//!
//! ```text
//! payout = remaining_pool × user_winning_shares / unclaimed_winning_shares
//! ```
//!
//! For example:
//! - 1000 tokens bet on outcome 0, 500 on outcome 1 (985 + 492.5 after fees)
//! - Outcome 0 wins and its only bettor claims
//! - The bettor receives 1477.5 tokens; virtual liquidity pays nothing
//!
//! Cancelled markets refund every position's net deposits. So does a
//! resolved market whose winning outcome nobody backed.
//!
//! The market and position are written back before collateral leaves the
//! vault.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::POSITION_SEED;
use crate::events::{RefundClaimed, WinningsClaimed};
use crate::instructions::move_collateral;
use crate::state::{Config, Market, UserPosition};

#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    pub claimant: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// CHECK: Deserialized in the handler so a claimant without a position
    /// gets `NoWinningsToClaim`; the address is pinned by the seeds.
    #[account(
        mut,
        seeds = [POSITION_SEED, market.key().as_ref(), claimant.key().as_ref()],
        bump,
    )]
    pub position: UncheckedAccount<'info>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = market.vault,
    )]
    pub market_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = claimant,
    )]
    pub claimant_collateral: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ClaimPayout<'info> {
    pub fn claim_winnings(&mut self) -> Result<u64> {
        self.market.ensure_claimable()?;
        let mut position = UserPosition::load(&self.position.to_account_info())?;

        let winner = self.market.winning_outcome.unwrap_or_default() as usize;
        let winning_shares = position.read_user_shares(winner);

        let payout = self.market.settle_claim(&mut position)?;
        self.checkpoint_and_pay(&position, payout)?;

        emit!(WinningsClaimed {
            market_id: self.market.id,
            claimant: self.claimant.key(),
            winning_shares,
            payout,
        });

        Ok(payout)
    }

    pub fn claim_refund(&mut self) -> Result<u64> {
        self.market.ensure_refundable()?;
        let mut position = UserPosition::load(&self.position.to_account_info())?;

        let refund = self.market.settle_refund(&mut position)?;
        self.checkpoint_and_pay(&position, refund)?;

        emit!(RefundClaimed {
            market_id: self.market.id,
            claimant: self.claimant.key(),
            refund,
        });

        Ok(refund)
    }

    fn checkpoint_and_pay(&self, position: &UserPosition, amount: u64) -> Result<()> {
        self.market.exit(&crate::ID)?;
        position.store(&self.position.to_account_info())?;

        let market_id = self.market.id.to_le_bytes();
        let market_seeds = &[Market::SEED, market_id.as_ref(), &[self.market.bump]];
        let market_signer = &[&market_seeds[..]];

        move_collateral(
            &self.token_program,
            &self.collateral_mint,
            self.market_vault.to_account_info(),
            self.claimant_collateral.to_account_info(),
            self.market.to_account_info(),
            market_signer,
            amount,
        )
    }
}
