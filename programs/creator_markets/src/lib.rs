//! # Creator Markets
//!
//! Multi-outcome prediction markets where every bet builds its creator's
//! track record, and that record gates a creator share curve.
//!
//! ## Overview
//!
//! - Markets price outcomes with virtual liquidity, so the first bet does
//!   not swing the odds to 100%.
//! - Winners split the full pool pro-rata once the resolver settles a market.
//! - Every bet counts toward its creator's lifetime volume. Past the unlock
//!   threshold, anyone can buy the creator's shares on a quadratic curve.
//! - Fees go to the platform treasury, the creator and the creator's
//!   dividend vault.
//!

use anchor_lang::prelude::*;

pub mod amm;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use amm::*;
pub use instructions::*;
pub use state::{CurveQuote, MarketParams, UnlockProgress};

declare_id!("7ndUZ7rDtvMZfZHH2HfnkMvHWwAzHWHxPsLX3PZUZKBE");

#[program]
pub mod creator_markets {
    use super::*;

    /// Create the global config and pin the collateral mint
    pub fn initialize(ctx: Context<Initialize>, resolver: Pubkey, treasury: Pubkey) -> Result<()> {
        ctx.accounts.initialize(resolver, treasury, &ctx.bumps)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, update: ConfigUpdate) -> Result<()> {
        ctx.accounts.update_config(update)
    }

    /// Whitelist an external volume reporter
    pub fn authorize_reporter(ctx: Context<SetReporter>, reporter: Pubkey) -> Result<()> {
        ctx.accounts.set_reporter(reporter, true, &ctx.bumps)
    }

    pub fn revoke_reporter(ctx: Context<SetReporter>, reporter: Pubkey) -> Result<()> {
        ctx.accounts.set_reporter(reporter, false, &ctx.bumps)
    }

    pub fn create_market(ctx: Context<CreateMarket>, params: MarketParams) -> Result<()> {
        ctx.accounts.create_market(params, &ctx.bumps)
    }

    /// Bet on one outcome. Returns the shares credited.
    pub fn place_bet(
        ctx: Context<PlaceBet>,
        market_id: u64,
        outcome: u8,
        amount: u64,
        min_shares_out: u64,
    ) -> Result<u64> {
        ctx.accounts
            .place_bet(market_id, outcome, amount, min_shares_out, &ctx.bumps)
    }

    pub fn pause_market(ctx: Context<ManageMarket>) -> Result<()> {
        ctx.accounts.set_paused(true)
    }

    pub fn unpause_market(ctx: Context<ManageMarket>) -> Result<()> {
        ctx.accounts.set_paused(false)
    }

    /// Void the market. Bettors recover their net deposits via `claim_refund`.
    pub fn cancel_market(ctx: Context<ManageMarket>) -> Result<()> {
        ctx.accounts.cancel_market()
    }

    pub fn resolve_market(ctx: Context<ResolveMarket>, winning_outcome: u8) -> Result<()> {
        ctx.accounts.resolve_market(winning_outcome)
    }

    pub fn claim_winnings(ctx: Context<ClaimPayout>) -> Result<u64> {
        ctx.accounts.claim_winnings()
    }

    pub fn claim_refund(ctx: Context<ClaimPayout>) -> Result<u64> {
        ctx.accounts.claim_refund()
    }

    /// Buy creator shares. Fails until the creator is unlocked.
    pub fn buy_creator_shares(
        ctx: Context<BuyCreatorShares>,
        creator: Pubkey,
        amount: u64,
        max_total_cost: u64,
    ) -> Result<u64> {
        ctx.accounts
            .buy_creator_shares(creator, amount, max_total_cost, &ctx.bumps)
    }

    pub fn sell_creator_shares(
        ctx: Context<SellCreatorShares>,
        creator: Pubkey,
        amount: u64,
        min_net_proceeds: u64,
    ) -> Result<u64> {
        ctx.accounts
            .sell_creator_shares(creator, amount, min_net_proceeds)
    }

    pub fn report_volume(ctx: Context<ReportVolume>, creator: Pubkey, amount: u64) -> Result<()> {
        ctx.accounts.report_volume(creator, amount, &ctx.bumps)
    }

    // Views

    pub fn market_probabilities(ctx: Context<MarketView>) -> Result<Vec<u64>> {
        ctx.accounts.market_probabilities()
    }

    pub fn unlock_progress(ctx: Context<UnlockView>) -> Result<UnlockProgress> {
        Ok(ctx.accounts.unlock_progress())
    }

    pub fn curve_quote(
        ctx: Context<CurveView>,
        creator: Pubkey,
        amount: u64,
        is_buy: bool,
    ) -> Result<CurveQuote> {
        ctx.accounts.curve_quote(creator, amount, is_buy)
    }
}
