//! Prediction Market State
//!
//! Each market is a time-bounded question with 2 to 4 outcomes, priced with
//! virtual liquidity and settled pro-rata from its real reserves.
//!
//! ## Lifecycle
//!
//! ```text
//!            pause             resolve (after end time)
//!   Active ─────────▶ Paused ─────────────────────────▶ Resolved
//!     ▲  ◀───────────   │
//!     │    unpause      │ cancel
//!     │                 ▼
//!     └──── cancel ──▶ Cancelled
//! ```
//!
//! `Resolved` and `Cancelled` are terminal.

use anchor_lang::prelude::*;

use crate::amm::{probabilities_bps, shares_for_bet, FeeSchedule, FeeSplit};
use crate::constants::{
    MAX_MARKET_DURATION, MAX_METADATA_LEN, MAX_OUTCOMES, MAX_OUTCOME_LABEL_LEN, MAX_TITLE_LEN,
    MIN_MARKET_DURATION, MIN_OUTCOMES,
};
use crate::errors::EngineError;
use crate::state::{ReserveLedger, UserPosition};

/// Individual prediction market account
///
/// Seeds: ["market", id.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug)]
pub struct Market {
    /// Sequential market identifier
    pub id: u64,

    /// Creator credited with this market's volume
    pub creator: Pubkey,

    /// Example: "Will the next video pass 1M views in a week?"
    #[max_len(128)]
    pub title: String,

    /// Outcome labels, in index order
    #[max_len(4, 64)]
    pub outcomes: Vec<String>,

    /// Free-form metadata (URI, category, ...)
    #[max_len(256)]
    pub metadata: String,

    pub created_at: i64,

    /// Always `created_at + duration`
    pub end_time: i64,

    pub status: MarketStatus,

    /// Only set once resolved
    pub winning_outcome: Option<u8>,

    /// Virtual reserve per outcome, fixed at creation
    pub virtual_reserve: u64,

    pub ledger: ReserveLedger,

    /// Gross amount bet over the market's life
    pub total_volume: u64,

    /// Real pool snapshot taken at resolution
    pub resolved_pool: u64,

    /// Winning shares not yet claimed
    pub unclaimed_winning_shares: u64,

    /// Collateral vault holding real reserves
    pub vault: Pubkey,

    /// Creator's shareholder dividend vault
    pub dividend_vault: Pubkey,

    pub bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = crate::constants::MARKET_SEED;

    /// Read a market from a raw account, failing with `MarketDoesNotExist`
    /// when nothing was ever created at that address.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            EngineError::MarketDoesNotExist
        );
        let data = info.try_borrow_data()?;
        Market::try_deserialize(&mut &data[..])
    }

    /// Write the market back to its account
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

/// Market lifecycle status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum MarketStatus {
    /// Open for betting until end time
    #[default]
    Active,
    /// Betting halted by the admin
    Paused,
    Resolved,
    Cancelled,
}

impl MarketStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MarketStatus::Resolved | MarketStatus::Cancelled)
    }
}

/// Creation arguments
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarketParams {
    pub title: String,
    pub outcomes: Vec<String>,
    /// Seconds from creation to end time
    pub duration: i64,
    pub metadata: String,
}

impl MarketParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            (MIN_OUTCOMES..=MAX_OUTCOMES).contains(&self.outcomes.len()),
            EngineError::InvalidOutcomeCount
        );
        require!(
            (MIN_MARKET_DURATION..=MAX_MARKET_DURATION).contains(&self.duration),
            EngineError::InvalidDuration
        );
        require!(self.title.len() <= MAX_TITLE_LEN, EngineError::TitleTooLong);
        require!(
            self.outcomes
                .iter()
                .all(|label| label.len() <= MAX_OUTCOME_LABEL_LEN),
            EngineError::OutcomeLabelTooLong
        );
        require!(
            self.metadata.len() <= MAX_METADATA_LEN,
            EngineError::MetadataTooLong
        );
        Ok(())
    }
}

/// What a bet did to the books
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetFill {
    pub fees: FeeSplit,
    /// Credited to the outcome reserve
    pub net_amount: u64,
    pub shares: u64,
}

impl BetFill {
    pub fn ensure_min_shares(&self, min_shares_out: u64) -> Result<()> {
        require!(
            self.shares >= min_shares_out,
            EngineError::SlippageExceeded
        );
        Ok(())
    }
}

impl Market {
    /// Build a new active market. Vault addresses and bump are filled by the caller.
    pub fn open(
        id: u64,
        creator: Pubkey,
        params: MarketParams,
        virtual_reserve: u64,
        now: i64,
    ) -> Result<Self> {
        params.validate()?;
        let end_time = now
            .checked_add(params.duration)
            .ok_or(EngineError::MathOverflow)?;

        Ok(Self {
            id,
            creator,
            ledger: ReserveLedger::new(params.outcomes.len()),
            title: params.title,
            outcomes: params.outcomes,
            metadata: params.metadata,
            created_at: now,
            end_time,
            status: MarketStatus::Active,
            winning_outcome: None,
            virtual_reserve,
            total_volume: 0,
            resolved_pool: 0,
            unclaimed_winning_shares: 0,
            vault: Pubkey::default(),
            dividend_vault: Pubkey::default(),
            bump: 0,
        })
    }

    pub fn outcome_count(&self) -> usize {
        self.ledger.outcome_count()
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.end_time
    }

    /// Live implied probabilities in bps
    pub fn probabilities(&self) -> Result<Vec<u64>> {
        probabilities_bps(self.ledger.reserves(), self.virtual_reserve)
    }

    /// Shares a post-fee `net_amount` on `outcome` would receive right now
    pub fn quote_shares(&self, outcome: usize, net_amount: u64) -> Result<u64> {
        shares_for_bet(
            self.ledger.reserves(),
            self.virtual_reserve,
            outcome,
            net_amount,
        )
    }

    /// Price a bet and apply it to the market and the bettor's position.
    ///
    /// Nothing is written unless every step succeeds.
    pub fn place_bet(
        &mut self,
        position: &mut UserPosition,
        outcome: usize,
        amount: u64,
        fees: &FeeSchedule,
        now: i64,
    ) -> Result<BetFill> {
        self.ledger.check_outcome(outcome)?;
        require!(amount > 0, EngineError::AmountCannotBeZero);
        require!(
            !self.status.is_terminal() && !self.has_ended(now),
            EngineError::MarketEnded
        );
        require!(
            self.status != MarketStatus::Paused,
            EngineError::MarketIsPaused
        );

        let split = fees.split(amount)?;
        let net_amount = split.net();
        let shares = self.quote_shares(outcome, net_amount)?;

        let mut ledger = self.ledger;
        ledger.credit_outcome_reserve(outcome, net_amount)?;
        ledger.credit_outcome_shares(outcome, shares)?;

        let total_volume = self
            .total_volume
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;

        let mut updated = position.clone();
        updated.credit_user_shares(outcome, shares)?;
        updated.record_deposit(outcome, net_amount)?;

        self.ledger = ledger;
        self.total_volume = total_volume;
        position.shares = updated.shares;
        position.deposited = updated.deposited;

        Ok(BetFill {
            fees: split,
            net_amount,
            shares,
        })
    }

    /// Returns false if the market was already paused
    pub fn pause(&mut self) -> Result<bool> {
        require!(
            !self.status.is_terminal(),
            EngineError::MarketAlreadyResolved
        );
        if self.status == MarketStatus::Paused {
            return Ok(false);
        }
        self.status = MarketStatus::Paused;
        Ok(true)
    }

    /// Returns false if the market was already active
    pub fn unpause(&mut self) -> Result<bool> {
        require!(
            !self.status.is_terminal(),
            EngineError::MarketAlreadyResolved
        );
        if self.status == MarketStatus::Active {
            return Ok(false);
        }
        self.status = MarketStatus::Active;
        Ok(true)
    }

    pub fn cancel(&mut self) -> Result<()> {
        require!(
            !self.status.is_terminal(),
            EngineError::MarketAlreadyResolved
        );
        self.status = MarketStatus::Cancelled;
        Ok(())
    }

    /// Settle the market on `winning_outcome` and snapshot the real pool
    pub fn resolve(&mut self, winning_outcome: usize, now: i64) -> Result<()> {
        require!(
            !self.status.is_terminal(),
            EngineError::MarketAlreadyResolved
        );
        require!(self.has_ended(now), EngineError::MarketNotEnded);
        self.ledger.check_outcome(winning_outcome)?;

        self.status = MarketStatus::Resolved;
        self.winning_outcome = Some(winning_outcome as u8);
        self.resolved_pool = self.ledger.total_real_reserves();
        self.unclaimed_winning_shares = self.ledger.outcome_shares[winning_outcome];

        Ok(())
    }

    /// Refunds are open on cancelled markets, and on resolved markets where
    /// no shares were ever issued on the winning outcome.
    pub fn refunds_open(&self) -> bool {
        match self.status {
            MarketStatus::Cancelled => true,
            MarketStatus::Resolved => self
                .winning_outcome
                .map_or(false, |winner| self.ledger.outcome_shares[winner as usize] == 0),
            _ => false,
        }
    }

    pub fn ensure_claimable(&self) -> Result<()> {
        require!(
            self.status == MarketStatus::Resolved,
            EngineError::MarketNotResolved
        );
        Ok(())
    }

    pub fn ensure_refundable(&self) -> Result<()> {
        require!(self.refunds_open(), EngineError::MarketNotCancelled);
        Ok(())
    }

    /// Pay a winning position its share of the whole real pool.
    ///
    /// ```text
    /// payout = remaining_pool × user_shares / unclaimed_winning_shares
    /// ```
    ///
    /// The last claimant holds all unclaimed shares and so receives the exact
    /// remainder; total payouts equal the real pool with no rounding dust.
    pub fn settle_claim(&mut self, position: &mut UserPosition) -> Result<u64> {
        self.ensure_claimable()?;
        let winner = self
            .winning_outcome
            .ok_or(EngineError::MarketNotResolved)? as usize;
        require!(!position.claimed, EngineError::AlreadyClaimed);

        let user_shares = position.read_user_shares(winner);
        require!(user_shares > 0, EngineError::NoWinningsToClaim);
        require!(
            user_shares <= self.unclaimed_winning_shares,
            EngineError::InsufficientReserve
        );

        let remaining_pool = self.ledger.total_real_reserves();
        let payout = if user_shares == self.unclaimed_winning_shares {
            remaining_pool
        } else {
            let share = (remaining_pool as u128)
                .checked_mul(user_shares as u128)
                .ok_or(EngineError::MathOverflow)?
                / self.unclaimed_winning_shares as u128;
            share as u64
        };

        let mut ledger = self.ledger;
        ledger.debit_pool(payout)?;
        position.mark_claimed()?;

        self.ledger = ledger;
        self.unclaimed_winning_shares -= user_shares;

        Ok(payout)
    }

    /// Return a position's net deposits once refunds are open
    pub fn settle_refund(&mut self, position: &mut UserPosition) -> Result<u64> {
        self.ensure_refundable()?;
        require!(!position.claimed, EngineError::AlreadyClaimed);

        let refund = position.total_deposited();
        require!(refund > 0, EngineError::NoWinningsToClaim);

        let mut ledger = self.ledger;
        for (outcome, &deposited) in position.deposited.iter().enumerate() {
            if deposited > 0 {
                ledger.debit_outcome_reserve(outcome, deposited)?;
            }
        }
        position.mark_claimed()?;
        self.ledger = ledger;

        Ok(refund)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_VIRTUAL_RESERVE;

    const HOUR: i64 = 60 * 60;
    const DAY: i64 = 24 * HOUR;
    const START: i64 = 1_700_000_000;
    const TOKEN: u64 = 1_000_000;

    fn params(outcomes: usize, duration: i64) -> MarketParams {
        MarketParams {
            title: "Will the stream hit 10k viewers?".to_string(),
            outcomes: (0..outcomes).map(|i| format!("Outcome {i}")).collect(),
            duration,
            metadata: String::new(),
        }
    }

    fn binary_market() -> Market {
        Market::open(
            0,
            Pubkey::new_unique(),
            params(2, DAY),
            DEFAULT_VIRTUAL_RESERVE,
            START,
        )
        .unwrap()
    }

    fn position() -> UserPosition {
        UserPosition {
            market: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            shares: [0; 4],
            deposited: [0; 4],
            claimed: false,
            bump: 0,
        }
    }

    #[test]
    fn test_open_sets_end_time() {
        let market = binary_market();
        assert_eq!(market.status, MarketStatus::Active);
        assert_eq!(market.end_time, START + DAY);
        assert_eq!(market.outcome_count(), 2);
        assert_eq!(market.probabilities().unwrap(), vec![5_000, 5_000]);
    }

    #[test]
    fn test_outcome_count_bounds() {
        for count in [0, 1, 5] {
            let err = Market::open(0, Pubkey::new_unique(), params(count, DAY), 1, START)
                .unwrap_err();
            assert_eq!(err, EngineError::InvalidOutcomeCount.into());
        }
        for count in 2..=4 {
            assert!(Market::open(0, Pubkey::new_unique(), params(count, DAY), 1, START).is_ok());
        }
    }

    #[test]
    fn test_duration_bounds_inclusive() {
        assert!(Market::open(0, Pubkey::new_unique(), params(2, 6 * HOUR), 1, START).is_ok());
        assert!(Market::open(0, Pubkey::new_unique(), params(2, 7 * DAY), 1, START).is_ok());
        for duration in [6 * HOUR - 1, 7 * DAY + 1, 0, -DAY] {
            let err = Market::open(0, Pubkey::new_unique(), params(2, duration), 1, START)
                .unwrap_err();
            assert_eq!(err, EngineError::InvalidDuration.into());
        }
    }

    #[test]
    fn test_long_strings_rejected() {
        let mut long_title = params(2, DAY);
        long_title.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            long_title.validate().unwrap_err(),
            EngineError::TitleTooLong.into()
        );

        let mut long_label = params(2, DAY);
        long_label.outcomes[1] = "y".repeat(MAX_OUTCOME_LABEL_LEN + 1);
        assert_eq!(
            long_label.validate().unwrap_err(),
            EngineError::OutcomeLabelTooLong.into()
        );

        let mut long_metadata = params(2, DAY);
        long_metadata.metadata = "z".repeat(MAX_METADATA_LEN + 1);
        assert_eq!(
            long_metadata.validate().unwrap_err(),
            EngineError::MetadataTooLong.into()
        );
    }

    #[test]
    fn test_bet_credits_net_amount_and_grants_shares() {
        let mut market = binary_market();
        let mut bettor = position();

        let fill = market
            .place_bet(&mut bettor, 0, 100 * TOKEN, &FeeSchedule::default(), START)
            .unwrap();

        assert_eq!(fill.net_amount, 98_500_000);
        assert_eq!(fill.fees.total_fee(), 1_500_000);
        // Even book: 2x shares
        assert_eq!(fill.shares, 197_000_000);
        assert_eq!(market.ledger.reserves(), &[98_500_000, 0]);
        assert_eq!(market.total_volume, 100 * TOKEN);
        assert_eq!(bettor.read_user_shares(0), 197_000_000);
        assert_eq!(bettor.deposited[0], 98_500_000);

        let odds = market.probabilities().unwrap();
        assert!(odds[0] > 5_000 && odds[0] < 10_000);
    }

    #[test]
    fn test_bet_rejections() {
        let fees = FeeSchedule::default();
        let mut market = binary_market();
        let mut bettor = position();

        assert_eq!(
            market.place_bet(&mut bettor, 2, TOKEN, &fees, START).unwrap_err(),
            EngineError::InvalidOutcome.into()
        );
        assert_eq!(
            market.place_bet(&mut bettor, 0, 0, &fees, START).unwrap_err(),
            EngineError::AmountCannotBeZero.into()
        );
        assert_eq!(
            market
                .place_bet(&mut bettor, 0, TOKEN, &fees, market.end_time)
                .unwrap_err(),
            EngineError::MarketEnded.into()
        );

        market.pause().unwrap();
        assert_eq!(
            market.place_bet(&mut bettor, 0, TOKEN, &fees, START).unwrap_err(),
            EngineError::MarketIsPaused.into()
        );

        // Nothing leaked into the books
        assert_eq!(market.ledger.total_real_reserves(), 0);
        assert_eq!(market.total_volume, 0);
        assert_eq!(bettor.total_deposited(), 0);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut market = binary_market();
        assert!(market.pause().unwrap());
        assert!(!market.pause().unwrap());
        assert!(market.unpause().unwrap());
        assert!(!market.unpause().unwrap());
        assert_eq!(market.status, MarketStatus::Active);
    }

    #[test]
    fn test_resolve_guards() {
        let mut market = binary_market();
        assert_eq!(
            market.resolve(0, market.end_time - 1).unwrap_err(),
            EngineError::MarketNotEnded.into()
        );
        assert_eq!(
            market.resolve(2, market.end_time).unwrap_err(),
            EngineError::InvalidOutcome.into()
        );

        market.pause().unwrap();
        market.resolve(1, market.end_time).unwrap();
        assert_eq!(market.status, MarketStatus::Resolved);
        assert_eq!(market.winning_outcome, Some(1));

        assert_eq!(
            market.resolve(0, market.end_time + 1).unwrap_err(),
            EngineError::MarketAlreadyResolved.into()
        );
        assert_eq!(
            market.pause().unwrap_err(),
            EngineError::MarketAlreadyResolved.into()
        );
        assert_eq!(
            market.cancel().unwrap_err(),
            EngineError::MarketAlreadyResolved.into()
        );
    }

    #[test]
    fn test_winner_takes_whole_real_pool() {
        let fees = FeeSchedule::default();
        let mut market = binary_market();
        let mut yes = position();
        let mut no = position();

        market.place_bet(&mut yes, 0, 1_000 * TOKEN, &fees, START).unwrap();
        market.place_bet(&mut no, 1, 500 * TOKEN, &fees, START + 1).unwrap();
        market.resolve(0, market.end_time).unwrap();

        let expected = (1_000 * TOKEN - 15 * TOKEN) + (500 * TOKEN - 7_500_000);
        assert_eq!(market.resolved_pool, expected);

        assert_eq!(
            market.settle_claim(&mut no).unwrap_err(),
            EngineError::NoWinningsToClaim.into()
        );
        assert_eq!(market.settle_claim(&mut yes).unwrap(), expected);
        assert_eq!(market.ledger.total_real_reserves(), 0);
        assert_eq!(
            market.settle_claim(&mut yes).unwrap_err(),
            EngineError::AlreadyClaimed.into()
        );
    }

    #[test]
    fn test_claims_sum_to_pool_exactly() {
        let fees = FeeSchedule::default();
        let mut market = Market::open(
            7,
            Pubkey::new_unique(),
            params(3, 2 * DAY),
            DEFAULT_VIRTUAL_RESERVE,
            START,
        )
        .unwrap();

        let mut bettors: Vec<UserPosition> = (0..5).map(|_| position()).collect();
        // (bettor, outcome, amount)
        let bets = [
            (0, 0, 333_333_333),
            (1, 2, 10_000_001),
            (2, 2, 777_777),
            (3, 1, 42_424_242),
            (4, 2, 1_000_003),
        ];
        for (i, (who, outcome, amount)) in bets.iter().enumerate() {
            market
                .place_bet(&mut bettors[*who], *outcome, *amount, &fees, START + i as i64)
                .unwrap();
        }
        market.resolve(2, market.end_time + 10).unwrap();
        let pool = market.resolved_pool;

        let mut paid = 0;
        for bettor in bettors.iter_mut() {
            if let Ok(payout) = market.settle_claim(bettor) {
                paid += payout;
            }
        }
        assert_eq!(paid, pool);
        assert_eq!(market.unclaimed_winning_shares, 0);
        assert_eq!(market.ledger.total_real_reserves(), 0);
    }

    #[test]
    fn test_claim_requires_resolution() {
        let mut market = binary_market();
        let mut bettor = position();
        market
            .place_bet(&mut bettor, 0, TOKEN, &FeeSchedule::default(), START)
            .unwrap();
        assert_eq!(
            market.settle_claim(&mut bettor).unwrap_err(),
            EngineError::MarketNotResolved.into()
        );
    }

    #[test]
    fn test_cancelled_market_refunds_deposits() {
        let fees = FeeSchedule::default();
        let mut market = binary_market();
        let mut bettor = position();
        let mut bystander = position();

        market.place_bet(&mut bettor, 0, 40 * TOKEN, &fees, START).unwrap();
        market.place_bet(&mut bettor, 1, 10 * TOKEN, &fees, START).unwrap();

        assert_eq!(
            market.settle_refund(&mut bettor).unwrap_err(),
            EngineError::MarketNotCancelled.into()
        );

        market.cancel().unwrap();
        assert_eq!(
            market.place_bet(&mut bettor, 0, TOKEN, &fees, START).unwrap_err(),
            EngineError::MarketEnded.into()
        );
        assert_eq!(market.settle_refund(&mut bettor).unwrap(), 49_250_000);
        assert_eq!(market.ledger.total_real_reserves(), 0);
        assert_eq!(
            market.settle_refund(&mut bettor).unwrap_err(),
            EngineError::AlreadyClaimed.into()
        );
        assert_eq!(
            market.settle_refund(&mut bystander).unwrap_err(),
            EngineError::NoWinningsToClaim.into()
        );
    }

    #[test]
    fn test_min_shares_out_bounds_the_fill() {
        let mut market = binary_market();
        let mut bettor = position();
        let fill = market
            .place_bet(&mut bettor, 0, 100 * TOKEN, &FeeSchedule::default(), START)
            .unwrap();

        assert!(fill.ensure_min_shares(0).is_ok());
        assert!(fill.ensure_min_shares(fill.shares).is_ok());
        assert_eq!(
            fill.ensure_min_shares(fill.shares + 1).unwrap_err(),
            EngineError::SlippageExceeded.into()
        );
    }

    #[test]
    fn test_unbacked_winner_opens_refunds() {
        let fees = FeeSchedule::default();
        let mut market = binary_market();
        let mut first = position();
        let mut second = position();

        market.place_bet(&mut first, 1, 1_000 * TOKEN, &fees, START).unwrap();
        market.place_bet(&mut second, 1, 500 * TOKEN, &fees, START).unwrap();
        market.resolve(0, market.end_time).unwrap();

        assert_eq!(market.unclaimed_winning_shares, 0);
        assert!(market.refunds_open());
        assert_eq!(
            market.settle_claim(&mut first).unwrap_err(),
            EngineError::NoWinningsToClaim.into()
        );

        let back_to_first = market.settle_refund(&mut first).unwrap();
        let back_to_second = market.settle_refund(&mut second).unwrap();
        assert_eq!(back_to_first, 985 * TOKEN);
        assert_eq!(back_to_second, 492_500_000);
        assert_eq!(back_to_first + back_to_second, market.resolved_pool);
        assert_eq!(market.ledger.total_real_reserves(), 0);

        assert_eq!(
            market.settle_refund(&mut second).unwrap_err(),
            EngineError::AlreadyClaimed.into()
        );
    }

    #[test]
    fn test_backed_winner_keeps_refunds_closed() {
        let fees = FeeSchedule::default();
        let mut market = binary_market();
        let mut winner = position();
        let mut loser = position();

        market.place_bet(&mut winner, 0, 10 * TOKEN, &fees, START).unwrap();
        market.place_bet(&mut loser, 1, 10 * TOKEN, &fees, START).unwrap();
        market.resolve(0, market.end_time).unwrap();
        assert!(!market.refunds_open());

        // Still closed after every winner has claimed
        market.settle_claim(&mut winner).unwrap();
        assert_eq!(market.unclaimed_winning_shares, 0);
        assert!(!market.refunds_open());
        assert_eq!(
            market.settle_refund(&mut loser).unwrap_err(),
            EngineError::MarketNotCancelled.into()
        );
    }

    #[test]
    fn test_load_missing_market() {
        let key = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &anchor_lang::system_program::ID,
            false,
            0,
        );
        assert_eq!(
            Market::load(&info).unwrap_err(),
            EngineError::MarketDoesNotExist.into()
        );
    }

    #[test]
    fn test_market_store_then_load() {
        let mut market = binary_market();
        let mut bettor = position();
        market
            .place_bet(&mut bettor, 1, 20 * TOKEN, &FeeSchedule::default(), START)
            .unwrap();

        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; 8 + Market::INIT_SPACE];
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        market.store(&info).unwrap();
        let loaded = Market::load(&info).unwrap();
        assert_eq!(loaded.title, market.title);
        assert_eq!(loaded.outcomes, market.outcomes);
        assert_eq!(loaded.ledger, market.ledger);
        assert_eq!(loaded.total_volume, 20 * TOKEN);
        assert_eq!(loaded.status, MarketStatus::Active);
    }
}
