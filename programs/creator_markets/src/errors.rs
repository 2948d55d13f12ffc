use anchor_lang::prelude::*;

#[error_code]
pub enum EngineError {
    #[msg("Markets need between 2 and 4 outcomes")]
    InvalidOutcomeCount,
    #[msg("Market duration must be between 6 hours and 7 days")]
    InvalidDuration,
    #[msg("Market does not exist")]
    MarketDoesNotExist,
    #[msg("Outcome index out of range")]
    InvalidOutcome,
    #[msg("Amount cannot be zero")]
    AmountCannotBeZero,
    #[msg("Market has ended")]
    MarketEnded,
    #[msg("Market is paused")]
    MarketIsPaused,
    #[msg("Market has not ended yet")]
    MarketNotEnded,
    #[msg("Market is already resolved or cancelled")]
    MarketAlreadyResolved,
    #[msg("Market is not resolved")]
    MarketNotResolved,
    #[msg("No winnings to claim")]
    NoWinningsToClaim,
    #[msg("Position already claimed")]
    AlreadyClaimed,
    #[msg("Supply would exceed the maximum")]
    SupplyExceedsMaximum,
    #[msg("Cannot redeem more than the issued supply")]
    InsufficientSupply,
    #[msg("Caller is not authorized")]
    Unauthorized,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Outcome reserve cannot go negative")]
    InsufficientReserve,
    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,
    #[msg("Creator shares are locked until the volume threshold is met")]
    CreatorSharesLocked,
    #[msg("Holder balance is too low")]
    InsufficientBalance,
    #[msg("Market is not cancelled")]
    MarketNotCancelled,
    #[msg("Fee parts must sum to the total and stay under 10%")]
    InvalidFeeSchedule,
    #[msg("Protocol is paused")]
    ProtocolPaused,
    #[msg("Title exceeds maximum length")]
    TitleTooLong,
    #[msg("Outcome label exceeds maximum length")]
    OutcomeLabelTooLong,
    #[msg("Metadata exceeds maximum length")]
    MetadataTooLong,
    #[msg("Account does not belong to this market or creator")]
    AccountMismatch,
}
