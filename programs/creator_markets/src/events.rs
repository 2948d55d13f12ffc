use anchor_lang::prelude::*;

use crate::amm::FeeSchedule;

// --- ADMIN ---
#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub resolver: Pubkey,
    pub treasury: Pubkey,
    pub collateral_mint: Pubkey,
}

#[event]
pub struct ConfigUpdated {
    pub resolver: Pubkey,
    pub treasury: Pubkey,
    pub fees: FeeSchedule,
    pub virtual_reserve: u64,
    pub paused: bool,
}

#[event]
pub struct ReporterUpdated {
    pub reporter: Pubkey,
    pub active: bool,
}

// --- MARKETS ---
#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub outcome_count: u8,
    pub end_time: i64,
    pub virtual_reserve: u64,
}

#[event]
pub struct BetPlaced {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub outcome: u8,
    pub amount: u64,
    pub net_amount: u64,
    pub shares: u64,
    pub platform_fee: u64,
    pub creator_fee: u64,
    pub dividend_fee: u64,
}

#[event]
pub struct MarketPauseChanged {
    pub market_id: u64,
    pub paused: bool,
}

#[event]
pub struct MarketCancelled {
    pub market_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub winning_outcome: u8,
    pub resolver: Pubkey,
    pub pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinningsClaimed {
    pub market_id: u64,
    pub claimant: Pubkey,
    pub winning_shares: u64,
    pub payout: u64,
}

#[event]
pub struct RefundClaimed {
    pub market_id: u64,
    pub claimant: Pubkey,
    pub refund: u64,
}

// --- VOLUME ---
#[event]
pub struct VolumeRecorded {
    pub creator: Pubkey,
    pub source: Pubkey,
    pub amount: u64,
    pub total_volume: u64,
}

#[event]
pub struct CreatorUnlocked {
    pub creator: Pubkey,
    pub total_volume: u64,
    pub timestamp: i64,
}

// --- CREATOR SHARES ---
#[event]
pub struct SharesBought {
    pub creator: Pubkey,
    pub buyer: Pubkey,
    pub shares: u64,
    pub cost: u64,
    pub fee: u64,
    pub supply_after: u64,
}

#[event]
pub struct SharesSold {
    pub creator: Pubkey,
    pub seller: Pubkey,
    pub shares: u64,
    pub proceeds: u64,
    pub fee: u64,
    pub supply_after: u64,
}
