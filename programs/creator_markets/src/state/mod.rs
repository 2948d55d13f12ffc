//! State structures for the creator markets protocol

pub mod config;
pub mod creator_shares;
pub mod creator_volume;
pub mod ledger;
pub mod market;

pub use config::*;
pub use creator_shares::*;
pub use creator_volume::*;
pub use ledger::*;
pub use market::*;
