//! Instruction handlers for the creator markets protocol
//!
//! - `admin` - Protocol setup, config changes, volume reporter whitelist
//! - `market` - Create, bet, pause/cancel, resolve, claim
//! - `shares` - Buy and sell creator shares on the bonding curve
//! - `volume` - Volume reports from whitelisted external venues
//! - `views` - Read-only quotes and progress

pub mod admin;
pub mod market;
pub mod shares;
pub mod transfer;
pub mod views;
pub mod volume;

pub use admin::*;
pub use market::*;
pub use shares::*;
pub use transfer::*;
pub use views::*;
pub use volume::*;
