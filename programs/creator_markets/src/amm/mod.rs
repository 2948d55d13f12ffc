//! # Pricing Module
//!
//! Pure, side-effect-free pricing math shared by the instruction handlers:
//!
//! - [`bonding_curve`] prices creator-share issuance and redemption
//! - [`virtual_liquidity`] prices outcome shares in prediction markets
//! - [`fees`] splits the trading fee between platform, creator and dividends
//!
//! ```text
//!   price ▲                       ╱
//!         │                     ╱   price(s) = s² / 1400
//!         │                  ╱
//!         │              ╱
//!         │        ╱
//!         │ ___╱
//!         └────────────────────────▶ supply
//! ```

pub mod bonding_curve;
pub mod fees;
pub mod virtual_liquidity;

pub use bonding_curve::*;
pub use fees::*;
pub use virtual_liquidity::*;
