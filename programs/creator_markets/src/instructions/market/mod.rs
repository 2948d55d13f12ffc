pub mod claim;
pub mod create_market;
pub mod manage;
pub mod place_bet;
pub mod resolve;

pub use claim::*;
pub use create_market::*;
pub use manage::*;
pub use place_bet::*;
pub use resolve::*;
