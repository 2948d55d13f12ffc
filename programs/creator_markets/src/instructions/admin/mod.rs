pub mod initialize;
pub mod reporters;
pub mod update_config;

pub use initialize::*;
pub use reporters::*;
pub use update_config::*;
