pub mod report_volume;

pub use report_volume::*;
