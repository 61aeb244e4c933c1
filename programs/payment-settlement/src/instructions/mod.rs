pub mod close_receipt;
pub mod emit_distribution_config;
pub mod initialize;
pub mod record_settlement;
pub mod settle;
pub mod void_settlement;
pub mod withdraw_surplus;

pub use close_receipt::*;
pub use emit_distribution_config::*;
pub use initialize::*;
pub use record_settlement::*;
pub use settle::*;
pub use void_settlement::*;
pub use withdraw_surplus::*;
