pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::ProbeConfig;
pub use crate::core::format::{format_currency, format_number, format_pkr, parse_currency};
pub use crate::core::probe::SalesReportProbe;
pub use crate::core::profit::{calculate_profit, calculate_profit_percentage};
pub use crate::core::{Amount, CurrencyValue, ProbeOutcome, ProfitPercentage};
pub use crate::utils::error::{Result, ToolError};
