pub mod format;
pub mod probe;
pub mod profit;

pub use crate::domain::model::{Amount, CurrencyValue, ProbeOutcome, ProfitPercentage};
pub use crate::domain::ports::ProbeSettings;
pub use crate::utils::error::Result;
