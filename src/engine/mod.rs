// ============================================================================
// Engine Module
// Contains the calculation engines and the facade over them
// ============================================================================

mod calculator;

pub mod currency;
pub mod growth;
pub mod loan;
pub mod payoff;
pub mod radix;
pub mod unit_conversion;

pub use calculator::{Calculator, CalculatorBuilder};
pub use currency::RateTable;
pub use payoff::MAX_PAYOFF_MONTHS;
