// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod radix;
pub mod schedule;
pub mod unit;

pub use config::{CompoundingFrequency, GrowthPlan, LoanTerms, PayoffTerms};
pub use radix::{IntegerValue, Radix, RadixViews};
pub use schedule::{AmortizationSchedule, PaymentSummary, PayoffOutcome, Period};
pub use unit::{Category, Quantity, UnitCode};
