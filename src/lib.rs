// ============================================================================
// Calc Engine Library
// Stateless numeric engines behind a suite of calculator front-ends
// ============================================================================

//! # Calc Engine
//!
//! The computational core for calculator applications: unit conversion,
//! number-base conversion, currency conversion and financial amortization
//! math, all as synchronous pure functions.
//!
//! ## Features
//!
//! - **Unit conversion** across six measurement categories, with affine
//!   handling for temperature scales
//! - **Radix conversion** of signed 32-bit integers, rendering all four
//!   bases at once with two's-complement binary for negatives
//! - **Financial math**: level loan payments, compound-growth schedules,
//!   and revolving-balance payoff simulation with a hard iteration cap
//! - **Currency conversion** through caller-supplied USD-based rate tables
//! - **Event sink seam** for logging or history feeds, one event per
//!   operation
//!
//! Every engine is a pure function of its inputs: no I/O, no shared
//! mutable state, safe to call from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use calc_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let calc = CalculatorBuilder::new()
//!     .with_rate("EUR", 0.92)
//!     .with_event_sink(Arc::new(LoggingEventSink))
//!     .build();
//!
//! // 1500 m is 1.5 km
//! let km = calc
//!     .convert_units(1500.0, UnitCode::Meter, UnitCode::Kilometer, Category::Length)
//!     .unwrap();
//! assert_eq!(km, 1.5);
//!
//! // 0xFF in every base at once
//! let views = calc.convert_number("FF", Radix::Hexadecimal, false).unwrap();
//! assert_eq!(views.decimal, "255");
//! assert_eq!(views.binary, "11111111");
//!
//! // Five-year auto loan
//! let payment = calc.monthly_payment(30_000.0, 4.5, 60).unwrap();
//! assert!((payment - 559.29).abs() < 0.01);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AmortizationSchedule, Category, CompoundingFrequency, GrowthPlan, IntegerValue,
        LoanTerms, PaymentSummary, PayoffOutcome, PayoffTerms, Period, Quantity, Radix,
        RadixViews, UnitCode,
    };
    pub use crate::engine::{Calculator, CalculatorBuilder, RateTable, MAX_PAYOFF_MONTHS};
    pub use crate::interfaces::{
        CalculationEvent, EventSink, LoggingEventSink, NoOpEventSink, Operation,
    };
    pub use crate::numeric::{CalcError, CalcResult};
}
