// ============================================================================
// Event Sink Interface
// Defines the contract for observing completed calculations
// ============================================================================

use crate::domain::{Radix, UnitCode};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which calculator operation an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    UnitConversion,
    RadixConversion,
    LoanPayment,
    GrowthProjection,
    PayoffSimulation,
    CurrencyConversion,
}

/// Events emitted by the calculator facade, one per operation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// A scalar was converted between units
    UnitsConverted {
        value: f64,
        from: UnitCode,
        to: UnitCode,
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// A numeral was parsed and re-rendered across bases
    NumberConverted {
        input: String,
        from: Radix,
        negative: bool,
        decimal: i32,
        timestamp: DateTime<Utc>,
    },

    /// A fixed loan payment was computed
    PaymentComputed {
        loan_amount: f64,
        term_months: u32,
        monthly_payment: f64,
        timestamp: DateTime<Utc>,
    },

    /// A growth schedule was projected
    GrowthProjected {
        years: u32,
        final_balance: f64,
        timestamp: DateTime<Utc>,
    },

    /// A payoff simulation converged
    PayoffSimulated {
        months: u32,
        total_interest: f64,
        timestamp: DateTime<Utc>,
    },

    /// An amount was converted between currencies
    CurrencyConverted {
        amount: f64,
        from: String,
        to: String,
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// An operation was rejected with a reason
    CalculationRejected {
        operation: Operation,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event sink trait for observing calculator activity
/// Implementations can handle logging, metrics, history feeds, etc.
pub trait EventSink: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event sink for testing
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event sink
pub struct LoggingEventSink;

impl EventSink for LoggingEventSink {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}
