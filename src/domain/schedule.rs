// ============================================================================
// Schedule Domain Model
// Amortization periods, payment summaries and payoff outcomes
// ============================================================================

use crate::numeric::cents_display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Period
// ============================================================================

/// One period of an amortization schedule.
///
/// Invariants: `ending_balance == starting_balance + contribution +
/// interest_accrued` (within f64 tolerance), and the next period's
/// `starting_balance` equals this period's `ending_balance`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    /// 1-based period index
    pub index: u32,
    pub starting_balance: f64,
    pub contribution: f64,
    pub interest_accrued: f64,
    pub ending_balance: f64,
}

// ============================================================================
// Amortization Schedule
// ============================================================================

/// A fully materialized amortization schedule.
///
/// Computed wholesale from its inputs and never mutated incrementally;
/// recompute from scratch when an input changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmortizationSchedule {
    principal: f64,
    periods: Vec<Period>,
}

impl AmortizationSchedule {
    pub fn new(principal: f64, periods: Vec<Period>) -> Self {
        Self { principal, periods }
    }

    /// The opening balance the schedule started from.
    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// Balance at the end of the final period (the principal if the
    /// schedule is empty).
    pub fn final_balance(&self) -> f64 {
        self.periods
            .last()
            .map_or(self.principal, |p| p.ending_balance)
    }

    /// Principal plus every contribution made over the schedule.
    pub fn total_contributed(&self) -> f64 {
        self.principal + self.periods.iter().map(|p| p.contribution).sum::<f64>()
    }

    /// Total interest accrued over the schedule.
    pub fn total_interest(&self) -> f64 {
        self.periods.iter().map(|p| p.interest_accrued).sum()
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

// ============================================================================
// Payment Summary
// ============================================================================

/// Fixed-payment loan breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaymentSummary {
    /// Amount financed (taxed price minus down payment)
    pub loan_amount: f64,
    /// Level monthly payment
    pub monthly_payment: f64,
    /// Everything paid over the life of the loan, down payment included
    pub total_paid: f64,
    /// Interest portion of the total
    pub total_interest: f64,
}

impl PaymentSummary {
    /// Monthly payment rounded to cents, for display.
    pub fn monthly_payment_display(&self) -> String {
        cents_display(self.monthly_payment)
    }

    /// Total cost rounded to cents, for display.
    pub fn total_paid_display(&self) -> String {
        cents_display(self.total_paid)
    }
}

// ============================================================================
// Payoff Outcome
// ============================================================================

/// Result of a revolving-balance payoff simulation that did converge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayoffOutcome {
    /// Months until the balance reached zero
    pub months: u32,
    /// Interest paid along the way
    pub total_interest: f64,
}

impl PayoffOutcome {
    /// Human-readable duration, e.g. "7 months" or "2 years, 3 months".
    pub fn duration_label(&self) -> String {
        let years = self.months / 12;
        let remaining = self.months % 12;
        if years == 0 {
            format!("{} months", remaining)
        } else {
            format!("{} years, {} months", years, remaining)
        }
    }
}
