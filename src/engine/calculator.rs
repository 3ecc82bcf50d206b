// ============================================================================
// Calculator Facade
// Routes every operation through one service object with event emission
// ============================================================================

use crate::domain::{
    AmortizationSchedule, Category, GrowthPlan, LoanTerms, PaymentSummary, PayoffOutcome,
    PayoffTerms, Radix, RadixViews, UnitCode,
};
use crate::engine::currency::RateTable;
use crate::engine::{growth, loan, payoff, radix, unit_conversion};
use crate::interfaces::{CalculationEvent, EventSink, NoOpEventSink, Operation};
use crate::numeric::{CalcError, CalcResult};
use chrono::Utc;
use std::sync::Arc;

/// Facade over the calculation engines.
///
/// The engines themselves are pure and callable directly; this wrapper
/// adds the two pieces of ambient state a host application wants in one
/// place: the current exchange-rate table and an event sink that observes
/// every operation. The facade holds no other state, so a shared reference
/// can serve any number of threads.
pub struct Calculator {
    /// Exchange rates for currency conversion
    rates: RateTable,

    /// Event sink for observing calculations
    event_sink: Arc<dyn EventSink>,
}

impl Calculator {
    /// Create a calculator with the given rate table and event sink.
    pub fn new(rates: RateTable, event_sink: Arc<dyn EventSink>) -> Self {
        Self { rates, event_sink }
    }

    /// The current rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Swap in a freshly fetched rate table.
    pub fn set_rates(&mut self, rates: RateTable) {
        self.rates = rates;
    }

    /// Convert a scalar between two units of one measurement category.
    ///
    /// # Errors
    /// See [`unit_conversion::convert`].
    pub fn convert_units(
        &self,
        value: f64,
        from: UnitCode,
        to: UnitCode,
        category: Category,
    ) -> CalcResult<f64> {
        let result = unit_conversion::convert(value, from, to, category);
        match &result {
            Ok(converted) => self.event_sink.on_event(CalculationEvent::UnitsConverted {
                value,
                from,
                to,
                result: *converted,
                timestamp: Utc::now(),
            }),
            Err(err) => self.reject(Operation::UnitConversion, err),
        }
        result
    }

    /// Parse a numeral in one radix and render it in all four.
    ///
    /// # Errors
    /// See [`radix::convert`].
    pub fn convert_number(
        &self,
        input: &str,
        from: Radix,
        negative: bool,
    ) -> CalcResult<RadixViews> {
        match radix::parse_signed(input, from, negative) {
            Ok(value) => {
                self.event_sink.on_event(CalculationEvent::NumberConverted {
                    input: input.to_string(),
                    from,
                    negative,
                    decimal: value.signed(),
                    timestamp: Utc::now(),
                });
                Ok(radix::views_of(value))
            },
            Err(err) => {
                self.reject(Operation::RadixConversion, &err);
                Err(err)
            },
        }
    }

    /// Level monthly payment for a fixed-rate loan.
    ///
    /// # Errors
    /// See [`loan::fixed_payment`].
    pub fn monthly_payment(
        &self,
        principal: f64,
        annual_rate_pct: f64,
        term_months: u32,
    ) -> CalcResult<f64> {
        let result = loan::fixed_payment(principal, annual_rate_pct, term_months);
        match &result {
            Ok(payment) => self.event_sink.on_event(CalculationEvent::PaymentComputed {
                loan_amount: principal,
                term_months,
                monthly_payment: *payment,
                timestamp: Utc::now(),
            }),
            Err(err) => self.reject(Operation::LoanPayment, err),
        }
        result
    }

    /// Full payment breakdown for a purchase loan.
    ///
    /// # Errors
    /// See [`loan::payment_summary`].
    pub fn payment_summary(&self, terms: &LoanTerms) -> CalcResult<PaymentSummary> {
        let result = loan::payment_summary(terms);
        match &result {
            Ok(summary) => self.event_sink.on_event(CalculationEvent::PaymentComputed {
                loan_amount: summary.loan_amount,
                term_months: terms.term_months,
                monthly_payment: summary.monthly_payment,
                timestamp: Utc::now(),
            }),
            Err(err) => self.reject(Operation::LoanPayment, err),
        }
        result
    }

    /// Project a compound-growth schedule.
    ///
    /// # Errors
    /// See [`growth::compound_growth`].
    pub fn growth_projection(&self, plan: &GrowthPlan) -> CalcResult<AmortizationSchedule> {
        let result = growth::compound_growth(plan);
        match &result {
            Ok(schedule) => self.event_sink.on_event(CalculationEvent::GrowthProjected {
                years: plan.years,
                final_balance: schedule.final_balance(),
                timestamp: Utc::now(),
            }),
            Err(err) => self.reject(Operation::GrowthProjection, err),
        }
        result
    }

    /// Simulate paying down a revolving balance.
    ///
    /// # Errors
    /// See [`payoff::credit_card_payoff`].
    pub fn payoff_simulation(&self, terms: &PayoffTerms) -> CalcResult<PayoffOutcome> {
        let result = payoff::credit_card_payoff(terms);
        match &result {
            Ok(outcome) => self.event_sink.on_event(CalculationEvent::PayoffSimulated {
                months: outcome.months,
                total_interest: outcome.total_interest,
                timestamp: Utc::now(),
            }),
            Err(err) => self.reject(Operation::PayoffSimulation, err),
        }
        result
    }

    /// Convert an amount between currencies using the held rate table.
    ///
    /// # Errors
    /// See [`RateTable::convert`].
    pub fn convert_currency(&self, amount: f64, from: &str, to: &str) -> CalcResult<f64> {
        let result = self.rates.convert(amount, from, to);
        match &result {
            Ok(converted) => self
                .event_sink
                .on_event(CalculationEvent::CurrencyConverted {
                    amount,
                    from: from.to_string(),
                    to: to.to_string(),
                    result: *converted,
                    timestamp: Utc::now(),
                }),
            Err(err) => self.reject(Operation::CurrencyConversion, err),
        }
        result
    }

    fn reject(&self, operation: Operation, err: &CalcError) {
        self.event_sink
            .on_event(CalculationEvent::CalculationRejected {
                operation,
                reason: err.to_string(),
                timestamp: Utc::now(),
            });
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(RateTable::usd_base(), Arc::new(NoOpEventSink))
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calc_engine::prelude::*;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .with_rate("EUR", 0.92)
///     .with_event_sink(Arc::new(NoOpEventSink))
///     .build();
///
/// let eur = calc.convert_currency(100.0, "USD", "EUR").unwrap();
/// assert!((eur - 92.0).abs() < 1e-9);
/// ```
pub struct CalculatorBuilder {
    rates: RateTable,
    event_sink: Arc<dyn EventSink>,
}

impl CalculatorBuilder {
    /// Start from a USD-based table and a no-op sink.
    pub fn new() -> Self {
        Self {
            rates: RateTable::usd_base(),
            event_sink: Arc::new(NoOpEventSink),
        }
    }

    /// Replace the whole rate table.
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Add a single rate to the table.
    pub fn with_rate(mut self, code: impl Into<String>, rate_per_usd: f64) -> Self {
        self.rates.insert(code, rate_per_usd);
        self
    }

    /// Set the event sink.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn build(self) -> Calculator {
        Calculator::new(self.rates, self.event_sink)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingSink {
        events: Mutex<Vec<CalculationEvent>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl EventSink for RecordingSink {
        fn on_event(&self, event: CalculationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_facade_routes_all_operations() {
        let calc = CalculatorBuilder::new().with_rate("EUR", 0.92).build();

        let km = calc
            .convert_units(1500.0, UnitCode::Meter, UnitCode::Kilometer, Category::Length)
            .unwrap();
        assert_eq!(km, 1.5);

        let views = calc.convert_number("FF", Radix::Hexadecimal, false).unwrap();
        assert_eq!(views.decimal, "255");

        let payment = calc.monthly_payment(30_000.0, 4.5, 60).unwrap();
        assert!((payment - 559.29).abs() < 0.01);

        let schedule = calc
            .growth_projection(&GrowthPlan::new(10_000.0, 500.0, 8.0, 20))
            .unwrap();
        assert_eq!(schedule.len(), 20);

        let outcome = calc
            .payoff_simulation(&PayoffTerms::new(5_000.0, 18.9, 200.0))
            .unwrap();
        assert!(outcome.months > 0);

        let eur = calc.convert_currency(100.0, "USD", "EUR").unwrap();
        assert!((eur - 92.0).abs() < 1e-9);
    }

    #[test]
    fn test_events_emitted_per_operation() {
        let sink = Arc::new(RecordingSink::new());
        let calc = CalculatorBuilder::new()
            .with_event_sink(sink.clone())
            .build();

        calc.convert_units(1.0, UnitCode::Mile, UnitCode::Foot, Category::Length)
            .unwrap();
        calc.monthly_payment(10_000.0, 5.0, 36).unwrap();

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], CalculationEvent::UnitsConverted { .. }));
        assert!(matches!(events[1], CalculationEvent::PaymentComputed { .. }));
    }

    #[test]
    fn test_rejections_reach_the_sink() {
        let sink = Arc::new(RecordingSink::new());
        let calc = CalculatorBuilder::new()
            .with_event_sink(sink.clone())
            .build();

        let result = calc.convert_units(1.0, UnitCode::Meter, UnitCode::Gram, Category::Length);
        assert!(result.is_err());
        let result = calc.convert_currency(1.0, "USD", "XYZ");
        assert!(result.is_err());

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        for event in events.iter() {
            assert!(matches!(event, CalculationEvent::CalculationRejected { .. }));
        }
    }

    #[test]
    fn test_rate_table_swap() {
        let mut calc = Calculator::default();
        assert!(calc.convert_currency(1.0, "USD", "EUR").is_err());

        calc.set_rates(RateTable::usd_base().with_rate("EUR", 0.9));
        let eur = calc.convert_currency(10.0, "USD", "EUR").unwrap();
        assert!((eur - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_shared_across_threads() {
        let counter = Arc::new(AtomicUsize::new(0));

        struct Counting(Arc<AtomicUsize>);
        impl EventSink for Counting {
            fn on_event(&self, _event: CalculationEvent) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }

        let calc = Arc::new(
            CalculatorBuilder::new()
                .with_event_sink(Arc::new(Counting(counter.clone())))
                .build(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let calc = Arc::clone(&calc);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        calc.monthly_payment(30_000.0, 4.5, 60).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.load(Ordering::Relaxed), 100);
    }
}
