// ============================================================================
// Currency Conversion Engine
// Linear conversion through a caller-supplied USD-based rate table
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use std::collections::HashMap;

/// Exchange rates keyed by 3-letter currency code, each expressed as units
/// of that currency per 1 USD.
///
/// The table is a plain value: whoever fetches rates hands a resolved table
/// in, and substituting a stale or default table on fetch failure is the
/// caller's responsibility. Refresh cadence, retries and timeouts live with
/// the fetcher, never here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table seeded with the USD identity rate.
    pub fn usd_base() -> Self {
        Self::new().with_rate("USD", 1.0)
    }

    /// Builder method: add one rate.
    pub fn with_rate(mut self, code: impl Into<String>, rate_per_usd: f64) -> Self {
        self.rates.insert(code.into(), rate_per_usd);
        self
    }

    /// Insert or replace one rate.
    pub fn insert(&mut self, code: impl Into<String>, rate_per_usd: f64) {
        self.rates.insert(code.into(), rate_per_usd);
    }

    /// The rate for a currency, if present.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Convert an amount between two currencies via the USD pivot:
    /// `amount / rate(from) * rate(to)`.
    ///
    /// # Errors
    /// - `UnknownCurrency` when either code is missing from the table
    /// - `InvalidInput` when the source rate is zero or not finite
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> CalcResult<f64> {
        let from_rate = self
            .rate(from)
            .ok_or_else(|| CalcError::UnknownCurrency(from.to_string()))?;
        let to_rate = self
            .rate(to)
            .ok_or_else(|| CalcError::UnknownCurrency(to.to_string()))?;

        if from_rate <= 0.0 || !from_rate.is_finite() || !to_rate.is_finite() {
            return Err(CalcError::InvalidInput("exchange rate must be positive"));
        }

        let amount_in_usd = amount / from_rate;
        Ok(amount_in_usd * to_rate)
    }

    /// Parse the rate-fetcher's payload: a JSON object mapping currency
    /// codes to rates, e.g. `{"USD": 1.0, "EUR": 0.92}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let rates: HashMap<String, f64> = serde_json::from_str(json)?;
        Ok(Self { rates })
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
