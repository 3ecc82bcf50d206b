// ============================================================================
// Calculation Terms
// Input bundles for the financial engines, with validation and presets
// ============================================================================

use crate::numeric::{CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Compounding Frequency
// ============================================================================

/// How often interest compounds within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompoundingFrequency {
    Annually,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Weekly => "weekly",
            CompoundingFrequency::Daily => "daily",
        }
    }
}

impl std::fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CompoundingFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annually" => Ok(CompoundingFrequency::Annually),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "weekly" => Ok(CompoundingFrequency::Weekly),
            "daily" => Ok(CompoundingFrequency::Daily),
            other => Err(format!("unknown compounding frequency '{}'", other)),
        }
    }
}

// ============================================================================
// Growth Plan
// ============================================================================

/// Inputs for a compound-growth projection: an opening principal plus a
/// fixed nominal monthly contribution, compounded at a chosen frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrowthPlan {
    /// Opening balance
    pub principal: f64,

    /// Nominal monthly contribution. The amount added per compounding
    /// period is `monthly_contribution * 12 / periods_per_year`, so the
    /// annual contribution stays constant across frequencies.
    pub monthly_contribution: f64,

    /// Annual interest rate, in percent (8 means 8%)
    pub annual_rate_pct: f64,

    /// Projection horizon in whole years
    pub years: u32,

    /// Compounding frequency
    pub frequency: CompoundingFrequency,
}

impl GrowthPlan {
    pub fn new(
        principal: f64,
        monthly_contribution: f64,
        annual_rate_pct: f64,
        years: u32,
    ) -> Self {
        Self {
            principal,
            monthly_contribution,
            annual_rate_pct,
            years,
            frequency: CompoundingFrequency::Monthly,
        }
    }

    /// Builder method: set the compounding frequency.
    pub fn with_frequency(mut self, frequency: CompoundingFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Validate the plan.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.principal.is_finite() || self.principal < 0.0 {
            return Err(CalcError::InvalidInput("principal must be non-negative"));
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(CalcError::InvalidInput("contribution must be non-negative"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::InvalidInput("rate must be non-negative"));
        }
        if self.years == 0 {
            return Err(CalcError::InvalidInput("projection must cover at least one year"));
        }
        Ok(())
    }
}

// ============================================================================
// Loan Terms
// ============================================================================

/// Inputs for fixed-payment loan math.
///
/// `principal` is the sticker price; sales tax is added on top and the
/// down payment subtracted before the financed amount is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanTerms {
    /// Purchase price before tax
    pub principal: f64,

    /// Annual interest rate, in percent
    pub annual_rate_pct: f64,

    /// Loan term in months
    pub term_months: u32,

    /// Up-front payment, deducted from the financed amount
    pub down_payment: f64,

    /// Sales tax applied to the purchase price, in percent
    pub sales_tax_pct: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_pct: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_months,
            down_payment: 0.0,
            sales_tax_pct: 0.0,
        }
    }

    /// Builder method: set the down payment.
    pub fn with_down_payment(mut self, down_payment: f64) -> Self {
        self.down_payment = down_payment;
        self
    }

    /// Builder method: set the sales tax percentage.
    pub fn with_sales_tax_pct(mut self, sales_tax_pct: f64) -> Self {
        self.sales_tax_pct = sales_tax_pct;
        self
    }

    /// The amount actually financed: taxed price minus down payment.
    pub fn financed_amount(&self) -> f64 {
        let tax_amount = self.principal * (self.sales_tax_pct / 100.0);
        self.principal + tax_amount - self.down_payment
    }

    /// Validate the terms.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.principal.is_finite() || self.principal < 0.0 {
            return Err(CalcError::InvalidInput("principal must be non-negative"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::InvalidInput("rate must be non-negative"));
        }
        if self.term_months == 0 {
            return Err(CalcError::InvalidInput("term must be at least one month"));
        }
        if !self.down_payment.is_finite() || self.down_payment < 0.0 {
            return Err(CalcError::InvalidInput("down payment must be non-negative"));
        }
        if !self.sales_tax_pct.is_finite() || self.sales_tax_pct < 0.0 {
            return Err(CalcError::InvalidInput("sales tax must be non-negative"));
        }
        if self.financed_amount() < 0.0 {
            return Err(CalcError::InvalidInput("down payment exceeds taxed price"));
        }
        Ok(())
    }
}

// ============================================================================
// Payoff Terms
// ============================================================================

/// Inputs for the revolving-balance payoff simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayoffTerms {
    /// Outstanding balance
    pub balance: f64,

    /// Annual interest rate, in percent
    pub annual_rate_pct: f64,

    /// Regular monthly payment
    pub monthly_payment: f64,

    /// Extra amount paid on top each month
    pub additional_payment: f64,
}

impl PayoffTerms {
    pub fn new(balance: f64, annual_rate_pct: f64, monthly_payment: f64) -> Self {
        Self {
            balance,
            annual_rate_pct,
            monthly_payment,
            additional_payment: 0.0,
        }
    }

    /// Builder method: set the additional monthly payment.
    pub fn with_additional_payment(mut self, additional_payment: f64) -> Self {
        self.additional_payment = additional_payment;
        self
    }

    /// Combined payment applied each month.
    pub fn total_monthly_payment(&self) -> f64 {
        self.monthly_payment + self.additional_payment
    }

    /// Validate the terms.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.balance.is_finite() || self.balance < 0.0 {
            return Err(CalcError::InvalidInput("balance must be non-negative"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::InvalidInput("rate must be non-negative"));
        }
        if !self.monthly_payment.is_finite() || self.monthly_payment <= 0.0 {
            return Err(CalcError::InvalidInput("monthly payment must be positive"));
        }
        if !self.additional_payment.is_finite() || self.additional_payment < 0.0 {
            return Err(CalcError::InvalidInput(
                "additional payment must be non-negative",
            ));
        }
        Ok(())
    }
}
