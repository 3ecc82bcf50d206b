// ============================================================================
// Fixed-Payment Loan Engine
// Level-payment annuity math for installment loans
// ============================================================================

use crate::domain::{LoanTerms, PaymentSummary};
use crate::numeric::{CalcError, CalcResult};

/// Level monthly payment for a fixed-rate, fixed-term loan.
///
/// Uses the standard annuity formula
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate. A zero
/// rate degenerates to straight division, `principal / term_months`; the
/// raw formula would divide by zero there.
///
/// # Errors
/// Returns `InvalidInput` for a zero-month term.
///
/// # Example
/// ```
/// use calc_engine::engine::loan::fixed_payment;
///
/// let payment = fixed_payment(30_000.0, 4.5, 60).unwrap();
/// assert!((payment - 559.29).abs() < 0.01);
/// ```
pub fn fixed_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> CalcResult<f64> {
    if term_months == 0 {
        return Err(CalcError::InvalidInput("term must be at least one month"));
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Ok(principal / f64::from(term_months));
    }

    let growth = (1.0 + monthly_rate).powf(f64::from(term_months));
    Ok(principal * (monthly_rate * growth) / (growth - 1.0))
}

/// Full payment breakdown for a purchase loan: sales tax added to the
/// price, down payment deducted, and the remainder financed at the level
/// monthly payment.
///
/// # Errors
/// Returns `InvalidInput` when the terms fail validation.
pub fn payment_summary(terms: &LoanTerms) -> CalcResult<PaymentSummary> {
    terms.validate()?;

    let loan_amount = terms.financed_amount();
    let monthly_payment = fixed_payment(loan_amount, terms.annual_rate_pct, terms.term_months)?;
    let financed_total = monthly_payment * f64::from(terms.term_months);

    Ok(PaymentSummary {
        loan_amount,
        monthly_payment,
        total_paid: financed_total + terms.down_payment,
        total_interest: financed_total - loan_amount,
    })
}
