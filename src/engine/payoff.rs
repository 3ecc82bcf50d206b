// ============================================================================
// Revolving Balance Payoff Engine
// Month-by-month simulation of paying down a revolving balance
// ============================================================================

use crate::domain::{PayoffOutcome, PayoffTerms};
use crate::numeric::{CalcError, CalcResult};

/// Simulation cap: 100 years of monthly steps. A payment at or below the
/// monthly interest accrual never reduces the balance, so the loop must be
/// bounded to terminate.
pub const MAX_PAYOFF_MONTHS: u32 = 1200;

/// Simulate paying down a revolving balance one month at a time.
///
/// Each month accrues interest on the remaining balance, then applies the
/// combined payment. A post-payment residual smaller than one further
/// payment is absorbed into that final month rather than spilling into an
/// extra one.
///
/// # Errors
/// - `InvalidInput` when the terms fail validation
/// - `NonConvergentPayoff` when the balance is still outstanding after
///   [`MAX_PAYOFF_MONTHS`]; the error carries the months simulated and the
///   balance remaining at the cap
pub fn credit_card_payoff(terms: &PayoffTerms) -> CalcResult<PayoffOutcome> {
    terms.validate()?;

    let monthly_rate = terms.annual_rate_pct / 100.0 / 12.0;
    let total_payment = terms.total_monthly_payment();

    let mut remaining = terms.balance;
    let mut interest_paid = 0.0;
    let mut months = 0u32;

    while remaining > 0.0 && months < MAX_PAYOFF_MONTHS {
        let interest_charge = remaining * monthly_rate;
        interest_paid += interest_charge;
        remaining += interest_charge;
        remaining -= total_payment;
        months += 1;

        if remaining < total_payment {
            remaining = 0.0;
        }
    }

    if remaining > 0.0 {
        return Err(CalcError::NonConvergentPayoff {
            months_simulated: months,
            remaining_balance: remaining,
        });
    }

    Ok(PayoffOutcome {
        months,
        total_interest: interest_paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_payoff() {
        let terms = PayoffTerms::new(5_000.0, 18.9, 200.0);
        let outcome = credit_card_payoff(&terms).unwrap();

        // 5000 at 18.9% with $200/month clears in about 2.5 years
        assert!(outcome.months > 24 && outcome.months < 36, "{} months", outcome.months);
        assert!(outcome.total_interest > 0.0);
        assert!(outcome.total_interest < 5_000.0);
    }

    #[test]
    fn test_additional_payment_shortens_payoff() {
        let base = credit_card_payoff(&PayoffTerms::new(5_000.0, 18.9, 200.0)).unwrap();
        let boosted = credit_card_payoff(
            &PayoffTerms::new(5_000.0, 18.9, 200.0).with_additional_payment(100.0),
        )
        .unwrap();

        assert!(boosted.months < base.months);
        assert!(boosted.total_interest < base.total_interest);
    }

    #[test]
    fn test_insufficient_payment_hits_cap() {
        // $10/month never covers the ~$79 first-month interest charge
        let terms = PayoffTerms::new(5_000.0, 18.9, 10.0);
        let result = credit_card_payoff(&terms);

        match result {
            Err(CalcError::NonConvergentPayoff {
                months_simulated,
                remaining_balance,
            }) => {
                assert_eq!(months_simulated, MAX_PAYOFF_MONTHS);
                assert!(remaining_balance > 5_000.0);
            },
            other => panic!("expected non-convergence, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_payoff() {
        let terms = PayoffTerms::new(950.0, 0.0, 100.0);
        let outcome = credit_card_payoff(&terms).unwrap();

        assert_eq!(outcome.total_interest, 0.0);
        // The ninth payment leaves $50 outstanding, under one further
        // payment, so it folds into that month
        assert_eq!(outcome.months, 9);
    }

    #[test]
    fn test_zero_balance_needs_no_payments() {
        let terms = PayoffTerms::new(0.0, 18.9, 100.0);
        let outcome = credit_card_payoff(&terms).unwrap();
        assert_eq!(outcome.months, 0);
        assert_eq!(outcome.total_interest, 0.0);
    }

    #[test]
    fn test_invalid_terms_rejected() {
        assert!(credit_card_payoff(&PayoffTerms::new(5_000.0, 18.9, 0.0)).is_err());
    }

    #[test]
    fn test_idempotence() {
        let terms = PayoffTerms::new(7_345.67, 21.4, 250.0).with_additional_payment(25.0);
        let a = credit_card_payoff(&terms).unwrap();
        let b = credit_card_payoff(&terms).unwrap();
        assert_eq!(a.months, b.months);
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
    }
}
