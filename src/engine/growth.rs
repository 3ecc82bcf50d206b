// ============================================================================
// Compound Growth Engine
// Year-by-year projection of principal plus recurring contributions
// ============================================================================

use crate::domain::{AmortizationSchedule, GrowthPlan, Period};
use crate::numeric::CalcResult;

/// Project a balance forward under compound interest with recurring
/// contributions, producing one schedule period per year.
///
/// Each year is simulated as `periods_per_year` sub-periods. Every
/// sub-period deposits `monthly_contribution * 12 / periods_per_year`
/// (keeping the nominal annual contribution constant regardless of
/// frequency) and accrues `(balance + deposit) * periodic_rate` of
/// interest. The loop always runs exactly `years * periods_per_year`
/// steps; there is no early exit.
///
/// # Errors
/// Returns `InvalidInput` when the plan fails validation.
pub fn compound_growth(plan: &GrowthPlan) -> CalcResult<AmortizationSchedule> {
    plan.validate()?;

    let periods_per_year = plan.frequency.periods_per_year();
    let periodic_rate = plan.annual_rate_pct / 100.0 / f64::from(periods_per_year);
    let periodic_contribution = plan.monthly_contribution * (12.0 / f64::from(periods_per_year));

    let mut balance = plan.principal;
    let mut periods = Vec::with_capacity(plan.years as usize);

    for year in 1..=plan.years {
        let starting_balance = balance;
        let mut yearly_interest = 0.0;

        for _ in 0..periods_per_year {
            let interest = (balance + periodic_contribution) * periodic_rate;
            yearly_interest += interest;
            balance += periodic_contribution + interest;
        }

        periods.push(Period {
            index: year,
            starting_balance,
            contribution: plan.monthly_contribution * 12.0,
            interest_accrued: yearly_interest,
            ending_balance: balance,
        });
    }

    Ok(AmortizationSchedule::new(plan.principal, periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompoundingFrequency;

    #[test]
    fn test_schedule_shape() {
        let plan = GrowthPlan::new(10_000.0, 500.0, 8.0, 20);
        let schedule = compound_growth(&plan).unwrap();

        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule.periods()[0].index, 1);
        assert_eq!(schedule.periods()[19].index, 20);
        assert_eq!(schedule.periods()[0].starting_balance, 10_000.0);
    }

    #[test]
    fn test_periods_chain() {
        let plan = GrowthPlan::new(10_000.0, 500.0, 8.0, 20);
        let schedule = compound_growth(&plan).unwrap();

        for pair in schedule.periods().windows(2) {
            assert_eq!(pair[1].starting_balance, pair[0].ending_balance);
        }
        for period in schedule.iter() {
            let recomputed =
                period.starting_balance + period.contribution + period.interest_accrued;
            assert!(
                (period.ending_balance - recomputed).abs() < 1e-6,
                "year {} balance mismatch",
                period.index
            );
        }
    }

    #[test]
    fn test_balance_decomposition_invariant() {
        let plan = GrowthPlan::new(10_000.0, 500.0, 8.0, 20);
        let schedule = compound_growth(&plan).unwrap();

        let reconstructed = schedule.total_contributed() + schedule.total_interest();
        assert!(
            (schedule.final_balance() - reconstructed).abs() < 1e-6,
            "final {} vs reconstructed {}",
            schedule.final_balance(),
            reconstructed
        );
    }

    #[test]
    fn test_zero_rate_grows_by_contributions_only() {
        let plan = GrowthPlan::new(1_000.0, 100.0, 0.0, 3);
        let schedule = compound_growth(&plan).unwrap();

        assert_eq!(schedule.total_interest(), 0.0);
        assert!((schedule.final_balance() - (1_000.0 + 3.0 * 1_200.0)).abs() < 1e-9);
    }

    #[test]
    fn test_annual_contribution_constant_across_frequencies() {
        // Same plan, different compounding frequency: contributions must not drift
        for frequency in [
            CompoundingFrequency::Annually,
            CompoundingFrequency::Quarterly,
            CompoundingFrequency::Monthly,
            CompoundingFrequency::Weekly,
            CompoundingFrequency::Daily,
        ] {
            let plan = GrowthPlan::new(0.0, 250.0, 0.0, 4).with_frequency(frequency);
            let schedule = compound_growth(&plan).unwrap();
            assert!(
                (schedule.final_balance() - 4.0 * 3_000.0).abs() < 1e-6,
                "{} drifted to {}",
                frequency,
                schedule.final_balance()
            );
        }
    }

    #[test]
    fn test_higher_frequency_earns_more_interest() {
        let annually = compound_growth(
            &GrowthPlan::new(10_000.0, 0.0, 6.0, 10)
                .with_frequency(CompoundingFrequency::Annually),
        )
        .unwrap();
        let daily = compound_growth(
            &GrowthPlan::new(10_000.0, 0.0, 6.0, 10).with_frequency(CompoundingFrequency::Daily),
        )
        .unwrap();

        assert!(daily.final_balance() > annually.final_balance());
    }

    #[test]
    fn test_invalid_plan_rejected() {
        assert!(compound_growth(&GrowthPlan::new(1_000.0, 0.0, 5.0, 0)).is_err());
        assert!(compound_growth(&GrowthPlan::new(-1.0, 0.0, 5.0, 10)).is_err());
    }

    #[test]
    fn test_idempotence() {
        let plan = GrowthPlan::new(10_000.0, 500.0, 8.0, 20)
            .with_frequency(CompoundingFrequency::Daily);
        let a = compound_growth(&plan).unwrap();
        let b = compound_growth(&plan).unwrap();
        assert_eq!(a.final_balance().to_bits(), b.final_balance().to_bits());
        assert_eq!(a, b);
    }
}
