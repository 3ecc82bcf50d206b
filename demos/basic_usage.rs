// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_engine::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calc Engine Example ===\n");

    let calc = CalculatorBuilder::new()
        .with_rate("EUR", 0.92)
        .with_rate("JPY", 149.5)
        .with_event_sink(Arc::new(LoggingEventSink))
        .build();

    // Unit conversion
    println!("Converting units...");
    let marathon_km = calc
        .convert_units(26.2, UnitCode::Mile, UnitCode::Kilometer, Category::Length)
        .unwrap();
    println!("  26.2 mi = {:.3} km", marathon_km);

    let body_temp = calc
        .convert_units(98.6, UnitCode::Fahrenheit, UnitCode::Celsius, Category::Temperature)
        .unwrap();
    println!("  98.6 F = {:.1} C\n", body_temp);

    // Radix conversion
    println!("Converting number bases...");
    let views = calc.convert_number("CAFE", Radix::Hexadecimal, false).unwrap();
    println!("  0xCAFE = {} = 0o{} = 0b{}", views.decimal, views.octal, views.binary);

    let negative = calc.convert_number("1", Radix::Decimal, true).unwrap();
    println!("  -1 in 32-bit binary: {}\n", negative.binary);

    // Loan payment
    println!("Sizing a car loan...");
    let terms = LoanTerms::new(30_000.0, 4.5, 60)
        .with_down_payment(5_000.0)
        .with_sales_tax_pct(6.0);
    let summary = calc.payment_summary(&terms).unwrap();
    println!(
        "  financing {:.2}: {} per month, {} total",
        summary.loan_amount,
        summary.monthly_payment_display(),
        summary.total_paid_display()
    );

    // Growth projection
    println!("\nProjecting savings...");
    let plan = GrowthPlan::new(10_000.0, 500.0, 8.0, 20)
        .with_frequency(CompoundingFrequency::Monthly);
    let schedule = calc.growth_projection(&plan).unwrap();
    println!(
        "  {} years later: {:.2} ({:.2} contributed, {:.2} interest)",
        plan.years,
        schedule.final_balance(),
        schedule.total_contributed(),
        schedule.total_interest()
    );
    for period in schedule.iter().take(3) {
        println!(
            "    year {}: {:.2} -> {:.2}",
            period.index, period.starting_balance, period.ending_balance
        );
    }

    // Payoff simulation
    println!("\nSimulating card payoff...");
    match calc.payoff_simulation(&PayoffTerms::new(5_000.0, 18.9, 200.0)) {
        Ok(outcome) => println!(
            "  paid off in {} with {:.2} interest",
            outcome.duration_label(),
            outcome.total_interest
        ),
        Err(err) => println!("  {}", err),
    }
    match calc.payoff_simulation(&PayoffTerms::new(5_000.0, 18.9, 10.0)) {
        Ok(outcome) => println!("  paid off in {}", outcome.duration_label()),
        Err(err) => println!("  minimum payment trap: {}", err),
    }

    // Currency conversion
    println!("\nConverting currency...");
    let yen = calc.convert_currency(100.0, "EUR", "JPY").unwrap();
    println!("  100 EUR = {:.0} JPY", yen);
}
