//! A full analysis run over the sample fixtures, rendered the way a report
//! would display it.

use approx::assert_relative_eq;
use finmetrics::common::samples::{
    sample_financial_goals, sample_market_data, sample_portfolio, sample_transactions,
};
use finmetrics::prelude::*;
use rust_decimal_macros::dec;

#[test]
fn test_portfolio_section() {
    let portfolio = sample_portfolio();

    let value = portfolio_value(&portfolio).unwrap();
    assert_eq!(format_currency(value), "$7,180.00");

    let performance = analyze_performance(&portfolio, "1y".parse().unwrap()).unwrap();
    assert_eq!(format_currency(performance.total_gain_loss), "$560.00");
    assert_eq!(format_percentage(performance.percent_gain_loss).unwrap(), "8.46%");

    let allocation = make_diversification_calculator("conservative")
        .unwrap()
        .allocate(dec!(100000));
    assert_eq!(format_currency(allocation.stocks), "$30,000.00");
    assert_eq!(format_currency(allocation.bonds), "$50,000.00");
}

#[test]
fn test_literal_amounts_match_prelude_decimal() {
    let amount: Decimal = dec!(1234.5);
    assert_eq!(amount, Decimal::new(12345, 1));
    assert_eq!(format_currency(amount), "$1,234.50");
}

#[test]
fn test_risk_section() {
    let options = RiskReportOptions::default()
        .with_format(ReportFormat::Detailed)
        .with_beta(true);
    let report = generate_risk_report(&options);
    let names: Vec<String> = report.metrics_included.iter().map(ToString::to_string).collect();
    assert_eq!(names.join(", "), "volatility, sharpe_ratio, beta");

    let market = sample_market_data();
    let vols = historical_volatilities(&market).unwrap();
    assert_eq!(vols.len(), sample_portfolio().len());
}

#[test]
fn test_budget_section() {
    let categorized = categorize_transactions(&sample_transactions());
    assert_eq!(format_currency(categorized.total_income), "$6,000.00");
    assert_eq!(format_currency(categorized.total_expenses), "$3,625.00");

    let projection = generate_savings_projection(dec!(3000), dec!(2000), 5, dec!(0.25));
    let five_year = projection.projection().unwrap().yearly_projection[&5].cumulative_savings;
    assert_eq!(format_currency(five_year), "$60,000.00");
}

#[test]
fn test_performance_sequence_section() {
    let series = MonthlySeries::try_from_points([
        ("Jan", 10000.0),
        ("Feb", 10500.0),
        ("Mar", 10300.0),
        ("Apr", 11000.0),
    ])
    .unwrap();

    let lines: Vec<String> = monthly_performance(&series)
        .map(|step| {
            let value = Decimal::try_from(step.value).unwrap();
            format!(
                "{}: {} ({})",
                step.label,
                format_currency(value),
                format_percentage(step.percent_change).unwrap()
            )
        })
        .collect();

    assert_eq!(
        lines,
        vec![
            "Jan: $10,000.00 (0.00%)",
            "Feb: $10,500.00 (5.00%)",
            "Mar: $10,300.00 (-1.90%)",
            "Apr: $11,000.00 (6.80%)",
        ]
    );
}

#[test]
fn test_goals_against_projection() {
    let goals = sample_financial_goals();
    let projection = generate_savings_projection(dec!(3000), dec!(2000), 5, DEFAULT_SAVINGS_RATE)
        .into_result()
        .unwrap();

    let total_remaining: Decimal = goals.iter().map(FinancialGoal::remaining_amount).sum();
    assert_eq!(total_remaining, dec!(40000));
    assert_relative_eq!(goals[0].progress_pct(), 65.0, epsilon = 1e-9);

    // Four years at $1,000 a month covers every goal
    let covered = projection
        .yearly_projection
        .iter()
        .find(|(_, year)| year.cumulative_savings >= total_remaining)
        .map(|(year, _)| *year);
    assert_eq!(covered, Some(4));
}
