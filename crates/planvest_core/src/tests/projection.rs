//! Tests for recurring-contribution plan projections
//!
//! These tests verify that:
//! - The stepping rule posts contributions before interest, skipping month 1
//! - Withholding follows the plan length through the regressive schedule
//! - Zero rates and zero contributions behave as fixed points
//! - Invalid inputs are rejected instead of producing garbage

use crate::error::ProjectionError;
use crate::model::{InvestmentPlan, round_currency};
use crate::projection::{MAX_PERIOD_MONTHS, project_plan};
use crate::rates::DEFAULT_BENCHMARK_ANNUAL_RATE;

fn plan(initial: f64, monthly: f64, percent: f64, months: u32) -> InvestmentPlan {
    InvestmentPlan {
        initial_amount: initial,
        monthly_contribution: monthly,
        rate_percent_of_benchmark: percent,
        period_months: months,
    }
}

/// Golden scenario: 1000 up front, 100/month, 100% of the benchmark, 1 year
#[test]
fn test_golden_recurring_plan() {
    let result =
        project_plan(&plan(1_000.0, 100.0, 100.0, 12), DEFAULT_BENCHMARK_ANNUAL_RATE).unwrap();

    // 1000 + 100 * 11 contributions
    assert_eq!(result.total_invested, 2_100.0);
    // 12 months = 360 days, second bracket
    assert_eq!(result.tax_rate, 0.200);
    assert!(
        (result.gross_yield - 161.71).abs() < 0.005,
        "Expected gross 161.71, got {:.2}",
        result.gross_yield
    );
    assert!(
        (result.tax_value - 32.34).abs() < 0.005,
        "Expected tax 32.34, got {:.2}",
        result.tax_value
    );
    assert!(
        (result.net_yield - 129.37).abs() < 0.005,
        "Expected net 129.37, got {:.2}",
        result.net_yield
    );
    assert!(
        (result.final_amount - 2_229.37).abs() < 0.005,
        "Expected final 2229.37, got {:.2}",
        result.final_amount
    );
}

/// With no monthly contribution the principal never grows past the deposit
#[test]
fn test_zero_contribution_invested_equals_initial() {
    for months in [1, 2, 12, 60, 600] {
        let result = project_plan(&plan(5_000.0, 0.0, 100.0, months), 0.105).unwrap();
        assert_eq!(
            result.total_invested, 5_000.0,
            "total_invested drifted at {} months",
            months
        );
    }
}

/// A 0% instrument earns nothing, so nothing is withheld
#[test]
fn test_zero_rate_plan_earns_nothing() {
    let result = project_plan(&plan(500.0, 50.0, 0.0, 24), 0.105).unwrap();

    assert_eq!(result.total_invested, 1_650.0);
    assert_eq!(result.gross_yield, 0.0);
    assert_eq!(result.tax_value, 0.0);
    assert_eq!(result.net_yield, 0.0);
    assert_eq!(result.final_amount, 1_650.0);
}

/// The first month accrues interest on the deposit alone
#[test]
fn test_single_month_has_no_contribution() {
    let result = project_plan(&plan(1_000.0, 100.0, 100.0, 1), 0.105).unwrap();

    assert_eq!(result.total_invested, 1_000.0);
    // 1000 * ((1.105)^(1/12) - 1) = 8.36 gross, 30 days -> 22.5%
    assert_eq!(result.tax_rate, 0.225);
    assert!(
        (result.gross_yield - 8.36).abs() < 0.005,
        "Expected gross 8.36, got {:.2}",
        result.gross_yield
    );
    assert!(
        (result.final_amount - 1_006.48).abs() < 0.005,
        "Expected final 1006.48, got {:.2}",
        result.final_amount
    );
}

/// Contributions post before interest accrues in their month
#[test]
fn test_contribution_posts_before_interest() {
    // Nothing up front: month 1 accrues on zero, month 2 on the first
    // contribution, so the gross yield is exactly one month of interest
    // on one contribution.
    let result = project_plan(&plan(0.0, 100.0, 100.0, 2), 0.105).unwrap();
    let monthly = (1.0_f64 + 0.105).powf(1.0 / 12.0) - 1.0;

    assert_eq!(result.total_invested, 100.0);
    assert!(
        (result.gross_yield - round_currency(100.0 * monthly)).abs() < 0.005,
        "Expected one month of interest on a single contribution, got {:.4}",
        result.gross_yield
    );
}

/// Withholding rate steps down as the plan period crosses each bracket
#[test]
fn test_withholding_follows_plan_length() {
    // 30-day months: 6 -> 180d, 12 -> 360d, 24 -> 720d, 25 -> 750d
    let cases = [(6, 0.225), (12, 0.200), (24, 0.175), (25, 0.150)];
    for (months, expected_rate) in cases {
        let result = project_plan(&plan(1_000.0, 0.0, 100.0, months), 0.105).unwrap();
        assert_eq!(
            result.tax_rate, expected_rate,
            "wrong bracket for {} months",
            months
        );
    }
}

/// Rounded fields reconcile: total_invested + net_yield == final_amount
#[test]
fn test_reconciliation_identity() {
    let plans = [
        plan(1_000.0, 100.0, 100.0, 12),
        plan(0.01, 0.01, 137.5, 7),
        plan(123_456.78, 910.11, 85.0, 240),
        plan(1.0, 0.0, 0.0, 1),
    ];
    for p in plans {
        let result = project_plan(&p, DEFAULT_BENCHMARK_ANNUAL_RATE).unwrap();
        assert_eq!(
            round_currency(result.total_invested + result.net_yield),
            result.final_amount,
            "reconciliation failed for {:?}",
            p
        );
    }
}

#[test]
fn test_rejects_zero_period() {
    let err = project_plan(&plan(1_000.0, 100.0, 100.0, 0), 0.105).unwrap_err();
    assert_eq!(err, ProjectionError::InvalidPeriod { months: 0 });
}

#[test]
fn test_rejects_period_past_cap() {
    assert!(project_plan(&plan(1_000.0, 0.0, 100.0, MAX_PERIOD_MONTHS), 0.105).is_ok());
    let err = project_plan(&plan(1_000.0, 0.0, 100.0, MAX_PERIOD_MONTHS + 1), 0.105).unwrap_err();
    assert_eq!(
        err,
        ProjectionError::InvalidPeriod {
            months: MAX_PERIOD_MONTHS + 1
        }
    );
}

#[test]
fn test_rejects_negative_inputs() {
    assert!(matches!(
        project_plan(&plan(-1.0, 0.0, 100.0, 12), 0.105),
        Err(ProjectionError::InvalidAmount {
            field: "initial_amount",
            ..
        })
    ));
    assert!(matches!(
        project_plan(&plan(0.0, -1.0, 100.0, 12), 0.105),
        Err(ProjectionError::InvalidAmount {
            field: "monthly_contribution",
            ..
        })
    ));
    assert!(matches!(
        project_plan(&plan(0.0, 0.0, -100.0, 12), 0.105),
        Err(ProjectionError::InvalidAmount {
            field: "rate_percent_of_benchmark",
            ..
        })
    ));
    assert!(matches!(
        project_plan(&plan(0.0, 0.0, 100.0, 12), -0.105),
        Err(ProjectionError::InvalidAmount {
            field: "benchmark_annual_rate",
            ..
        })
    ));
}

#[test]
fn test_rejects_non_finite_inputs() {
    assert!(matches!(
        project_plan(&plan(f64::NAN, 0.0, 100.0, 12), 0.105),
        Err(ProjectionError::InvalidAmount { .. })
    ));
    assert!(matches!(
        project_plan(&plan(f64::INFINITY, 0.0, 100.0, 12), 0.105),
        Err(ProjectionError::InvalidAmount { .. })
    ));
}
