//! Single-instrument projection: a recurring-contribution plan compounded
//! month by month.

use crate::error::{ProjectionError, Result};
use crate::model::{InvestmentPlan, ProjectionResult};
use crate::rates::{effective_annual_rate, monthly_rate};
use crate::taxes::withholding_rate;

/// Days per month fed to the withholding schedule. The tax brackets work on
/// a 30-day-month approximation, not the calendar.
const DAYS_PER_MONTH: u32 = 30;

/// Upper bound on plan length (100 years), keeping the stepping loop bounded
pub const MAX_PERIOD_MONTHS: u32 = 1200;

/// Project a recurring-contribution plan over its whole period.
///
/// The contribution posts at the start of every month after the first, then
/// that month's interest accrues on the full balance. Withholding tax is
/// taken on the gross yield at the rate for `period_months * 30` days.
/// Monetary fields of the result are rounded to 2 decimal places.
pub fn project_plan(plan: &InvestmentPlan, benchmark_annual_rate: f64) -> Result<ProjectionResult> {
    validate_plan(plan, benchmark_annual_rate)?;

    let annual = effective_annual_rate(benchmark_annual_rate, plan.rate_percent_of_benchmark);
    let rate = monthly_rate(annual);

    let mut total_amount = plan.initial_amount;
    let mut total_invested = plan.initial_amount;
    for month in 1..=plan.period_months {
        if month > 1 {
            total_amount += plan.monthly_contribution;
            total_invested += plan.monthly_contribution;
        }
        total_amount += total_amount * rate;
    }

    if !total_amount.is_finite() {
        return Err(ProjectionError::NotFinite {
            what: "projected balance",
        });
    }

    let gross_yield = total_amount - total_invested;
    let days_invested = plan.period_months * DAYS_PER_MONTH;
    let tax_rate = withholding_rate(days_invested);

    Ok(ProjectionResult::from_gross(
        total_invested,
        gross_yield,
        tax_rate,
    ))
}

fn validate_plan(plan: &InvestmentPlan, benchmark_annual_rate: f64) -> Result<()> {
    if plan.period_months == 0 || plan.period_months > MAX_PERIOD_MONTHS {
        return Err(ProjectionError::InvalidPeriod {
            months: plan.period_months,
        });
    }
    check_non_negative("initial_amount", plan.initial_amount)?;
    check_non_negative("monthly_contribution", plan.monthly_contribution)?;
    check_non_negative("rate_percent_of_benchmark", plan.rate_percent_of_benchmark)?;
    check_non_negative("benchmark_annual_rate", benchmark_annual_rate)?;
    Ok(())
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(ProjectionError::InvalidAmount { field, value });
    }
    Ok(())
}
