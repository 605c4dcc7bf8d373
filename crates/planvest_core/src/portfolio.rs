//! Portfolio projection: lump-sum holdings compounded annually and projected
//! independently at fixed year horizons.
//!
//! The annual stepping here is deliberately coarser than the monthly stepping
//! in [`crate::projection`]; the two models come from different product
//! screens and are kept separate on purpose.

use crate::error::{ProjectionError, Result};
use crate::model::{Holding, PortfolioProjection, ProjectionPoint, round_currency};
use crate::projection::check_non_negative;
use crate::rates::effective_annual_rate;
use crate::taxes::withholding_rate;

/// Days per year fed to the withholding schedule (no leap-year handling)
const DAYS_PER_YEAR: u32 = 365;

/// Horizons the product shows by default
pub const DEFAULT_HORIZONS_YEARS: [u32; 3] = [1, 5, 10];

/// Project every holding at each horizon and aggregate per horizon.
///
/// Each holding grows as a lump sum at its own effective rate; withholding
/// tax is taken per holding on positive gross yield only, at the rate for
/// `years * 365` days. An empty portfolio yields all-zero points rather
/// than an error.
pub fn project_portfolio(
    holdings: &[Holding],
    benchmark_annual_rate: f64,
    horizons_years: &[u32],
) -> Result<PortfolioProjection> {
    check_non_negative("benchmark_annual_rate", benchmark_annual_rate)?;
    for holding in holdings {
        check_non_negative("amount", holding.amount)?;
        check_non_negative("rate_percent_of_benchmark", holding.rate_percent_of_benchmark)?;
    }

    let mut projections = Vec::with_capacity(horizons_years.len());
    for &years in horizons_years {
        let tax_rate = withholding_rate(years.saturating_mul(DAYS_PER_YEAR));

        let mut total_invested = 0.0;
        let mut final_amount = 0.0;
        for holding in holdings {
            let annual =
                effective_annual_rate(benchmark_annual_rate, holding.rate_percent_of_benchmark);
            let future_value = holding.amount * (1.0 + annual).powf(f64::from(years));
            if !future_value.is_finite() {
                return Err(ProjectionError::NotFinite {
                    what: "projected holding value",
                });
            }

            let gross_yield = future_value - holding.amount;
            let tax_value = if gross_yield > 0.0 {
                gross_yield * tax_rate
            } else {
                0.0
            };
            let net_yield = gross_yield - tax_value;

            final_amount += holding.amount + net_yield;
            total_invested += holding.amount;
        }

        let net_yield = round_currency(final_amount - total_invested);
        let total_invested = round_currency(total_invested);
        projections.push(ProjectionPoint {
            years,
            total_invested,
            net_yield,
            final_amount: round_currency(total_invested + net_yield),
        });
    }

    Ok(PortfolioProjection { projections })
}
