//! Projection outputs
//!
//! Monetary fields are rounded to 2 decimal places here, at the output
//! boundary. Accumulation upstream stays unrounded so repeated rounding
//! cannot drift the totals.

use serde::{Deserialize, Serialize};

/// Round a monetary value to 2 decimal places
#[must_use]
#[inline]
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Outcome of projecting a single plan or position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Principal contributed over the whole period
    pub total_invested: f64,
    /// Pre-tax earnings
    pub gross_yield: f64,
    /// Withholding rate applied, as a fraction
    pub tax_rate: f64,
    /// Tax withheld on earnings; zero when there are no earnings
    pub tax_value: f64,
    /// Earnings after tax
    pub net_yield: f64,
    /// `total_invested + net_yield`
    pub final_amount: f64,
}

impl ProjectionResult {
    /// Derive the tax and net fields from unrounded totals.
    ///
    /// Losses are not credited: tax applies only when the gross yield is
    /// positive. `final_amount` is computed from the already-rounded
    /// components so that `total_invested + net_yield == final_amount`
    /// holds exactly on the returned value.
    pub(crate) fn from_gross(total_invested: f64, gross_yield: f64, tax_rate: f64) -> Self {
        let tax_value = if gross_yield > 0.0 {
            gross_yield * tax_rate
        } else {
            0.0
        };
        let total_invested = round_currency(total_invested);
        let net_yield = round_currency(gross_yield - tax_value);
        Self {
            total_invested,
            gross_yield: round_currency(gross_yield),
            tax_rate,
            tax_value: round_currency(tax_value),
            net_yield,
            final_amount: round_currency(total_invested + net_yield),
        }
    }
}

/// Aggregate portfolio value at one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Horizon length in years
    pub years: u32,
    pub total_invested: f64,
    pub net_yield: f64,
    pub final_amount: f64,
}

/// A portfolio projected at each configured horizon
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioProjection {
    pub projections: Vec<ProjectionPoint>,
}
