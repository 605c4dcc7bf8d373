//! Convert API DTOs into core projection inputs
//!
//! Date strings are parsed here so that handlers only ever see core types.

use jiff::civil::Date;
use planvest_core::model::{Holding, InvestmentPlan};
use planvest_core::rates::DEFAULT_BENCHMARK_ANNUAL_RATE;

use crate::api_types::{HoldingDef, PlanProjectionRequest};
use crate::error::{ApiError, ApiResult};

/// Parse a YYYY-MM-DD date string
pub fn parse_date(field: &str, s: &str) -> ApiResult<Date> {
    s.parse().map_err(|_| ApiError::ValidationError {
        field: field.to_string(),
        message: format!("invalid date '{s}', expected YYYY-MM-DD"),
    })
}

impl PlanProjectionRequest {
    /// Split this request into the core plan and the benchmark rate to use
    pub fn into_plan(self) -> (InvestmentPlan, f64) {
        let benchmark = self
            .benchmark_annual_rate
            .unwrap_or(DEFAULT_BENCHMARK_ANNUAL_RATE);
        let plan = InvestmentPlan {
            initial_amount: self.initial_amount,
            monthly_contribution: self.monthly_contribution,
            rate_percent_of_benchmark: self.rate_percent_of_benchmark,
            period_months: self.period_months,
        };
        (plan, benchmark)
    }
}

impl HoldingDef {
    /// Convert this DTO into a core `Holding`, parsing the acquisition date
    pub fn into_holding(self, index: usize) -> ApiResult<Holding> {
        let acquired = parse_date(&format!("holdings[{index}].acquired"), &self.acquired)?;
        Ok(Holding {
            id: self.id,
            kind: self.kind,
            name: self.name,
            institution: self.institution,
            amount: self.amount,
            rate_percent_of_benchmark: self.rate_percent_of_benchmark,
            acquired,
        })
    }
}
