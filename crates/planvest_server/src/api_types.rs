//! REST API-friendly types for projection requests
//!
//! These types are designed for JSON serialization from the web client.
//! Holding dates travel as "YYYY-MM-DD" strings and are parsed during
//! conversion. TypeScript types are automatically generated using ts-rs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API request to project a recurring-contribution plan
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanProjectionRequest {
    /// Amount deposited when the plan starts
    pub initial_amount: f64,
    /// Amount added every month after the first
    pub monthly_contribution: f64,
    /// Stated yield as a percentage of the benchmark annual rate
    pub rate_percent_of_benchmark: f64,
    /// Plan length in months
    pub period_months: u32,
    /// Override for the benchmark annual rate (fraction, e.g. 0.105)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_annual_rate: Option<f64>,
}

/// One holding in a portfolio projection request
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HoldingDef {
    pub id: String,
    /// Free-form instrument label (CDB, LCI, treasury bond, ...)
    pub kind: String,
    pub name: String,
    pub institution: String,
    /// Invested amount
    pub amount: f64,
    /// Stated yield as a percentage of the benchmark annual rate
    pub rate_percent_of_benchmark: f64,
    /// Acquisition date (YYYY-MM-DD)
    pub acquired: String,
}

/// API request to project a portfolio at fixed horizons
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PortfolioProjectionRequest {
    #[serde(default)]
    pub holdings: Vec<HoldingDef>,
    /// Override for the benchmark annual rate (fraction, e.g. 0.105)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_annual_rate: Option<f64>,
    /// Horizons in years; defaults to 1/5/10 when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizons_years: Option<Vec<u32>>,
}

/// Assumptions behind projections, for display in the client
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceData {
    /// Benchmark annual rate used when a request does not override it
    pub benchmark_annual_rate: f64,
    /// Default projection horizons in years
    pub default_horizons_years: Vec<u32>,
    /// Regressive withholding schedule on earnings
    pub withholding_brackets: Vec<WithholdingBracketDef>,
}

/// One row of the regressive withholding schedule
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WithholdingBracketDef {
    /// Upper bound in days, inclusive; None for the open-ended bracket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_days: Option<u32>,
    /// Rate on earnings, as a fraction
    pub rate: f64,
}
