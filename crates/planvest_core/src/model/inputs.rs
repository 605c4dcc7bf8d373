//! Caller-supplied projection inputs

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A recurring-contribution savings plan: an initial deposit plus a fixed
/// amount added every month, compounding monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Amount deposited when the plan starts
    pub initial_amount: f64,
    /// Amount added at the start of every month after the first
    pub monthly_contribution: f64,
    /// Stated yield as a percentage of the benchmark annual rate (100 = 100%)
    pub rate_percent_of_benchmark: f64,
    /// Number of monthly compounding steps
    pub period_months: u32,
}

/// A lump-sum position held at some institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    /// Free-form instrument label (CDB, LCI, treasury bond, ...)
    pub kind: String,
    pub name: String,
    pub institution: String,
    /// Invested amount
    pub amount: f64,
    /// Stated yield as a percentage of the benchmark annual rate
    pub rate_percent_of_benchmark: f64,
    /// Acquisition date; informational only, not used in compounding
    pub acquired: Date,
}
