//! Deterministic investment projection library
//!
//! This crate computes fixed-income projections for a personal financial
//! planning product. It supports:
//! - Recurring-contribution plans (initial deposit + monthly contribution,
//!   compounding monthly)
//! - Lump-sum portfolio projections at fixed year horizons
//! - Regressive withholding tax on earnings, where the rate falls with the
//!   holding period
//!
//! All yield rates are quoted as a percentage of a single benchmark annual
//! rate, which callers pass in explicitly. Everything here is a pure
//! function: no I/O, no shared state, safe to call concurrently.
//!
//! ```
//! use planvest_core::{InvestmentPlan, project_plan};
//! use planvest_core::rates::DEFAULT_BENCHMARK_ANNUAL_RATE;
//!
//! let plan = InvestmentPlan {
//!     initial_amount: 1_000.0,
//!     monthly_contribution: 100.0,
//!     rate_percent_of_benchmark: 100.0,
//!     period_months: 12,
//! };
//!
//! let result = project_plan(&plan, DEFAULT_BENCHMARK_ANNUAL_RATE).unwrap();
//! assert!((result.final_amount - 2_229.37).abs() < 0.005);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod portfolio;
pub mod projection;
pub mod rates;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ProjectionError;
pub use model::{
    Holding, InvestmentPlan, PortfolioProjection, ProjectionPoint, ProjectionResult,
};
pub use portfolio::{DEFAULT_HORIZONS_YEARS, project_portfolio};
pub use projection::{MAX_PERIOD_MONTHS, project_plan};
pub use rates::DEFAULT_BENCHMARK_ANNUAL_RATE;
pub use taxes::withholding_rate;
