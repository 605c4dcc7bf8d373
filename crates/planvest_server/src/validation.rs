use planvest_core::projection::MAX_PERIOD_MONTHS;

use crate::api_types::{PlanProjectionRequest, PortfolioProjectionRequest};
use crate::error::{ApiError, ApiResult};

/// Cap on holdings in a single request
const MAX_HOLDINGS_PER_REQUEST: usize = 500;

/// Cap on a projection horizon in years
const MAX_HORIZON_YEARS: u32 = 100;

/// Validate a plan projection request
pub fn validate_plan_request(req: &PlanProjectionRequest) -> ApiResult<()> {
    if req.period_months == 0 {
        return Err(ApiError::ValidationError {
            field: "period_months".to_string(),
            message: "Period must be at least 1 month".to_string(),
        });
    }

    if req.period_months > MAX_PERIOD_MONTHS {
        return Err(ApiError::ValidationError {
            field: "period_months".to_string(),
            message: format!("Period cannot exceed {MAX_PERIOD_MONTHS} months"),
        });
    }

    validate_non_negative("initial_amount", req.initial_amount)?;
    validate_non_negative("monthly_contribution", req.monthly_contribution)?;
    validate_non_negative("rate_percent_of_benchmark", req.rate_percent_of_benchmark)?;
    validate_benchmark(req.benchmark_annual_rate)?;

    Ok(())
}

/// Validate a portfolio projection request
pub fn validate_portfolio_request(req: &PortfolioProjectionRequest) -> ApiResult<()> {
    if req.holdings.len() > MAX_HOLDINGS_PER_REQUEST {
        return Err(ApiError::ValidationError {
            field: "holdings".to_string(),
            message: format!("Portfolio cannot exceed {MAX_HOLDINGS_PER_REQUEST} holdings"),
        });
    }

    for (i, holding) in req.holdings.iter().enumerate() {
        validate_non_negative(&format!("holdings[{i}].amount"), holding.amount)?;
        validate_non_negative(
            &format!("holdings[{i}].rate_percent_of_benchmark"),
            holding.rate_percent_of_benchmark,
        )?;
    }

    if let Some(horizons) = &req.horizons_years {
        if horizons.is_empty() {
            return Err(ApiError::ValidationError {
                field: "horizons_years".to_string(),
                message: "At least one horizon is required".to_string(),
            });
        }
        for &years in horizons {
            if years == 0 || years > MAX_HORIZON_YEARS {
                return Err(ApiError::ValidationError {
                    field: "horizons_years".to_string(),
                    message: format!(
                        "Horizons must be between 1 and {MAX_HORIZON_YEARS} years, got {years}"
                    ),
                });
            }
        }
    }

    validate_benchmark(req.benchmark_annual_rate)?;

    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> ApiResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::ValidationError {
            field: field.to_string(),
            message: format!("Must be a non-negative number, got {value}"),
        });
    }
    Ok(())
}

fn validate_benchmark(rate: Option<f64>) -> ApiResult<()> {
    if let Some(rate) = rate {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ApiError::ValidationError {
                field: "benchmark_annual_rate".to_string(),
                message: "Benchmark rate must be a fraction between 0 and 1".to_string(),
            });
        }
    }
    Ok(())
}
