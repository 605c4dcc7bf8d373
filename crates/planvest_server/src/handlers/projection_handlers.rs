use axum::Json;

use planvest_core::model::{PortfolioProjection, ProjectionResult};
use planvest_core::portfolio::{DEFAULT_HORIZONS_YEARS, project_portfolio};
use planvest_core::projection::project_plan;
use planvest_core::rates::DEFAULT_BENCHMARK_ANNUAL_RATE;
use planvest_core::taxes::{LONG_HOLDING_RATE, REGRESSIVE_SCHEDULE};

use crate::api_types::{
    PlanProjectionRequest, PortfolioProjectionRequest, ReferenceData, WithholdingBracketDef,
};
use crate::error::ApiResult;
use crate::validation;

// ============================================================================
// Projection Handlers
// ============================================================================

pub async fn run_plan_projection(
    Json(req): Json<PlanProjectionRequest>,
) -> ApiResult<Json<ProjectionResult>> {
    validation::validate_plan_request(&req)?;

    let (plan, benchmark) = req.into_plan();
    let result = project_plan(&plan, benchmark)?;

    Ok(Json(result))
}

pub async fn run_portfolio_projection(
    Json(req): Json<PortfolioProjectionRequest>,
) -> ApiResult<Json<PortfolioProjection>> {
    validation::validate_portfolio_request(&req)?;

    let PortfolioProjectionRequest {
        holdings,
        benchmark_annual_rate,
        horizons_years,
    } = req;

    let benchmark = benchmark_annual_rate.unwrap_or(DEFAULT_BENCHMARK_ANNUAL_RATE);
    let horizons = horizons_years.unwrap_or_else(|| DEFAULT_HORIZONS_YEARS.to_vec());
    let holdings = holdings
        .into_iter()
        .enumerate()
        .map(|(i, def)| def.into_holding(i))
        .collect::<ApiResult<Vec<_>>>()?;

    let projection = project_portfolio(&holdings, benchmark, &horizons)?;

    Ok(Json(projection))
}

/// Assumptions the client shows next to projection results
pub async fn get_reference_data() -> Json<ReferenceData> {
    let mut withholding_brackets: Vec<WithholdingBracketDef> = REGRESSIVE_SCHEDULE
        .iter()
        .map(|&(max_days, rate)| WithholdingBracketDef {
            max_days: Some(max_days),
            rate,
        })
        .collect();
    withholding_brackets.push(WithholdingBracketDef {
        max_days: None,
        rate: LONG_HOLDING_RATE,
    });

    Json(ReferenceData {
        benchmark_annual_rate: DEFAULT_BENCHMARK_ANNUAL_RATE,
        default_horizons_years: DEFAULT_HORIZONS_YEARS.to_vec(),
        withholding_brackets,
    })
}
