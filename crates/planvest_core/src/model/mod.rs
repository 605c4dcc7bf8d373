mod inputs;
mod results;

pub use inputs::{Holding, InvestmentPlan};
pub use results::{PortfolioProjection, ProjectionPoint, ProjectionResult, round_currency};
