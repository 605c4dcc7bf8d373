//! Regressive withholding tax on fixed-income earnings
//!
//! Earnings on fixed-income instruments are taxed at source at a rate that
//! falls as the holding period grows. The schedule is an ordered breakpoint
//! table keyed on days invested; upper bounds are inclusive.

/// Regressive schedule as (upper bound in days, inclusive, rate on earnings)
pub const REGRESSIVE_SCHEDULE: [(u32, f64); 3] = [(180, 0.225), (360, 0.200), (720, 0.175)];

/// Rate applied to holdings longer than the last breakpoint
pub const LONG_HOLDING_RATE: f64 = 0.150;

/// Withholding rate on gross earnings after `days_invested` days
///
/// Returned as a fraction (0.175 means 17.5%), monotonically non-increasing
/// in `days_invested`. The tax applies to earnings only, never to principal.
#[must_use]
pub fn withholding_rate(days_invested: u32) -> f64 {
    for (max_days, rate) in REGRESSIVE_SCHEDULE {
        if days_invested <= max_days {
            return rate;
        }
    }
    LONG_HOLDING_RATE
}
