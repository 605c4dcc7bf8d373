//! Benchmark rate constants and compound-rate conversions
//!
//! Every yield in this crate is quoted as a percentage of a single benchmark
//! annual rate (the CDI, the Brazilian interbank rate). The benchmark is
//! always passed in by the caller; the constant below is the mocked value
//! the product ships with.

/// Default benchmark annual rate (10.5% a.a.)
pub const DEFAULT_BENCHMARK_ANNUAL_RATE: f64 = 0.105;

/// Annual rate earned by an instrument quoted at `percent_of_benchmark`%
/// of the benchmark (e.g. 110.0 means 110% of the benchmark)
#[must_use]
#[inline]
pub fn effective_annual_rate(benchmark_annual_rate: f64, percent_of_benchmark: f64) -> f64 {
    benchmark_annual_rate * (percent_of_benchmark / 100.0)
}

/// Convert a yearly rate to a monthly rate using compound interest
#[must_use]
#[inline]
pub fn monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}
