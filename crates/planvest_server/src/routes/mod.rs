pub mod projections;

pub use projections::projection_routes;
