pub mod projection_handlers;

pub use projection_handlers::*;
