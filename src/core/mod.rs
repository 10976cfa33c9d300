//! Core forecast calculation

pub mod forecast;

pub use forecast::{compute_forecast, round_to};
