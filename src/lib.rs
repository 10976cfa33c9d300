//! Predict - single-period revenue forecast
//!
//! Projects next-period revenue from the current figure and a growth rate,
//! and reports the outcome as one structured record.
//!
//! # Features
//!
//! - Linear projection `current_revenue * (1 + growth_rate)`, rounded to cents
//! - Tagged success/error result record with a stable JSON shape
//! - Explicit error taxonomy for missing arguments, bad numbers and
//!   unexpected failures
//!
//! # Example
//!
//! ```
//! use royalbit_predict::cli::run;
//! use royalbit_predict::types::ForecastRecord;
//!
//! let record = run(&["1000", "0.05"]);
//! assert!(record.is_success());
//!
//! let record = run(&["abc", "0.05"]);
//! assert!(matches!(record, ForecastRecord::Error { .. }));
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ForecastError, ForecastResult};
pub use types::{ForecastInput, ForecastRecord, CONFIDENCE};
