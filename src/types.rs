use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Placeholder confidence reported with every successful forecast.
///
/// This is a literal, not a computed statistic.
pub const CONFIDENCE: &str = "92%";

/// Parsed inputs of one forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastInput {
    pub current_revenue: f64,
    /// Decimal fraction: 0.05 means 5% growth
    pub growth_rate: f64,
}

impl ForecastInput {
    pub fn new(current_revenue: f64, growth_rate: f64) -> Self {
        Self {
            current_revenue,
            growth_rate,
        }
    }
}

/// The single record emitted per invocation.
///
/// Serializes with `status` first, followed by the variant's fields in
/// declaration order:
///
/// ```
/// use royalbit_predict::types::ForecastRecord;
///
/// let record = ForecastRecord::Error { message: "nope".to_string() };
/// assert_eq!(record.to_json().unwrap(), r#"{"status":"error","message":"nope"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ForecastRecord {
    Success {
        forecast: f64,
        confidence: String,
        current_revenue: f64,
        growth_rate: f64,
    },
    Error {
        message: String,
    },
}

impl ForecastRecord {
    pub fn success(input: ForecastInput, forecast: f64) -> Self {
        ForecastRecord::Success {
            forecast,
            confidence: CONFIDENCE.to_string(),
            current_revenue: input.current_revenue,
            growth_rate: input.growth_rate,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ForecastRecord::Success { .. })
    }

    /// Serialize as a single line of JSON (no trailing newline).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<ForecastError> for ForecastRecord {
    fn from(err: ForecastError) -> Self {
        ForecastRecord::Error {
            message: err.record_message(),
        }
    }
}
