use std::num::ParseFloatError;

use thiserror::Error;

pub type ForecastResult<T> = Result<T, ForecastError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Missing arguments: expected <current_revenue> <growth_rate>")]
    InvalidArguments,

    #[error("could not convert string to float: '{token}'")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl ForecastError {
    /// True for failures caused by what the caller typed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ForecastError::InvalidArguments | ForecastError::InvalidNumber { .. }
        )
    }

    /// Message carried by the error record.
    ///
    /// Input failures get the `Invalid input: ` prefix; unexpected failures are
    /// reported with their own description only.
    pub fn record_message(&self) -> String {
        if self.is_invalid_input() {
            format!("Invalid input: {self}")
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invalid_number(token: &str) -> ForecastError {
        let source = token.parse::<f64>().unwrap_err();
        ForecastError::InvalidNumber {
            token: token.to_string(),
            source,
        }
    }

    #[test]
    fn test_missing_arguments_message() {
        assert_eq!(
            ForecastError::InvalidArguments.record_message(),
            "Invalid input: Missing arguments: expected <current_revenue> <growth_rate>"
        );
    }

    #[test]
    fn test_invalid_number_message() {
        assert_eq!(
            invalid_number("abc").record_message(),
            "Invalid input: could not convert string to float: 'abc'"
        );
    }

    #[test]
    fn test_unexpected_has_no_prefix() {
        let err = ForecastError::Unexpected("boom".to_string());
        assert!(!err.is_invalid_input());
        assert_eq!(err.record_message(), "boom");
    }

    #[test]
    fn test_invalid_number_keeps_source() {
        use std::error::Error;
        assert!(invalid_number("1.2.3").source().is_some());
    }
}
