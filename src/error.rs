//! Domain error types for wheelpick
//!
//! Provides structured error types for different domains:
//! - `PickerError` for the column/composer engine
//! - `WheelpickError` as the top-level error type

use thiserror::Error;

/// Top-level error type for wheelpick
#[derive(Debug, Error)]
pub enum WheelpickError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the picker engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// The current value has no matching option. Recovered locally by
    /// falling back to the first option; only ever logged.
    #[error("\"{column}\" doesn't contain an option of \"{value}\"")]
    ValueNotFound { column: String, value: String },

    #[error("Column \"{0}\" has no options")]
    EmptyOptionList(String),

    #[error("Unknown column \"{0}\"")]
    UnknownColumn(String),

    #[error("Invalid metrics: item height {item_height}, column height {column_height}")]
    InvalidMetrics { item_height: f64, column_height: f64 },
}

/// Result type alias for WheelpickError
pub type Result<T> = std::result::Result<T, WheelpickError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_not_found_message() {
        let err = PickerError::ValueNotFound {
            column: "day".to_string(),
            value: "31".to_string(),
        };
        assert_eq!(err.to_string(), "\"day\" doesn't contain an option of \"31\"");
    }

    #[test]
    fn test_picker_error_converts_to_top_level() {
        let err: WheelpickError = PickerError::UnknownColumn("hour".to_string()).into();
        assert!(matches!(err, WheelpickError::Picker(PickerError::UnknownColumn(_))));
        assert_eq!(err.to_string(), "Picker error: Unknown column \"hour\"");
    }
}
