//! IzeErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that callers (an HTTP layer, logs) can match on.
pub trait IzeErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LABEL_UNAVAILABLE: &str = "LABEL_UNAVAILABLE";
pub const LABEL_TIMEOUT: &str = "LABEL_TIMEOUT";
pub const LABEL_TRANSIENT: &str = "LABEL_TRANSIENT";
pub const LABEL_REJECTED: &str = "LABEL_REJECTED";
pub const LABEL_EMPTY: &str = "LABEL_EMPTY";
