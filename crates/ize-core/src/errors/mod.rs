//! Error handling for ize.
//! One error enum per subsystem, `thiserror` only.
//!
//! The grouping algorithms are total and never fail; errors only come from
//! configuration loading and the external label generator.

pub mod config_error;
pub mod error_code;
pub mod label_error;

pub use config_error::ConfigError;
pub use error_code::IzeErrorCode;
pub use label_error::LabelError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum IzeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Label error: {0}")]
    Label(#[from] LabelError),
}

impl IzeErrorCode for IzeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Label(e) => e.error_code(),
        }
    }
}

/// Result alias used across the workspace.
pub type IzeResult<T> = Result<T, IzeError>;
