//! Tests for the ize error handling system.

use std::collections::HashSet;

use ize_core::errors::error_code::IzeErrorCode;
use ize_core::errors::label_error::is_retryable_status;
use ize_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert!(!config.error_code().is_empty());

    let label = LabelError::Timeout { timeout_ms: 30_000 };
    assert!(!label.error_code().is_empty());
}

#[test]
fn test_from_conversions() {
    let err: IzeError = ConfigError::ValidationFailed {
        field: "rules.min_lift".into(),
        message: "bad".into(),
    }
    .into();
    assert!(matches!(err, IzeError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: IzeError = LabelError::EmptyLabel.into();
    assert!(matches!(err, IzeError::Label(LabelError::EmptyLabel)));
    assert_eq!(err.error_code(), "LABEL_EMPTY");
}

#[test]
fn test_label_error_codes_unique() {
    let errors = [
        LabelError::Unavailable {
            provider: "x".into(),
        },
        LabelError::Timeout { timeout_ms: 1 },
        LabelError::Transient {
            status: None,
            message: "x".into(),
        },
        LabelError::Rejected {
            status: 400,
            message: "x".into(),
        },
        LabelError::EmptyLabel,
    ];
    let codes: HashSet<&str> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_coded_string_format() {
    let err = LabelError::Rejected {
        status: 401,
        message: "invalid key".into(),
    };
    assert_eq!(
        err.coded_string(),
        "[LABEL_REJECTED] label request rejected (status 401): invalid key"
    );
}

#[test]
fn test_retryability() {
    for status in [429, 500, 502, 503, 529] {
        assert!(is_retryable_status(status), "{status} should retry");
        assert!(LabelError::Transient {
            status: Some(status),
            message: String::new()
        }
        .is_retryable());
    }
    for status in [400, 401, 403, 404] {
        assert!(!is_retryable_status(status), "{status} should not retry");
    }
    assert!(LabelError::Timeout { timeout_ms: 10 }.is_retryable());
    assert!(!LabelError::EmptyLabel.is_retryable());
    assert!(!LabelError::Rejected {
        status: 429,
        message: String::new()
    }
    .is_retryable());
}
