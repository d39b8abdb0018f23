use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = GateError::Config("Missing mandatory key DIR_CONFIGS in test.yaml".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing mandatory key DIR_CONFIGS in test.yaml"
    );
}

#[test]
fn error_display_config_read() {
    let err = GateError::ConfigRead {
        path: PathBuf::from("checkpatch.yaml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("checkpatch.yaml"));
}

#[test]
fn error_display_malformed_diagnostic() {
    let err = GateError::MalformedDiagnostic {
        line: "not a diagnostic".to_string(),
    };
    assert!(err.to_string().contains("not a diagnostic"));
}

#[test]
fn error_display_checker() {
    let err = GateError::Checker {
        program: "checkpatch.pl".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.to_string(), "Failed to run checker 'checkpatch.pl'");
}

#[test]
fn error_display_git() {
    let err = GateError::Git("Failed to resolve HEAD commit".to_string());
    assert_eq!(err.to_string(), "Git error: Failed to resolve HEAD commit");
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    let err: GateError = io.into();
    assert!(matches!(err, GateError::Io(_)));
}
