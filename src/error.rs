use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Malformed checker output line: {line:?}")]
    MalformedDiagnostic { line: String },

    #[error("Failed to run checker '{program}'")]
    Checker {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git error: {0}")]
    Git(String),
}

pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
