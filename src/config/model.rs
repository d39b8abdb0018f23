use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

/// Sentinel directory key for the catch-all rule-set.
pub const DEFAULT_DIR_KEY: &str = "__default__";

/// Mandatory top-level key holding the per-directory configs.
pub const DIR_CONFIGS_KEY: &str = "DIR_CONFIGS";

/// Optional top-level key listing files excluded from every check.
pub const IGNORED_FILES_KEY: &str = "IGNORED_FILES";

/// Named group spliced into `errors_enabled` via magic reference.
pub const ERRORS_COMMON_KEY: &str = "ERRORS_COMMON";

/// Named group spliced into `errors_ignored` via magic reference.
pub const IGNORES_COMMON_KEY: &str = "IGNORES_COMMON";

/// Top-level keys accepted by the schema. Anything else is a hard
/// validation failure.
pub const ALLOWED_KEYS: [&str; 4] = [
    DIR_CONFIGS_KEY,
    IGNORED_FILES_KEY,
    ERRORS_COMMON_KEY,
    IGNORES_COMMON_KEY,
];

/// Max line length as written in the config: either a number or a string
/// token. Passed verbatim to the checker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LineLength {
    Number(u64),
    Text(String),
}

impl fmt::Display for LineLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One directory's rule config as written in the document, before
/// magic-key expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirConfigSource {
    /// Diagnostic categories to explicitly enable (`--types`).
    #[serde(default)]
    pub errors_enabled: Vec<String>,

    /// Diagnostic categories to suppress (`--ignore`). Takes precedence
    /// over `errors_enabled` when both are non-empty.
    #[serde(default)]
    pub errors_ignored: Vec<String>,

    /// Line length limit; absent means the checker default.
    #[serde(default)]
    pub max_line_length: Option<LineLength>,
}

/// A directory's rule config after named-group expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfig {
    pub errors_enabled: Vec<String>,
    pub errors_ignored: Vec<String>,
    pub max_line_length: Option<LineLength>,
}

/// The loaded and validated configuration document.
///
/// `dir_configs` preserves declaration order; routing and checker
/// invocations follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Source path, kept for error messages.
    pub path: PathBuf,

    /// Per-directory configs, keyed by path string or [`DEFAULT_DIR_KEY`].
    pub dir_configs: IndexMap<String, DirConfigSource>,

    /// Files excluded from every directory's subset.
    pub ignored_files: Vec<PathBuf>,

    /// Named diagnostic groups declared at the document root.
    pub groups: IndexMap<String, Vec<String>>,
}

impl Document {
    /// Whether the given path is listed in `IGNORED_FILES`.
    #[must_use]
    pub fn is_ignored(&self, path: &std::path::Path) -> bool {
        self.ignored_files.iter().any(|p| p == path)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
