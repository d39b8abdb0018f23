use std::path::PathBuf;

use crate::config::RuleConfig;

/// Default external checker program.
pub const DEFAULT_PROGRAM: &str = "checkpatch.pl";

/// Flags passed on every invocation: strict mode, no kernel tree,
/// machine-parsable output, no summary, no color, no Signed-off-by
/// requirement.
pub const BASE_ARGS: [&str; 8] = [
    "--strict",
    "--no-tree",
    "--emacs",
    "--terse",
    "--showfile",
    "--no-summary",
    "--color=never",
    "--no-signoff",
];

/// Categories suppressed when checking a commit message: change-id,
/// long-commit-line, subject-line and commit-id checks only add noise
/// for a message-only patch.
pub const COMMIT_MSG_IGNORES: &str =
    "GERRIT_CHANGE_ID,COMMIT_LOG_LONG_LINE,EMAIL_SUBJECT,GIT_COMMIT_ID";

/// One fully assembled checker invocation: argument list plus an optional
/// stdin payload (commit-message mode feeds a patch through stdin instead
/// of naming files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerRequest {
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl CheckerRequest {
    /// Rendered argument list, for logging.
    #[must_use]
    pub fn render(&self) -> String {
        self.args.join(" ")
    }
}

/// Build the invocation for one directory's file subset.
///
/// `errors_ignored` wins over `errors_enabled` when both are non-empty;
/// `max_line_length` is passed verbatim.
#[must_use]
pub fn file_check_request(
    files: &[PathBuf],
    rules: &RuleConfig,
    fix_inplace: bool,
) -> CheckerRequest {
    let mut args: Vec<String> = BASE_ARGS.iter().map(ToString::to_string).collect();

    if fix_inplace {
        args.push("--fix-inplace".to_string());
    }

    if !rules.errors_ignored.is_empty() {
        args.push("--ignore".to_string());
        args.push(rules.errors_ignored.join(","));
    } else if !rules.errors_enabled.is_empty() {
        args.push("--types".to_string());
        args.push(rules.errors_enabled.join(","));
    }

    if let Some(limit) = &rules.max_line_length {
        args.push(format!("--max-line-length={limit}"));
    }

    args.push("--file".to_string());
    args.extend(files.iter().map(|p| p.display().to_string()));

    CheckerRequest { args, stdin: None }
}

/// Build the commit-message invocation: fixed ignore list, patch text fed
/// through stdin.
#[must_use]
pub fn commit_msg_request(patch: String) -> CheckerRequest {
    let mut args: Vec<String> = BASE_ARGS.iter().map(ToString::to_string).collect();
    args.push("--ignore".to_string());
    args.push(COMMIT_MSG_IGNORES.to_string());

    CheckerRequest {
        args,
        stdin: Some(patch),
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
