use indexmap::IndexMap;

use crate::error::{GateError, Result};

/// Pseudo-file the checker reports commit-message diagnostics against
/// (an empty file component in its output).
pub const COMMIT_MSG_FILE: &str = "/COMMIT_MSG";

/// One diagnostic emitted by the external checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub file: String,
    pub line: u32,
    pub message: String,
}

/// Diagnostics grouped per file, first-seen file order and per-file input
/// order preserved.
pub type DiagnosticMap = IndexMap<String, Vec<DiagnosticRecord>>;

/// Parse checker output into `diagnostics`, appending to existing entries.
///
/// Each line has the form `file:line:message`; the first two colons are
/// delimiters, the remainder (further colons included) is the message. An
/// empty file component maps to [`COMMIT_MSG_FILE`].
///
/// # Errors
/// Returns a [`GateError::MalformedDiagnostic`] for any line that does not
/// split into three fields with a numeric line number. The checker output
/// contract is violated in that case; nothing is dropped silently.
pub fn parse_into(output: &str, diagnostics: &mut DiagnosticMap) -> Result<()> {
    for raw in output.lines() {
        let record = parse_line(raw)?;
        diagnostics
            .entry(record.file.clone())
            .or_default()
            .push(record);
    }
    Ok(())
}

fn parse_line(raw: &str) -> Result<DiagnosticRecord> {
    let malformed = || GateError::MalformedDiagnostic {
        line: raw.to_string(),
    };

    let mut parts = raw.splitn(3, ':');
    let file = parts.next().ok_or_else(malformed)?;
    let line_field = parts.next().ok_or_else(malformed)?;
    let message = parts.next().ok_or_else(malformed)?;

    let line: u32 = line_field.trim().parse().map_err(|_| malformed())?;

    let file = if file.is_empty() {
        COMMIT_MSG_FILE.to_string()
    } else {
        file.to_string()
    };

    Ok(DiagnosticRecord {
        file,
        line,
        message: message.trim().to_string(),
    })
}

/// Log aggregated diagnostics, one file header and one indented row per
/// record.
pub fn report(diagnostics: &DiagnosticMap) {
    for (file, records) in diagnostics {
        tracing::error!("{file}:");
        for record in records {
            tracing::error!("  {}: {}", record.line, record.message);
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
