use crate::error::{GateError, Result};

use super::model::{
    DirConfigSource, Document, ERRORS_COMMON_KEY, IGNORES_COMMON_KEY, RuleConfig,
};

/// Resolve a directory config against its document: apply defaults and
/// expand magic group references.
///
/// Pure: the same `(dconfig, document)` pair always yields the same
/// `RuleConfig`. Calling it on an already-resolved list (no reference
/// token left) is a no-op.
///
/// # Errors
/// Returns a [`GateError::Config`] if a referenced group is not declared
/// at the document root.
pub fn resolve(dconfig: &DirConfigSource, document: &Document) -> Result<RuleConfig> {
    let errors_enabled = expand_group(&dconfig.errors_enabled, ERRORS_COMMON_KEY, document)?;
    let errors_ignored = expand_group(&dconfig.errors_ignored, IGNORES_COMMON_KEY, document)?;

    Ok(RuleConfig {
        errors_enabled,
        errors_ignored,
        max_line_length: dconfig.max_line_length.clone(),
    })
}

/// Strip the reference token from `entries` and append the named group's
/// values after the remaining entries.
fn expand_group(entries: &[String], group_key: &str, document: &Document) -> Result<Vec<String>> {
    if !entries.iter().any(|entry| entry == group_key) {
        return Ok(entries.to_vec());
    }

    let group = document.groups.get(group_key).ok_or_else(|| {
        GateError::Config(format!(
            "Unknown key {group_key} in {}",
            document.path.display()
        ))
    })?;

    let mut expanded: Vec<String> = entries
        .iter()
        .filter(|entry| *entry != group_key)
        .cloned()
        .collect();
    expanded.extend(group.iter().cloned());
    Ok(expanded)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
