use std::path::PathBuf;

use crate::checkpatch::{CheckerInvoker, file_check_request};
use crate::config::{Document, resolve};
use crate::diagnostics::{DiagnosticMap, parse_into};
use crate::error::Result;
use crate::router::{FileInspector, route};

/// Orchestrates one checker invocation per applicable directory config.
pub struct PreCommitHook<'a> {
    document: &'a Document,
    invoker: &'a dyn CheckerInvoker,
    fix_inplace: bool,
}

impl<'a> PreCommitHook<'a> {
    #[must_use]
    pub const fn new(
        document: &'a Document,
        invoker: &'a dyn CheckerInvoker,
        fix_inplace: bool,
    ) -> Self {
        Self {
            document,
            invoker,
            fix_inplace,
        }
    }

    /// Route the changed files, run the checker once per non-empty subset
    /// and aggregate diagnostics across all directories. Every directory
    /// is attempted; a subset that produces diagnostics does not stop the
    /// remaining ones.
    ///
    /// # Errors
    /// Returns an error on unresolvable group references, checker spawn
    /// failures or malformed checker output. Diagnostics themselves are
    /// not an error; they are the returned map.
    pub fn run(
        &self,
        changed_files: &[PathBuf],
        inspector: &dyn FileInspector,
    ) -> Result<DiagnosticMap> {
        let routes = route(changed_files, self.document, inspector);
        let mut diagnostics = DiagnosticMap::new();

        for (dir_key, files) in &routes {
            // Routing only yields keys that exist in the document.
            let Some(dconfig) = self.document.dir_configs.get(dir_key) else {
                continue;
            };
            let rules = resolve(dconfig, self.document)?;
            let request = file_check_request(files, &rules, self.fix_inplace);

            tracing::debug!("Running checker for {dir_key} with: {}", request.render());
            let output = self.invoker.invoke(&request)?;

            if !output.clean {
                parse_into(&output.stdout, &mut diagnostics)?;
            }
        }

        Ok(diagnostics)
    }
}

#[cfg(test)]
#[path = "pre_commit_tests.rs"]
mod tests;
