use std::path::PathBuf;

use crate::checkpatch::{CheckerInvoker, commit_msg_request};
use crate::diagnostics::{DiagnosticMap, parse_into};
use crate::error::Result;
use crate::git::CommitMessageSource;

/// Patch envelope wrapping a commit message so the checker can consume it
/// through stdin: RFC-2822-like header, the message as subject, a dummy
/// unified diff and the fixed footer.
const PATCH_TEMPLATE_HEADER: &str = "From: A Non <a.non@somewhere.com>\n";

const PATCH_TEMPLATE_BODY: &str = "\
---
 dummy.txt | 2 +-
 1 file changed, 1 insertion(+), 1 deletion(-)

diff --git a/dummy.txt b/dummy.txt
index 0000000..1111111 100644
--- a/dummy.txt
+++ b/dummy.txt
@@ -0,0 +1 @@
+dummy
--
";

/// Wrap a commit message in the patch envelope.
#[must_use]
pub fn msg_to_patch(commit_msg: &str) -> String {
    let date = chrono::Local::now().format("%a, %d %b %Y %H:%M:%S %z");
    format!(
        "{PATCH_TEMPLATE_HEADER}Date: {date}\nSubject: [PATCH] {commit_msg}\n{PATCH_TEMPLATE_BODY}"
    )
}

/// Checks the commit message through the same checker, bypassing the file
/// router: a single synthetic patch fed via stdin.
pub struct CommitMsgHook<'a> {
    invoker: &'a dyn CheckerInvoker,
}

impl<'a> CommitMsgHook<'a> {
    #[must_use]
    pub const fn new(invoker: &'a dyn CheckerInvoker) -> Self {
        Self { invoker }
    }

    /// Read the commit message — from the first file argument when the
    /// hook runner passes one, else from the latest non-merge commit —
    /// wrap it in the envelope and run the checker on it.
    ///
    /// # Errors
    /// Returns an error if the message cannot be read, the checker cannot
    /// be spawned, or its output is malformed.
    pub fn run(
        &self,
        files: &[PathBuf],
        source: &dyn CommitMessageSource,
    ) -> Result<DiagnosticMap> {
        let commit_msg = match files.first() {
            Some(path) if path.is_file() => {
                tracing::debug!("Reading commit message from {}", path.display());
                std::fs::read_to_string(path)?
            }
            _ => {
                tracing::debug!("Reading commit message from log");
                source.latest_message()?
            }
        };

        let request = commit_msg_request(msg_to_patch(&commit_msg));

        tracing::debug!("Running checker on commit message");
        let output = self.invoker.invoke(&request)?;

        let mut diagnostics = DiagnosticMap::new();
        if !output.clean {
            parse_into(&output.stdout, &mut diagnostics)?;
        }
        Ok(diagnostics)
    }
}

#[cfg(test)]
#[path = "commit_msg_tests.rs"]
mod tests;
