use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "checkpatch-gate")]
#[command(author, version, about = "Run checkpatch.pl over changed files as a git hook")]
#[command(long_about = "Runs checkpatch.pl over the changed files a hook runner passes in, \
    grouped by per-directory rule configs, or over the commit message.\n\n\
    Exit codes:\n  \
    0 - No diagnostics\n  \
    1 - Diagnostics found, or configuration failed to load")]
pub struct Cli {
    /// Files to check (as passed by the hook runner)
    pub files: Vec<PathBuf>,

    /// Run as the commit-msg hook instead of pre-commit
    #[arg(long)]
    pub commit_msg: bool,

    /// Path to the rule config file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// External checker program to invoke
    #[arg(long, default_value = "checkpatch.pl")]
    pub checker: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Let the checker rewrite files in place
    #[arg(long, conflicts_with = "commit_msg")]
    pub fix_inplace: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
