use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use checkpatch_gate::checkpatch::SystemChecker;
use checkpatch_gate::cli::Cli;
use checkpatch_gate::config::{ConfigLoader, FileConfigLoader};
use checkpatch_gate::diagnostics::{self, DiagnosticMap};
use checkpatch_gate::git::GitLog;
use checkpatch_gate::hook::{CommitMsgHook, PreCommitHook};
use checkpatch_gate::router::FsInspector;
use checkpatch_gate::{EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    std::process::exit(run(&cli));
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "checkpatch_gate=debug"
    } else {
        "checkpatch_gate=info"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(diagnostics) => {
            if diagnostics.is_empty() {
                EXIT_SUCCESS
            } else {
                diagnostics::report(&diagnostics);
                EXIT_FAILURE
            }
        }
        Err(e) => {
            tracing::error!("{e}");
            EXIT_FAILURE
        }
    }
}

fn run_impl(cli: &Cli) -> checkpatch_gate::Result<DiagnosticMap> {
    let invoker = SystemChecker::new(cli.checker.clone());

    if cli.commit_msg {
        let source = GitLog::new(Path::new("."));
        CommitMsgHook::new(&invoker).run(&cli.files, &source)
    } else {
        let loader = FileConfigLoader::new();
        let document = cli
            .config_file
            .as_deref()
            .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
        tracing::debug!("Config loaded from {}", document.path.display());

        PreCommitHook::new(&document, &invoker, cli.fix_inplace).run(&cli.files, &FsInspector)
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
