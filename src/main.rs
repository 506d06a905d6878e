use anyhow::Context;
use clap::Parser;
use restic_ignore::utils::logger::{self, LogConfig};
use restic_ignore::{CliConfig, FileConfig, LocalStore, MarkIgnore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CliConfig) -> anyhow::Result<()> {
    let file = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                // the file never yielded a level, so report with the flags alone
                logger::init_cli_logger(LogConfig::from_verbosity(cli.verbose));
                return Err(e).context("loading config");
            }
        },
        None => None,
    };
    let options = cli.run_options(file.as_ref());

    logger::init_cli_logger(LogConfig::from_verbosity(options.verbose));
    tracing::trace!(?options, "run options");

    let summary = MarkIgnore::new(LocalStore::new(), options).run(&cli.directories)?;
    tracing::info!(
        marked = summary.marked.len(),
        create_failures = summary.create_failures.len(),
        "done"
    );
    Ok(())
}
