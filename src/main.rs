// src/main.rs

use anyhow::Result;
use clap::Parser;
use squareline_idf::{LogReporter, Reporter};
use std::process::ExitCode;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = match (verbose, quiet) {
        (true, _) => "debug",
        (_, true) => "warn",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, reporter: &dyn Reporter) -> Result<()> {
    match cli.command {
        None | Some(Commands::Convert) => commands::cmd_convert(&cli.dir, cli.json, reporter),
        Some(Commands::Detect { file }) => commands::cmd_detect(&file, cli.json),
        Some(Commands::FixIncludes) => commands::cmd_fix_includes(&cli.dir, cli.json, reporter),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
    }
}

/// Map a run result to the process exit status, reporting a fatal error
fn finish(result: Result<()>, reporter: &dyn Reporter) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let reporter = LogReporter;
    finish(run(cli, &reporter), &reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use squareline_idf::MemoryReporter;

    #[test]
    fn test_finish_success_reports_nothing() {
        let reporter = MemoryReporter::new();
        assert_eq!(finish(Ok(()), &reporter), ExitCode::SUCCESS);
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_finish_failure_reports_one_error_line() {
        let reporter = MemoryReporter::new();
        let result = Err::<(), _>(anyhow::anyhow!("no export found"))
            .context("Conversion failed in ui");

        assert_eq!(finish(result, &reporter), ExitCode::FAILURE);
        assert_eq!(
            reporter.errors(),
            vec!["Conversion failed in ui: no export found"]
        );
        assert!(reporter.infos().is_empty());
    }

    #[test]
    fn test_cli_without_subcommand_is_a_full_run() {
        let cli = Cli::try_parse_from(["squareline-idf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["squareline-idf", "-q", "-v"]).is_err());
    }
}
