use clap::Parser;
use clap::error::ErrorKind;
use podspec_lint::analyzer::podlint::{format_result, lint_file};
use podspec_lint::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Usage errors exit 1, not clap's default 2.
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    cli.init_logging();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Validate the file and report diagnostics. Returns whether it was clean.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let result = lint_file(&cli.file, &cli.config())?;

    let output = format_result(&result, cli.format.into());
    eprint!("{}", output);

    Ok(!result.has_diagnostics())
}
