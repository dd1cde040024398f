use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::print_error;
pub use run::{AUTHORS_ENV, RunResult, resolve_author_mode, run};

/// Run the CLI for already-parsed arguments.
///
/// A missing input file is reported here and yields `ExitStatus::Error`.
/// Any other failure is returned to the caller.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if !args.input.is_file() {
        report::print_input_not_found(&args.input);
        return Ok(ExitStatus::Error);
    }

    let result = run::run(&args)?;

    if args.verbose {
        report::print_summary(&result);
    }

    match &args.output {
        Some(path) => {
            run::write_output(path, &result.formatted)?;
            report::print_written(path);
        }
        None => report::print_formatted(&result.formatted)?,
    }

    Ok(ExitStatus::Success)
}
