use std::process::ExitCode;

use clap::Parser;
use docx_comments::cli::{Arguments, ExitStatus, print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match docx_comments::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
