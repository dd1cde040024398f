use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the document was processed and the output written
/// - `Error` (1): the input was missing or processing failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The document was processed and the output written.
    Success,
    /// The input was missing or processing failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
