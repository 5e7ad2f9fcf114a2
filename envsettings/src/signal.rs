//! Error signaling according to the active policy

use crate::error::EnvError;
use crate::policy::ErrorHandling;
use std::io::Write;

/// Report a parameter problem according to `policy`.
///
/// - `Exit` returns [`EnvError::Terminate`]; the caller ends the process,
///   typically through [`TerminateExt::or_terminate`].
/// - `Raise` returns [`EnvError::Validation`].
/// - `Print` writes `message` to stderr and returns `Ok(())`.
/// - `Ignore` returns `Ok(())`.
pub fn signal_error(policy: ErrorHandling, message: impl Into<String>) -> Result<(), EnvError> {
    signal_error_to(policy, message, &mut std::io::stderr().lock())
}

/// [`signal_error`] with `Print` output going to `out` instead of stderr.
pub fn signal_error_to<W: Write>(
    policy: ErrorHandling,
    message: impl Into<String>,
    out: &mut W,
) -> Result<(), EnvError> {
    let message = message.into();
    match policy {
        ErrorHandling::Exit => Err(EnvError::Terminate { message }),
        ErrorHandling::Raise => Err(EnvError::Validation { message }),
        ErrorHandling::Print => {
            // Write failures are not reported
            let _ = writeln!(out, "{message}");
            Ok(())
        }
        ErrorHandling::Ignore => Ok(()),
    }
}

/// Exit the process when a result carries [`EnvError::Terminate`].
pub trait TerminateExt<T> {
    /// Print the termination message to stderr and exit with status 1 on
    /// [`EnvError::Terminate`]; pass every other outcome through.
    fn or_terminate(self) -> Result<T, EnvError>;
}

impl<T> TerminateExt<T> for Result<T, EnvError> {
    fn or_terminate(self) -> Result<T, EnvError> {
        match self {
            Err(EnvError::Terminate { message }) => {
                eprintln!("{message}");
                std::process::exit(1);
            }
            other => other,
        }
    }
}
