//! Error types for environment parameter access

/// Errors produced while reading parameters, configuring the library or
/// generating env files.
///
/// Parameter validation problems never surface directly: they are routed
/// through [`signal_error`](crate::signal_error) and only appear here as
/// [`EnvError::Validation`] or [`EnvError::Terminate`], depending on the
/// active [`ErrorHandling`](crate::ErrorHandling) policy.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A parameter failed validation under the `raise` policy.
    #[error("{message}")]
    Validation {
        /// Formatted message built from the configured template
        message: String,
    },

    /// A parameter failed validation under the `exit` policy.
    ///
    /// The library never exits on its own; see
    /// [`TerminateExt::or_terminate`](crate::TerminateExt::or_terminate).
    #[error("{message}")]
    Terminate {
        /// Formatted message to report as the termination reason
        message: String,
    },

    /// Error handling policy token is not one of `exit`, `raise`, `print`, `ignore`.
    #[error("Invalid error handling policy {value}: expected one of 'exit', 'raise', 'print', 'ignore'")]
    InvalidPolicy {
        /// Rendering of the rejected value
        value: String,
    },

    /// `messages` option was not a mapping.
    #[error("messages must be a mapping of message kind to template, got {found}")]
    ConfigType {
        /// JSON type name of the rejected value
        found: String,
    },

    /// An endless iterator was requested over an empty sequence.
    #[error("cannot cycle over an empty parameter sequence")]
    EmptySequence,

    /// The configured scan pattern is not a valid regular expression.
    #[error("Invalid env generator pattern '{pattern}': {source}")]
    Pattern {
        /// Pattern text as configured
        pattern: String,
        /// Compilation error reported by the regex engine
        source: regex::Error,
    },

    /// Failed to read a file (settings file, value list).
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        /// Path that failed to be read
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write the generated env file.
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        /// Path that failed to be written
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl EnvError {
    pub(crate) fn invalid_policy(value: impl std::fmt::Display) -> Self {
        Self::InvalidPolicy {
            value: value.to_string(),
        }
    }

    pub(crate) fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            source,
        }
    }

    /// Whether this error asks the process to terminate.
    pub fn is_terminate(&self) -> bool {
        matches!(self, Self::Terminate { .. })
    }
}
