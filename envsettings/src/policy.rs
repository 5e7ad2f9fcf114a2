//! Error handling policy

use crate::error::EnvError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// What happens when a parameter is missing or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorHandling {
    /// Terminate the process with the error message.
    Exit,
    /// Return the message to the caller as an error.
    #[default]
    Raise,
    /// Write the message to stderr and continue without a value.
    Print,
    /// Continue silently without a value.
    Ignore,
}

impl ErrorHandling {
    /// All policies, in declaration order.
    pub const ALL: [ErrorHandling; 4] = [Self::Exit, Self::Raise, Self::Print, Self::Ignore];

    /// Lowercase token of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Raise => "raise",
            Self::Print => "print",
            Self::Ignore => "ignore",
        }
    }

    /// Build a policy from a dynamic value.
    ///
    /// Only a JSON string exactly matching one of the tokens is accepted.
    /// Numbers, booleans, arrays, objects and `null` are rejected without
    /// any coercion.
    pub fn from_value(value: &Value) -> Result<Self, EnvError> {
        match value {
            Value::String(s) => s.parse(),
            other => Err(EnvError::invalid_policy(other)),
        }
    }
}

impl FromStr for ErrorHandling {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| EnvError::invalid_policy(format!("'{s}'")))
    }
}

impl fmt::Display for ErrorHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
