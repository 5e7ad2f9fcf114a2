//! Settings from environment variables, with policy-driven validation
//!
//! `envsettings` reads application settings from process environment
//! variables through typed getters. What happens when a parameter is missing
//! or malformed is decided in one place, the [`ErrorHandling`] policy, so the
//! same code can fail fast in production and keep going in a test harness.
//!
//! # Features
//!
//! - **Typed getters**: strings, integers, floats, booleans, file and directory paths
//! - **Error policies**: `exit`, `raise`, `print` or `ignore` on invalid parameters
//! - **Custom messages**: every error message is a configurable `%s` template
//! - **Value lists**: comma-separated or file-backed lists with round-robin iteration
//! - **Env files**: load `.env` files and generate `.env` templates from settings files
//!
//! # Value Parsing
//!
//! - Integers: base 10, surrounding whitespace ignored: `MAX_CONNECTIONS=42`
//! - Floats: decimal point or comma: `RATIO=0.5`, `RATIO=0,5`
//! - Booleans: `true`, `yes`, `t`, `y`, `1` in any case; anything else is false
//! - Paths: checked for existence, missing directories created on demand
//!
//! # Example
//!
//! ```rust
//! use envsettings::{get_int_env_param, get_str_env_param};
//!
//! # fn main() -> Result<(), envsettings::EnvError> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! let url = get_str_env_param("DATABASE_URL", None, true)?;
//! let port = get_int_env_param("DATABASE_PORT", Some(5432), false)?;
//!
//! assert_eq!(url.as_deref(), Some("postgres://localhost/db"));
//! assert_eq!(port, Some(5432));
//! #     Ok(())
//! # }
//! ```
//!
//! # Error Policies
//!
//! The process-wide configuration starts with the `raise` policy: a missing
//! required parameter or a value that fails conversion is returned as
//! [`EnvError::Validation`]. Under `print` and `ignore` the getter returns
//! `Ok(None)` instead, printing the message to stderr for `print`.
//!
//! `exit` returns [`EnvError::Terminate`]; call
//! [`or_terminate`](TerminateExt::or_terminate) where the process should end.
//!
//! ```rust
//! use envsettings::{configure, get_int_env_param, reset_config, ConfigOptions, ErrorHandling};
//!
//! # fn main() -> Result<(), envsettings::EnvError> {
//! #     std::env::set_var("WORKERS", "many");
//! configure(ConfigOptions::new().error_handling(ErrorHandling::Ignore));
//! assert_eq!(get_int_env_param("WORKERS", Some(4), false)?, None);
//! #     reset_config();
//! #     Ok(())
//! # }
//! ```
//!
//! # Injected Configuration
//!
//! Every free function has a counterpart method on [`Config`], for code that
//! passes its configuration around instead of using the process-wide one.
//!
//! ```rust
//! use envsettings::{Config, ConfigOptions, ErrorHandling};
//!
//! let config = Config::default().configure(
//!     ConfigOptions::new()
//!         .error_handling(ErrorHandling::Raise)
//!         .message("err_required", "missing setting: %s"),
//! );
//! # std::env::remove_var("API_TOKEN");
//! let err = config.get_str("API_TOKEN", None, true).unwrap_err();
//! assert_eq!(err.to_string(), "missing setting: API_TOKEN");
//! ```

mod config;
mod dotenv;
mod error;
mod generator;
pub mod global;
mod params;
mod policy;
mod signal;
mod values;

pub use config::{
    fill_slots, Config, ConfigOptions, DEFAULT_ENV_GENERATOR_PATTERN, ERR_DIRECTORY, ERR_FILE,
    ERR_FLOAT, ERR_INTEGER, ERR_REQUIRED,
};
pub use dotenv::load_env_params;
pub use error::EnvError;
pub use generator::{generate_env_file, scan_settings_file, GeneratorOptions};
pub use global::{configure, reset_config};
pub use params::{
    get_bool_env_param, get_env_value, get_file_env_param, get_filedir_env_param,
    get_float_env_param, get_int_env_param, get_str_env_param, DirOptions, FileOptions,
};
pub use policy::ErrorHandling;
pub use signal::{signal_error, signal_error_to, TerminateExt};
pub use values::{
    endless_param_iterator, get_value_from_string, get_values, get_values_from_file,
    param_iterator, DEFAULT_SEPARATOR,
};
