//! Process-wide configuration handle
//!
//! The free functions of this crate (`get_int_env_param`, `generate_env_file`,
//! ...) read the configuration stored here. Updates replace the stored value
//! with the result of [`Config::configure`]; concurrent updates from several
//! threads are serialized by the lock but their relative order is up to the
//! caller.

use crate::config::{Config, ConfigOptions};
use std::sync::{LazyLock, PoisonError, RwLock};

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Snapshot of the current process-wide configuration.
pub fn current() -> Config {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Merge `options` into the process-wide configuration.
///
/// Returns the configuration now in effect.
pub fn configure(options: ConfigOptions) -> Config {
    let mut guard = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *guard = guard.configure(options);
    tracing::debug!(error_handling = %guard.error_handling, "configuration updated");
    guard.clone()
}

/// Restore the process-wide configuration to its defaults.
pub fn reset_config() {
    let mut guard = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Config::reset();
}
