//! Env file loading

use std::path::Path;
use tracing::{info, warn};

/// Load `KEY=VALUE` lines from `path` into the process environment.
///
/// Variables already set in the environment are left untouched. Returns
/// `true` if the file was read and applied.
pub fn load_env_params(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            info!(path = %path.display(), "loaded env file");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load env file");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    #[serial]
    fn test_load_env_params() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "TEST_LOADED_VAR=test_value").unwrap();
        env::remove_var("TEST_LOADED_VAR");

        assert!(load_env_params(file.path()));
        assert_eq!(env::var("TEST_LOADED_VAR").unwrap(), "test_value");

        env::remove_var("TEST_LOADED_VAR");
    }

    #[test]
    #[serial]
    fn test_load_env_params_keeps_existing() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TEST_PRESET_VAR=from_file").unwrap();
        env::set_var("TEST_PRESET_VAR", "from_env");

        assert!(load_env_params(file.path()));
        assert_eq!(env::var("TEST_PRESET_VAR").unwrap(), "from_env");

        env::remove_var("TEST_PRESET_VAR");
    }

    #[test]
    fn test_load_env_params_missing_file() {
        assert!(!load_env_params("/nonexistent/.env"));
    }
}
