//! Typed parameter getters
//!
//! Every getter follows the same resolution order:
//! 1. The environment variable `name`, converted to the target type
//! 2. The caller-supplied default
//! 3. Nothing: a `required` parameter is reported through
//!    [`signal_error`](crate::signal_error), an optional one yields `None`
//!
//! Conversion and existence failures are reported the same way, so the
//! active [`ErrorHandling`](crate::ErrorHandling) policy decides whether the
//! caller sees an error or simply `None`.

use crate::config::{Config, ERR_DIRECTORY, ERR_FILE, ERR_FLOAT, ERR_INTEGER, ERR_REQUIRED};
use crate::error::EnvError;
use crate::global;
use crate::signal::signal_error;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const TRUTHY: [&str; 5] = ["true", "yes", "t", "y", "1"];

/// Options for [`Config::get_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOptions {
    /// Report an error if the path is not an existing regular file.
    pub file_must_exist: bool,
    /// When the file may be missing, create its parent directory.
    pub dir_must_exist: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            file_must_exist: true,
            dir_must_exist: true,
        }
    }
}

/// Options for [`Config::get_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirOptions {
    /// Create the directory if it does not exist yet.
    pub dir_must_exist: bool,
}

impl Default for DirOptions {
    fn default() -> Self {
        Self {
            dir_must_exist: true,
        }
    }
}

/// Read the raw value of `name`; `None` if the variable is not set.
///
/// An empty string is a value, not an absence.
pub fn get_env_value(name: &str) -> Option<String> {
    env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

impl Config {
    fn signal(&self, message: String) -> Result<(), EnvError> {
        signal_error(self.error_handling, message)
    }

    /// Resolve `name` to a raw string or a typed default, reporting a missing
    /// required parameter.
    fn lookup<T>(
        &self,
        name: &str,
        default: Option<T>,
        required: bool,
        convert: impl FnOnce(&str) -> Result<Option<T>, EnvError>,
    ) -> Result<Option<T>, EnvError> {
        if let Some(raw) = get_env_value(name) {
            tracing::debug!(name, "parameter read from environment");
            return convert(&raw);
        }
        self.fallback(name, default, required)
    }

    /// Default value of an unset parameter, reporting a missing required one.
    fn fallback<T>(
        &self,
        name: &str,
        default: Option<T>,
        required: bool,
    ) -> Result<Option<T>, EnvError> {
        if default.is_some() {
            tracing::debug!(name, "parameter not set, using default");
            return Ok(default);
        }
        if required {
            self.signal(self.message(ERR_REQUIRED, name, "", ""))?;
        }
        Ok(None)
    }

    fn lookup_path(
        &self,
        name: &str,
        default: Option<&Path>,
        required: bool,
    ) -> Result<Option<PathBuf>, EnvError> {
        // Paths keep their raw bytes; no UTF-8 round trip.
        if let Some(raw) = env::var_os(name) {
            tracing::debug!(name, "parameter read from environment");
            return Ok(Some(PathBuf::from(raw)));
        }
        self.fallback(name, default.map(Path::to_path_buf), required)
    }

    /// Create `dir` if needed, reporting a failure under `name`.
    ///
    /// Returns `false` if the directory could not be created and the policy
    /// let execution continue.
    fn ensure_dir(&self, name: &str, dir: &Path) -> Result<bool, EnvError> {
        if dir.is_dir() {
            return Ok(true);
        }
        match fs::create_dir_all(dir) {
            Ok(()) => {
                tracing::debug!(name, path = %dir.display(), "created directory");
                Ok(true)
            }
            Err(e) => {
                let path = dir.display().to_string();
                self.signal(self.message(ERR_DIRECTORY, name, &path, &e.to_string()))?;
                Ok(false)
            }
        }
    }

    /// String parameter, returned unchanged.
    pub fn get_str(
        &self,
        name: &str,
        default: Option<&str>,
        required: bool,
    ) -> Result<Option<String>, EnvError> {
        self.lookup(name, default.map(str::to_string), required, |raw| {
            Ok(Some(raw.to_string()))
        })
    }

    /// Base-10 integer parameter.
    pub fn get_int(
        &self,
        name: &str,
        default: Option<i64>,
        required: bool,
    ) -> Result<Option<i64>, EnvError> {
        self.lookup(name, default, required, |raw| match raw.trim().parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.signal(self.message(ERR_INTEGER, name, raw, ""))?;
                Ok(None)
            }
        })
    }

    /// Float parameter; both `3.14` and `3,14` are accepted.
    pub fn get_float(
        &self,
        name: &str,
        default: Option<f64>,
        required: bool,
    ) -> Result<Option<f64>, EnvError> {
        self.lookup(name, default, required, |raw| {
            match raw.trim().replace(',', ".").parse::<f64>() {
                Ok(value) => Ok(Some(value)),
                Err(_) => {
                    self.signal(self.message(ERR_FLOAT, name, raw, ""))?;
                    Ok(None)
                }
            }
        })
    }

    /// Boolean parameter.
    ///
    /// `true`, `yes`, `t`, `y` and `1` (any case) are true; every other value
    /// is false.
    pub fn get_bool(
        &self,
        name: &str,
        default: Option<bool>,
        required: bool,
    ) -> Result<Option<bool>, EnvError> {
        self.lookup(name, default, required, |raw| {
            let lowered = raw.to_lowercase();
            Ok(Some(TRUTHY.contains(&lowered.as_str())))
        })
    }

    /// File path parameter.
    ///
    /// With `file_must_exist`, a path that is not an existing regular file is
    /// reported. Otherwise the parent directory is created when
    /// `dir_must_exist` is set.
    pub fn get_file(
        &self,
        name: &str,
        default: Option<&Path>,
        required: bool,
        options: FileOptions,
    ) -> Result<Option<PathBuf>, EnvError> {
        let Some(path) = self.lookup_path(name, default, required)? else {
            return Ok(None);
        };
        if path.is_file() {
            return Ok(Some(path));
        }

        if options.file_must_exist {
            let value = path.display().to_string();
            self.signal(self.message(ERR_FILE, name, &value, ""))?;
            return Ok(None);
        }

        if options.dir_must_exist {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !self.ensure_dir(name, parent)? {
                    return Ok(None);
                }
            }
        }
        Ok(Some(path))
    }

    /// Directory path parameter.
    ///
    /// With `dir_must_exist`, a missing directory is created; a creation
    /// failure is reported. Otherwise the path is returned unchecked.
    pub fn get_dir(
        &self,
        name: &str,
        default: Option<&Path>,
        required: bool,
        options: DirOptions,
    ) -> Result<Option<PathBuf>, EnvError> {
        let Some(path) = self.lookup_path(name, default, required)? else {
            return Ok(None);
        };
        if path.is_dir() {
            return Ok(Some(path));
        }

        if options.dir_must_exist && !self.ensure_dir(name, &path)? {
            return Ok(None);
        }
        Ok(Some(path))
    }
}

/// String parameter read with the process-wide configuration.
pub fn get_str_env_param(
    name: &str,
    default: Option<&str>,
    required: bool,
) -> Result<Option<String>, EnvError> {
    global::current().get_str(name, default, required)
}

/// Integer parameter read with the process-wide configuration.
pub fn get_int_env_param(
    name: &str,
    default: Option<i64>,
    required: bool,
) -> Result<Option<i64>, EnvError> {
    global::current().get_int(name, default, required)
}

/// Float parameter read with the process-wide configuration.
pub fn get_float_env_param(
    name: &str,
    default: Option<f64>,
    required: bool,
) -> Result<Option<f64>, EnvError> {
    global::current().get_float(name, default, required)
}

/// Boolean parameter read with the process-wide configuration.
pub fn get_bool_env_param(
    name: &str,
    default: Option<bool>,
    required: bool,
) -> Result<Option<bool>, EnvError> {
    global::current().get_bool(name, default, required)
}

/// File path parameter read with the process-wide configuration.
pub fn get_file_env_param(
    name: &str,
    default: Option<&Path>,
    required: bool,
    options: FileOptions,
) -> Result<Option<PathBuf>, EnvError> {
    global::current().get_file(name, default, required, options)
}

/// Directory path parameter read with the process-wide configuration.
pub fn get_filedir_env_param(
    name: &str,
    default: Option<&Path>,
    required: bool,
    options: DirOptions,
) -> Result<Option<PathBuf>, EnvError> {
    global::current().get_dir(name, default, required, options)
}
