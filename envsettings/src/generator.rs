//! Env file template generation from settings files
//!
//! A settings file declares parameters with assignments such as
//!
//! ```text
//! # Database port
//! DB_PORT = get_int_env_param('DB_PORT', default=5432)
//! ```
//!
//! The scanner finds these declarations with the configured pattern and turns
//! each one into a block of the generated env file:
//!
//! ```text
//! # Database port
//! DB_PORT=
//! ```

use crate::config::Config;
use crate::error::EnvError;
use crate::global;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Where to look for settings files and what to leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Directory below `modules_path` holding sub-modules.
    pub sub_modules_path: Option<PathBuf>,
    /// Sub-modules to visit; every directory is visited when `None`.
    pub include_sub_modules: Option<Vec<String>>,
    /// Parameter names dropped together with their comment block.
    pub exclude_params: Vec<String>,
}

impl Config {
    fn scan_regex(&self) -> Result<Regex, EnvError> {
        RegexBuilder::new(&self.env_generator_pattern)
            .multi_line(true)
            .build()
            .map_err(|source| EnvError::Pattern {
                pattern: self.env_generator_pattern.clone(),
                source,
            })
    }

    /// Blocks declared in the settings file at `path`, in file order.
    ///
    /// Each block keeps the comment lines of its declaration and ends with
    /// `NAME=\n`. Declarations named in `exclude_params` are dropped with
    /// their comments.
    pub fn scan_settings_file(
        &self,
        path: &Path,
        exclude_params: &[String],
    ) -> Result<Vec<String>, EnvError> {
        let regex = self.scan_regex()?;
        let content = fs::read_to_string(path).map_err(|e| EnvError::file_read(path, e))?;
        Ok(extract_blocks(&regex, &content, exclude_params))
    }

    /// Write an env file template built from every settings file found
    /// under `modules_path`.
    ///
    /// Blocks are separated by one blank line. The file is overwritten and
    /// left empty if no declaration survives. Directories that cannot be read,
    /// including a missing `modules_path`, are skipped with a warning.
    pub fn generate_env_file(
        &self,
        new_env_filename: &Path,
        settings_filename: &str,
        modules_path: &Path,
        options: &GeneratorOptions,
    ) -> Result<(), EnvError> {
        let regex = self.scan_regex()?;
        let mut blocks = Vec::new();

        let walker = WalkDir::new(modules_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.file_type().is_dir() && should_descend(modules_path, entry.path(), options)
            });
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory");
                    continue;
                }
            };
            if !is_included(modules_path, entry.path(), options) {
                continue;
            }
            let settings_path = entry.path().join(settings_filename);
            if !settings_path.is_file() {
                continue;
            }
            debug!(path = %settings_path.display(), "scanning settings file");
            let content = fs::read_to_string(&settings_path)
                .map_err(|e| EnvError::file_read(&settings_path, e))?;
            blocks.extend(extract_blocks(&regex, &content, &options.exclude_params));
        }

        fs::write(new_env_filename, blocks.join("\n")).map_err(|source| EnvError::FileWrite {
            path: new_env_filename.display().to_string(),
            source,
        })?;
        info!(
            path = %new_env_filename.display(),
            params = blocks.len(),
            "generated env file"
        );
        Ok(())
    }
}

fn extract_blocks(regex: &Regex, content: &str, exclude_params: &[String]) -> Vec<String> {
    let content = content.replace("\r\n", "\n");
    regex
        .find_iter(&content)
        .filter_map(|m| {
            let block = m.as_str().trim();
            let (comments, assignment) = match block.rsplit_once('\n') {
                Some((comments, assignment)) => (Some(comments), assignment),
                None => (None, block),
            };
            let name = assignment
                .split_once('=')
                .map_or(assignment, |(lhs, _)| lhs)
                .trim();
            if name.is_empty() {
                return None;
            }
            if exclude_params.iter().any(|p| p == name) {
                debug!(name, "excluded parameter");
                return None;
            }
            Some(match comments {
                Some(comments) => format!("{comments}\n{name}=\n"),
                None => format!("{name}=\n"),
            })
        })
        .collect()
}

/// Whether `dir` should be searched for a settings file.
fn is_included(root: &Path, dir: &Path, options: &GeneratorOptions) -> bool {
    if dir == root {
        return true;
    }
    let Some(include) = &options.include_sub_modules else {
        return true;
    };
    dir.strip_prefix(sub_modules_base(root, options))
        .ok()
        .and_then(|relative| relative.components().next())
        .is_some_and(|first| include.iter().any(|name| first.as_os_str() == name.as_str()))
}

/// Whether the walk has to enter `dir`: it is searched itself or lies on the
/// way down to the sub-modules directory.
fn should_descend(root: &Path, dir: &Path, options: &GeneratorOptions) -> bool {
    is_included(root, dir, options) || sub_modules_base(root, options).starts_with(dir)
}

fn sub_modules_base(root: &Path, options: &GeneratorOptions) -> PathBuf {
    match &options.sub_modules_path {
        Some(sub) => root.join(sub),
        None => root.to_path_buf(),
    }
}

/// Scan a settings file with the process-wide pattern.
pub fn scan_settings_file(path: &Path, exclude_params: &[String]) -> Result<Vec<String>, EnvError> {
    global::current().scan_settings_file(path, exclude_params)
}

/// Generate an env file template with the process-wide pattern.
pub fn generate_env_file(
    new_env_filename: &Path,
    settings_filename: &str,
    modules_path: &Path,
    options: &GeneratorOptions,
) -> Result<(), EnvError> {
    global::current().generate_env_file(new_env_filename, settings_filename, modules_path, options)
}
