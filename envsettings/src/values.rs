//! Value lists for parameters holding several values
//!
//! A parameter such as `API_KEYS` may hold a comma-separated list or the
//! path of a file with one value per line. [`get_values`] reads either form
//! and the iterators hand the values out in order, once or round-robin.

use crate::error::EnvError;
use std::fs;
use std::iter::Cycle;
use std::path::Path;
use std::vec::IntoIter;

/// Default separator for [`get_value_from_string`].
pub const DEFAULT_SEPARATOR: &str = ";";

/// Element `index` (1-based) of `s` split by `separator`.
///
/// Returns `None` for an empty string, for index 0 and for an index past the
/// last element.
pub fn get_value_from_string(s: &str, index: usize, separator: &str) -> Option<String> {
    if s.is_empty() || index == 0 {
        return None;
    }
    s.split(separator).nth(index - 1).map(str::to_string)
}

/// Lines of the file at `path`, without line terminators.
pub fn get_values_from_file(path: impl AsRef<Path>) -> Result<Vec<String>, EnvError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| EnvError::file_read(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Values from a file path or a comma-separated list.
///
/// `default` replaces an absent or empty `source`. If both are absent or
/// empty, the result is `[default_value]` when given and empty otherwise.
/// A source naming an existing file is read line by line; anything else is
/// split on `,`.
pub fn get_values(
    source: Option<&str>,
    default: Option<&str>,
    default_value: Option<&str>,
) -> Result<Vec<String>, EnvError> {
    let source = source
        .filter(|s| !s.is_empty())
        .or(default.filter(|s| !s.is_empty()));

    let Some(source) = source else {
        return Ok(default_value.map(str::to_string).into_iter().collect());
    };

    if Path::new(source).is_file() {
        return get_values_from_file(source);
    }
    Ok(source.split(',').map(str::to_string).collect())
}

/// Cycle through `values` forever, restarting after the last element.
///
/// # Errors
///
/// [`EnvError::EmptySequence`] if `values` is empty.
pub fn endless_param_iterator<T: Clone>(values: Vec<T>) -> Result<Cycle<IntoIter<T>>, EnvError> {
    if values.is_empty() {
        return Err(EnvError::EmptySequence);
    }
    Ok(values.into_iter().cycle())
}

/// Yield each of `values` once, in order.
pub fn param_iterator<T>(values: Vec<T>) -> IntoIter<T> {
    values.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_value_from_string() {
        assert_eq!(get_value_from_string("one;two;three", 2, ";"), Some("two".to_string()));
        assert_eq!(get_value_from_string("one,two,three", 3, ","), Some("three".to_string()));
        assert_eq!(get_value_from_string("single", 1, ";"), Some("single".to_string()));
        assert_eq!(get_value_from_string("", 1, ";"), None);
        assert_eq!(get_value_from_string("a;b;c", 5, ";"), None);
        assert_eq!(get_value_from_string("a;b;c", 0, ";"), None);
    }

    #[test]
    fn test_get_values_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line1\nline2\n\nline3").unwrap();

        let values = get_values_from_file(file.path()).unwrap();
        assert_eq!(values, vec!["line1", "line2", "", "line3"]);
    }

    #[test]
    fn test_get_values_from_file_strips_crlf() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a\r\nb\r\n").unwrap();

        assert_eq!(get_values_from_file(file.path()).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_get_values_from_missing_file() {
        let result = get_values_from_file("/nonexistent/values.txt");
        assert!(matches!(result, Err(EnvError::FileRead { .. })));
    }

    #[test]
    fn test_get_values() {
        assert_eq!(get_values(Some("a,b,c"), None, None).unwrap(), vec!["a", "b", "c"]);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "file_val1\nfile_val2").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(
            get_values(Some(path), None, None).unwrap(),
            vec!["file_val1", "file_val2"]
        );

        assert_eq!(get_values(Some(""), None, Some("default")).unwrap(), vec!["default"]);
        assert_eq!(get_values(None, None, Some("default")).unwrap(), vec!["default"]);
        assert_eq!(get_values(Some(""), Some("d"), None).unwrap(), vec!["d"]);
        assert!(get_values(Some(""), None, None).unwrap().is_empty());
        assert!(get_values(None, None, None).unwrap().is_empty());
    }

    #[test]
    fn test_endless_param_iterator() {
        let iter = endless_param_iterator(vec!["a", "b", "c"]).unwrap();
        let results: Vec<_> = iter.take(5).collect();
        assert_eq!(results, vec!["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn test_endless_param_iterator_empty() {
        let result = endless_param_iterator(Vec::<String>::new());
        assert!(matches!(result, Err(EnvError::EmptySequence)));
    }

    #[test]
    fn test_param_iterator() {
        let results: Vec<_> = param_iterator(vec!["a", "b", "c"]).collect();
        assert_eq!(results, vec!["a", "b", "c"]);
    }
}
