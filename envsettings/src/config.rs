//! Library configuration: error policy, message templates and scan pattern

use crate::error::EnvError;
use crate::policy::ErrorHandling;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Message key for a required parameter that is not set.
pub const ERR_REQUIRED: &str = "err_required";
/// Message key for a value that is not an integer.
pub const ERR_INTEGER: &str = "err_integer";
/// Message key for a value that is not a float.
pub const ERR_FLOAT: &str = "err_float";
/// Message key for a missing file.
pub const ERR_FILE: &str = "err_file";
/// Message key for a missing or uncreatable directory.
pub const ERR_DIRECTORY: &str = "err_directory";

const MESSAGE_PREFIX: &str = "settings: Ошибка загрузки настроек! (Settings loading error!)";

/// Default pattern for parameter declarations in settings files.
///
/// Matches `NAME = ...param...(...)` together with the comment and blank
/// lines directly above it.
pub const DEFAULT_ENV_GENERATOR_PATTERN: &str =
    r"^(?:\s*(?:#.*)?\s*[\r\n]+)*\s*[A-Z0-9_-]+\s*=\s.*?param.*?\(.*?\).*$";

fn default_messages() -> BTreeMap<String, String> {
    [
        (
            ERR_REQUIRED,
            "Не задан обязательный параметр (required parameter is not set): %s",
        ),
        (
            ERR_INTEGER,
            "Параметр %s должен быть целым числом (must be an integer), получено (got): %s",
        ),
        (
            ERR_FLOAT,
            "Параметр %s должен быть числом (must be a number), получено (got): %s",
        ),
        (
            ERR_FILE,
            "Файл параметра %s не найден (file not found): %s",
        ),
        (
            ERR_DIRECTORY,
            "Директория параметра %s недоступна (directory is not available): %s %s",
        ),
    ]
    .into_iter()
    .map(|(key, text)| (key.to_string(), format!("{MESSAGE_PREFIX} {text}")))
    .collect()
}

/// Configuration consulted by every parameter getter and by the generator.
///
/// `Config` is a value: [`configure`](Config::configure) returns a new
/// configuration instead of mutating in place. The process-wide instance used
/// by the free functions lives in [`global`](crate::global).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Policy applied when a parameter is missing or invalid.
    pub error_handling: ErrorHandling,
    /// Message templates keyed by message kind, with `%s` slots.
    pub messages: BTreeMap<String, String>,
    /// Regular expression locating parameter declarations in settings files.
    pub env_generator_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_handling: ErrorHandling::default(),
            messages: default_messages(),
            env_generator_pattern: DEFAULT_ENV_GENERATOR_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Apply `options` on top of this configuration.
    ///
    /// Omitted options keep their current value. Message templates are merged
    /// key by key; policy and pattern are replaced.
    pub fn configure(&self, options: ConfigOptions) -> Config {
        let mut next = self.clone();
        if let Some(messages) = options.messages {
            next.messages.extend(messages);
        }
        if let Some(error_handling) = options.error_handling {
            next.error_handling = error_handling;
        }
        if let Some(pattern) = options.env_generator_pattern {
            next.env_generator_pattern = pattern;
        }
        next
    }

    /// Default configuration.
    pub fn reset() -> Config {
        Config::default()
    }

    /// Render the template stored under `key`.
    ///
    /// Returns `None` if no template is registered for `key`.
    pub fn format_message(&self, key: &str, args: &[&str]) -> Option<String> {
        self.messages
            .get(key)
            .map(|template| fill_slots(template, args))
    }

    /// Render one of the built-in message kinds.
    ///
    /// Built-in kinds always have a template; a missing one falls back to the
    /// default text.
    pub(crate) fn message(&self, key: &str, name: &str, value: &str, detail: &str) -> String {
        let args = [name, value, detail];
        self.format_message(key, &args).unwrap_or_else(|| {
            let defaults = default_messages();
            fill_slots(defaults.get(key).map(String::as_str).unwrap_or("%s"), &args)
        })
    }
}

/// Fill `%s` slots positionally.
///
/// `%%` renders a literal percent sign. Surplus slots render empty and
/// surplus arguments are dropped.
pub fn fill_slots(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                out.push_str(args.next().copied().unwrap_or(""));
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }
    out
}

/// Partial update for [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    /// Templates to merge into the current messages.
    pub messages: Option<BTreeMap<String, String>>,
    /// Replacement policy.
    pub error_handling: Option<ErrorHandling>,
    /// Replacement scan pattern.
    pub env_generator_pattern: Option<String>,
}

impl ConfigOptions {
    /// Empty update; applying it leaves a configuration unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one message template to merge.
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), template.into());
        self
    }

    /// Set the error handling policy.
    pub fn error_handling(mut self, policy: ErrorHandling) -> Self {
        self.error_handling = Some(policy);
        self
    }

    /// Set the error handling policy from its token.
    pub fn try_error_handling(self, token: &str) -> Result<Self, EnvError> {
        Ok(self.error_handling(token.parse()?))
    }

    /// Set the settings-file scan pattern.
    pub fn env_generator_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.env_generator_pattern = Some(pattern.into());
        self
    }

    /// Build options from a JSON object.
    ///
    /// Recognized keys are `messages`, `error_handling` (or `errorHandling`)
    /// and `env_generator_pattern` (or `envGeneratorPattern`). Other keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`EnvError::ConfigType`] if `messages` is not an object of strings
    /// - [`EnvError::InvalidPolicy`] if the policy is not a known token
    pub fn from_json(value: &Value) -> Result<Self, EnvError> {
        let mut options = Self::new();
        let Value::Object(map) = value else {
            return Err(EnvError::ConfigType {
                found: json_type_name(value).to_string(),
            });
        };

        if let Some(messages) = map.get("messages") {
            let Value::Object(entries) = messages else {
                return Err(EnvError::ConfigType {
                    found: json_type_name(messages).to_string(),
                });
            };
            let mut merged = BTreeMap::new();
            for (key, template) in entries {
                let Value::String(template) = template else {
                    return Err(EnvError::ConfigType {
                        found: format!("{} for key '{key}'", json_type_name(template)),
                    });
                };
                merged.insert(key.clone(), template.clone());
            }
            options.messages = Some(merged);
        }

        if let Some(policy) = map.get("error_handling").or_else(|| map.get("errorHandling")) {
            options.error_handling = Some(ErrorHandling::from_value(policy)?);
        }

        if let Some(pattern) = map
            .get("env_generator_pattern")
            .or_else(|| map.get("envGeneratorPattern"))
        {
            let Value::String(pattern) = pattern else {
                return Err(EnvError::ConfigType {
                    found: format!("{} for env_generator_pattern", json_type_name(pattern)),
                });
            };
            options.env_generator_pattern = Some(pattern.clone());
        }

        Ok(options)
    }
}

impl TryFrom<Value> for ConfigOptions {
    type Error = EnvError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.error_handling, ErrorHandling::Raise);
        for key in [ERR_REQUIRED, ERR_INTEGER, ERR_FLOAT, ERR_FILE, ERR_DIRECTORY] {
            assert!(config.messages[key].starts_with("settings: Ошибка загрузки настроек!"));
        }
        assert_eq!(config.env_generator_pattern, DEFAULT_ENV_GENERATOR_PATTERN);
    }

    #[test]
    fn test_configure_merges_messages() {
        let config = Config::default().configure(
            ConfigOptions::new()
                .message(ERR_REQUIRED, "Custom required message")
                .message("new_type", "New error type message"),
        );

        assert_eq!(config.messages[ERR_REQUIRED], "Custom required message");
        assert_eq!(config.messages["new_type"], "New error type message");
        assert!(config.messages[ERR_INTEGER].starts_with("settings:"));
    }

    #[test]
    fn test_configure_without_options_is_identity() {
        let config = Config::default()
            .configure(ConfigOptions::new().error_handling(ErrorHandling::Print));
        assert_eq!(config.configure(ConfigOptions::new()), config);
    }

    #[test]
    fn test_partial_configure_keeps_other_fields() {
        let original = Config::default();
        let config = original.configure(ConfigOptions::new().error_handling(ErrorHandling::Ignore));

        assert_eq!(config.error_handling, ErrorHandling::Ignore);
        assert_eq!(config.env_generator_pattern, original.env_generator_pattern);
        assert_eq!(config.messages, original.messages);
    }

    #[test]
    fn test_sequential_updates() {
        let config = Config::default()
            .configure(ConfigOptions::new().try_error_handling("exit").unwrap())
            .configure(ConfigOptions::new().env_generator_pattern("pattern_v2"));

        assert_eq!(config.error_handling, ErrorHandling::Exit);
        assert_eq!(config.env_generator_pattern, "pattern_v2");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let changed = Config::default().configure(
            ConfigOptions::new()
                .message(ERR_REQUIRED, "Custom")
                .error_handling(ErrorHandling::Print)
                .env_generator_pattern("new_pattern"),
        );
        assert_ne!(changed, Config::default());
        assert_eq!(Config::reset(), Config::default());
    }

    #[test]
    fn test_from_json() {
        let options = ConfigOptions::from_json(&json!({
            "messages": {"err_required": "Required: %s"},
            "errorHandling": "print",
            "env_generator_pattern": "^X$",
        }))
        .unwrap();

        assert_eq!(options.error_handling, Some(ErrorHandling::Print));
        assert_eq!(options.env_generator_pattern.as_deref(), Some("^X$"));
        assert_eq!(
            options.messages.unwrap()[ERR_REQUIRED],
            "Required: %s".to_string()
        );
    }

    #[test]
    fn test_from_json_rejects_non_mapping_messages() {
        let result = ConfigOptions::from_json(&json!({"messages": "invalid type"}));
        assert!(matches!(result, Err(EnvError::ConfigType { .. })));
    }

    #[test]
    fn test_from_json_rejects_invalid_policy() {
        let result = ConfigOptions::from_json(&json!({"error_handling": "invalid_value"}));
        assert!(matches!(result, Err(EnvError::InvalidPolicy { .. })));

        let result = ConfigOptions::from_json(&json!({"error_handling": 1}));
        assert!(matches!(result, Err(EnvError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_fill_slots() {
        assert_eq!(fill_slots("Required: %s", &["NAME"]), "Required: NAME");
        assert_eq!(fill_slots("%s=%s", &["A", "1"]), "A=1");
        assert_eq!(fill_slots("%s=%s %s", &["A", "1"]), "A=1 ");
        assert_eq!(fill_slots("%s", &["A", "1", "x"]), "A");
        assert_eq!(fill_slots("100%% %s", &["done"]), "100% done");
        assert_eq!(fill_slots("50% off", &[]), "50% off");
    }

    #[test]
    fn test_format_message_unknown_key() {
        assert_eq!(Config::default().format_message("missing", &["A"]), None);
    }

    #[test]
    fn test_message_contains_name_and_value() {
        let message = Config::default().message(ERR_INTEGER, "PORT", "abc", "");
        assert!(message.contains("PORT"));
        assert!(message.contains("abc"));
    }
}
