//! Application settings store
//!
//! Settings are kept as an ordered map from key to [`serde_json::Value`]. Values
//! can be set programmatically at boot, or loaded from a TOML document or from
//! prefixed environment variables and merged in priority order.
//!
//! ## Example
//!
//! ```
//! use settings_panel_core::{AppSettings, SettingsSource};
//! use serde_json::json;
//!
//! let mut settings = AppSettings::new();
//! settings.enable("show_settings");
//! settings.set("port", json!(8000));
//!
//! assert_eq!(settings.get("port"), Some(json!(8000)));
//! assert_eq!(settings.get("unknown"), None);
//! assert!(settings.get_bool("show_settings"));
//! ```

use crate::error::{PanelError, PanelResult};
use indexmap::IndexMap;
use serde_json::Value;

/// Read access to named configuration values
///
/// Looking up an unknown key yields `None`, never an error.
pub trait SettingsSource {
	/// Current value of the setting `key`, if it is set
	fn get(&self, key: &str) -> Option<Value>;
}

/// Ordered key/value settings owned by an application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSettings {
	values: IndexMap<String, Value>,
}

impl AppSettings {
	/// Create an empty settings store
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a value, replacing any previous one
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.values.insert(key.into(), value.into());
		self
	}

	/// Set a value only when the key has not been configured yet
	///
	/// Returns `true` when the default was applied.
	pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
		let key = key.into();
		if self.values.contains_key(&key) {
			return false;
		}
		self.values.insert(key, value.into());
		true
	}

	/// Set a boolean setting to `true`
	pub fn enable(&mut self, key: impl Into<String>) -> &mut Self {
		self.set(key, true)
	}

	/// Set a boolean setting to `false`
	pub fn disable(&mut self, key: impl Into<String>) -> &mut Self {
		self.set(key, false)
	}

	/// Borrow a value without cloning it
	pub fn value(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Whether the key has been set
	pub fn contains(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Boolean value of a setting; anything other than `true` reads as `false`
	pub fn get_bool(&self, key: &str) -> bool {
		matches!(self.values.get(key), Some(Value::Bool(true)))
	}

	/// String value of a setting, if it is set to a string
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.values.get(key).and_then(Value::as_str)
	}

	/// Iterate over all settings in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of configured settings
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether no settings are configured
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Merge `other` into this store; values from `other` win
	pub fn merge(&mut self, other: AppSettings) -> &mut Self {
		for (key, value) in other.values {
			self.values.insert(key, value);
		}
		self
	}

	/// Load settings from the top-level table of a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use settings_panel_core::AppSettings;
	///
	/// let settings = AppSettings::from_toml_str(r#"
	/// show_settings = true
	/// show_settings_environment = "test"
	/// "#).unwrap();
	///
	/// assert!(settings.get_bool("show_settings"));
	/// assert_eq!(settings.get_str("show_settings_environment"), Some("test"));
	/// ```
	pub fn from_toml_str(source: &str) -> PanelResult<Self> {
		let table: toml::Table = toml::from_str(source)?;
		let mut settings = Self::new();
		for (key, value) in table {
			settings.values.insert(key, serde_json::to_value(value)?);
		}
		Ok(settings)
	}

	/// Load settings from a JSON object
	///
	/// Keys are inserted in the order `serde_json` yields them, which is
	/// sorted by key.
	pub fn from_json_str(source: &str) -> PanelResult<Self> {
		match serde_json::from_str::<Value>(source)? {
			Value::Object(map) => Ok(Self {
				values: map.into_iter().collect(),
			}),
			other => Err(PanelError::Config(format!(
				"expected a JSON object, found {}",
				json_type_name(&other)
			))),
		}
	}

	/// Load settings from process environment variables starting with `prefix`
	///
	/// See [`AppSettings::from_vars`] for how names and values are converted.
	pub fn from_env_prefixed(prefix: &str) -> Self {
		Self::from_vars(prefix, std::env::vars())
	}

	/// Load settings from `(name, value)` pairs starting with `prefix`
	///
	/// The prefix is stripped and the remaining name lowercased. Boolean-like
	/// words become booleans and integers become numbers; everything else is
	/// kept as a string.
	///
	/// # Examples
	///
	/// ```
	/// use settings_panel_core::AppSettings;
	/// use serde_json::json;
	///
	/// let settings = AppSettings::from_vars("APP_", [
	///     ("APP_SHOW_SETTINGS".to_string(), "on".to_string()),
	///     ("APP_PORT".to_string(), "8000".to_string()),
	///     ("HOME".to_string(), "/root".to_string()),
	/// ]);
	///
	/// assert!(settings.get_bool("show_settings"));
	/// assert_eq!(settings.value("port"), Some(&json!(8000)));
	/// assert!(!settings.contains("home"));
	/// ```
	pub fn from_vars<I>(prefix: &str, vars: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut settings = Self::new();
		for (key, value) in vars {
			let Some(stripped) = key.strip_prefix(prefix) else {
				continue;
			};
			if stripped.is_empty() {
				continue;
			}
			settings
				.values
				.insert(stripped.to_lowercase(), coerce_env_value(&value));
		}
		settings
	}
}

impl SettingsSource for AppSettings {
	fn get(&self, key: &str) -> Option<Value> {
		self.values.get(key).cloned()
	}
}

impl<S: SettingsSource + ?Sized> SettingsSource for &S {
	fn get(&self, key: &str) -> Option<Value> {
		(**self).get(key)
	}
}

impl FromIterator<(String, Value)> for AppSettings {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

fn coerce_env_value(raw: &str) -> Value {
	match raw.trim().to_lowercase().as_str() {
		"true" | "yes" | "on" => return Value::Bool(true),
		"false" | "no" | "off" => return Value::Bool(false),
		_ => {}
	}
	if let Ok(n) = raw.trim().parse::<i64>() {
		return Value::from(n);
	}
	Value::String(raw.to_string())
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
