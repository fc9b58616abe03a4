//! Registry of inspectable settings
//!
//! The registry is an append-only list of setting names whose values the
//! debug panel displays. It is seeded with [`DEFAULT_SETTINGS`] and every
//! extension may add its own names while the application is being built.
//!
//! Duplicates are accepted on write and dropped on read, keeping the first
//! occurrence of each name.
//!
//! # Examples
//!
//! ```
//! use settings_panel_core::{AppSettings, SettingsRegistry};
//!
//! let mut registry = SettingsRegistry::with_defaults();
//! registry.extend(["show_settings", "show_settings"]).unwrap();
//!
//! let settings = AppSettings::new();
//! let snapshot = registry.snapshot(&settings);
//!
//! assert_eq!(snapshot.len(), registry.deduplicated().len());
//! assert_eq!(snapshot.get("show_settings"), Some(&None));
//! ```

use crate::error::{PanelError, PanelResult};
use crate::setting::SettingName;
use crate::settings::SettingsSource;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// Setting names every application exposes for inspection
pub const DEFAULT_SETTINGS: [&str; 20] = [
	"app_file",
	"bind",
	"clean_trace",
	"dump_errors",
	"environment",
	"lock",
	"logging",
	"method_override",
	"port",
	"public",
	"raise_errors",
	"reload_templates",
	"root",
	"run",
	"running",
	"server",
	"sessions",
	"show_exceptions",
	"static",
	"views",
];

/// Point-in-time mapping from setting name to its current value
///
/// Keys are unique and iterate in lexicographic order. Settings the
/// application doesn't know map to `None`.
pub type Snapshot = BTreeMap<String, Option<Value>>;

/// Ordered, append-only list of inspectable setting names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRegistry {
	names: Vec<SettingName>,
}

impl SettingsRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry seeded with [`DEFAULT_SETTINGS`]
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry
			.names
			.extend(DEFAULT_SETTINGS.iter().map(|name| SettingName(name.to_string())));
		registry
	}

	/// Install a set of default names, keeping everything registered before
	///
	/// Calling this more than once appends again; nothing already in the
	/// registry is dropped.
	pub fn register<I, N>(&mut self, defaults: I) -> PanelResult<()>
	where
		I: IntoIterator<Item = N>,
		N: TryInto<SettingName, Error = PanelError>,
	{
		let before = self.names.len();
		self.extend(defaults)?;
		tracing::debug!(
			added = self.names.len() - before,
			total = self.names.len(),
			"registered default inspectable settings"
		);
		Ok(())
	}

	/// Append names to the registry
	///
	/// Fails without modifying the registry if any name is blank.
	pub fn extend<I, N>(&mut self, names: I) -> PanelResult<()>
	where
		I: IntoIterator<Item = N>,
		N: TryInto<SettingName, Error = PanelError>,
	{
		let names = names
			.into_iter()
			.map(|name| name.try_into())
			.collect::<PanelResult<Vec<SettingName>>>()?;
		for name in &names {
			tracing::trace!(setting = %name, "adding inspectable setting");
		}
		self.names.extend(names);
		Ok(())
	}

	/// Whether `name` has been registered
	pub fn contains(&self, name: &str) -> bool {
		self.names.iter().any(|n| n.as_str() == name)
	}

	/// All registered names, duplicates included, in insertion order
	pub fn names(&self) -> &[SettingName] {
		&self.names
	}

	/// Registered names without duplicates, in first-occurrence order
	pub fn deduplicated(&self) -> Vec<&SettingName> {
		let mut seen = HashSet::with_capacity(self.names.len());
		let mut unique = Vec::with_capacity(self.names.len());
		for name in &self.names {
			if seen.insert(name.as_str()) {
				unique.push(name);
			}
		}
		unique
	}

	/// Number of registered names, duplicates included
	pub fn len(&self) -> usize {
		self.names.len()
	}

	/// Whether nothing has been registered
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Look up the current value of every registered setting
	pub fn snapshot<S: SettingsSource + ?Sized>(&self, source: &S) -> Snapshot {
		self.deduplicated()
			.into_iter()
			.map(|name| (name.to_string(), source.get(name.as_str())))
			.collect()
	}
}
