//! Visibility gate
//!
//! Decides whether the debug panel may render. Both conditions must hold:
//! the panel is enabled, and the application runs in the environment the
//! panel was configured for. An application without an environment counts
//! as [`Environment::Development`].
//!
//! Environment names compare exactly. An environment setting that is present
//! but not a usable name never matches anything, so a bad value keeps the
//! panel hidden.

use crate::environment::Environment;
use crate::error::{PanelError, PanelResult};
use crate::settings::AppSettings;
use serde_json::Value;

/// Setting that turns the panel on
pub const SHOW_SETTINGS: &str = "show_settings";

/// Setting naming the environment the panel renders in
pub const SHOW_SETTINGS_ENVIRONMENT: &str = "show_settings_environment";

/// Setting holding the application's active environment
pub const ENVIRONMENT: &str = "environment";

/// Read an environment name from settings
///
/// Returns `Ok(None)` when the key is absent. A value that is not a
/// non-blank string is an error.
///
/// # Examples
///
/// ```
/// use settings_panel_core::{AppSettings, Environment, gate::read_environment};
///
/// let mut settings = AppSettings::new();
/// assert!(read_environment(&settings, "environment").unwrap().is_none());
///
/// settings.set("environment", "test");
/// assert_eq!(read_environment(&settings, "environment").unwrap(), Some(Environment::Test));
///
/// settings.set("environment", 1);
/// assert!(read_environment(&settings, "environment").is_err());
/// ```
pub fn read_environment(settings: &AppSettings, key: &str) -> PanelResult<Option<Environment>> {
	match settings.value(key) {
		None => Ok(None),
		Some(Value::String(raw)) => Environment::parse(raw).map(Some),
		Some(other) => Err(PanelError::InvalidEnvironment(other.to_string())),
	}
}

/// Whether the panel should render
///
/// Environments compare by exact name: `"prod"` does not match
/// [`Environment::Production`].
///
/// # Examples
///
/// ```
/// use settings_panel_core::{Environment, gate::should_render};
///
/// assert!(should_render(true, &Environment::Test, Some(&Environment::Test)));
/// assert!(should_render(true, &Environment::Development, None));
/// assert!(!should_render(true, &Environment::Development, Some(&Environment::Production)));
/// assert!(!should_render(false, &Environment::Test, Some(&Environment::Test)));
/// ```
pub fn should_render(
	flag: bool,
	configured: &Environment,
	active: Option<&Environment>,
) -> bool {
	let active = active.cloned().unwrap_or_default();
	flag && *configured == active
}

/// HTML comment emitted in place of the panel while the gate is closed
///
/// Only the flag state is reported, never whether the environment matched.
pub fn placeholder(flag: bool) -> String {
	format!(
		"<!-- :show_settings is [{}]  -->",
		if flag { "ON" } else { "OFF" }
	)
}

/// Panel visibility configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityGate {
	/// Whether the panel is enabled
	pub enabled: bool,
	/// Environment the panel renders in
	///
	/// `None` when the configured value is unusable; the gate then stays
	/// closed.
	pub environment: Option<Environment>,
}

impl VisibilityGate {
	/// Create a gate from its two settings
	pub fn new(enabled: bool, environment: Environment) -> Self {
		Self {
			enabled,
			environment: Some(environment),
		}
	}

	/// Read the gate from application settings
	///
	/// A missing or non-boolean `show_settings` counts as disabled. A missing
	/// `show_settings_environment` means development; a present but invalid
	/// one closes the gate.
	pub fn from_settings(settings: &AppSettings) -> Self {
		let enabled = settings.get_bool(SHOW_SETTINGS);
		let environment = match read_environment(settings, SHOW_SETTINGS_ENVIRONMENT) {
			Ok(env) => Some(env.unwrap_or_default()),
			Err(err) => {
				tracing::warn!(error = %err, "invalid {SHOW_SETTINGS_ENVIRONMENT}, panel stays hidden");
				None
			}
		};
		Self {
			enabled,
			environment,
		}
	}

	/// Whether the panel renders for the given active environment
	pub fn is_open(&self, active: Option<&Environment>) -> bool {
		let open = self
			.environment
			.as_ref()
			.is_some_and(|configured| should_render(self.enabled, configured, active));
		tracing::trace!(
			enabled = self.enabled,
			configured = self.environment.as_ref().map(Environment::as_str).unwrap_or("<invalid>"),
			active = active.map(Environment::as_str).unwrap_or("<unset>"),
			open,
			"evaluated settings panel gate"
		);
		open
	}

	/// Whether the panel renders for the environment named in `settings`
	///
	/// An `environment` setting that is present but invalid keeps the gate
	/// closed instead of counting as development.
	pub fn is_open_for(&self, settings: &AppSettings) -> bool {
		match read_environment(settings, ENVIRONMENT) {
			Ok(active) => self.is_open(active.as_ref()),
			Err(err) => {
				tracing::warn!(error = %err, "invalid {ENVIRONMENT}, panel stays hidden");
				false
			}
		}
	}

	/// Placeholder for this gate's flag state
	pub fn placeholder(&self) -> String {
		placeholder(self.enabled)
	}
}

impl Default for VisibilityGate {
	fn default() -> Self {
		Self::new(false, Environment::Development)
	}
}
