//! Panel middleware configuration

use serde::Deserialize;
use settings_panel_core::PanelResult;

/// Configuration of [`SettingsPanelLayer`](super::SettingsPanelLayer)
///
/// Whether the panel renders at all is decided by the application's
/// `show_settings` and `show_settings_environment` settings; this only tunes
/// how the middleware gathers data and injects the output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
	/// Add the process environment variables to the environment table
	pub include_process_env: bool,

	/// Markup the output is inserted before; appended when not found
	pub injection_marker: String,
}

impl PanelConfig {
	/// Parse a configuration from TOML
	///
	/// # Examples
	///
	/// ```
	/// use settings_panel_web::PanelConfig;
	///
	/// let config = PanelConfig::from_toml_str("include_process_env = true").unwrap();
	/// assert!(config.include_process_env);
	/// assert_eq!(config.injection_marker, "</body>");
	/// ```
	pub fn from_toml_str(source: &str) -> PanelResult<Self> {
		Ok(toml::from_str(source)?)
	}
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			include_process_env: false,
			injection_marker: "</body>".to_string(),
		}
	}
}
