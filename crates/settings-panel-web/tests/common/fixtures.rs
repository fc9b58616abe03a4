//! Common test fixtures for settings-panel-web tests
//!
//! This module provides reusable test fixtures using rstest framework.

use http::Method;
use rstest::*;
use settings_panel_core::{AppSettings, Application, SHOW_SETTINGS, SHOW_SETTINGS_ENVIRONMENT};
use settings_panel_web::SettingsPanel;

/// Build an application with the panel registered and the given gate settings
pub fn app_with_gate(enabled: bool, panel_env: &str, active_env: &str) -> Application {
	let mut settings = AppSettings::new();
	settings.set("environment", active_env);

	let mut app = Application::with_settings(settings);
	SettingsPanel::register(&mut app).unwrap();
	app.settings_mut()
		.set(SHOW_SETTINGS, enabled)
		.set(SHOW_SETTINGS_ENVIRONMENT, panel_env);
	app.route(Method::GET, "/")
		.route(Method::POST, "/users")
		.route(Method::DELETE, "/users/{id}");
	app
}

/// Application whose panel is visible
///
/// Runs in the test environment with `show_settings_environment = "test"`.
#[fixture]
pub fn visible_app() -> Application {
	app_with_gate(true, "test", "test")
}

/// Application with the panel registered but disabled
#[fixture]
pub fn hidden_app() -> Application {
	app_with_gate(false, "test", "test")
}
