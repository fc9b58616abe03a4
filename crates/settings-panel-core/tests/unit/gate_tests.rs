//! Visibility gate driven by application settings

use rstest::*;
use serde_json::{Value, json};
use settings_panel_core::{
	AppSettings, Application, SHOW_SETTINGS, SHOW_SETTINGS_ENVIRONMENT, gate::placeholder,
};

fn app_with(enabled: bool, panel_env: &str, active_env: Option<&str>) -> Application {
	let mut settings = AppSettings::new();
	settings
		.set(SHOW_SETTINGS, enabled)
		.set(SHOW_SETTINGS_ENVIRONMENT, panel_env);
	if let Some(env) = active_env {
		settings.set("environment", env);
	}
	Application::with_settings(settings)
}

#[rstest]
#[case(false, "development", Some("development"), false)]
#[case(false, "test", Some("test"), false)]
#[case(true, "test", Some("test"), true)]
#[case(true, "development", Some("production"), false)]
#[case(true, "development", None, true)]
#[case(true, "production", None, false)]
fn test_gate_requires_flag_and_environment(
	#[case] enabled: bool,
	#[case] panel_env: &str,
	#[case] active_env: Option<&str>,
	#[case] expected: bool,
) {
	let app = app_with(enabled, panel_env, active_env);

	assert_eq!(app.panel_open(), expected);
}

#[rstest]
fn test_placeholder_ignores_environment_mismatch() {
	let app = app_with(true, "development", Some("production"));
	let gate = app.visibility();

	assert!(!app.panel_open());
	assert_eq!(gate.placeholder(), "<!-- :show_settings is [ON]  -->");
	assert_eq!(placeholder(false), "<!-- :show_settings is [OFF]  -->");
}

#[rstest]
#[case(json!(""))]
#[case(json!(1))]
fn test_invalid_active_environment_keeps_panel_hidden(#[case] active: Value) {
	let mut app = app_with(true, "development", None);
	app.settings_mut().set("environment", active);

	assert!(app.environment().is_err());
	assert!(!app.panel_open());
	assert_eq!(
		app.visibility().placeholder(),
		"<!-- :show_settings is [ON]  -->"
	);
}

#[rstest]
fn test_active_environment_from_empty_variable_keeps_panel_hidden() {
	let mut settings = AppSettings::from_vars(
		"APP_",
		[
			("APP_SHOW_SETTINGS".to_string(), "true".to_string()),
			("APP_ENVIRONMENT".to_string(), String::new()),
		],
	);
	settings.set(SHOW_SETTINGS_ENVIRONMENT, "development");
	let app = Application::with_settings(settings);

	assert!(!app.panel_open());
}

#[rstest]
#[case(json!(""))]
#[case(json!(7))]
fn test_invalid_panel_environment_keeps_panel_hidden(#[case] panel_env: Value) {
	let mut app = app_with(true, "development", None);
	app.settings_mut().set(SHOW_SETTINGS_ENVIRONMENT, panel_env);

	let gate = app.visibility();
	assert_eq!(gate.environment, None);
	assert!(!app.panel_open());
}

#[rstest]
#[case("prod", "production")]
#[case("Test", "test")]
fn test_environment_names_match_exactly(#[case] panel_env: &str, #[case] active_env: &str) {
	let app = app_with(true, panel_env, Some(active_env));
	assert!(!app.panel_open());
}

#[rstest]
#[case(json!("yes"))]
#[case(json!(1))]
fn test_non_boolean_flag_is_off_in_gate_and_placeholder(#[case] flag: Value) {
	let mut app = app_with(true, "development", None);
	app.settings_mut().set(SHOW_SETTINGS, flag);

	assert!(!app.panel_open());
	assert_eq!(
		app.visibility().placeholder(),
		"<!-- :show_settings is [OFF]  -->"
	);
}
