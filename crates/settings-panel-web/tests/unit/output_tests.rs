//! Panel output through the public API

use crate::common::builders::PanelContextBuilder;
use crate::common::fixtures::{app_with_gate, hidden_app, visible_app};
use rstest::*;
use serde_json::json;
use settings_panel_core::{Application, Extension, PanelResult};
use settings_panel_web::{
	DebugTemplate, DebugView, PanelContext, SettingsPanel, VERSION, version,
};

/// Markup of the section with the given id
fn section<'a>(html: &'a str, id: &str) -> &'a str {
	let start = html
		.find(&format!("<div id=\"{id}\">"))
		.unwrap_or_else(|| panic!("section {id} missing"));
	let rest = &html[start..];
	let end = rest.find("<div class=\"clear\">").unwrap_or(rest.len());
	&rest[..end]
}

/// Unescaped key column of every row in a section, in document order
fn keys(section: &str) -> Vec<&str> {
	section
		.split("<td class=\"key\">")
		.skip(1)
		.map(|cell| &cell[..cell.find("</td>").unwrap()])
		.collect()
}

struct Versionless;

impl Extension for Versionless {
	fn name(&self) -> &str {
		"Versionless"
	}

	fn registered(&self, _app: &mut Application) -> PanelResult<()> {
		Ok(())
	}
}

#[rstest]
fn test_hidden_panel_emits_off_placeholder(hidden_app: Application) {
	let html = SettingsPanel::new().output(&hidden_app, &PanelContext::new());
	assert_eq!(html, "<!-- :show_settings is [OFF]  -->");
}

#[rstest]
fn test_environment_mismatch_emits_on_placeholder() {
	let app = app_with_gate(true, "development", "production");
	let ctx = PanelContextBuilder::new().cookie("secret", "value").build();

	let html = SettingsPanel::new().output(&app, &ctx);

	assert_eq!(html, "<!-- :show_settings is [ON]  -->");
	assert!(!html.contains("secret"));
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_invalid_active_environment_emits_on_placeholder(#[case] active_env: &str) {
	let app = app_with_gate(true, "development", active_env);
	let ctx = PanelContextBuilder::new().cookie("secret", "value").build();

	let html = SettingsPanel::new().output(&app, &ctx);

	assert!(!SettingsPanel::is_visible(&app));
	assert_eq!(html, "<!-- :show_settings is [ON]  -->");
}

#[rstest]
fn test_visible_panel_has_every_section(visible_app: Application) {
	let html = SettingsPanel::new().output(&visible_app, &PanelContext::new());

	assert!(html.contains("<div id=\"debug\">"));
	assert!(html.contains("<h2>APP INFORMATION</h2>"));
	for id in [
		"get",
		"params",
		"sessions",
		"cookies",
		"routes",
		"settings",
		"extensions",
		"env",
	] {
		section(&html, id);
	}
	assert!(html.contains("<h3 id=\"env-info\">ENV</h3>"));
}

#[rstest]
fn test_one_settings_row_per_registry_entry(mut visible_app: Application) {
	visible_app
		.registry_mut()
		.extend(["zeta", "alpha", "zeta"])
		.unwrap();

	let html = SettingsPanel::new().output(&visible_app, &PanelContext::new());
	let rows = keys(section(&html, "settings"));

	let mut expected: Vec<String> = visible_app
		.registry()
		.names()
		.iter()
		.map(|n| n.to_string())
		.collect();
	expected.sort();
	expected.dedup();

	assert_eq!(rows, expected);
}

#[rstest]
fn test_panel_settings_show_their_values(visible_app: Application) {
	let html = SettingsPanel::new().output(&visible_app, &PanelContext::new());
	let settings = section(&html, "settings");

	assert!(settings.contains(
		"<td class=\"key\">show_settings</td><td class=\"code\"><div>true</div></td>"
	));
	assert!(settings.contains(
		"<td class=\"key\">show_settings_environment</td><td class=\"code\"><div>test</div></td>"
	));
	assert!(settings.contains("<td class=\"key\">port</td><td class=\"code\"><div>null</div></td>"));
}

#[rstest]
fn test_one_env_row_per_entry_in_order(visible_app: Application) {
	let ctx = PanelContextBuilder::new()
		.env("ZED", "last")
		.env("ALPHA", "first")
		.env("MIDDLE", "line1\nline2")
		.build();

	let html = SettingsPanel::new().output(&visible_app, &ctx);
	let env = section(&html, "env");

	assert_eq!(keys(env), vec!["ALPHA", "MIDDLE", "ZED"]);
	assert!(env.contains("line1<br>line2"));
}

#[rstest]
fn test_request_sections_sorted_by_key(visible_app: Application) {
	let ctx = PanelContextBuilder::new()
		.query("b", "2")
		.query("a", "1")
		.param("id", json!(7))
		.session("user_id", json!(42))
		.session("flash", json!({"notice": "saved"}))
		.cookie("theme", "dark")
		.cookie("lang", "en")
		.build();

	let html = SettingsPanel::new().output(&visible_app, &ctx);

	assert_eq!(keys(section(&html, "get")), vec!["a", "b"]);
	assert_eq!(keys(section(&html, "params")), vec!["a", "b", "id"]);
	assert_eq!(keys(section(&html, "sessions")), vec!["flash", "user_id"]);
	assert_eq!(keys(section(&html, "cookies")), vec!["lang", "theme"]);
	assert!(section(&html, "sessions").contains("{&quot;notice&quot;:&quot;saved&quot;}"));
}

#[rstest]
fn test_routes_listed_with_mount_prefix(visible_app: Application) {
	let ctx = PanelContextBuilder::new().script_name("/admin").build();

	let html = SettingsPanel::new().output(&visible_app, &ctx);
	let routes = section(&html, "routes");

	assert_eq!(keys(routes), vec!["DELETE", "GET", "POST"]);
	assert!(routes.contains("<div>/admin/users/{id}</div>"));
	assert!(routes.contains("<div>/admin/</div>"));
}

#[rstest]
fn test_extensions_list_versions(mut visible_app: Application) {
	visible_app.register(&Versionless).unwrap();

	let html = SettingsPanel::new().output(&visible_app, &PanelContext::new());
	let extensions = section(&html, "extensions");

	assert_eq!(keys(extensions), vec!["SettingsPanel", "Versionless"]);
	assert!(extensions.contains(&format!("<div>{VERSION}</div>")));
	assert!(extensions.contains("Unknown <span class=\"quiet\">"));
}

#[rstest]
fn test_custom_template_receives_view(visible_app: Application) {
	struct Counting;

	impl DebugTemplate for Counting {
		fn render(&self, view: &DebugView<'_>) -> PanelResult<String> {
			Ok(format!(
				"settings={} routes={} extensions={}",
				view.settings.len(),
				view.routes.len(),
				view.extensions.len()
			))
		}
	}

	let panel = SettingsPanel::with_template(Counting);
	let html = panel.output(&visible_app, &PanelContext::new());

	let settings = visible_app.settings_inspect().len();
	assert_eq!(html, format!("settings={settings} routes=3 extensions=1"));
}

#[rstest]
fn test_version_string() {
	assert_eq!(version(), format!("settings-panel v{VERSION}"));
	assert!(VERSION.split('.').count() >= 3);
}
