//! The settings panel extension

use crate::context::PanelContext;
use crate::template::{DebugTemplate, DebugView, HtmlTemplate};
use settings_panel_core::{
	Application, DEFAULT_SETTINGS, Environment, Extension, PanelResult, SHOW_SETTINGS,
	SHOW_SETTINGS_ENVIRONMENT,
};
use std::fmt;
use std::sync::Arc;

/// Version of the settings panel
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human readable name and version of the settings panel
///
/// # Examples
///
/// ```
/// assert!(settings_panel_web::version().starts_with("settings-panel v"));
/// ```
pub fn version() -> String {
	format!("settings-panel v{VERSION}")
}

/// Debug panel showing application settings and request details
///
/// Register it on the [`Application`] at boot, then call
/// [`SettingsPanel::output`] wherever the page should show the panel, or let
/// [`SettingsPanelLayer`](crate::SettingsPanelLayer) inject it into HTML
/// responses.
///
/// # Examples
///
/// ```
/// use settings_panel_core::Application;
/// use settings_panel_web::{PanelContext, SettingsPanel};
///
/// let mut app = Application::new();
/// SettingsPanel::register(&mut app).unwrap();
///
/// let panel = SettingsPanel::new();
/// let html = panel.output(&app, &PanelContext::new());
/// assert_eq!(html, "<!-- :show_settings is [OFF]  -->");
///
/// app.settings_mut().enable("show_settings");
/// let html = panel.output(&app, &PanelContext::new());
/// assert!(html.contains("<div id=\"debug\">"));
/// ```
#[derive(Clone)]
pub struct SettingsPanel {
	template: Arc<dyn DebugTemplate>,
}

impl SettingsPanel {
	/// Name the panel registers under
	pub const NAME: &'static str = "SettingsPanel";

	/// Create a panel rendering with [`HtmlTemplate`]
	pub fn new() -> Self {
		Self::with_template(HtmlTemplate::new())
	}

	/// Create a panel rendering with a custom template
	pub fn with_template(template: impl DebugTemplate + 'static) -> Self {
		Self {
			template: Arc::new(template),
		}
	}

	/// Register the panel on an application with the default template
	pub fn register(app: &mut Application) -> PanelResult<()> {
		app.register(&Self::new())?;
		Ok(())
	}

	/// Whether the panel renders for this application right now
	pub fn is_visible(app: &Application) -> bool {
		app.panel_open()
	}

	/// Debug output for the page
	///
	/// Returns the placeholder comment while the panel is hidden. Never fails:
	/// a template error is logged and replaced by an HTML comment.
	pub fn output(&self, app: &Application, ctx: &PanelContext) -> String {
		if !app.panel_open() {
			return app.visibility().placeholder();
		}
		match self.render(app, ctx) {
			Ok(html) => html,
			Err(err) => {
				tracing::warn!(error = %err, "settings panel failed to render");
				"<!-- :show_settings failed to render -->".to_string()
			}
		}
	}

	/// Render the full debug view regardless of the visibility gate
	pub fn render(&self, app: &Application, ctx: &PanelContext) -> PanelResult<String> {
		let settings = app.settings_inspect();
		let view = DebugView {
			context: ctx,
			routes: app.routes(),
			settings: &settings,
			extensions: app.extensions(),
		};
		self.template.render(&view)
	}
}

impl Default for SettingsPanel {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for SettingsPanel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingsPanel").finish_non_exhaustive()
	}
}

impl Extension for SettingsPanel {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn version(&self) -> Option<&str> {
		Some(VERSION)
	}

	fn registered(&self, app: &mut Application) -> PanelResult<()> {
		let settings = app.settings_mut();
		settings.set_default(SHOW_SETTINGS, false);
		settings.set_default(SHOW_SETTINGS_ENVIRONMENT, Environment::Development.as_str());

		let registry = app.registry_mut();
		let missing: Vec<&str> = DEFAULT_SETTINGS
			.iter()
			.copied()
			.chain([SHOW_SETTINGS, SHOW_SETTINGS_ENVIRONMENT])
			.filter(|name| !registry.contains(name))
			.collect();
		tracing::debug!(added = missing.len(), "settings panel registered");
		registry.extend(missing)
	}
}
