//! Settings panel Tower layer

use crate::middleware::{PanelConfig, SettingsPanelService};
use crate::panel::SettingsPanel;
use settings_panel_core::Application;
use std::sync::Arc;
use tower::Layer;

/// Tower layer injecting the settings panel into HTML responses
///
/// The application must be fully built (extensions registered, routes
/// declared) before it is handed to the layer.
#[derive(Clone)]
pub struct SettingsPanelLayer {
	app: Arc<Application>,
	panel: Arc<SettingsPanel>,
	config: Arc<PanelConfig>,
}

impl SettingsPanelLayer {
	/// Create a layer with the default panel and configuration
	pub fn new(app: Arc<Application>) -> Self {
		Self {
			app,
			panel: Arc::new(SettingsPanel::new()),
			config: Arc::new(PanelConfig::default()),
		}
	}

	/// Use a custom middleware configuration
	pub fn with_config(mut self, config: PanelConfig) -> Self {
		self.config = Arc::new(config);
		self
	}

	/// Use a custom panel, e.g. one with its own template
	pub fn with_panel(mut self, panel: SettingsPanel) -> Self {
		self.panel = Arc::new(panel);
		self
	}
}

impl<S> Layer<S> for SettingsPanelLayer {
	type Service = SettingsPanelService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		SettingsPanelService {
			inner,
			app: self.app.clone(),
			panel: self.panel.clone(),
			config: self.config.clone(),
		}
	}
}
