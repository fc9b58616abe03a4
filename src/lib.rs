//! # Settings Panel
//!
//! A debug panel for axum/Tower web applications that shows the application's
//! settings together with the current request's parameters, session, cookies,
//! routes, loaded extensions and environment.
//!
//! ## Feature Flags
//!
//! - `web` (default) - HTML panel, request context and Tower middleware
//!
//! Without `web` only the registry, visibility gate and settings store are
//! available.
//!
//! ## Configuration
//!
//! | setting | type | default | effect |
//! |---|---|---|---|
//! | `show_settings` | bool | `false` | enables rendering |
//! | `show_settings_environment` | environment | `"development"` | environment required to render |
//!
//! ## Example
//!
//! ```
//! use settings_panel::prelude::*;
//!
//! let mut app = Application::new();
//! SettingsPanel::register(&mut app).unwrap();
//!
//! assert!(app.registry().contains("show_settings"));
//! assert!(!SettingsPanel::is_visible(&app));
//! ```

pub use settings_panel_core::{
	AppSettings, Application, DEFAULT_SETTINGS, Environment, Extension, ExtensionInfo,
	PanelError, PanelResult, Route, SettingName, SettingsRegistry, SettingsSource, Snapshot,
	VisibilityGate,
};

#[cfg(feature = "web")]
pub use settings_panel_web::{
	DebugTemplate, DebugView, HtmlTemplate, PanelConfig, PanelContext, RequestParams,
	SessionData, SettingsPanel, SettingsPanelLayer,
};

/// Commonly used types
pub mod prelude {
	pub use settings_panel_core::{
		AppSettings, Application, Environment, Extension, PanelResult, SettingsSource,
	};

	#[cfg(feature = "web")]
	pub use settings_panel_web::{PanelConfig, PanelContext, SettingsPanel, SettingsPanelLayer};
}
