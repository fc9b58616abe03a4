//! Application composition root
//!
//! [`Application`] owns everything the settings panel reads: the settings
//! store, the inspectable settings registry, the loaded extensions and the
//! declared routes. It is built mutably at boot and then shared read-only
//! with [`Application::into_shared`].

use crate::environment::Environment;
use crate::error::{PanelError, PanelResult};
use crate::extension::{Extension, ExtensionInfo};
use crate::gate::{ENVIRONMENT, VisibilityGate, read_environment};
use crate::registry::{SettingsRegistry, Snapshot};
use crate::settings::AppSettings;
use http::Method;
use std::sync::Arc;

/// A declared route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	pub method: Method,
	pub path: String,
}

impl Route {
	/// Create a route record
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
		}
	}
}

/// Application state visible to the settings panel
#[derive(Debug, Clone)]
pub struct Application {
	settings: AppSettings,
	registry: SettingsRegistry,
	extensions: Vec<ExtensionInfo>,
	routes: Vec<Route>,
}

impl Application {
	/// Create an application running in development with the default
	/// inspectable settings registered
	pub fn new() -> Self {
		Self::with_settings(AppSettings::new())
	}

	/// Create an application from pre-loaded settings
	///
	/// `environment` defaults to development when the settings don't set it.
	pub fn with_settings(mut settings: AppSettings) -> Self {
		settings.set_default(ENVIRONMENT, Environment::Development.as_str());
		Self {
			settings,
			registry: SettingsRegistry::with_defaults(),
			extensions: Vec::new(),
			routes: Vec::new(),
		}
	}

	/// Register an extension and run its registration hook
	///
	/// The extension is recorded only when its hook succeeds.
	pub fn register<E: Extension + ?Sized>(&mut self, extension: &E) -> PanelResult<&mut Self> {
		let info = ExtensionInfo::from(extension);
		tracing::debug!(
			extension = %info.name,
			version = info.version_display(),
			"registering extension"
		);
		extension.registered(self).map_err(|err| match err {
			PanelError::Registration { .. } => err,
			other => PanelError::Registration {
				name: info.name.clone(),
				message: other.to_string(),
			},
		})?;
		self.extensions.push(info);
		Ok(self)
	}

	/// Declare a route
	pub fn route(&mut self, method: Method, path: impl Into<String>) -> &mut Self {
		self.routes.push(Route::new(method, path));
		self
	}

	/// Application settings
	pub fn settings(&self) -> &AppSettings {
		&self.settings
	}

	/// Mutable application settings
	pub fn settings_mut(&mut self) -> &mut AppSettings {
		&mut self.settings
	}

	/// Inspectable settings registry
	pub fn registry(&self) -> &SettingsRegistry {
		&self.registry
	}

	/// Mutable inspectable settings registry
	pub fn registry_mut(&mut self) -> &mut SettingsRegistry {
		&mut self.registry
	}

	/// Extensions in registration order
	pub fn extensions(&self) -> &[ExtensionInfo] {
		&self.extensions
	}

	/// Whether an extension with this name has been registered
	pub fn has_extension(&self, name: &str) -> bool {
		self.extensions.iter().any(|ext| ext.name == name)
	}

	/// Declared routes in declaration order
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Active environment
	///
	/// `Ok(None)` when unset; an error when set to something that isn't a
	/// valid environment name.
	pub fn environment(&self) -> PanelResult<Option<Environment>> {
		read_environment(&self.settings, ENVIRONMENT)
	}

	/// Current value of every inspectable setting
	pub fn settings_inspect(&self) -> Snapshot {
		self.registry.snapshot(&self.settings)
	}

	/// Panel visibility read from the current settings
	pub fn visibility(&self) -> VisibilityGate {
		VisibilityGate::from_settings(&self.settings)
	}

	/// Whether the settings panel may render right now
	pub fn panel_open(&self) -> bool {
		self.visibility().is_open_for(&self.settings)
	}

	/// Freeze the application for sharing across requests
	pub fn into_shared(self) -> Arc<Self> {
		Arc::new(self)
	}
}

impl Default for Application {
	fn default() -> Self {
		Self::new()
	}
}
