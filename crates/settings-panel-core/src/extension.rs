//! Application extensions

use crate::application::Application;
use crate::error::PanelResult;

/// A unit of functionality registered on an [`Application`] at boot
///
/// # Examples
///
/// ```
/// use settings_panel_core::{Application, Extension, PanelResult};
///
/// struct Caching;
///
/// impl Extension for Caching {
///     fn name(&self) -> &str {
///         "Caching"
///     }
///
///     fn registered(&self, app: &mut Application) -> PanelResult<()> {
///         app.settings_mut().set_default("cache_ttl", 300);
///         app.registry_mut().extend(["cache_ttl"])
///     }
/// }
///
/// let mut app = Application::new();
/// app.register(&Caching).unwrap();
/// assert!(app.registry().contains("cache_ttl"));
/// ```
pub trait Extension {
	/// Display name of the extension
	fn name(&self) -> &str;

	/// Version of the extension, if it declares one
	fn version(&self) -> Option<&str> {
		None
	}

	/// Hook run once when the extension is registered
	fn registered(&self, app: &mut Application) -> PanelResult<()>;
}

/// Record of a registered extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
	pub name: String,
	pub version: Option<String>,
}

impl ExtensionInfo {
	/// Create an extension record
	pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
		Self {
			name: name.into(),
			version,
		}
	}

	/// Version for display, `"Unknown"` when none was declared
	pub fn version_display(&self) -> &str {
		self.version.as_deref().unwrap_or("Unknown")
	}
}

impl<E: Extension + ?Sized> From<&E> for ExtensionInfo {
	fn from(extension: &E) -> Self {
		Self::new(extension.name(), extension.version().map(str::to_string))
	}
}
