//! # Settings Panel Core
//!
//! Framework-independent building blocks of the settings debug panel:
//!
//! - [`SettingsRegistry`]: append-only list of setting names the panel shows,
//!   seeded with [`DEFAULT_SETTINGS`] and extended by each extension
//! - [`VisibilityGate`]: renders only when the panel is enabled *and* the
//!   application runs in the configured environment
//! - [`AppSettings`]: ordered settings store with TOML/JSON/environment loaders
//! - [`Application`]: composition root owning settings, registry, extensions
//!   and routes
//!
//! ## Example
//!
//! ```
//! use settings_panel_core::Application;
//!
//! let mut app = Application::new();
//! app.settings_mut().enable("show_settings");
//!
//! assert!(app.panel_open());
//!
//! let snapshot = app.settings_inspect();
//! assert!(snapshot.contains_key("environment"));
//! ```

pub mod application;
pub mod environment;
pub mod error;
pub mod extension;
pub mod gate;
pub mod registry;
pub mod setting;
pub mod settings;

pub use application::{Application, Route};
pub use environment::Environment;
pub use error::{PanelError, PanelResult};
pub use extension::{Extension, ExtensionInfo};
pub use gate::{SHOW_SETTINGS, SHOW_SETTINGS_ENVIRONMENT, VisibilityGate};
pub use registry::{DEFAULT_SETTINGS, SettingsRegistry, Snapshot};
pub use setting::SettingName;
pub use settings::{AppSettings, SettingsSource};
