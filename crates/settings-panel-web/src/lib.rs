//! # Settings Panel Web
//!
//! An HTML debug panel listing the current request's query parameters, merged
//! parameters, session, cookies, declared routes, application settings,
//! loaded extensions and the request environment.
//!
//! The panel only renders when the application enables `show_settings` *and*
//! runs in the environment named by `show_settings_environment` (development
//! by default). Otherwise it emits a short HTML comment and nothing else.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{Router, response::Html, routing::get};
//! use settings_panel_core::Application;
//! use settings_panel_web::{SettingsPanel, SettingsPanelLayer};
//! use http::Method;
//!
//! let mut app = Application::new();
//! SettingsPanel::register(&mut app)?;
//! app.settings_mut().enable("show_settings");
//! app.route(Method::GET, "/");
//!
//! let router = Router::new()
//!     .route("/", get(|| async { Html("<html><body>Hello</body></html>") }))
//!     .layer(SettingsPanelLayer::new(app.into_shared()));
//! ```
//!
//! ## Architecture
//!
//! 1. **Middleware Layer**: captures the [`PanelContext`] before the handler runs
//! 2. **Panel**: checks the visibility gate and renders the [`DebugView`]
//! 3. **Template**: [`HtmlTemplate`] by default, swappable via [`DebugTemplate`]
//! 4. **UI Layer**: injects the output into `text/html` responses

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod context;
pub mod middleware;
pub mod panel;
pub mod template;
pub mod ui;
pub mod utils;

pub use context::{PanelContext, RequestParams, SessionData};
pub use middleware::{PanelConfig, SettingsPanelLayer, SettingsPanelService};
pub use panel::{SettingsPanel, VERSION, version};
pub use template::{DebugTemplate, DebugView, HtmlTemplate};
