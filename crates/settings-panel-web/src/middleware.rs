//! Middleware components
//!
//! This module provides Tower/Axum middleware that injects the settings panel
//! into HTML responses.

pub mod config;
pub mod layer;
pub mod service;

pub use config::PanelConfig;
pub use layer::SettingsPanelLayer;
pub use service::SettingsPanelService;
