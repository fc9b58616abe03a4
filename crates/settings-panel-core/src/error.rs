//! Error types for the settings panel

use thiserror::Error;

/// Errors raised while configuring or rendering the settings panel
///
/// Request-time rendering never surfaces these to the page; they are logged
/// and replaced by a placeholder comment instead.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PanelError {
	#[error("Invalid setting name: {0:?}")]
	InvalidSettingName(String),

	#[error("Invalid environment name: {0:?}")]
	InvalidEnvironment(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Render error: {0}")]
	Render(#[from] std::fmt::Error),

	#[error("HTTP error: {0}")]
	Http(String),

	#[error("Extension {name} failed to register: {message}")]
	Registration { name: String, message: String },
}

/// Result alias used across the settings panel crates
pub type PanelResult<T> = Result<T, PanelError>;
