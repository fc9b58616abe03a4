//! Deployment environment tags

use crate::error::{PanelError, PanelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime environment an application is deployed in
///
/// Names are matched exactly. Any name that isn't one of the well-known
/// lowercase tags is kept verbatim as [`Environment::Custom`], so `"Test"` and
/// `"test"` are different environments.
///
/// # Examples
///
/// ```
/// use settings_panel_core::Environment;
///
/// assert_eq!(Environment::parse("test").unwrap(), Environment::Test);
/// assert_eq!(Environment::parse("Test").unwrap(), Environment::Custom("Test".to_string()));
/// assert_eq!(Environment::default(), Environment::Development);
/// assert_eq!(Environment::parse("qa").unwrap().to_string(), "qa");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Environment {
	#[default]
	Development,
	Test,
	Staging,
	Production,
	Custom(String),
}

impl Environment {
	/// Parse an environment name
	pub fn parse(name: &str) -> PanelResult<Self> {
		if name.trim().is_empty() {
			return Err(PanelError::InvalidEnvironment(name.to_string()));
		}
		let env = match name {
			"development" => Self::Development,
			"test" => Self::Test,
			"staging" => Self::Staging,
			"production" => Self::Production,
			_ => Self::Custom(name.to_string()),
		};
		Ok(env)
	}

	/// Name of this environment
	pub fn as_str(&self) -> &str {
		match self {
			Self::Development => "development",
			Self::Test => "test",
			Self::Staging => "staging",
			Self::Production => "production",
			Self::Custom(name) => name,
		}
	}
}

impl fmt::Display for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Environment {
	type Err = PanelError;

	fn from_str(s: &str) -> PanelResult<Self> {
		Self::parse(s)
	}
}

impl TryFrom<String> for Environment {
	type Error = PanelError;

	fn try_from(value: String) -> PanelResult<Self> {
		Self::parse(&value)
	}
}

impl From<Environment> for String {
	fn from(env: Environment) -> Self {
		env.as_str().to_string()
	}
}
