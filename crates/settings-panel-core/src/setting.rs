//! Setting names

use crate::error::{PanelError, PanelResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a configuration key on the application
///
/// The only requirement is that the name is not blank.
///
/// # Examples
///
/// ```
/// use settings_panel_core::SettingName;
///
/// let name = SettingName::new("show_settings").unwrap();
/// assert_eq!(name.as_str(), "show_settings");
/// assert!(SettingName::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SettingName(pub(crate) String);

impl SettingName {
	/// Create a setting name, rejecting blank strings
	pub fn new(name: impl Into<String>) -> PanelResult<Self> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(PanelError::InvalidSettingName(name));
		}
		Ok(Self(name))
	}

	/// Borrow the name as a string slice
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SettingName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for SettingName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for SettingName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for SettingName {
	type Error = PanelError;

	fn try_from(value: String) -> PanelResult<Self> {
		Self::new(value)
	}
}

impl TryFrom<&str> for SettingName {
	type Error = PanelError;

	fn try_from(value: &str) -> PanelResult<Self> {
		Self::new(value)
	}
}

impl From<SettingName> for String {
	fn from(name: SettingName) -> Self {
		name.0
	}
}
