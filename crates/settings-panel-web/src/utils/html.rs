//! HTML escaping helpers

use serde_json::Value;
use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// Returns a borrowed reference if no escaping is needed.
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Turn newlines into `<br>` tags
///
/// Apply after escaping; the input is assumed to be safe markup already.
pub fn nl2br(s: &str) -> String {
	s.replace('\n', "<br>")
}

/// Escape a value and mark every kind of encoded line break with `<br>`
///
/// Besides real newlines this handles the two-character sequence `\n` and the
/// percent-encoded `%0A` often found in header and query values.
pub fn escape_multiline(s: &str) -> String {
	nl2br(&escape_html(s))
		.replace("\\n", "<br>")
		.replace("%0A", "<br>")
}

/// Text shown for a value: strings as-is, anything else as compact JSON
pub fn display_value(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(s) => Cow::Borrowed(s),
		other => Cow::Owned(other.to_string()),
	}
}

/// Text shown for a setting that may not be set
pub fn display_setting(value: Option<&Value>) -> Cow<'_, str> {
	value.map(display_value).unwrap_or(Cow::Borrowed("null"))
}
