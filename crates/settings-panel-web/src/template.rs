//! Debug view templates
//!
//! The panel hands a read-only [`DebugView`] to a [`DebugTemplate`]. The
//! default [`HtmlTemplate`] renders one table per section; applications can
//! plug in their own template engine by implementing the trait.

use crate::context::PanelContext;
use crate::utils::html::{display_setting, display_value, escape_html, escape_multiline};
use settings_panel_core::{ExtensionInfo, PanelResult, Route, Snapshot};
use std::fmt::Write;

/// Everything the template may show, gathered at render time
#[derive(Debug, Clone, Copy)]
pub struct DebugView<'a> {
	/// Request data
	pub context: &'a PanelContext,
	/// Declared routes
	pub routes: &'a [Route],
	/// Inspectable settings and their values
	pub settings: &'a Snapshot,
	/// Loaded extensions, in registration order
	pub extensions: &'a [ExtensionInfo],
}

impl DebugView<'_> {
	/// Routes ordered by verb, then path
	pub fn sorted_routes(&self) -> Vec<&Route> {
		let mut routes: Vec<&Route> = self.routes.iter().collect();
		routes.sort_by(|a, b| {
			a.method
				.as_str()
				.cmp(b.method.as_str())
				.then_with(|| a.path.cmp(&b.path))
		});
		routes
	}
}

/// Renders a [`DebugView`] to markup
pub trait DebugTemplate: Send + Sync {
	/// Render the full debug output
	fn render(&self, view: &DebugView<'_>) -> PanelResult<String>;
}

const STYLE: &str = r#"<style type="text/css" media="screen">
  #debug { border: 1px solid #ccc; background: #fff; width: 870px; margin: 2em auto; font-family: 'Lucida Grande', 'Lucida Sans Unicode', sans-serif; }
  #debug h2 { text-align: center; border-bottom: 1px solid #ccc; background-color: #eee; font-size: 1.4em; }
  #debug h3 { margin: 1em 0 0.2em 0.4em; }
  #debug > div { width: 860px; margin: 0 auto 10px auto; }
  #explanation { text-align: center; }
  p.no-data { padding-top: 2px; color: #666; margin: -1.8em 0 0.8em 10em; }
  table.req { width: 850px; text-align: left; color: #666; padding: 0; border-spacing: 0; border: 1px solid #eee; border-bottom: 0; border-left: 0; margin: 0 auto; }
  table.req tr th { padding: 2px 10px; font-weight: bold; background: #f7f7f7; border-bottom: 1px solid #eee; border-left: 1px solid #eee; }
  table.req tr td { padding: 2px 20px 2px 10px; border-bottom: 1px solid #eee; border-left: 1px solid #eee; }
  table.req tr td.key { vertical-align: top; width: 200px; overflow: hidden; }
  table.req tr td.code div { width: 650px; overflow: hidden; }
  .quiet { color: #aaa; }
</style>
"#;

/// Built-in HTML template
///
/// Keys and values are always escaped. The route prefix and the missing
/// version note are the only markup built outside the escaping helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplate;

impl HtmlTemplate {
	/// Create the default template
	pub fn new() -> Self {
		Self
	}

	/// Write one titled table section
	///
	/// `rows` holds `(escaped key, escaped value markup)` pairs.
	fn section(
		out: &mut String,
		id: &str,
		title: &str,
		headers: (&str, &str),
		rows: &[(String, String)],
		empty: &str,
	) -> std::fmt::Result {
		writeln!(out, "<div id=\"{id}\">")?;
		writeln!(out, "<h3>{title}</h3>")?;
		if rows.is_empty() {
			writeln!(out, "<p class=\"no-data\">{empty}</p>")?;
		} else {
			writeln!(out, "<table class=\"req\">")?;
			writeln!(out, "<tr><th>{}</th><th>{}</th></tr>", headers.0, headers.1)?;
			for (key, value) in rows {
				writeln!(
					out,
					"<tr><td class=\"key\">{key}</td><td class=\"code\"><div>{value}</div></td></tr>"
				)?;
			}
			writeln!(out, "</table>")?;
		}
		writeln!(out, "<div class=\"clear\"></div>")?;
		writeln!(out, "</div>")?;
		writeln!(out, "<hr>")
	}
}

impl DebugTemplate for HtmlTemplate {
	fn render(&self, view: &DebugView<'_>) -> PanelResult<String> {
		let ctx = view.context;
		let mut out = String::with_capacity(8 * 1024);
		out.push_str(STYLE);
		writeln!(out, "<div id=\"debug\">")?;
		writeln!(out, "<h2>APP INFORMATION</h2>")?;

		let vars = ("Variable", "Value");

		let rows: Vec<_> = ctx
			.query
			.iter()
			.map(|(k, v)| (escape_html(k).into_owned(), escape_html(v).into_owned()))
			.collect();
		Self::section(&mut out, "get", "GET", vars, &rows, "No GET data.")?;

		let rows: Vec<_> = ctx
			.params
			.iter()
			.map(|(k, v)| {
				(
					escape_html(k).into_owned(),
					escape_html(&display_value(v)).into_owned(),
				)
			})
			.collect();
		Self::section(&mut out, "params", "PARAMS", vars, &rows, "No PARAMS data.")?;

		let rows: Vec<_> = ctx
			.session
			.iter()
			.map(|(k, v)| {
				(
					escape_html(k).into_owned(),
					escape_html(&display_value(v)).into_owned(),
				)
			})
			.collect();
		Self::section(
			&mut out,
			"sessions",
			"SESSIONS",
			vars,
			&rows,
			"No SESSION data.",
		)?;

		let rows: Vec<_> = ctx
			.cookies
			.iter()
			.map(|(k, v)| (escape_html(k).into_owned(), escape_multiline(v)))
			.collect();
		Self::section(&mut out, "cookies", "COOKIES", vars, &rows, "No COOKIE data.")?;

		let script_name = escape_html(&ctx.script_name);
		let rows: Vec<_> = view
			.sorted_routes()
			.into_iter()
			.map(|route| {
				(
					escape_html(route.method.as_str()).into_owned(),
					format!("{script_name}{}", escape_html(&route.path)),
				)
			})
			.collect();
		Self::section(
			&mut out,
			"routes",
			"ROUTES",
			("Verb", "Path"),
			&rows,
			"No ROUTES declared.",
		)?;

		let rows: Vec<_> = view
			.settings
			.iter()
			.map(|(k, v)| {
				(
					escape_html(k).into_owned(),
					escape_html(&display_setting(v.as_ref())).into_owned(),
				)
			})
			.collect();
		Self::section(
			&mut out,
			"settings",
			"SETTINGS",
			vars,
			&rows,
			"No SETTINGS registered.",
		)?;

		let rows: Vec<_> = view
			.extensions
			.iter()
			.map(|ext| {
				let version = match &ext.version {
					Some(version) => escape_html(version).into_owned(),
					None => {
						"Unknown <span class=\"quiet\">(no version declared)</span>".to_string()
					}
				};
				(escape_html(&ext.name).into_owned(), version)
			})
			.collect();
		Self::section(
			&mut out,
			"extensions",
			"EXTENSIONS (loaded)",
			("Name", "Version"),
			&rows,
			"No EXTENSIONS loaded.",
		)?;

		let rows: Vec<_> = ctx
			.environment
			.iter()
			.map(|(k, v)| (escape_html(k).into_owned(), escape_multiline(v)))
			.collect();
		// The environment heading carries its own anchor.
		writeln!(out, "<div id=\"env\">")?;
		writeln!(out, "<h3 id=\"env-info\">ENV</h3>")?;
		writeln!(out, "<table class=\"req\">")?;
		writeln!(out, "<tr><th>Variable</th><th>Value</th></tr>")?;
		for (key, value) in &rows {
			writeln!(
				out,
				"<tr><td class=\"key\">{key}</td><td class=\"code\"><div>{value}</div></td></tr>"
			)?;
		}
		writeln!(out, "</table>")?;
		writeln!(out, "<div class=\"clear\"></div>")?;
		writeln!(out, "</div>")?;

		writeln!(
			out,
			"<p id=\"explanation\">You're seeing this output because you have enabled the <code>show_settings</code> option.</p>"
		)?;
		writeln!(out, "</div>")?;
		Ok(out)
	}
}
