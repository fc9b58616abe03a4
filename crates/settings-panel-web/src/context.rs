//! Per-request data shown by the panel
//!
//! [`PanelContext`] is gathered from the incoming request before it reaches
//! the handler. Session contents and merged parameters belong to the host
//! application; it exposes them by inserting [`SessionData`] and
//! [`RequestParams`] into the request extensions.

use crate::middleware::PanelConfig;
use axum::extract::{ConnectInfo, OriginalUri};
use http::header::{COOKIE, HOST};
use http::request::Parts;
use serde_json::Value;
use std::collections::BTreeMap;
use std::net::SocketAddr;

/// Session contents published by the host's session layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData(pub BTreeMap<String, Value>);

/// Merged request parameters (path, form, ...) published by the host
///
/// These are layered over the query string when building
/// [`PanelContext::params`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(pub BTreeMap<String, Value>);

/// Read-only request data handed to the template
///
/// Every map is keyed by name and iterates in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelContext {
	/// Decoded query string parameters
	pub query: BTreeMap<String, String>,
	/// Query parameters merged with host-supplied parameters
	pub params: BTreeMap<String, Value>,
	/// Session contents
	pub session: BTreeMap<String, Value>,
	/// Request cookies
	pub cookies: BTreeMap<String, String>,
	/// Path prefix the application is mounted under
	pub script_name: String,
	/// CGI-style request environment
	pub environment: BTreeMap<String, String>,
}

impl PanelContext {
	/// Create an empty context
	pub fn new() -> Self {
		Self::default()
	}

	/// Gather the context from request parts
	pub fn from_parts(parts: &Parts, config: &PanelConfig) -> Self {
		let query = parse_query(parts.uri.query());

		let mut params: BTreeMap<String, Value> = query
			.iter()
			.map(|(k, v)| (k.clone(), Value::String(v.clone())))
			.collect();
		if let Some(RequestParams(extra)) = parts.extensions.get::<RequestParams>() {
			params.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
		}

		let session = parts
			.extensions
			.get::<SessionData>()
			.map(|SessionData(data)| data.clone())
			.unwrap_or_default();

		let script_name = script_name(parts);
		let environment = request_environment(parts, &script_name, config);

		Self {
			query,
			params,
			session,
			cookies: parse_cookies(parts),
			script_name,
			environment,
		}
	}
}

fn parse_query(query: Option<&str>) -> BTreeMap<String, String> {
	let Some(query) = query.filter(|q| !q.is_empty()) else {
		return BTreeMap::new();
	};
	match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
		Ok(pairs) => pairs.into_iter().collect(),
		Err(err) => {
			tracing::debug!(error = %err, "unparsable query string");
			BTreeMap::new()
		}
	}
}

fn parse_cookies(parts: &Parts) -> BTreeMap<String, String> {
	parts
		.headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|header| header.split(';'))
		.filter_map(|pair| {
			let (name, value) = pair.trim().split_once('=')?;
			let name = name.trim();
			if name.is_empty() {
				return None;
			}
			Some((name.to_string(), value.trim().to_string()))
		})
		.collect()
}

/// Prefix stripped from the path by router nesting
fn script_name(parts: &Parts) -> String {
	let Some(OriginalUri(original)) = parts.extensions.get::<OriginalUri>() else {
		return String::new();
	};
	let outer = original.path();
	let inner = parts.uri.path();
	// A nested router sees its own root as "/" even when the request had no
	// trailing slash.
	let prefix = if inner == "/" {
		outer.strip_suffix('/').unwrap_or(outer)
	} else {
		outer.strip_suffix(inner).unwrap_or_default()
	};
	prefix.to_string()
}

fn request_environment(
	parts: &Parts,
	script_name: &str,
	config: &PanelConfig,
) -> BTreeMap<String, String> {
	let mut env = BTreeMap::new();

	if config.include_process_env {
		env.extend(std::env::vars());
	}

	env.insert("REQUEST_METHOD".to_string(), parts.method.to_string());
	env.insert("SCRIPT_NAME".to_string(), script_name.to_string());
	env.insert("PATH_INFO".to_string(), parts.uri.path().to_string());
	env.insert(
		"QUERY_STRING".to_string(),
		parts.uri.query().unwrap_or_default().to_string(),
	);
	env.insert(
		"SERVER_PROTOCOL".to_string(),
		format!("{:?}", parts.version),
	);

	let authority = parts
		.headers
		.get(HOST)
		.and_then(|h| h.to_str().ok())
		.map(str::to_string)
		.or_else(|| parts.uri.authority().map(|a| a.to_string()));
	if let Some(authority) = authority {
		let (name, port) = match authority.rsplit_once(':') {
			Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => {
				(name.to_string(), port.to_string())
			}
			_ => (authority.clone(), default_port(parts).to_string()),
		};
		env.insert("SERVER_NAME".to_string(), name);
		env.insert("SERVER_PORT".to_string(), port);
	}

	if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
		env.insert("REMOTE_ADDR".to_string(), addr.ip().to_string());
	}

	for name in parts.headers.keys() {
		let joined = parts
			.headers
			.get_all(name)
			.iter()
			.map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
			.collect::<Vec<_>>()
			.join(", ");
		let key = format!(
			"HTTP_{}",
			name.as_str().to_ascii_uppercase().replace('-', "_")
		);
		env.insert(key, joined);
	}

	env
}

fn default_port(parts: &Parts) -> u16 {
	match parts.uri.scheme_str() {
		Some("https") => 443,
		_ => 80,
	}
}
