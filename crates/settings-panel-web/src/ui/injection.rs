//! HTML injection

use axum::body::Body;
use axum::response::Response;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http_body_util::BodyExt;
use settings_panel_core::{PanelError, PanelResult};

/// Whether the response carries an HTML document
pub fn is_html(response: &Response<Body>) -> bool {
	response
		.headers()
		.get(CONTENT_TYPE)
		.and_then(|v| v.to_str().ok())
		.is_some_and(|ct| ct.contains("text/html"))
}

/// Insert `output` into an HTML response before the last `marker`
///
/// Non-HTML responses are returned untouched. Without the marker the output
/// is appended to the end of the body.
pub async fn inject_output(
	response: Response<Body>,
	output: &str,
	marker: &str,
) -> PanelResult<Response<Body>> {
	if !is_html(&response) {
		return Ok(response);
	}

	let (mut parts, body) = response.into_parts();
	let body_bytes = body
		.collect()
		.await
		.map_err(|e| PanelError::Http(e.to_string()))?
		.to_bytes();

	let html = String::from_utf8_lossy(&body_bytes);

	let injected_html = match html.rfind(marker).filter(|_| !marker.is_empty()) {
		Some(pos) => format!("{}{}{}", &html[..pos], output, &html[pos..]),
		None => format!("{}{}", html, output),
	};

	// The body length changed.
	parts.headers.remove(CONTENT_LENGTH);
	Ok(Response::from_parts(parts, Body::from(injected_html)))
}
