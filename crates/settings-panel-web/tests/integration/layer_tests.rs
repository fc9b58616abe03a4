//! SettingsPanelLayer mounted on an axum router

use crate::common::fixtures::{app_with_gate, hidden_app, visible_app};
use axum::Router;
use axum::body::Body;
use axum::middleware::{self, Next};
use axum::response::{Html, Json, Response};
use axum::routing::get;
use http::header::{CONTENT_TYPE, COOKIE};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use rstest::*;
use serde_json::json;
use serial_test::serial;
use settings_panel_core::Application;
use settings_panel_web::{PanelConfig, SessionData, SettingsPanelLayer};
use std::collections::BTreeMap;
use tower::ServiceExt;

const PAGE: &str = "<html><body><p>Hello</p></body></html>";

fn router(app: Application, config: PanelConfig) -> Router {
	Router::new()
		.route("/", get(|| async { Html(PAGE) }))
		.route("/api", get(|| async { Json(json!({ "ok": true })) }))
		.layer(SettingsPanelLayer::new(app.into_shared()).with_config(config))
}

async fn get_body(router: Router, request: Request<Body>) -> (StatusCode, String) {
	let response = router.oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	(status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn request(uri: &str) -> Request<Body> {
	Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_hidden_panel_injects_placeholder_only(hidden_app: Application) {
	let router = router(hidden_app, PanelConfig::default());

	let (status, body) = get_body(router, request("/?token=abc")).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		body,
		"<html><body><p>Hello</p><!-- :show_settings is [OFF]  --></body></html>"
	);
}

#[rstest]
#[tokio::test]
async fn test_visible_panel_injected_before_body_end(visible_app: Application) {
	let router = router(visible_app, PanelConfig::default());

	let (status, body) = get_body(router, request("/?name=Ferris&lang=rust")).await;

	assert_eq!(status, StatusCode::OK);
	assert!(body.starts_with("<html><body><p>Hello</p>"));
	assert!(body.ends_with("</div>\n</body></html>"));
	assert!(body.contains("<td class=\"key\">name</td><td class=\"code\"><div>Ferris</div></td>"));
	assert!(body.contains("<td class=\"key\">QUERY_STRING</td>"));
}

#[rstest]
#[tokio::test]
async fn test_json_responses_are_untouched(visible_app: Application) {
	let router = router(visible_app, PanelConfig::default());

	let response = router.oneshot(request("/api")).await.unwrap();

	assert_eq!(
		response.headers().get(CONTENT_TYPE).unwrap(),
		"application/json"
	);
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	assert_eq!(&bytes[..], br#"{"ok":true}"#);
}

#[rstest]
#[tokio::test]
async fn test_mismatched_environment_hides_request_data() {
	let app = app_with_gate(true, "development", "production");
	let router = router(app, PanelConfig::default());

	let request = Request::builder()
		.uri("/")
		.header(COOKIE, "session_id=very-secret")
		.body(Body::empty())
		.unwrap();
	let (_, body) = get_body(router, request).await;

	assert!(body.contains("<!-- :show_settings is [ON]  -->"));
	assert!(!body.contains("very-secret"));
}

#[rstest]
#[tokio::test]
async fn test_session_published_by_host_layer(visible_app: Application) {
	async fn fake_session(mut request: Request<Body>, next: Next) -> Response {
		let mut data = BTreeMap::new();
		data.insert("user_id".to_string(), json!(42));
		request.extensions_mut().insert(SessionData(data));
		next.run(request).await
	}

	let router = Router::new()
		.route("/", get(|| async { Html(PAGE) }))
		.layer(SettingsPanelLayer::new(visible_app.into_shared()))
		.layer(middleware::from_fn(fake_session));

	let (_, body) = get_body(router, request("/")).await;

	assert!(body.contains("<td class=\"key\">user_id</td><td class=\"code\"><div>42</div></td>"));
}

#[rstest]
#[tokio::test]
async fn test_nested_router_root_reports_mount_prefix(visible_app: Application) {
	let admin = Router::new()
		.route("/", get(|| async { Html(PAGE) }))
		.layer(SettingsPanelLayer::new(visible_app.into_shared()));
	let router = Router::new().nest("/admin", admin);

	let (status, body) = get_body(router, request("/admin")).await;

	assert_eq!(status, StatusCode::OK);
	assert!(body.contains("<td class=\"key\">SCRIPT_NAME</td><td class=\"code\"><div>/admin</div></td>"));
	assert!(body.contains("<div>/admin/users</div>"));
}

#[rstest]
#[tokio::test]
async fn test_custom_injection_marker(visible_app: Application) {
	let config = PanelConfig {
		injection_marker: "<p>".to_string(),
		..Default::default()
	};
	let router = router(visible_app, config);

	let (_, body) = get_body(router, request("/")).await;

	assert!(body.starts_with("<html><body><style"));
	assert!(body.ends_with("<p>Hello</p></body></html>"));
}

#[rstest]
#[tokio::test]
#[serial(process_env)]
async fn test_process_environment_opt_in(visible_app: Application) {
	// SAFETY: serialized with every other test touching the process environment.
	unsafe {
		std::env::set_var("SETTINGS_PANEL_WEB_MARKER", "present");
	}

	let config = PanelConfig {
		include_process_env: true,
		..Default::default()
	};
	let router = router(visible_app, config);
	let (_, body) = get_body(router, request("/")).await;

	// SAFETY: see above.
	unsafe {
		std::env::remove_var("SETTINGS_PANEL_WEB_MARKER");
	}

	assert!(body.contains(
		"<td class=\"key\">SETTINGS_PANEL_WEB_MARKER</td><td class=\"code\"><div>present</div></td>"
	));
}
