//! Settings panel Tower service

use crate::context::PanelContext;
use crate::middleware::PanelConfig;
use crate::panel::SettingsPanel;
use crate::ui::inject_output;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use http::{Request, StatusCode};
use settings_panel_core::Application;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

/// Service produced by [`SettingsPanelLayer`](super::SettingsPanelLayer)
#[derive(Clone)]
pub struct SettingsPanelService<S> {
	pub(crate) inner: S,
	pub(crate) app: Arc<Application>,
	pub(crate) panel: Arc<SettingsPanel>,
	pub(crate) config: Arc<PanelConfig>,
}

impl<S, ReqBody> Service<Request<ReqBody>> for SettingsPanelService<S>
where
	S: Service<Request<ReqBody>, Response = Response<Body>> + Clone + Send + 'static,
	S::Future: Send + 'static,
	S::Error: Send + 'static,
	ReqBody: Send + 'static,
{
	type Response = Response<Body>;
	type Error = S::Error;
	type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
		// Take the service that was driven to readiness.
		let clone = self.inner.clone();
		let mut inner = std::mem::replace(&mut self.inner, clone);

		let app = self.app.clone();
		let panel = self.panel.clone();
		let config = self.config.clone();

		// Request data is only collected when the panel will show it.
		let (parts, body) = req.into_parts();
		let ctx = SettingsPanel::is_visible(&app)
			.then(|| PanelContext::from_parts(&parts, &config));
		let req = Request::from_parts(parts, body);

		Box::pin(async move {
			let response = inner.call(req).await?;

			let output = match &ctx {
				Some(ctx) => panel.output(&app, ctx),
				None => app.visibility().placeholder(),
			};

			match inject_output(response, &output, &config.injection_marker).await {
				Ok(response) => Ok(response),
				Err(err) => {
					tracing::warn!(error = %err, "failed to inject settings panel");
					Ok((StatusCode::INTERNAL_SERVER_ERROR, "response body unavailable").into_response())
				}
			}
		})
	}
}
