//! HTTP delivery of the prediction form.
//!
//! The transport only moves bytes: it POSTs an already encoded form body and
//! hands back the status and the body text. Interpreting the body is the
//! client's job, and the status is deliberately not interpreted at all since
//! the prediction service reports input errors as a 400 with a JSON `error`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use salescast_core::PredictError;
use url::Url;

use crate::csrf::CSRF_HEADER_NAME;

/// Content type of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One form submission, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPost {
	/// Endpoint, absolute or relative to the transport's base URL
	pub endpoint: String,
	/// URL-encoded form body
	pub body: String,
	/// CSRF token to send as `X-CSRFToken`
	pub csrf_token: Option<String>,
}

impl FormPost {
	/// Creates a submission without a CSRF token.
	pub fn new(endpoint: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			body: body.into(),
			csrf_token: None,
		}
	}

	/// Attaches a CSRF token.
	pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
		self.csrf_token = token;
		self
	}
}

/// Status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code
	pub status: u16,
	/// Response body as text
	pub body: String,
}

impl RawResponse {
	/// Creates a response.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends form submissions.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait PredictTransport {
	/// POSTs the form body and returns whatever the server answered.
	///
	/// Errors are reserved for requests that got no answer at all.
	async fn post_form(&self, request: FormPost) -> Result<RawResponse, PredictError>;
}

/// [`PredictTransport`] over `reqwest`.
///
/// No timeout and no retry: a hanging server keeps the request pending until
/// the underlying connection gives up.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: reqwest::Client,
	base: Option<Url>,
}

impl HttpTransport {
	/// Creates a transport that only accepts absolute endpoints.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a transport resolving relative endpoints against `base`.
	pub fn with_base(base: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			base: Some(base),
		}
	}

	/// Creates a transport resolving relative endpoints against the page URL.
	#[cfg(target_arch = "wasm32")]
	pub fn for_current_page() -> Result<Self, PredictError> {
		let href = web_sys::window()
			.ok_or_else(|| PredictError::request("no window available"))?
			.location()
			.href()
			.map_err(|e| PredictError::request(format!("{:?}", e)))?;
		let base = Url::parse(&href).map_err(|e| PredictError::request(e.to_string()))?;
		Ok(Self::with_base(base))
	}

	/// Base URL for relative endpoints.
	pub fn base(&self) -> Option<&Url> {
		self.base.as_ref()
	}

	/// Resolves an endpoint to an absolute URL.
	pub fn resolve(&self, endpoint: &str) -> Result<Url, PredictError> {
		match Url::parse(endpoint) {
			Ok(url) => Ok(url),
			Err(url::ParseError::RelativeUrlWithoutBase) => {
				let base = self.base.as_ref().ok_or_else(|| {
					PredictError::request(format!("relative endpoint `{}` without a base URL", endpoint))
				})?;
				base.join(endpoint)
					.map_err(|e| PredictError::request(e.to_string()))
			}
			Err(e) => Err(PredictError::request(e.to_string())),
		}
	}
}

#[async_trait(?Send)]
impl PredictTransport for HttpTransport {
	async fn post_form(&self, request: FormPost) -> Result<RawResponse, PredictError> {
		let url = self.resolve(&request.endpoint)?;
		let mut builder = self
			.client
			.post(url)
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.body(request.body);
		if let Some(token) = request.csrf_token {
			builder = builder.header(CSRF_HEADER_NAME, token);
		}

		let response = builder
			.send()
			.await
			.map_err(|e| PredictError::transport(e.to_string()))?;
		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|e| PredictError::transport(e.to_string()))?;

		Ok(RawResponse { status, body })
	}
}
