//! One prediction exchange, independent of the page.

use salescast_core::{FormInputSet, PredictError, PredictionOutcome};

use crate::csrf::find_csrf_token;
use crate::settings::PredictFormSettings;
use crate::transport::{FormPost, PredictTransport};
use crate::{debug_log, info_log};

/// Sends form inputs to the prediction endpoint and classifies the answer.
#[derive(Debug, Clone)]
pub struct PredictionClient<T> {
	transport: T,
	endpoint: String,
	send_csrf_header: bool,
}

impl<T: PredictTransport> PredictionClient<T> {
	/// Creates a client for the endpoint in `settings`.
	pub fn new(transport: T, settings: &PredictFormSettings) -> Self {
		Self {
			transport,
			endpoint: settings.endpoint.clone(),
			send_csrf_header: settings.send_csrf_header,
		}
	}

	/// Endpoint the inputs are sent to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// The underlying transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Runs one exchange.
	///
	/// Never fails: transport and decoding problems come back as
	/// [`PredictionOutcome::Failed`].
	pub async fn fetch_prediction(&self, inputs: &FormInputSet) -> PredictionOutcome {
		match self.exchange(inputs).await {
			Ok(body) => PredictionOutcome::from_body(&body),
			Err(err) => PredictionOutcome::Failed(err),
		}
	}

	async fn exchange(&self, inputs: &FormInputSet) -> Result<String, PredictError> {
		let csrf_token = if self.send_csrf_header {
			find_csrf_token().map(|token| {
				debug_log!("Using CSRF token from {:?}", token.source);
				token.value
			})
		} else {
			None
		};
		let request = FormPost::new(self.endpoint.clone(), inputs.to_urlencoded()?)
			.with_csrf_token(csrf_token);

		let response = self.transport.post_form(request).await?;
		if !response.is_success() {
			info_log!(
				"{} answered with status {}",
				self.endpoint,
				response.status
			);
		}
		Ok(response.body)
	}
}
