//! The form submission cycle.
//!
//! ```text
//! submit ─▶ prevent default ─▶ hide form + results ─▶ read fields
//!                                                         │
//!                                             POST, await, classify
//!                                                         │
//!                                                    show form
//!                                                         │
//!              ┌──────────────────────┬───────────────────┴───────────┐
//!          Ready: fill results,   Rejected: alert            Failed: log
//!          show results
//! ```
//!
//! The synchronous half runs inside the submit event (`on_submit`), the rest
//! in the returned future. Cycles are independent: a second submission while
//! the first is in flight starts a second exchange and whichever finishes
//! last owns the results area.

use std::rc::Rc;

use salescast_core::{FormInputSet, PredictError, Prediction, PredictionOutcome, ResultView};

use crate::client::PredictionClient;
use crate::page::{PageError, PageSurface, SubmitEvent};
use crate::settings::PredictFormSettings;
use crate::transport::PredictTransport;
use crate::{error_log, info_log};

/// What one submit cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
	/// The prediction was written into the results area
	Rendered,
	/// The service rejected the inputs; the message was shown in an alert
	Alerted(String),
	/// The request, the response or the page failed; the message was logged
	Failed(String),
}

/// Handles submissions of the prediction form.
#[derive(Debug)]
pub struct PredictFormHandler<T, P> {
	client: PredictionClient<T>,
	page: P,
	settings: PredictFormSettings,
}

impl<T, P> PredictFormHandler<T, P>
where
	T: PredictTransport + 'static,
	P: PageSurface + 'static,
{
	/// Creates a handler posting through `transport` and rendering into `page`.
	pub fn new(transport: T, page: P, settings: PredictFormSettings) -> Self {
		Self {
			client: PredictionClient::new(transport, &settings),
			page,
			settings,
		}
	}

	/// The page this handler renders into.
	pub fn page(&self) -> &P {
		&self.page
	}

	/// The handler's settings.
	pub fn settings(&self) -> &PredictFormSettings {
		&self.settings
	}

	/// The prediction client.
	pub fn client(&self) -> &PredictionClient<T> {
		&self.client
	}

	/// Checks that every element of the page contract exists.
	pub fn check_page_contract(&self) -> Result<(), PageError> {
		self.settings
			.element_ids()
			.into_iter()
			.try_for_each(|id| self.page.ensure_element(id))
	}

	/// Handles a submit event.
	///
	/// Suppresses the default navigation, hides the form and the results and
	/// reads the fields before returning. The returned future performs the
	/// request and updates the page; the form is visible again once it
	/// resolves, whatever the outcome.
	pub fn on_submit(
		self: &Rc<Self>,
		event: &dyn SubmitEvent,
	) -> impl Future<Output = CycleReport> + use<T, P> {
		event.prevent_default();
		let started = self.begin();
		let handler = Rc::clone(self);
		async move {
			match started {
				Ok(inputs) => handler.complete(&inputs).await,
				Err(err) => {
					handler.restore_form();
					handler.report_failure(err)
				}
			}
		}
	}

	/// Sends `inputs`, restores the form and renders the outcome.
	///
	/// This is the asynchronous half of [`on_submit`](Self::on_submit) and
	/// expects the form to be hidden already.
	pub async fn complete(&self, inputs: &FormInputSet) -> CycleReport {
		let outcome = self.client.fetch_prediction(inputs).await;
		self.restore_form();
		self.render(outcome)
	}

	fn begin(&self) -> Result<FormInputSet, PredictError> {
		self.page.set_visible(&self.settings.form_id, false)?;
		self.page.set_visible(&self.settings.results_id, false)?;
		Ok(self.page.read_form(&self.settings.form_id)?)
	}

	fn restore_form(&self) {
		if let Err(err) = self.page.set_visible(&self.settings.form_id, true) {
			error_log!("Could not restore the form: {}", err);
		}
	}

	fn render(&self, outcome: PredictionOutcome) -> CycleReport {
		match outcome {
			PredictionOutcome::Ready(prediction) => match self.show_prediction(&prediction) {
				Ok(()) => {
					info_log!("Rendered prediction for {}", self.client.endpoint());
					CycleReport::Rendered
				}
				Err(err) => self.report_failure(err.into()),
			},
			PredictionOutcome::Rejected(message) => {
				self.page.alert(&message);
				CycleReport::Alerted(message)
			}
			PredictionOutcome::Failed(err) => self.report_failure(err),
		}
	}

	// Results are revealed last so a page failure leaves them hidden
	fn show_prediction(&self, prediction: &Prediction) -> Result<(), PageError> {
		let view = ResultView::from_prediction(prediction);
		let settings = &self.settings;

		self.page.set_text(&settings.profit_id, &view.profit_text)?;
		self.page
			.set_markup(&settings.recommendations_id, &view.recommendations_markup)?;
		self.page.set_text(&settings.days_id, &view.days_text)?;
		self.page
			.set_text(&settings.probability_id, &view.probability_text)?;
		self.page.set_visible(&settings.results_id, true)
	}

	fn report_failure(&self, err: PredictError) -> CycleReport {
		error_log!("Error: {}", err);
		CycleReport::Failed(err.to_string())
	}
}
