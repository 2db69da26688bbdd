//! Endpoint and page contract of the prediction form.
//!
//! The defaults match the Salescast product page. A page with different ids
//! can pass its own settings as JSON to `mountPredictForm`; missing keys fall
//! back to the defaults.

use serde::{Deserialize, Serialize};

/// Default prediction endpoint, relative to the page.
pub const DEFAULT_ENDPOINT: &str = "/predict";

/// Error raised when settings cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings document is not valid JSON for [`PredictFormSettings`]
	#[error("Invalid form settings: {0}")]
	Parse(#[from] serde_json::Error),

	/// A setting has a value the handler cannot work with
	#[error("Invalid value for `{key}`: {reason}")]
	InvalidValue {
		/// Settings key
		key: &'static str,
		/// Why the value was refused
		reason: &'static str,
	},
}

/// Settings of the prediction form handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictFormSettings {
	/// Endpoint the form is POSTed to
	pub endpoint: String,
	/// Id of the `<form>` element
	pub form_id: String,
	/// Id of the results container, hidden until a prediction arrives
	pub results_id: String,
	/// Id of the profit prediction text element
	pub profit_id: String,
	/// Id of the recommendations list (`<ul>`/`<ol>`)
	pub recommendations_id: String,
	/// Id of the days-to-sell text element
	pub days_id: String,
	/// Id of the purchase probability text element
	pub probability_id: String,
	/// Send the page's CSRF token as a request header when one is found
	pub send_csrf_header: bool,
}

impl Default for PredictFormSettings {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			form_id: "predict-form".to_string(),
			results_id: "results".to_string(),
			profit_id: "profit-result".to_string(),
			recommendations_id: "recommendations-list".to_string(),
			days_id: "days-to-sell".to_string(),
			probability_id: "purchase-probability".to_string(),
			send_csrf_header: true,
		}
	}
}

impl PredictFormSettings {
	/// Loads settings from a JSON object and validates them.
	pub fn from_json(json: &str) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the endpoint and every element id are usable.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.endpoint.trim().is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "endpoint",
				reason: "must not be empty",
			});
		}
		for (key, id) in self.keyed_element_ids() {
			if id.trim().is_empty() {
				return Err(SettingsError::InvalidValue {
					key,
					reason: "element id must not be empty",
				});
			}
		}
		Ok(())
	}

	/// Every element id the page must expose, form first.
	pub fn element_ids(&self) -> [&str; 6] {
		self.keyed_element_ids().map(|(_, id)| id)
	}

	fn keyed_element_ids(&self) -> [(&'static str, &str); 6] {
		[
			("form_id", self.form_id.as_str()),
			("results_id", self.results_id.as_str()),
			("profit_id", self.profit_id.as_str()),
			("recommendations_id", self.recommendations_id.as_str()),
			("days_id", self.days_id.as_str()),
			("probability_id", self.probability_id.as_str()),
		]
	}

	/// Sets the endpoint.
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	/// Sets the form element id.
	pub fn with_form_id(mut self, id: impl Into<String>) -> Self {
		self.form_id = id.into();
		self
	}

	/// Sets the results container id.
	pub fn with_results_id(mut self, id: impl Into<String>) -> Self {
		self.results_id = id.into();
		self
	}

	/// Enables or disables the CSRF request header.
	pub fn with_csrf_header(mut self, enabled: bool) -> Self {
		self.send_csrf_header = enabled;
		self
	}
}
