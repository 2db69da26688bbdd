//! Prediction response decoding.
//!
//! The prediction endpoint answers every request with a JSON document. A
//! truthy `error` field means the service rejected the inputs; otherwise the
//! four prediction fields must all be present for anything to be rendered.
//! Bodies that are not JSON objects (HTML error pages, arrays, Python's
//! `Infinity` token for an unsellable product) are decode failures.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PredictError;
use crate::value::FieldValue;

/// Wire name of the sales prediction field.
pub const SALES_PREDICTION: &str = "sales_prediction";
/// Wire name of the days-to-sell field.
pub const DAYS_TO_SELL: &str = "days_to_sell";
/// Wire name of the purchase probability field.
pub const PURCHASE_PROBABILITY: &str = "purchase_probability";
/// Wire name of the recommendations field.
pub const RECOMMENDATIONS: &str = "recommendations";
/// Wire name of the application error field.
pub const ERROR: &str = "error";
/// Wire name of the echoed unit price.
pub const UNIT_PRICE: &str = "unit_price";
/// Wire name of the echoed quantity.
pub const QUANTITY: &str = "quantity";
/// Wire name of the echoed product description.
pub const PRODUCT_DESCRIPTION: &str = "product_description";

/// Raw decoded response of the prediction endpoint.
///
/// Fields are looked up by exact name. A JSON `null` is treated the same as an
/// absent field, and a repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredictionResponse {
	/// Predicted sales for the submitted quantity and price
	pub sales_prediction: Option<FieldValue>,
	/// Expected number of days until the stock is sold
	pub days_to_sell: Option<FieldValue>,
	/// Probability that the product is purchased
	pub purchase_probability: Option<FieldValue>,
	/// Related products, best match first
	pub recommendations: Option<Value>,
	/// Application-reported error message
	pub error: Option<FieldValue>,
	/// Unit price echoed back by the service
	pub unit_price: Option<FieldValue>,
	/// Quantity echoed back by the service
	pub quantity: Option<FieldValue>,
	/// Product description echoed back by the service
	pub product_description: Option<FieldValue>,
}

impl PredictionResponse {
	/// Decodes a response body, which must be a JSON object.
	pub fn from_json(body: &str) -> Result<Self, PredictError> {
		match serde_json::from_str::<Value>(body)? {
			Value::Object(fields) => Ok(Self::from_fields(fields)),
			other => Err(PredictError::decode(format!(
				"expected a JSON object, found {}",
				json_kind(&other)
			))),
		}
	}

	/// Picks the known fields out of a decoded object; unknown keys are ignored.
	pub fn from_fields(mut fields: Map<String, Value>) -> Self {
		let mut take = |name: &str| fields.remove(name).filter(|value| !value.is_null());
		Self {
			sales_prediction: take(SALES_PREDICTION).map(FieldValue::from),
			days_to_sell: take(DAYS_TO_SELL).map(FieldValue::from),
			purchase_probability: take(PURCHASE_PROBABILITY).map(FieldValue::from),
			recommendations: take(RECOMMENDATIONS),
			error: take(ERROR).map(FieldValue::from),
			unit_price: take(UNIT_PRICE).map(FieldValue::from),
			quantity: take(QUANTITY).map(FieldValue::from),
			product_description: take(PRODUCT_DESCRIPTION).map(FieldValue::from),
		}
	}

	/// Returns the error message if the `error` field is set and truthy.
	pub fn error_message(&self) -> Option<String> {
		self.error
			.as_ref()
			.filter(|error| error.is_truthy())
			.map(FieldValue::to_string)
	}

	/// Classifies the response.
	///
	/// A truthy `error` wins regardless of which other fields are present.
	pub fn into_outcome(self) -> PredictionOutcome {
		if let Some(message) = self.error_message() {
			return PredictionOutcome::Rejected(message);
		}
		match Prediction::try_from(self) {
			Ok(prediction) => PredictionOutcome::Ready(prediction),
			Err(err) => PredictionOutcome::Failed(err),
		}
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// A complete prediction, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
	/// Predicted sales (shown as the profit prediction)
	pub sales_prediction: FieldValue,
	/// Expected days until sold
	pub days_to_sell: FieldValue,
	/// Purchase probability
	pub purchase_probability: FieldValue,
	/// Recommendations in the order the service ranked them
	pub recommendations: Vec<String>,
	/// Unit price echoed by the service, if any
	pub unit_price: Option<FieldValue>,
	/// Quantity echoed by the service, if any
	pub quantity: Option<FieldValue>,
	/// Product description echoed by the service, if any
	pub product_description: Option<FieldValue>,
}

impl TryFrom<PredictionResponse> for Prediction {
	type Error = PredictError;

	fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
		let sales_prediction = response
			.sales_prediction
			.ok_or(PredictError::MissingField(SALES_PREDICTION))?;
		let days_to_sell = response
			.days_to_sell
			.ok_or(PredictError::MissingField(DAYS_TO_SELL))?;
		let purchase_probability = response
			.purchase_probability
			.ok_or(PredictError::MissingField(PURCHASE_PROBABILITY))?;
		let recommendations = parse_recommendations(
			response
				.recommendations
				.ok_or(PredictError::MissingField(RECOMMENDATIONS))?,
		)?;

		Ok(Self {
			sales_prediction,
			days_to_sell,
			purchase_probability,
			recommendations,
			unit_price: response.unit_price,
			quantity: response.quantity,
			product_description: response.product_description,
		})
	}
}

fn parse_recommendations(value: Value) -> Result<Vec<String>, PredictError> {
	let Value::Array(items) = value else {
		return Err(PredictError::InvalidField {
			field: RECOMMENDATIONS,
			reason: "expected an array".to_string(),
		});
	};
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| match item {
			Value::String(s) => Ok(s),
			other => Err(PredictError::InvalidField {
				field: RECOMMENDATIONS,
				reason: format!("item {} is not a string: {}", index, other),
			}),
		})
		.collect()
}

/// Result of one request/response exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
	/// The service produced a prediction
	Ready(Prediction),
	/// The service reported an application error; the message is shown to the user
	Rejected(String),
	/// The request or the response failed; the error is only logged
	Failed(PredictError),
}

impl PredictionOutcome {
	/// Decodes and classifies a response body.
	pub fn from_body(body: &str) -> Self {
		match PredictionResponse::from_json(body) {
			Ok(response) => response.into_outcome(),
			Err(err) => Self::Failed(err),
		}
	}

	/// Returns true for [`PredictionOutcome::Ready`].
	pub fn is_ready(&self) -> bool {
		matches!(self, Self::Ready(_))
	}
}

impl From<PredictError> for PredictionOutcome {
	fn from(err: PredictError) -> Self {
		Self::Failed(err)
	}
}
