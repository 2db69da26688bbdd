//! Form inputs sent to the prediction endpoint.
//!
//! A [`FormInputSet`] is whatever the browser's form serialisation produced at
//! submit time: ordered name/value pairs, duplicates allowed, nothing typed or
//! validated. [`ProductQuery`] is a typed way to build the same set for the
//! product form (`Description`, `Quantity`, `UnitPrice`).

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Field name of the product description on the prediction form.
pub const DESCRIPTION_FIELD: &str = "Description";

/// Field name of the quantity on the prediction form.
pub const QUANTITY_FIELD: &str = "Quantity";

/// Field name of the unit price on the prediction form.
pub const UNIT_PRICE_FIELD: &str = "UnitPrice";

/// Ordered collection of form field name/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInputSet {
	fields: Vec<(String, String)>,
}

impl FormInputSet {
	/// Creates an empty input set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a field, keeping any earlier field with the same name.
	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.fields.push((name.into(), value.into()));
	}

	/// Builder form of [`push`](Self::push).
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push(name, value);
		self
	}

	/// Returns the first value submitted under `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Iterates over the fields in submission order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of fields, counting duplicates.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true if no field was collected.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Encodes the fields as an `application/x-www-form-urlencoded` body.
	pub fn to_urlencoded(&self) -> Result<String, PredictError> {
		serde_urlencoded::to_string(&self.fields).map_err(|e| PredictError::request(e.to_string()))
	}

	/// Decodes an `application/x-www-form-urlencoded` body.
	pub fn from_urlencoded(body: &str) -> Result<Self, PredictError> {
		let fields: Vec<(String, String)> =
			serde_urlencoded::from_str(body).map_err(|e| PredictError::request(e.to_string()))?;
		Ok(Self { fields })
	}
}

impl<K, V> FromIterator<(K, V)> for FormInputSet
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}

/// Typed inputs of the product prediction form.
///
/// No range or emptiness checks happen here; the prediction service owns
/// validation and reports problems through the response's `error` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
	/// Product description as listed in the catalogue
	pub description: String,
	/// Number of units to sell
	pub quantity: f64,
	/// Price per unit
	pub unit_price: f64,
}

impl ProductQuery {
	/// Creates a query for `quantity` units of `description` at `unit_price`.
	pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
		Self {
			description: description.into(),
			quantity,
			unit_price,
		}
	}

	/// Converts the query into the fields the product form would submit.
	pub fn to_inputs(&self) -> FormInputSet {
		FormInputSet::new()
			.with(DESCRIPTION_FIELD, self.description.clone())
			.with(QUANTITY_FIELD, self.quantity.to_string())
			.with(UNIT_PRICE_FIELD, self.unit_price.to_string())
	}
}

impl From<ProductQuery> for FormInputSet {
	fn from(query: ProductQuery) -> Self {
		query.to_inputs()
	}
}
