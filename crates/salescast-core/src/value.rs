//! Response values shown verbatim on the page.
//!
//! The prediction service may send numbers or strings for any display field.
//! [`FieldValue`] keeps the raw JSON and renders it the way a browser's
//! `String(value)` would, so `42.0` shows as `42` and `0.8` stays `0.8`.
//!
//! A top-level `null` never reaches the page: response decoding treats a
//! `null` field as missing, so a prediction with a `null` field is not
//! rendered at all. The `"null"` rendering only applies to values built
//! directly with [`FieldValue::new`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A JSON value displayed with browser string conversion rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
	/// Wraps a raw JSON value.
	pub fn new(value: impl Into<Value>) -> Self {
		Self(value.into())
	}

	/// Returns the raw JSON value.
	pub fn as_json(&self) -> &Value {
		&self.0
	}

	/// Browser truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
	pub fn is_truthy(&self) -> bool {
		match &self.0 {
			Value::Null => false,
			Value::Bool(b) => *b,
			Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
			Value::String(s) => !s.is_empty(),
			Value::Array(_) | Value::Object(_) => true,
		}
	}
}

impl From<Value> for FieldValue {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&display_value(&self.0))
	}
}

fn display_value(value: &Value) -> String {
	match value {
		Value::Null => "null".to_string(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => display_number(n),
		Value::String(s) => s.clone(),
		// Array elements that are null render as empty strings
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::Null => String::new(),
				other => display_value(other),
			})
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => "[object Object]".to_string(),
	}
}

fn display_number(n: &Number) -> String {
	if let Some(i) = n.as_i64() {
		return i.to_string();
	}
	if let Some(u) = n.as_u64() {
		return u.to_string();
	}
	let Some(f) = n.as_f64() else {
		return n.to_string();
	};
	display_float(f)
}

fn display_float(f: f64) -> String {
	if f == 0.0 {
		return "0".to_string();
	}
	let magnitude = f.abs();
	if !(1e-6..1e21).contains(&magnitude) {
		// Exponent form, with an explicit sign on positive exponents
		let formatted = format!("{:e}", f);
		return match formatted.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
			_ => formatted,
		};
	}
	if f.fract() == 0.0 {
		return format!("{:.0}", f);
	}
	f.to_string()
}
