//! Error type for one prediction exchange.

/// Everything that can go wrong between submitting the form and having a
/// renderable prediction.
///
/// From the user's point of view all variants land on the same failure path:
/// the form comes back and the failure is logged. The variants exist so the
/// log says what actually happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
	/// The request could not be delivered or the response could not be read
	#[error("Network error: {0}")]
	Transport(String),

	/// The request could not be built (bad endpoint, unencodable fields)
	#[error("Request error: {0}")]
	Request(String),

	/// The response body is not the expected JSON document
	#[error("Invalid response body: {0}")]
	Decode(String),

	/// A prediction field is absent from an otherwise successful response
	#[error("Response is missing field `{0}`")]
	MissingField(&'static str),

	/// A prediction field is present but has the wrong shape
	#[error("Response field `{field}` is invalid: {reason}")]
	InvalidField {
		/// Wire name of the field
		field: &'static str,
		/// What was wrong with it
		reason: String,
	},

	/// A page element could not be read or updated
	#[error("Page error: {0}")]
	Page(String),
}

impl PredictError {
	/// Create a transport error
	pub fn transport(msg: impl Into<String>) -> Self {
		Self::Transport(msg.into())
	}

	/// Create a request error
	pub fn request(msg: impl Into<String>) -> Self {
		Self::Request(msg.into())
	}

	/// Create a decode error
	pub fn decode(msg: impl Into<String>) -> Self {
		Self::Decode(msg.into())
	}

	/// Create a page error
	pub fn page(msg: impl Into<String>) -> Self {
		Self::Page(msg.into())
	}
}

impl From<serde_json::Error> for PredictError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}
