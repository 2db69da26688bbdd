//! Text and markup written into the results area.

use crate::response::Prediction;

/// Label in front of the sales prediction.
pub const PROFIT_LABEL: &str = "Profit Prediction: ";
/// Label in front of the days-to-sell estimate.
pub const DAYS_LABEL: &str = "Days to Sell: ";
/// Label in front of the purchase probability.
pub const PROBABILITY_LABEL: &str = "Purchase Probability: ";

/// Everything the results area shows for one prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
	/// Plain text for the profit prediction element
	pub profit_text: String,
	/// Plain text for the days-to-sell element
	pub days_text: String,
	/// Plain text for the purchase probability element
	pub probability_text: String,
	/// `<li>` markup for the recommendations list
	pub recommendations_markup: String,
}

impl ResultView {
	/// Builds the view of a prediction.
	pub fn from_prediction(prediction: &Prediction) -> Self {
		Self {
			profit_text: format!("{}{}", PROFIT_LABEL, prediction.sales_prediction),
			days_text: format!("{}{}", DAYS_LABEL, prediction.days_to_sell),
			probability_text: format!("{}{}", PROBABILITY_LABEL, prediction.purchase_probability),
			recommendations_markup: list_markup(&prediction.recommendations),
		}
	}
}

/// Renders one `<li>` per item, in order.
///
/// Items are server-supplied text and are escaped, never interpreted as markup.
pub fn list_markup<S: AsRef<str>>(items: &[S]) -> String {
	items
		.iter()
		.map(|item| format!("<li>{}</li>", escape_html(item.as_ref())))
		.collect()
}

/// HTML escape utility
pub fn escape_html(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
