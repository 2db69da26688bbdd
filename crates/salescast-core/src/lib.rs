//! Salescast Core - wire model for prediction forms
//!
//! Everything here is platform independent: the form inputs sent to the
//! prediction endpoint, the decoded response, the three-way outcome of one
//! exchange and the text that ends up on the page. The WASM frontend lives in
//! `salescast-pages` and only moves these values in and out of the DOM.
//!
//! ## Modules
//!
//! - [`inputs`]: form field collection and URL encoding
//! - [`value`]: JSON values displayed with browser string semantics
//! - [`response`]: response decoding and outcome classification
//! - [`view`]: result labels and escaped recommendation markup
//! - [`error`]: error type shared by the whole exchange
//!
//! ## Example
//!
//! ```
//! use salescast_core::{PredictionOutcome, ResultView};
//!
//! let body = r#"{"sales_prediction": 42, "days_to_sell": 3,
//!     "purchase_probability": 0.8, "recommendations": ["Lower price"]}"#;
//!
//! match PredictionOutcome::from_body(body) {
//!     PredictionOutcome::Ready(prediction) => {
//!         let view = ResultView::from_prediction(&prediction);
//!         assert_eq!(view.profit_text, "Profit Prediction: 42");
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod inputs;
pub mod response;
pub mod value;
pub mod view;

pub use error::PredictError;
pub use inputs::{FormInputSet, ProductQuery};
pub use response::{Prediction, PredictionOutcome, PredictionResponse};
pub use value::FieldValue;
pub use view::{ResultView, escape_html, list_markup};
