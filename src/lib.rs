//! # Salescast
//!
//! Browser-side prediction form for the Salescast forecasting service.
//!
//! The product page exposes a form (`#predict-form`), a results container
//! (`#results`) and four result elements. Mounting the handler intercepts the
//! form's submit action, POSTs its fields URL-encoded to `/predict` and renders
//! the returned prediction, shows the service's error message, or logs the
//! failure. The form is visible again after every cycle.
//!
//! ## Crates
//!
//! - [`model`]: wire model, response decoding, result view (platform independent)
//! - [`pages`]: page surface, HTTP transport, submit handler, mounting (WASM)
//!
//! ## JavaScript
//!
//! ```js
//! import init, { mountPredictForm } from "./pkg/salescast.js";
//!
//! await init();
//! mountPredictForm();                                   // default page contract
//! mountPredictForm('{"endpoint": "/api/predict"}');     // partial overrides
//! ```
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - readable Rust panics in the browser console
//! - `debug-hooks` - enables `debug_log!` output in debug builds

pub use salescast_core as model;
pub use salescast_pages as pages;

pub use salescast_core::{
	FieldValue, FormInputSet, PredictError, Prediction, PredictionOutcome, PredictionResponse,
	ProductQuery, ResultView,
};
pub use salescast_pages::{
	CycleReport, HttpTransport, PageError, PageSurface, PredictFormHandler, PredictFormSettings,
	PredictTransport, PredictionClient,
};

#[cfg(target_arch = "wasm32")]
pub use salescast_pages::mount::mount_predict_form;

/// Mounts the prediction form handler from JavaScript.
///
/// `settings_json` is an optional JSON object overriding any of the
/// [`PredictFormSettings`] defaults.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountPredictForm)]
pub fn mount_predict_form_js(
	settings_json: Option<String>,
) -> Result<(), wasm_bindgen::JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let settings = match settings_json {
		Some(json) => PredictFormSettings::from_json(&json)
			.map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?,
		None => PredictFormSettings::default(),
	};
	mount_predict_form(settings).map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}
