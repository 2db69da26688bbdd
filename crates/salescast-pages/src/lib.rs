//! Salescast Pages - WASM prediction form
//!
//! Wires the product form of the Salescast page to the prediction endpoint:
//! the submit action is intercepted, the form fields are POSTed URL-encoded,
//! and the answer is either rendered into the results area, shown as an
//! alert, or logged.
//!
//! ## Architecture
//!
//! ```text
//!  submit ──▶ PredictFormHandler ──▶ PredictionClient ──▶ PredictTransport ──▶ POST /predict
//!                 │                        │
//!                 │                   PredictionOutcome
//!                 ▼                        │
//!            PageSurface ◀── ResultView ◀──┘
//! ```
//!
//! - [`page`]: the page the handler mutates ([`DomPage`](page::DomPage) in the browser)
//! - [`transport`]: HTTP delivery of the form body
//! - [`client`]: one exchange, classified into a [`PredictionOutcome`]
//! - [`handler`]: the submit cycle
//! - [`mount`]: registration on `DOMContentLoaded` (WASM only)
//! - [`settings`]: endpoint and element ids
//! - [`csrf`]: CSRF token lookup
//! - [`testing`]: in-memory page and scripted transport
//!
//! ## Example
//!
//! ```ignore
//! use salescast_pages::{PredictFormSettings, mount::mount_predict_form};
//!
//! mount_predict_form(PredictFormSettings::default())?;
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod csrf;
pub mod handler;
pub mod logging;
pub mod page;
pub mod settings;
pub mod testing;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod mount;

pub use client::PredictionClient;
pub use handler::{CycleReport, PredictFormHandler};
pub use page::{PageError, PageSurface, SubmitEvent};
pub use settings::{PredictFormSettings, SettingsError};
pub use transport::{FormPost, HttpTransport, PredictTransport, RawResponse};

pub use salescast_core::{FormInputSet, PredictError, Prediction, PredictionOutcome};

// Used by the exported logging macros
#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
