//! Registers the prediction form handler on the live page.
//!
//! Registration waits for `DOMContentLoaded` when the document is still
//! loading. All page-contract elements must exist at that point; the submit
//! listener is attached once and lives as long as the page.

use std::rc::Rc;

use salescast_core::PredictError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::handler::PredictFormHandler;
use crate::page::{DomPage, PageError};
use crate::settings::PredictFormSettings;
use crate::transport::HttpTransport;
use crate::{error_log, info_log};

/// Mounts the handler now, or on `DOMContentLoaded` if the page is still loading.
///
/// Errors found after deferring are logged, since nobody is left to
/// receive them.
pub fn mount_predict_form(settings: PredictFormSettings) -> Result<(), PredictError> {
	let page = DomPage::from_window()?;
	if page.document().ready_state() != "loading" {
		return attach(page, settings);
	}

	let deferred_page = page.clone();
	let on_ready = Closure::<dyn FnMut(web_sys::Event)>::once(move |_event: web_sys::Event| {
		if let Err(err) = attach(deferred_page, settings) {
			error_log!("Could not mount the prediction form: {}", err);
		}
	});
	page.document()
		.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
		.map_err(|e| PredictError::page(format!("{:?}", e)))?;
	on_ready.forget();
	Ok(())
}

fn attach(page: DomPage, settings: PredictFormSettings) -> Result<(), PredictError> {
	let form = page.element(&settings.form_id)?;
	let transport = HttpTransport::for_current_page()?;
	let handler = Rc::new(PredictFormHandler::new(transport, page, settings));
	handler.check_page_contract()?;

	let submit_handler = Rc::clone(&handler);
	let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
		let cycle = submit_handler.on_submit(&event);
		wasm_bindgen_futures::spawn_local(async move {
			let _report = cycle.await;
		});
	});
	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
		.map_err(|e| PageError::Dom(format!("{:?}", e)))?;
	on_submit.forget();

	info_log!(
		"Prediction form `#{}` posts to {}",
		handler.settings().form_id,
		handler.client().endpoint()
	);
	Ok(())
}
