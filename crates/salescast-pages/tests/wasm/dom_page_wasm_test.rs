//! DOM page tests
//!
//! Run with `wasm-pack test --headless --chrome crates/salescast-pages`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use salescast_pages::mount::mount_predict_form;
use salescast_pages::page::DomPage;
use salescast_pages::testing::{RecordedSubmit, ScriptedTransport};
use salescast_pages::{
	CycleReport, FormInputSet, PageError, PageSurface, PredictFormHandler, PredictFormSettings,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<form id="predict-form">
	<input name="Description" value="Mug &amp; Saucer">
	<input name="Quantity" value="2">
	<input name="UnitPrice" value="3.5">
</form>
<div id="results" style="display: none">
	<p id="profit-result"></p>
	<ul id="recommendations-list"></ul>
	<p id="days-to-sell"></p>
	<p id="purchase-probability"></p>
</div>
"#;

fn mount_page() -> DomPage {
	let page = DomPage::from_window().unwrap();
	page.document().body().unwrap().set_inner_html(PAGE);
	page
}

fn display(page: &DomPage, id: &str) -> String {
	page.element(id)
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap()
		.style()
		.get_property_value("display")
		.unwrap()
}

#[wasm_bindgen_test]
fn test_read_form_keeps_field_order() {
	let page = mount_page();

	let fields = page.read_form("predict-form").unwrap();

	assert_eq!(
		fields,
		FormInputSet::new()
			.with("Description", "Mug & Saucer")
			.with("Quantity", "2")
			.with("UnitPrice", "3.5")
	);
}

#[wasm_bindgen_test]
fn test_set_visible_toggles_display() {
	let page = mount_page();

	page.set_visible("results", true).unwrap();
	assert_eq!(display(&page, "results"), "block");

	page.set_visible("predict-form", false).unwrap();
	assert_eq!(display(&page, "predict-form"), "none");
}

#[wasm_bindgen_test]
fn test_set_text_keeps_line_breaks() {
	let page = mount_page();

	page.set_text("profit-result", "Profit Prediction: 12\nper week <b>")
		.unwrap();

	assert_eq!(
		page.element("profit-result").unwrap().inner_html(),
		"Profit Prediction: 12<br>per week &lt;b&gt;"
	);
}

#[wasm_bindgen_test]
fn test_missing_element() {
	let page = mount_page();

	assert_eq!(
		page.set_text("nowhere", "x"),
		Err(PageError::missing("nowhere"))
	);
	assert!(matches!(
		page.read_form("results"),
		Err(PageError::WrongElementKind { .. })
	));
}

#[wasm_bindgen_test]
async fn test_submit_cycle_renders_into_dom() {
	let page = mount_page();
	let transport = ScriptedTransport::new().respond(
		200,
		r#"{"sales_prediction": 42, "days_to_sell": 3, "purchase_probability": 0.8,
			"recommendations": ["<b>Bundle</b>"]}"#,
	);
	let handler = Rc::new(PredictFormHandler::new(
		transport,
		page,
		PredictFormSettings::default(),
	));
	handler.check_page_contract().unwrap();

	let report = handler.on_submit(&RecordedSubmit::new()).await;
	let page = handler.page();

	assert_eq!(report, CycleReport::Rendered);
	assert_eq!(display(page, "results"), "block");
	assert_eq!(display(page, "predict-form"), "block");
	assert_eq!(
		page.element("profit-result").unwrap().text_content().as_deref(),
		Some("Profit Prediction: 42")
	);
	let list = page.element("recommendations-list").unwrap();
	assert_eq!(list.child_element_count(), 1);
	assert_eq!(list.text_content().as_deref(), Some("<b>Bundle</b>"));
}

#[wasm_bindgen_test]
fn test_mount_intercepts_submit() {
	let page = mount_page();
	mount_predict_form(PredictFormSettings::default()).unwrap();

	let event = web_sys::Event::new("submit").unwrap();
	page.element("predict-form")
		.unwrap()
		.dispatch_event(&event)
		.unwrap();

	// The synchronous half of the cycle has run by the time dispatch returns
	assert_eq!(display(&page, "predict-form"), "none");
	assert_eq!(display(&page, "results"), "none");
}

#[wasm_bindgen_test]
fn test_mount_rejects_incomplete_page() {
	let page = mount_page();
	page.element("days-to-sell").unwrap().remove();

	let err = mount_predict_form(PredictFormSettings::default()).unwrap_err();

	assert_eq!(
		err.to_string(),
		"Page error: Element `#days-to-sell` not found"
	);
}
