//! Browser implementation of [`PageSurface`].

use salescast_core::FormInputSet;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement};

use super::{PageError, PageSurface};
use crate::warn_log;

/// The live document.
#[derive(Debug, Clone)]
pub struct DomPage {
	document: Document,
}

impl DomPage {
	/// Wraps a document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// Wraps the document of the current window.
	pub fn from_window() -> Result<Self, PageError> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| PageError::Dom("no document available".to_string()))?;
		Ok(Self::new(document))
	}

	/// Returns the wrapped document.
	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Looks up an element by id.
	pub fn element(&self, id: &str) -> Result<Element, PageError> {
		self.document
			.get_element_by_id(id)
			.ok_or_else(|| PageError::missing(id))
	}

	fn html_element(&self, id: &str) -> Result<HtmlElement, PageError> {
		self.element(id)?
			.dyn_into::<HtmlElement>()
			.map_err(|_| PageError::WrongElementKind {
				id: id.to_string(),
				expected: "HTML element",
			})
	}
}

impl PageSurface for DomPage {
	fn ensure_element(&self, id: &str) -> Result<(), PageError> {
		self.element(id).map(|_| ())
	}

	fn set_visible(&self, id: &str, visible: bool) -> Result<(), PageError> {
		let display = if visible { "block" } else { "none" };
		self.html_element(id)?
			.style()
			.set_property("display", display)
			.map_err(js_error)
	}

	// innerText turns line breaks in service values into <br>
	fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
		self.html_element(id)?.set_inner_text(text);
		Ok(())
	}

	fn set_markup(&self, id: &str, markup: &str) -> Result<(), PageError> {
		self.element(id)?.set_inner_html(markup);
		Ok(())
	}

	fn read_form(&self, id: &str) -> Result<FormInputSet, PageError> {
		let form = self
			.element(id)?
			.dyn_into::<HtmlFormElement>()
			.map_err(|_| PageError::WrongElementKind {
				id: id.to_string(),
				expected: "form",
			})?;
		let form_data = FormData::new_with_form(&form).map_err(js_error)?;
		let entries = js_sys::try_iter(&form_data)
			.map_err(js_error)?
			.ok_or_else(|| PageError::Dom("FormData is not iterable".to_string()))?;

		let mut inputs = FormInputSet::new();
		for entry in entries {
			let entry = js_sys::Array::from(&entry.map_err(js_error)?);
			let name = entry.get(0).as_string().unwrap_or_default();
			match entry.get(1).as_string() {
				Some(value) => inputs.push(name, value),
				// File inputs have no text representation in a URL-encoded body
				None => warn_log!("Skipping non-text form field `{}`", name),
			}
		}
		Ok(inputs)
	}

	fn alert(&self, message: &str) {
		let Some(window) = self.document.default_view() else {
			warn_log!("No window to show alert: {}", message);
			return;
		};
		if let Err(err) = window.alert_with_message(message) {
			warn_log!("Alert failed: {:?}", err);
		}
	}
}

fn js_error(value: JsValue) -> PageError {
	PageError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
