//! Test doubles for the submit cycle
//!
//! Available on every target so that native tests and browser tests can
//! drive [`PredictFormHandler`](crate::PredictFormHandler) without a network
//! or a DOM.
//!
//! - [`MemoryPage`]: element states plus a history of every page mutation
//! - [`ScriptedTransport`]: replays canned responses and records requests
//! - [`RecordedSubmit`]: a submit event that remembers `prevent_default`

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use salescast_core::{FormInputSet, PredictError};

use crate::page::{PageError, PageSurface, SubmitEvent};
use crate::settings::PredictFormSettings;
use crate::transport::{FormPost, PredictTransport, RawResponse};

/// State of one in-memory element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
	/// Whether the element is displayed
	pub visible: bool,
	/// Last plain text written
	pub text: Option<String>,
	/// Last markup written
	pub markup: Option<String>,
	/// Form fields, `None` if the element is not a readable form
	pub fields: Option<FormInputSet>,
}

/// A recorded page mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
	/// `set_visible` was called
	Visibility {
		/// Element id
		id: String,
		/// Requested visibility
		visible: bool,
	},
	/// `set_text` was called
	Text {
		/// Element id
		id: String,
		/// Text written
		text: String,
	},
	/// `set_markup` was called
	Markup {
		/// Element id
		id: String,
		/// Markup written
		markup: String,
	},
	/// `alert` was called
	Alert(String),
}

/// In-memory [`PageSurface`].
#[derive(Debug, Default)]
pub struct MemoryPage {
	elements: RefCell<HashMap<String, ElementState>>,
	events: RefCell<Vec<PageEvent>>,
}

impl MemoryPage {
	/// Creates a page without elements.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates the page described by `settings`: a visible, empty form, a
	/// hidden results container and visible result elements.
	pub fn for_settings(settings: &PredictFormSettings) -> Self {
		let page = Self::new();
		for id in settings.element_ids() {
			let visible = id != settings.results_id;
			page.insert(id, visible);
		}
		page.set_form_fields(&settings.form_id, FormInputSet::new());
		page
	}

	/// Adds an element.
	pub fn with_element(self, id: &str, visible: bool) -> Self {
		self.insert(id, visible);
		self
	}

	/// Removes an element.
	pub fn without_element(self, id: &str) -> Self {
		self.elements.borrow_mut().remove(id);
		self
	}

	/// Sets the fields a form element will serialise to.
	pub fn with_form_fields(self, id: &str, fields: FormInputSet) -> Self {
		self.set_form_fields(id, fields);
		self
	}

	/// Makes `read_form` fail for this element.
	pub fn with_unreadable_form(self, id: &str) -> Self {
		if let Some(state) = self.elements.borrow_mut().get_mut(id) {
			state.fields = None;
		}
		self
	}

	/// Replaces the fields of a form element, creating it if needed.
	pub fn set_form_fields(&self, id: &str, fields: FormInputSet) {
		self.elements
			.borrow_mut()
			.entry(id.to_string())
			.or_default()
			.fields = Some(fields);
	}

	fn insert(&self, id: &str, visible: bool) {
		self.elements.borrow_mut().insert(
			id.to_string(),
			ElementState {
				visible,
				..ElementState::default()
			},
		);
	}

	/// Returns a copy of an element's state.
	pub fn element(&self, id: &str) -> Option<ElementState> {
		self.elements.borrow().get(id).cloned()
	}

	/// Returns true if the element exists and is displayed.
	pub fn is_visible(&self, id: &str) -> bool {
		self.element(id).is_some_and(|state| state.visible)
	}

	/// Last plain text written to an element.
	pub fn text(&self, id: &str) -> Option<String> {
		self.element(id).and_then(|state| state.text)
	}

	/// Last markup written to an element.
	pub fn markup(&self, id: &str) -> Option<String> {
		self.element(id).and_then(|state| state.markup)
	}

	/// Contents of the `<li>` items in an element's markup, still escaped.
	pub fn list_items(&self, id: &str) -> Vec<String> {
		self.markup(id)
			.unwrap_or_default()
			.split("</li>")
			.filter_map(|part| part.strip_prefix("<li>"))
			.map(str::to_string)
			.collect()
	}

	/// Every alert shown, in order.
	pub fn alerts(&self) -> Vec<String> {
		self.events
			.borrow()
			.iter()
			.filter_map(|event| match event {
				PageEvent::Alert(message) => Some(message.clone()),
				_ => None,
			})
			.collect()
	}

	/// Every visibility change requested for an element, in order.
	pub fn visibility_history(&self, id: &str) -> Vec<bool> {
		self.events
			.borrow()
			.iter()
			.filter_map(|event| match event {
				PageEvent::Visibility { id: target, visible } if target == id => Some(*visible),
				_ => None,
			})
			.collect()
	}

	/// Every recorded mutation, in order.
	pub fn events(&self) -> Vec<PageEvent> {
		self.events.borrow().clone()
	}

	fn update(&self, id: &str, apply: impl FnOnce(&mut ElementState)) -> Result<(), PageError> {
		let mut elements = self.elements.borrow_mut();
		let state = elements.get_mut(id).ok_or_else(|| PageError::missing(id))?;
		apply(state);
		Ok(())
	}

	fn record(&self, event: PageEvent) {
		self.events.borrow_mut().push(event);
	}
}

impl PageSurface for MemoryPage {
	fn ensure_element(&self, id: &str) -> Result<(), PageError> {
		if self.elements.borrow().contains_key(id) {
			Ok(())
		} else {
			Err(PageError::missing(id))
		}
	}

	fn set_visible(&self, id: &str, visible: bool) -> Result<(), PageError> {
		self.update(id, |state| state.visible = visible)?;
		self.record(PageEvent::Visibility {
			id: id.to_string(),
			visible,
		});
		Ok(())
	}

	fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
		self.update(id, |state| state.text = Some(text.to_string()))?;
		self.record(PageEvent::Text {
			id: id.to_string(),
			text: text.to_string(),
		});
		Ok(())
	}

	fn set_markup(&self, id: &str, markup: &str) -> Result<(), PageError> {
		self.update(id, |state| state.markup = Some(markup.to_string()))?;
		self.record(PageEvent::Markup {
			id: id.to_string(),
			markup: markup.to_string(),
		});
		Ok(())
	}

	fn read_form(&self, id: &str) -> Result<FormInputSet, PageError> {
		let state = self.element(id).ok_or_else(|| PageError::missing(id))?;
		state.fields.ok_or_else(|| PageError::WrongElementKind {
			id: id.to_string(),
			expected: "form",
		})
	}

	fn alert(&self, message: &str) {
		self.record(PageEvent::Alert(message.to_string()));
	}
}

/// [`PredictTransport`] replaying canned responses in order.
///
/// Once the script runs out every request fails with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
	script: RefCell<VecDeque<Result<RawResponse, PredictError>>>,
	requests: RefCell<Vec<FormPost>>,
}

impl ScriptedTransport {
	/// Creates a transport with an empty script.
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a response.
	pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
		self.script
			.borrow_mut()
			.push_back(Ok(RawResponse::new(status, body)));
		self
	}

	/// Queues a transport failure.
	pub fn fail(self, err: PredictError) -> Self {
		self.script.borrow_mut().push_back(Err(err));
		self
	}

	/// Requests received so far.
	pub fn requests(&self) -> Vec<FormPost> {
		self.requests.borrow().clone()
	}
}

#[async_trait(?Send)]
impl PredictTransport for ScriptedTransport {
	async fn post_form(&self, request: FormPost) -> Result<RawResponse, PredictError> {
		self.requests.borrow_mut().push(request);
		self.script
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Err(PredictError::transport("no scripted response left")))
	}
}

/// A submit event that records whether the default action was prevented.
#[derive(Debug, Default)]
pub struct RecordedSubmit {
	prevented: Cell<bool>,
}

impl RecordedSubmit {
	/// Creates an event whose default action has not been prevented.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true once `prevent_default` was called.
	pub fn default_prevented(&self) -> bool {
		self.prevented.get()
	}
}

impl SubmitEvent for RecordedSubmit {
	fn prevent_default(&self) {
		self.prevented.set(true);
	}
}
