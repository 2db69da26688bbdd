//! The page the prediction form lives on.
//!
//! [`PageSurface`] is everything the submit cycle does to the page, addressed
//! by element id. The browser implementation is [`DomPage`]; native tests use
//! [`MemoryPage`](crate::testing::MemoryPage).

use salescast_core::{FormInputSet, PredictError};

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::DomPage;

/// Error raised when a page element cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
	/// No element with this id exists
	#[error("Element `#{id}` not found")]
	MissingElement {
		/// Element id
		id: String,
	},

	/// The element exists but is not of the kind the operation needs
	#[error("Element `#{id}` is not a {expected}")]
	WrongElementKind {
		/// Element id
		id: String,
		/// Expected element kind
		expected: &'static str,
	},

	/// A DOM call failed
	#[error("DOM error: {0}")]
	Dom(String),
}

impl PageError {
	/// Create a missing element error
	pub fn missing(id: impl Into<String>) -> Self {
		Self::MissingElement { id: id.into() }
	}
}

impl From<PageError> for PredictError {
	fn from(err: PageError) -> Self {
		PredictError::page(err.to_string())
	}
}

/// Element-level operations of the submit cycle.
///
/// Showing or hiding an element that is already in that state is a no-op.
pub trait PageSurface {
	/// Checks that an element with this id exists.
	fn ensure_element(&self, id: &str) -> Result<(), PageError>;

	/// Shows or hides an element.
	fn set_visible(&self, id: &str, visible: bool) -> Result<(), PageError>;

	/// Replaces an element's content with plain text.
	fn set_text(&self, id: &str, text: &str) -> Result<(), PageError>;

	/// Replaces an element's content with markup.
	fn set_markup(&self, id: &str, markup: &str) -> Result<(), PageError>;

	/// Serialises the current fields of a form.
	fn read_form(&self, id: &str) -> Result<FormInputSet, PageError>;

	/// Shows a blocking message to the user.
	fn alert(&self, message: &str);
}

/// The event that triggered a submission.
pub trait SubmitEvent {
	/// Suppresses the browser's default form navigation.
	fn prevent_default(&self);
}

#[cfg(target_arch = "wasm32")]
impl SubmitEvent for web_sys::Event {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}

impl<P: PageSurface + ?Sized> PageSurface for std::rc::Rc<P> {
	fn ensure_element(&self, id: &str) -> Result<(), PageError> {
		(**self).ensure_element(id)
	}

	fn set_visible(&self, id: &str, visible: bool) -> Result<(), PageError> {
		(**self).set_visible(id, visible)
	}

	fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
		(**self).set_text(id, text)
	}

	fn set_markup(&self, id: &str, markup: &str) -> Result<(), PageError> {
		(**self).set_markup(id, markup)
	}

	fn read_form(&self, id: &str) -> Result<FormInputSet, PageError> {
		(**self).read_form(id)
	}

	fn alert(&self, message: &str) {
		(**self).alert(message)
	}
}
