//! CSRF token lookup for the prediction request
//!
//! When the page is served behind CSRF protection the token is sent along as
//! the `X-CSRFToken` header. Sources are tried in order:
//!
//! 1. **Cookie**: `csrftoken`
//! 2. **Meta tag**: `<meta name="csrf-token" content="...">`
//! 3. **Hidden input**: `<input name="csrfmiddlewaretoken">`
//!
//! A hidden input inside the product form is also submitted as a regular
//! field, so servers that only check the form body keep working.

/// The cookie name holding the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// The meta tag name holding the CSRF token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The header name used to send the CSRF token.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// The form field name holding the CSRF token.
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";

/// Where a token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfSource {
	/// The `csrftoken` cookie
	Cookie,
	/// A `<meta name="csrf-token">` tag
	Meta,
	/// A hidden `csrfmiddlewaretoken` input
	Input,
}

impl CsrfSource {
	/// Lookup order.
	pub const ALL: [CsrfSource; 3] = [Self::Cookie, Self::Meta, Self::Input];

	/// Reads the token from this source of the current document.
	#[cfg(target_arch = "wasm32")]
	pub fn lookup(self) -> Option<String> {
		use wasm_bindgen::JsCast;
		use web_sys::{HtmlDocument, HtmlInputElement};

		let document = web_sys::window()?.document()?;
		let token = match self {
			Self::Cookie => {
				let cookies = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
				parse_cookie_value(&cookies, CSRF_COOKIE_NAME)
			}
			Self::Meta => {
				let selector = format!("meta[name=\"{}\"]", CSRF_META_NAME);
				document
					.query_selector(&selector)
					.ok()??
					.get_attribute("content")
			}
			Self::Input => {
				let selector = format!("input[name=\"{}\"]", CSRF_FORM_FIELD);
				let input: HtmlInputElement = document.query_selector(&selector).ok()??.dyn_into().ok()?;
				Some(input.value())
			}
		};
		token.filter(|token| !token.is_empty())
	}

	/// Reads the token from this source (non-WASM: there is no document).
	#[cfg(not(target_arch = "wasm32"))]
	pub fn lookup(self) -> Option<String> {
		None
	}
}

/// A CSRF token and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
	/// Token value
	pub value: String,
	/// Source the value was read from
	pub source: CsrfSource,
}

/// Finds the page's CSRF token, trying every [`CsrfSource`] in order.
pub fn find_csrf_token() -> Option<CsrfToken> {
	CsrfSource::ALL.into_iter().find_map(|source| {
		source
			.lookup()
			.map(|value| CsrfToken { value, source })
	})
}

/// Parses a cookie value from a `document.cookie` string.
///
/// The cookie string format is: "name1=value1; name2=value2; ..."
pub fn parse_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
	cookie_str
		.split(';')
		.filter_map(|part| part.trim().split_once('='))
		.find(|(key, _)| key.trim() == name)
		.map(|(_, value)| value.trim().to_string())
}
