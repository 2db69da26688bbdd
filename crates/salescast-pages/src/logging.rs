//! Logging for salescast-pages
//!
//! The same macros work in the browser and in native tests.
//!
//! | Macro | Enabled when | WASM | Non-WASM |
//! |-------|--------------|------|----------|
//! | `debug_log!` | `debug-hooks` feature + `debug_assertions` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | `debug_assertions` | `console.info` | `tracing::info!` |
//! | `warn_log!` | `debug_assertions` | `console.warn` | `tracing::warn!` |
//! | `error_log!` | always | `console.error` | `tracing::error!` |
//!
//! `error_log!` stays on in release builds: it is the only trace a failed
//! prediction request leaves behind.

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(
	debug_assertions,
	feature = "debug-hooks",
	not(target_arch = "wasm32")
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!($($arg)*);
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!($($arg)*);
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!($($arg)*);
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message
///
/// # Example
///
/// ```ignore
/// error_log!("Error: {}", err);
/// ```
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!($($arg)*);
	}};
}
