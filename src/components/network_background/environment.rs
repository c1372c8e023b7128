//! Host-side signals: viewport size, the reduced-motion preference, and
//! resize debouncing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{MediaQueryList, Window};

use super::types::Viewport;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Inner size of the browser window.
pub fn window_viewport(window: &Window) -> Result<Viewport, JsValue> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok(Viewport::new(width, height))
}

/// The `prefers-reduced-motion` media query, when the host supports it.
pub fn reduced_motion_query(window: &Window) -> Option<MediaQueryList> {
	window.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Motion stays enabled when the preference cannot be read.
pub fn prefers_reduced_motion(query: Option<&MediaQueryList>) -> bool {
	query.is_some_and(MediaQueryList::matches)
}

/// Coalesces bursts of calls into one invocation after a quiet period.
///
/// Dropping the debouncer, or calling [`cancel`](Self::cancel), discards a
/// pending invocation.
#[derive(Clone, Default)]
pub struct Debouncer {
	pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
	/// A debouncer with nothing pending.
	pub fn new() -> Self {
		Self::default()
	}

	/// Schedule `f` after `millis`, replacing whatever was pending.
	pub fn schedule<F>(&self, millis: u32, f: F)
	where
		F: 'static + FnOnce(),
	{
		let timeout = Timeout::new(millis, f);
		// dropping the previous Timeout clears it
		self.pending.borrow_mut().replace(timeout);
	}

	/// Drop the pending invocation, if any.
	pub fn cancel(&self) {
		if let Some(timeout) = self.pending.borrow_mut().take() {
			drop(timeout.cancel());
		}
	}
}
