//! Cancellable browser timer handles.
//!
//! The handle is the cancellation token: dropping it, or replacing it inside
//! its cell, clears the underlying browser timer. `Interval::stop` clears
//! the browser timer without dropping the closure, so a tick callback can
//! end its own schedule (a wasm-bindgen closure must not be dropped from
//! inside its own invocation).

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Repeating timer backed by `setInterval`.
pub struct Interval {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    /// Schedule `f` every `period_ms`. Returns None outside a browser
    /// context or if scheduling fails.
    pub fn start(period_ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let tick = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok()?;
        Some(Self { id, _tick: tick })
    }

    /// Clear the browser timer, leaving the closure alive until the handle
    /// itself is dropped.
    pub fn stop(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One-shot timer backed by `setTimeout`.
pub struct Timeout {
    id: i32,
    _fire: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn start(delay_ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let fire = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;
        Some(Self { id, _fire: fire })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
