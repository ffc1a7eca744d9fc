//! Cancellable requestAnimationFrame task.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

type TickClosure = Closure<dyn FnMut(f64)>;

/// A per-frame callback scheduled with requestAnimationFrame.
///
/// The closure reschedules itself after every invocation until
/// [`cancel`](Self::cancel) runs. Dropping the loop cancels it, so a
/// mode switch that replaces the loop cannot leave a stray callback
/// driving a hidden canvas.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    _closure: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    /// Schedule `tick` to run every display frame, receiving the
    /// DOMHighResTimeStamp. Returns `None` when no window exists.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let handle_inner = handle.clone();
        let closure_inner = closure.clone();
        let window_inner = window.clone();
        *closure.borrow_mut() = Some(Closure::new(move |now: f64| {
            // A cancel during the tick clears the handle; stop rescheduling.
            if handle_inner.get().is_none() {
                return;
            }
            tick(now);
            if handle_inner.get().is_none() {
                return;
            }
            if let Some(cb) = closure_inner.borrow().as_ref() {
                match window_inner.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => handle_inner.set(Some(id)),
                    Err(_) => handle_inner.set(None),
                }
            }
        }));

        let borrow = closure.borrow();
        let cb = borrow.as_ref()?;
        let id = window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()?;
        drop(borrow);
        handle.set(Some(id));

        Some(Self {
            handle,
            _closure: closure,
        })
    }

    /// Drop the pending callback. Safe to call more than once.
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
