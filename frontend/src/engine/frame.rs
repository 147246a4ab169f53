//! Animation-frame scheduling.
//!
//! [`FrameTicker`] coalesces any number of requests between two repaints into a single
//! callback. [`FrameLoop`] keeps stepping every frame until its step reports completion.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Pending flag: only the first request after a frame has run schedules another.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn arm(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request(callback: &FrameCallback) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn cancel(handle: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(handle);
    }
}

struct TickerInner {
    gate: FrameGate,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

impl Drop for TickerInner {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            cancel(handle);
        }
    }
}

#[derive(Clone)]
pub struct FrameTicker {
    inner: Rc<TickerInner>,
}

impl FrameTicker {
    pub fn new<F>(mut on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let inner = Rc::new(TickerInner {
            gate: FrameGate::default(),
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<TickerInner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.handle.set(None);
                inner.gate.release();
            }
            on_frame(timestamp);
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);
        Self { inner }
    }

    /// Schedules the callback for the next frame unless one is already pending.
    pub fn request(&self) {
        if !self.inner.gate.arm() {
            return;
        }
        let scheduled = match self.inner.callback.borrow().as_ref() {
            Some(callback) => request(callback),
            None => Err(JsValue::from_str("frame callback missing")),
        };
        match scheduled {
            Ok(handle) => self.inner.handle.set(Some(handle)),
            Err(err) => {
                self.inner.gate.release();
                log::warn!("failed to request animation frame: {:?}", err);
            }
        }
    }
}

struct LoopInner {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

impl LoopInner {
    fn schedule(&self) -> Result<(), JsValue> {
        let handle = match self.callback.borrow().as_ref() {
            Some(callback) => request(callback)?,
            None => return Ok(()),
        };
        self.handle.set(Some(handle));
        Ok(())
    }
}

/// A running per-frame animation. Dropping it stops the animation.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    /// Starts calling `step` with the frame timestamp until it returns `false`.
    pub fn start<F>(mut step: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(LoopInner {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if step(timestamp) {
                if let Err(err) = inner.schedule() {
                    log::warn!("animation stopped early: {:?}", err);
                }
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);
        inner.schedule()?;
        Ok(Self { inner })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.handle.take() {
            cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_requests_arms_once() {
        let gate = FrameGate::default();
        let scheduled = (0..50).filter(|_| gate.arm()).count();
        assert_eq!(scheduled, 1);
        assert!(!gate.arm());
    }

    #[test]
    fn release_allows_next_frame() {
        let gate = FrameGate::default();
        assert!(gate.arm());
        assert!(!gate.arm());
        gate.release();
        assert!(gate.arm());
        assert!(!gate.arm());
    }
}
