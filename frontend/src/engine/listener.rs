use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.event, err);
        }
    }
}
