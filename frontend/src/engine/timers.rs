use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

#[derive(Default)]
struct Pending {
    next_key: u64,
    timeouts: HashMap<u64, Timeout>,
}

/// Deferred callbacks owned by whoever holds the set. Dropping the last handle cancels
/// everything still waiting.
#[derive(Clone, Default)]
pub struct TimerSet {
    pending: Rc<RefCell<Pending>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let weak = Rc::downgrade(&self.pending);
        let mut pending = self.pending.borrow_mut();
        let key = pending.next_key;
        pending.next_key += 1;

        let timeout = Timeout::new(millis, move || {
            let Some(pending) = weak.upgrade() else {
                return;
            };
            let fired = pending.borrow_mut().timeouts.remove(&key);
            callback();
            drop(fired);
        });
        pending.timeouts.insert(key, timeout);
    }

    pub fn cancel_all(&self) {
        let drained: Vec<Timeout> = self
            .pending
            .borrow_mut()
            .timeouts
            .drain()
            .map(|(_, timeout)| timeout)
            .collect();
        drop(drained);
    }
}
