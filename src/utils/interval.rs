//! Browser `setInterval` behind [`IntervalTimer`].

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{IntervalHandle, set_interval_with_handle};

use crate::core::IntervalTimer;

/// Repeating timer that invokes `on_tick` on every fire.
#[derive(Clone)]
pub struct BrowserInterval {
    on_tick: Rc<dyn Fn()>,
}

impl BrowserInterval {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl IntervalTimer for BrowserInterval {
    type Handle = IntervalHandle;

    fn start(&self, interval_ms: u32) -> Option<IntervalHandle> {
        let on_tick = Rc::clone(&self.on_tick);
        set_interval_with_handle(
            move || on_tick(),
            Duration::from_millis(u64::from(interval_ms)),
        )
        .ok()
    }

    fn cancel(&self, handle: IntervalHandle) {
        handle.clear();
    }
}
