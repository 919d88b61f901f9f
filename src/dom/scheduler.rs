//! Browser timers and animation frames behind [`Scheduler`].
//!
//! Fired tasks are handed to a [`TaskSink`] through a weak reference so a
//! pending timer never keeps its component alive.

use std::fmt;
use std::rc::Weak;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::util::schedule::{Scheduler, Task};

/// Receiver for tasks fired by the browser.
pub trait TaskSink {
    fn deliver(&self, task: Task);
}

pub enum BrowserHandle {
    Timeout(Timeout),
    Frame(i32),
}

impl fmt::Debug for BrowserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(_) => f.write_str("Timeout"),
            Self::Frame(id) => f.debug_tuple("Frame").field(id).finish(),
        }
    }
}

pub struct BrowserScheduler {
    window: Window,
    sink: Weak<dyn TaskSink>,
}

impl fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserScheduler")
            .field("sink_alive", &(self.sink.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

impl BrowserScheduler {
    pub fn new(window: Window, sink: Weak<dyn TaskSink>) -> Self {
        Self { window, sink }
    }
}

fn deliver(sink: &Weak<dyn TaskSink>, task: Task) {
    if let Some(sink) = sink.upgrade() {
        sink.deliver(task);
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserHandle;

    fn set_timeout(&mut self, delay: Duration, task: Task) -> BrowserHandle {
        let sink = Weak::clone(&self.sink);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        BrowserHandle::Timeout(Timeout::new(millis, move || deliver(&sink, task)))
    }

    fn request_frame(&mut self, task: Task) -> Option<BrowserHandle> {
        let sink = Weak::clone(&self.sink);
        let cb = Closure::once_into_js(move |_ts: f64| deliver(&sink, task));
        match self.window.request_animation_frame(cb.unchecked_ref()) {
            Ok(id) => Some(BrowserHandle::Frame(id)),
            Err(e) => {
                log::debug!("requestAnimationFrame failed: {e:?}");
                None
            }
        }
    }

    fn cancel(&mut self, handle: BrowserHandle) {
        match handle {
            BrowserHandle::Timeout(timeout) => {
                let _ = timeout.cancel();
            }
            BrowserHandle::Frame(id) => {
                let _ = self.window.cancel_animation_frame(id);
            }
        }
    }
}
