//! Scroll-hiding navigation bar.
//!
//! ARCHITECTURE
//! ============
//! Scroll events only request work through the configured
//! [`ThrottleStrategy`]; the actual evaluation happens when the host hands a
//! [`Task`] back to [`ScrollHideNav::run`]. Each evaluation samples the offset,
//! applies the delta-sign rule, and replaces the single idle timer.

#[cfg(test)]
#[path = "scroll_hide_test.rs"]
mod scroll_hide_test;

use std::time::Duration;

use crate::state::nav::{NavVisibility, ScrollTracker};
use crate::util::schedule::{Scheduler, Task, ThrottleStrategy};

/// Scroll source plus the navigation element whose class is toggled.
pub trait NavHost {
    fn scroll_top(&self) -> f64;
    fn set_hidden(&mut self, hidden: bool);
}

#[derive(Debug)]
pub struct ScrollHideNav<N, H> {
    host: N,
    strategy: ThrottleStrategy,
    idle: Duration,
    tracker: ScrollTracker,
    /// In-flight frame request; blocks re-entrant scheduling until it runs.
    frame: Option<H>,
    debounce: Option<H>,
    idle_timer: Option<H>,
    evaluations: u64,
}

impl<N: NavHost, H> ScrollHideNav<N, H> {
    pub fn new(host: N, strategy: ThrottleStrategy, idle: Duration) -> Self {
        Self {
            host,
            strategy,
            idle,
            tracker: ScrollTracker::new(),
            frame: None,
            debounce: None,
            idle_timer: None,
            evaluations: 0,
        }
    }

    /// Handle one raw scroll event.
    pub fn on_scroll<S: Scheduler<Handle = H>>(&mut self, sched: &mut S) {
        match self.strategy {
            ThrottleStrategy::AnimationFrame { fallback } => {
                if self.frame.is_some() {
                    return;
                }
                let handle = match sched.request_frame(Task::Frame) {
                    Some(handle) => handle,
                    None => {
                        log::debug!("animation frame unavailable, using {fallback:?} timer");
                        sched.set_timeout(fallback, Task::Frame)
                    }
                };
                self.frame = Some(handle);
            }
            ThrottleStrategy::FrameTimer { interval } => {
                if self.frame.is_some() {
                    return;
                }
                self.frame = Some(sched.set_timeout(interval, Task::Frame));
            }
            ThrottleStrategy::Debounce { wait, leading } => {
                let call_now = leading && self.debounce.is_none();
                if let Some(handle) = self.debounce.take() {
                    sched.cancel(handle);
                }
                self.debounce = Some(sched.set_timeout(wait, Task::DebounceElapsed));
                if call_now {
                    self.evaluate(sched);
                }
            }
        }
    }

    /// Run a task previously scheduled by this component.
    pub fn run<S: Scheduler<Handle = H>>(&mut self, task: Task, sched: &mut S) {
        match task {
            Task::Frame => {
                self.frame = None;
                self.evaluate(sched);
            }
            Task::DebounceElapsed => {
                self.debounce = None;
                if matches!(self.strategy, ThrottleStrategy::Debounce { leading: false, .. }) {
                    self.evaluate(sched);
                }
            }
            Task::IdleExpired => {
                self.idle_timer = None;
                let visibility = self.tracker.idle_expired();
                self.host.set_hidden(visibility.is_hidden());
            }
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.tracker.visibility()
    }

    pub fn strategy(&self) -> ThrottleStrategy {
        self.strategy
    }

    /// Number of scroll samples evaluated so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn host(&self) -> &N {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut N {
        &mut self.host
    }

    fn evaluate<S: Scheduler<Handle = H>>(&mut self, sched: &mut S) {
        let offset = self.host.scroll_top();
        let visibility = self.tracker.observe(offset);
        self.host.set_hidden(visibility.is_hidden());
        self.evaluations += 1;

        if let Some(handle) = self.idle_timer.take() {
            sched.cancel(handle);
        }
        self.idle_timer = Some(sched.set_timeout(self.idle, Task::IdleExpired));
    }
}
