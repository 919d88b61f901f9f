//! Scheduled-task handles and throttling strategy selection.
//!
//! Components never capture themselves in timer closures. They ask a
//! [`Scheduler`] for a handle to a named [`Task`], keep the handle while it is
//! pending, and receive the task back through their `run` method when the host
//! fires it. Cancelling is always explicit.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::time::Duration;

use crate::config::PageConfig;

/// Wait used when a debounce is configured with zero.
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(200);

/// Work a component asks the host to run later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Coalesced scroll evaluation, on an animation frame or its timer stand-in.
    Frame,
    /// Debounce window closed.
    DebounceElapsed,
    /// Quiet period after the last scroll sample elapsed.
    IdleExpired,
}

pub trait Scheduler {
    type Handle;

    fn set_timeout(&mut self, delay: Duration, task: Task) -> Self::Handle;

    /// Request `task` on the next animation frame.
    ///
    /// Returns `None` when the host cannot schedule frames right now.
    fn request_frame(&mut self, task: Task) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Host features probed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub animation_frame: bool,
    pub event_listener: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { animation_frame: true, event_listener: true }
    }
}

/// How bursts of scroll events are coalesced into evaluations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleStrategy {
    /// One evaluation per animation frame; `fallback` timer if a request fails.
    AnimationFrame { fallback: Duration },
    /// No frame primitive: a fixed timer approximating the frame rate.
    FrameTimer { interval: Duration },
    /// Evaluate once the burst settles (or at its start when `leading`).
    Debounce { wait: Duration, leading: bool },
}

impl ThrottleStrategy {
    pub fn select(caps: Capabilities, config: &PageConfig) -> Self {
        let strategy = if !caps.event_listener {
            Self::debounce(config.debounce(), false)
        } else if caps.animation_frame {
            Self::AnimationFrame { fallback: config.frame_fallback() }
        } else {
            Self::FrameTimer { interval: config.frame_fallback() }
        };
        log::debug!("scroll throttle strategy {strategy:?} for {caps:?}");
        strategy
    }

    pub fn debounce(wait: Duration, leading: bool) -> Self {
        let wait = if wait.is_zero() { DEFAULT_DEBOUNCE_WAIT } else { wait };
        Self::Debounce { wait, leading }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Pending {
    id: TaskId,
    due_ms: u64,
    task: Task,
}

/// Deterministic virtual-clock scheduler.
///
/// Timers are due `delay` after the current time; frames are due on the next
/// `frame_interval` boundary. Nothing runs until the owner drains due tasks
/// with [`ManualScheduler::run_until`].
#[derive(Debug)]
pub struct ManualScheduler {
    now_ms: u64,
    frame_interval_ms: u64,
    frames_available: bool,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self { now_ms: 0, frame_interval_ms: 16, frames_available: true, next_id: 0, pending: Vec::new() }
    }

    /// A host whose frame requests always fail.
    pub fn without_frames() -> Self {
        Self { frames_available: false, ..Self::new() }
    }

    pub fn now(&self) -> Duration {
        Duration::from_millis(self.now_ms)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_of(&self, task: Task) -> usize {
        self.pending.iter().filter(|p| p.task == task).count()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to it.
    pub fn next_due(&mut self, until: Duration) -> Option<Task> {
        let until_ms = millis(until);
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.id))
            .map(|(idx, _)| idx)?;
        let pending = self.pending.remove(idx);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(pending.task)
    }

    /// Run every task due up to `until` through `f`, then park the clock there.
    ///
    /// Tasks scheduled by `f` run too if they fall inside the window.
    pub fn run_until(&mut self, until: Duration, mut f: impl FnMut(Task, &mut Self)) {
        while let Some(task) = self.next_due(until) {
            f(task, &mut *self);
        }
        self.now_ms = self.now_ms.max(millis(until));
    }

    /// Shorthand for [`ManualScheduler::run_until`] relative to now.
    pub fn advance(&mut self, by: Duration, f: impl FnMut(Task, &mut Self)) {
        let until = self.now() + by;
        self.run_until(until, f);
    }

    fn push(&mut self, due_ms: u64, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending { id, due_ms, task });
        id
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TaskId;

    fn set_timeout(&mut self, delay: Duration, task: Task) -> TaskId {
        self.push(self.now_ms.saturating_add(millis(delay)), task)
    }

    fn request_frame(&mut self, task: Task) -> Option<TaskId> {
        if !self.frames_available {
            return None;
        }
        let next_frame = (self.now_ms / self.frame_interval_ms + 1) * self.frame_interval_ms;
        Some(self.push(next_frame, task))
    }

    fn cancel(&mut self, handle: TaskId) {
        self.pending.retain(|p| p.id != handle);
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
