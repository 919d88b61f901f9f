use super::*;
use crate::util::schedule::{ManualScheduler, TaskId};

#[derive(Debug, Default)]
struct FakeNav {
    offset: f64,
    hidden: bool,
    writes: usize,
}

impl NavHost for FakeNav {
    fn scroll_top(&self) -> f64 {
        self.offset
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.writes += 1;
    }
}

type Nav = ScrollHideNav<FakeNav, TaskId>;

const IDLE: Duration = Duration::from_millis(1500);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn frame_nav() -> Nav {
    ScrollHideNav::new(FakeNav::default(), ThrottleStrategy::AnimationFrame { fallback: ms(16) }, IDLE)
}

fn pump(nav: &mut Nav, sched: &mut ManualScheduler, by: u64) {
    sched.advance(ms(by), |task, s| nav.run(task, s));
}

fn scroll_to(nav: &mut Nav, sched: &mut ManualScheduler, offset: f64) {
    nav.host_mut().offset = offset;
    nav.on_scroll(sched);
}

// =============================================================
// Direction rule
// =============================================================

#[test]
fn offsets_map_to_visibility_sequence() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    let mut seen = Vec::new();
    for offset in [0.0, 10.0, 5.0, 5.0, 50.0] {
        scroll_to(&mut nav, &mut sched, offset);
        pump(&mut nav, &mut sched, 16);
        seen.push(nav.visibility());
    }
    assert_eq!(
        seen[1..],
        [NavVisibility::Hidden, NavVisibility::Visible, NavVisibility::Visible, NavVisibility::Hidden]
    );
    assert!(nav.host().hidden);
}

#[test]
fn nothing_is_evaluated_before_the_frame() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    scroll_to(&mut nav, &mut sched, 200.0);
    assert_eq!(nav.evaluations(), 0);
    assert_eq!(nav.host().writes, 0);
    pump(&mut nav, &mut sched, 16);
    assert_eq!(nav.evaluations(), 1);
    assert!(nav.host().hidden);
}

// =============================================================
// Idle timer
// =============================================================

#[test]
fn quiet_period_forces_visible() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    scroll_to(&mut nav, &mut sched, 400.0);
    pump(&mut nav, &mut sched, 16);
    assert!(nav.host().hidden);

    pump(&mut nav, &mut sched, 1499);
    assert!(nav.host().hidden);
    pump(&mut nav, &mut sched, 1);
    assert!(!nav.host().hidden);
    assert_eq!(nav.visibility(), NavVisibility::Visible);
}

#[test]
fn steady_scrolling_keeps_rearming_the_idle_timer() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    for step in 1..=30 {
        scroll_to(&mut nav, &mut sched, f64::from(step) * 40.0);
        pump(&mut nav, &mut sched, 100);
        assert!(nav.host().hidden, "hidden at step {step}");
        assert_eq!(sched.pending_of(Task::IdleExpired), 1);
    }
    pump(&mut nav, &mut sched, 1500);
    assert!(!nav.host().hidden);
    assert_eq!(sched.pending_count(), 0);
}

#[test]
fn scrolling_after_recovery_hides_again() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    scroll_to(&mut nav, &mut sched, 100.0);
    pump(&mut nav, &mut sched, 2000);
    assert!(!nav.host().hidden);

    scroll_to(&mut nav, &mut sched, 120.0);
    pump(&mut nav, &mut sched, 16);
    assert!(nav.host().hidden);
}

// =============================================================
// Frame coalescing
// =============================================================

#[test]
fn burst_within_one_frame_evaluates_once() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    for i in 0..100 {
        scroll_to(&mut nav, &mut sched, f64::from(i));
    }
    assert_eq!(sched.pending_of(Task::Frame), 1);
    pump(&mut nav, &mut sched, 16);
    assert_eq!(nav.evaluations(), 1);
    assert_eq!(nav.host().writes, 1);
}

#[test]
fn next_burst_schedules_after_frame_runs() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::new();
    for _ in 0..10 {
        scroll_to(&mut nav, &mut sched, 10.0);
    }
    pump(&mut nav, &mut sched, 16);
    for _ in 0..10 {
        scroll_to(&mut nav, &mut sched, 20.0);
    }
    assert_eq!(sched.pending_of(Task::Frame), 1);
    pump(&mut nav, &mut sched, 16);
    assert_eq!(nav.evaluations(), 2);
}

#[test]
fn failed_frame_request_degrades_to_timer() {
    let mut nav = frame_nav();
    let mut sched = ManualScheduler::without_frames();
    scroll_to(&mut nav, &mut sched, 30.0);
    scroll_to(&mut nav, &mut sched, 60.0);
    assert_eq!(sched.pending_of(Task::Frame), 1);

    pump(&mut nav, &mut sched, 15);
    assert_eq!(nav.evaluations(), 0);
    pump(&mut nav, &mut sched, 1);
    assert_eq!(nav.evaluations(), 1);
    assert!(nav.host().hidden);
}

#[test]
fn frame_timer_strategy_coalesces_like_frames() {
    let mut nav: Nav =
        ScrollHideNav::new(FakeNav::default(), ThrottleStrategy::FrameTimer { interval: ms(16) }, IDLE);
    let mut sched = ManualScheduler::new();
    for i in 0..50 {
        scroll_to(&mut nav, &mut sched, f64::from(i));
    }
    pump(&mut nav, &mut sched, 16);
    assert_eq!(nav.evaluations(), 1);
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn trailing_debounce_waits_for_burst_to_settle() {
    let mut nav: Nav = ScrollHideNav::new(FakeNav::default(), ThrottleStrategy::debounce(ms(100), false), IDLE);
    let mut sched = ManualScheduler::new();
    scroll_to(&mut nav, &mut sched, 10.0);
    pump(&mut nav, &mut sched, 50);
    scroll_to(&mut nav, &mut sched, 20.0);
    pump(&mut nav, &mut sched, 50);
    scroll_to(&mut nav, &mut sched, 30.0);
    pump(&mut nav, &mut sched, 99);
    assert_eq!(nav.evaluations(), 0);
    assert_eq!(sched.pending_of(Task::DebounceElapsed), 1);

    pump(&mut nav, &mut sched, 1);
    assert_eq!(nav.evaluations(), 1);
    assert!(nav.host().hidden);
}

#[test]
fn leading_debounce_evaluates_first_event_only() {
    let mut nav: Nav = ScrollHideNav::new(FakeNav::default(), ThrottleStrategy::debounce(ms(100), true), IDLE);
    let mut sched = ManualScheduler::new();
    scroll_to(&mut nav, &mut sched, 10.0);
    assert_eq!(nav.evaluations(), 1);
    scroll_to(&mut nav, &mut sched, 20.0);
    pump(&mut nav, &mut sched, 100);
    assert_eq!(nav.evaluations(), 1);

    scroll_to(&mut nav, &mut sched, 5.0);
    assert_eq!(nav.evaluations(), 2);
    assert!(!nav.host().hidden);
}
