//! Behavior components and host-independent helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here own their state and talk to the page only through the
//! traits they declare, so the browser binding in `dom` stays thin and the
//! decision logic is testable without a DOM.

pub mod class_list;
pub mod dark_mode;
pub mod schedule;
pub mod scroll_hide;
