//! Plain state models for the page behaviors.
//!
//! DESIGN
//! ======
//! State types carry no browser handles, so the transition rules can be
//! exercised natively and reused by any host that drives them.

pub mod nav;
pub mod theme;
