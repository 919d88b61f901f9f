//! Navbar visibility state machine.
//!
//! Only the sign of the delta between consecutive samples matters: an
//! increasing offset hides the bar, anything else shows it. The idle timer
//! forces it visible again.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavVisibility {
    #[default]
    Visible,
    Hidden,
}

impl NavVisibility {
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    visibility: NavVisibility,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll sample and return the resulting visibility.
    pub fn observe(&mut self, offset: f64) -> NavVisibility {
        self.visibility = if offset > self.last_offset {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        self.last_offset = offset;
        self.visibility
    }

    /// Quiet period elapsed; the bar is recovered regardless of direction.
    pub fn idle_expired(&mut self) -> NavVisibility {
        self.visibility = NavVisibility::Visible;
        self.visibility
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

/// Pick the page scroll offset from the document element and body readings.
///
/// Browsers report the scroll on one or the other depending on quirks mode,
/// so the first non-zero finite value wins. Overscroll is clamped to zero.
pub fn resolve_scroll_top(document_element: f64, body: f64) -> f64 {
    [document_element, body]
        .into_iter()
        .find(|v| v.is_finite() && *v != 0.0)
        .map_or(0.0, |v| v.max(0.0))
}
