//! Night-window classification for motion alerts.
//!
//! The configured window is a pair of hours `[start, end)`. When
//! `start < end` the window lies within a single day; when `start > end`
//! it crosses midnight (e.g. 22–06) and covers both wrap-around segments.

/// Returns `true` when `hour` falls inside the configured night window.
///
/// An equal `start` and `end` means an empty window: the predicate is
/// `false` for every hour. Without the special case the wrap branch would
/// read an equal pair as "always night".
pub fn is_night(hour: u32, start: u32, end: u32) -> bool {
    if start == end {
        return false;
    }
    if start < end {
        start <= hour && hour < end
    } else {
        hour >= start || hour < end
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
