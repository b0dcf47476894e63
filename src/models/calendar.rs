//! Clock windows and the blocked-interval calendar.
//!
//! All intervals recur daily and are expressed as wall-clock times
//! (`chrono::NaiveTime`) without a date component.
//!
//! # Overlap Model
//! Intervals are half-open `[start, end)`. Two intervals overlap unless one
//! ends at or before the other starts, so a slot ending exactly when a
//! blocked interval begins is still available.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// A daily clock interval [start, end).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockWindow {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive).
    pub end: NaiveTime,
}

impl ClockWindow {
    /// Creates a new window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Creates a window from hour/minute pairs.
    ///
    /// Returns `None` if either pair is not a valid time of day.
    pub fn hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        Some(Self::new(
            NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        ))
    }

    /// Creates a window of `minutes` starting at `start`.
    ///
    /// Returns `None` if the window would run past midnight.
    pub fn starting_at(start: NaiveTime, minutes: i64) -> Option<Self> {
        let (end, wrapped) = start.overflowing_add_signed(Duration::minutes(minutes));
        if wrapped != 0 {
            return None;
        }
        Some(Self::new(start, end))
    }

    /// Length of this window. Zero for empty or inverted windows.
    #[inline]
    pub fn duration(&self) -> Duration {
        if self.end > self.start {
            self.end - self.start
        } else {
            Duration::zero()
        }
    }

    /// Whether the window has positive length.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Fixed set of recurring daily blocked intervals (prayer and meal breaks).
///
/// Blocked intervals may overlap each other; any overlap with a candidate
/// excludes it, with no priority resolution between blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConflictCalendar {
    /// Blocked intervals, in insertion order.
    pub blocked: Vec<ClockWindow>,
}

/// Prayer windows: start time and length in minutes.
const PRAYER_TIMES: [(u32, u32); 5] = [(5, 0), (13, 0), (16, 30), (18, 30), (20, 0)];
const PRAYER_MINUTES: i64 = 10;

/// Meal and snack breaks as (start, end) hour/minute pairs.
const MEAL_BREAKS: [((u32, u32), (u32, u32)); 4] = [
    ((7, 30), (8, 0)),
    ((13, 30), (14, 0)),
    ((16, 0), (16, 15)),
    ((19, 30), (20, 0)),
];

impl ConflictCalendar {
    /// Creates a calendar with no blocked intervals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default daily breaks: five 10-minute prayer windows plus meal and snack breaks.
    pub fn daily_breaks() -> Self {
        let mut calendar = Self::new();
        for (h, m) in PRAYER_TIMES {
            if let Some(window) = NaiveTime::from_hms_opt(h, m, 0)
                .and_then(|start| ClockWindow::starting_at(start, PRAYER_MINUTES))
            {
                calendar.blocked.push(window);
            }
        }
        for (start, end) in MEAL_BREAKS {
            if let Some(window) = ClockWindow::hm(start, end) {
                calendar.blocked.push(window);
            }
        }
        calendar
    }

    /// Adds a blocked interval.
    pub fn with_blocked(mut self, window: ClockWindow) -> Self {
        self.blocked.push(window);
        self
    }

    /// Whether the candidate intersects any blocked interval.
    pub fn overlaps(&self, candidate: &ClockWindow) -> bool {
        self.blocked.iter().any(|b| b.overlaps(candidate))
    }

    /// Whether a time falls inside any blocked interval.
    pub fn is_blocked(&self, time: NaiveTime) -> bool {
        self.blocked.iter().any(|b| b.contains(time))
    }

    /// Number of blocked intervals.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether no intervals are blocked.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}
