//! Clock-time placement of a day's sessions.
//!
//! # Algorithm
//!
//! 1. Merge overlapping preferred windows, then expand each window into
//!    30-minute atomic slots and drop any slot the conflict calendar reports
//!    as blocked. The survivors, sorted chronologically, are the day's
//!    available slots; no two of them overlap.
//! 2. Order the day's tasks by allocated hours, largest first (stable).
//! 3. For each task, need `round(hours × 2)` atomic slots. Scan from the
//!    cursor for the first run of that many time-contiguous, unclaimed
//!    slots, claim it and move the cursor past it. A task with no fitting
//!    run in the remaining sequence gets no slots. With gap reuse enabled,
//!    a failed scan is retried from the start of the sequence so gaps
//!    skipped by earlier tasks can still be used.
//! 4. Collapse each claimed run into one `TimeSlot`.
//!
//! Fully deterministic: no randomness, no parallel search.

use chrono::{Duration, NaiveTime};
use tracing::debug;

use crate::models::{ClockWindow, ConflictCalendar, TaskAllocation, TimeSlot};

/// Atomic slot length in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Result of placing one day's tasks on the clock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySlots {
    /// Placed slots, chronological.
    pub slots: Vec<TimeSlot>,
    /// Indices (into the input task list) of tasks that received no slots.
    pub unplaced: Vec<usize>,
}

/// Places hour allocations into conflict-free preferred windows.
#[derive(Debug, Clone, Copy)]
pub struct SlotScheduler<'a> {
    windows: &'a [ClockWindow],
    calendar: &'a ConflictCalendar,
    reuse_skipped_gaps: bool,
}

impl<'a> SlotScheduler<'a> {
    /// Creates a scheduler over preferred windows and blocked intervals.
    pub fn new(windows: &'a [ClockWindow], calendar: &'a ConflictCalendar) -> Self {
        Self {
            windows,
            calendar,
            reuse_skipped_gaps: false,
        }
    }

    /// Retries a failed scan from the start of the day (default: off).
    pub fn with_gap_reuse(mut self, enabled: bool) -> Self {
        self.reuse_skipped_gaps = enabled;
        self
    }

    /// Conflict-free atomic slots, chronological and non-overlapping.
    pub fn available_slots(&self) -> Vec<ClockWindow> {
        let step = Duration::minutes(SLOT_MINUTES);
        let mut atoms = Vec::new();

        for window in merge_windows(self.windows) {
            let mut start = window.start;
            loop {
                let (end, wrapped) = start.overflowing_add_signed(step);
                if wrapped != 0 || end > window.end {
                    break;
                }
                let atom = ClockWindow::new(start, end);
                if !self.calendar.overlaps(&atom) {
                    atoms.push(atom);
                }
                start = end;
            }
        }

        atoms.sort_by_key(|a| a.start);
        atoms
    }

    /// Places a day's tasks. Empty output when no windows are configured.
    pub fn schedule_day(&self, tasks: &[TaskAllocation]) -> DaySlots {
        let atoms = self.available_slots();
        let mut claimed: Vec<Option<usize>> = vec![None; atoms.len()];
        let mut unplaced = Vec::new();

        let mut order: Vec<usize> = (0..tasks.len()).collect();
        order.sort_by(|&a, &b| {
            tasks[b]
                .hours_allocated
                .partial_cmp(&tasks[a].hours_allocated)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut cursor = 0;
        for idx in order {
            let needed = slot_count(tasks[idx].hours_allocated);
            let run = find_run(&atoms, &claimed, cursor, needed).or_else(|| {
                if self.reuse_skipped_gaps {
                    find_run(&atoms, &claimed, 0, needed)
                } else {
                    None
                }
            });

            match run {
                Some(start) => {
                    for slot in &mut claimed[start..start + needed] {
                        *slot = Some(idx);
                    }
                    cursor = start + needed;
                    debug!(
                        subject = %tasks[idx].subject_name,
                        start = %atoms[start].start,
                        slots = needed,
                        "session placed"
                    );
                }
                None => unplaced.push(idx),
            }
        }

        unplaced.sort_unstable();
        DaySlots {
            slots: collapse(&atoms, &claimed, tasks),
            unplaced,
        }
    }
}

/// Atomic slots needed for `hours`, rounded to the nearest whole slot.
pub fn slot_count(hours: f64) -> usize {
    let per_hour = 60.0 / SLOT_MINUTES as f64;
    (hours * per_hour).round().max(0.0) as usize
}

/// Valid windows sorted by start, with overlapping windows merged.
///
/// Windows that merely touch stay separate so each keeps its own slot grid.
fn merge_windows(windows: &[ClockWindow]) -> Vec<ClockWindow> {
    let mut sorted: Vec<ClockWindow> = windows.iter().copied().filter(|w| w.is_valid()).collect();
    sorted.sort_by_key(|w| (w.start, w.end));

    let mut merged: Vec<ClockWindow> = Vec::with_capacity(sorted.len());
    for window in sorted {
        match merged.last_mut() {
            Some(last) if window.start < last.end => {
                last.end = last.end.max(window.end);
            }
            _ => merged.push(window),
        }
    }
    merged
}

/// First index at or after `from` starting `needed` unclaimed, time-contiguous atoms.
fn find_run(
    atoms: &[ClockWindow],
    claimed: &[Option<usize>],
    from: usize,
    needed: usize,
) -> Option<usize> {
    if needed == 0 || needed > atoms.len() {
        return None;
    }

    let mut run_start = from;
    let mut run_len = 0;
    for i in from..atoms.len() {
        let continues = run_len > 0 && atoms[i - 1].end == atoms[i].start;
        if claimed[i].is_some() {
            run_len = 0;
            continue;
        }
        if !continues {
            run_start = i;
            run_len = 0;
        }
        run_len += 1;
        if run_len == needed {
            return Some(run_start);
        }
    }
    None
}

/// Merges adjacent atoms claimed by the same task into single slots.
fn collapse(
    atoms: &[ClockWindow],
    claimed: &[Option<usize>],
    tasks: &[TaskAllocation],
) -> Vec<TimeSlot> {
    let mut slots: Vec<TimeSlot> = Vec::new();
    let mut owner_of_last: Option<usize> = None;

    for (atom, owner) in atoms.iter().zip(claimed) {
        let Some(task_idx) = *owner else {
            owner_of_last = None;
            continue;
        };
        match slots.last_mut() {
            Some(last) if owner_of_last == Some(task_idx) && last.end == atom.start => {
                last.end = atom.end;
            }
            _ => slots.push(TimeSlot::new(
                atom.start,
                atom.end,
                tasks[task_idx].subject_name.clone(),
            )),
        }
        owner_of_last = Some(task_idx);
    }

    slots
}

/// Whether a time lies on the atomic grid relative to `origin`.
pub fn on_grid(origin: NaiveTime, time: NaiveTime) -> bool {
    (time - origin).num_minutes() % SLOT_MINUTES == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn w(start: (u32, u32), end: (u32, u32)) -> ClockWindow {
        ClockWindow::hm(start, end).unwrap()
    }

    fn starts(atoms: &[ClockWindow]) -> Vec<NaiveTime> {
        atoms.iter().map(|a| a.start).collect()
    }

    fn no_overlaps(slots: &[TimeSlot]) -> bool {
        slots.iter().enumerate().all(|(i, a)| {
            slots.iter().skip(i + 1).all(|b| a.end <= b.start || b.end <= a.start)
        })
    }

    #[test]
    fn test_blocked_atom_excluded() {
        let windows = [w((12, 30), (14, 0))];
        let calendar = ConflictCalendar::new().with_blocked(w((13, 0), (13, 10)));
        let scheduler = SlotScheduler::new(&windows, &calendar);

        let atoms = scheduler.available_slots();
        assert_eq!(starts(&atoms), vec![t(12, 30), t(13, 30)]);
        assert_eq!(atoms[0].end, t(13, 0));
        assert_eq!(atoms[1].end, t(14, 0));
    }

    #[test]
    fn test_partial_trailing_atom_dropped() {
        let windows = [w((9, 0), (10, 15))];
        let calendar = ConflictCalendar::new();
        let atoms = SlotScheduler::new(&windows, &calendar).available_slots();
        assert_eq!(starts(&atoms), vec![t(9, 0), t(9, 30)]);
    }

    #[test]
    fn test_overlapping_windows_merged() {
        let windows = [w((10, 0), (11, 0)), w((9, 0), (10, 30))];
        let calendar = ConflictCalendar::new();
        let atoms = SlotScheduler::new(&windows, &calendar).available_slots();
        assert_eq!(starts(&atoms), vec![t(9, 0), t(9, 30), t(10, 0), t(10, 30)]);
    }

    #[test]
    fn test_off_grid_overlapping_windows_merged() {
        let windows = [w((9, 15), (10, 15)), w((10, 0), (11, 0))];
        let calendar = ConflictCalendar::new();
        let scheduler = SlotScheduler::new(&windows, &calendar);

        let atoms = scheduler.available_slots();
        // One merged window 09:15-11:00 on a single grid
        assert_eq!(starts(&atoms), vec![t(9, 15), t(9, 45), t(10, 15)]);
        assert!(atoms.windows(2).all(|p| p[0].end <= p[1].start));

        let tasks = vec![TaskAllocation::new("A", 1.0), TaskAllocation::new("B", 1.0)];
        let day = scheduler.schedule_day(&tasks);
        assert!(no_overlaps(&day.slots));
        assert_eq!(day.slots, vec![TimeSlot::new(t(9, 15), t(10, 15), "A")]);
        assert_eq!(day.unplaced, vec![1]);
    }

    #[test]
    fn test_touching_windows_keep_own_grid() {
        let windows = [w((9, 0), (10, 15)), w((10, 15), (11, 15))];
        let calendar = ConflictCalendar::new();
        let atoms = SlotScheduler::new(&windows, &calendar).available_slots();
        assert_eq!(starts(&atoms), vec![t(9, 0), t(9, 30), t(10, 15), t(10, 45)]);
    }

    #[test]
    fn test_largest_task_first_and_collapsed() {
        let windows = [w((9, 0), (12, 0))];
        let calendar = ConflictCalendar::new();
        let tasks = vec![TaskAllocation::new("MATH", 1.0), TaskAllocation::new("CS101", 1.5)];

        let day = SlotScheduler::new(&windows, &calendar).schedule_day(&tasks);
        assert!(day.unplaced.is_empty());
        assert_eq!(
            day.slots,
            vec![
                TimeSlot::new(t(9, 0), t(10, 30), "CS101"),
                TimeSlot::new(t(10, 30), t(11, 30), "MATH"),
            ]
        );
    }

    #[test]
    fn test_run_must_be_time_contiguous() {
        let windows = [w((12, 30), (14, 0))];
        let calendar = ConflictCalendar::new().with_blocked(w((13, 0), (13, 10)));
        // 1h needs two contiguous atoms; 12:30 and 13:30 are separated by the block
        let tasks = vec![TaskAllocation::new("CS101", 1.0)];

        let day = SlotScheduler::new(&windows, &calendar).schedule_day(&tasks);
        assert!(day.slots.is_empty());
        assert_eq!(day.unplaced, vec![0]);
    }

    #[test]
    fn test_skipped_gap_left_behind_cursor() {
        // Atoms: 09:00, [09:30 blocked], 10:00, 10:30, 11:00
        let windows = [w((9, 0), (11, 30))];
        let calendar = ConflictCalendar::new().with_blocked(w((9, 30), (10, 0)));
        let tasks = vec![TaskAllocation::new("BIG", 1.5), TaskAllocation::new("SMALL", 0.5)];

        let day = SlotScheduler::new(&windows, &calendar).schedule_day(&tasks);
        assert_eq!(day.slots, vec![TimeSlot::new(t(10, 0), t(11, 30), "BIG")]);
        assert_eq!(day.unplaced, vec![1]);
    }

    #[test]
    fn test_skipped_gap_reused_by_smaller_task() {
        // Atoms: 09:00, [09:30 blocked], 10:00, 10:30, 11:00
        let windows = [w((9, 0), (11, 30))];
        let calendar = ConflictCalendar::new().with_blocked(w((9, 30), (10, 0)));
        let tasks = vec![TaskAllocation::new("BIG", 1.5), TaskAllocation::new("SMALL", 0.5)];

        let day = SlotScheduler::new(&windows, &calendar)
            .with_gap_reuse(true)
            .schedule_day(&tasks);
        assert!(day.unplaced.is_empty());
        assert_eq!(
            day.slots,
            vec![
                TimeSlot::new(t(9, 0), t(9, 30), "SMALL"),
                TimeSlot::new(t(10, 0), t(11, 30), "BIG"),
            ]
        );
    }

    #[test]
    fn test_no_windows_yields_empty() {
        let calendar = ConflictCalendar::new();
        let tasks = vec![TaskAllocation::new("CS101", 1.0)];
        let day = SlotScheduler::new(&[], &calendar).schedule_day(&tasks);
        assert!(day.slots.is_empty());
        assert_eq!(day.unplaced, vec![0]);
    }

    #[test]
    fn test_same_subject_sessions_stay_separate_runs() {
        let windows = [w((9, 0), (12, 0))];
        let calendar = ConflictCalendar::new();
        let tasks = vec![
            TaskAllocation::new("MATH", 1.0),
            TaskAllocation::supplemental("MATH", 1.0),
        ];
        let day = SlotScheduler::new(&windows, &calendar).schedule_day(&tasks);
        assert_eq!(day.slots.len(), 2);
        assert_eq!(day.slots[0].end, day.slots[1].start);
    }

    #[test]
    fn test_slots_avoid_default_breaks() {
        let windows = [w((9, 0), (22, 0))];
        let calendar = ConflictCalendar::daily_breaks();
        let tasks = vec![
            TaskAllocation::new("A", 2.5),
            TaskAllocation::new("B", 2.0),
            TaskAllocation::new("C", 1.5),
            TaskAllocation::new("D", 1.0),
        ];
        let day = SlotScheduler::new(&windows, &calendar).schedule_day(&tasks);

        assert!(no_overlaps(&day.slots));
        for slot in &day.slots {
            let span = ClockWindow::new(slot.start, slot.end);
            assert!(!calendar.overlaps(&span), "{slot} hits a break");
            assert!(on_grid(t(9, 0), slot.start));
            assert_eq!(slot.duration_minutes() % SLOT_MINUTES, 0);
        }
    }

    #[test]
    fn test_slot_count_rounding() {
        assert_eq!(slot_count(1.0), 2);
        assert_eq!(slot_count(1.5), 3);
        assert_eq!(slot_count(2.25), 5); // 4.5 rounds away from zero
        assert_eq!(slot_count(0.2), 0);
    }

    #[test]
    fn test_deterministic() {
        let windows = [w((9, 0), (12, 0)), w((14, 0), (17, 0))];
        let calendar = ConflictCalendar::daily_breaks();
        let tasks = vec![
            TaskAllocation::new("A", 1.0),
            TaskAllocation::new("B", 1.0),
            TaskAllocation::new("C", 2.0),
        ];
        let scheduler = SlotScheduler::new(&windows, &calendar);
        assert_eq!(scheduler.schedule_day(&tasks), scheduler.schedule_day(&tasks));
    }
}
