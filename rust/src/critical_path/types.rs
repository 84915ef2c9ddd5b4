//! Types for critical path calculation.
//!
//! The passes work in whole-day offsets from the project start date and only
//! convert back to calendar dates when the result is assembled.

use chrono::{Days, NaiveDate};

use crate::models::DependencyType;

/// Days relative to the project start (0 = project start date).
pub type DayOffset = i64;

/// Per-task timing information for critical path calculation.
///
/// Finish offsets are inclusive: a 1-day task has `early_finish == early_start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    /// Earliest possible start (from forward pass).
    pub early_start: DayOffset,
    /// Earliest possible finish (from forward pass).
    pub early_finish: DayOffset,
    /// Latest allowable start (from backward pass).
    pub late_start: DayOffset,
    /// Latest allowable finish (from backward pass).
    pub late_finish: DayOffset,
}

impl TaskTiming {
    /// Total slack = late_start - early_start.
    pub fn slack(&self) -> DayOffset {
        self.late_start - self.early_start
    }

    pub fn is_critical(&self) -> bool {
        self.slack() == 0
    }
}

/// Inclusive finish offset of a task starting at `start`.
#[inline]
pub fn finish_of(start: DayOffset, duration_days: u32) -> DayOffset {
    start + DayOffset::from(duration_days) - 1
}

/// Inclusive start offset of a task finishing at `finish`.
#[inline]
pub fn start_of(finish: DayOffset, duration_days: u32) -> DayOffset {
    finish - DayOffset::from(duration_days) + 1
}

/// Earliest start a dependency allows for its successor.
///
/// `successor_duration` matters only for the finish-anchored types, which
/// constrain the successor's finish rather than its start.
pub fn forward_candidate(
    dependency_type: DependencyType,
    lag_days: i32,
    predecessor: &TaskTiming,
    successor_duration: u32,
) -> DayOffset {
    let lag = DayOffset::from(lag_days);
    let span = DayOffset::from(successor_duration) - 1;
    match dependency_type {
        DependencyType::FinishToStart => predecessor.early_finish + lag,
        DependencyType::StartToStart => predecessor.early_start + lag,
        DependencyType::FinishToFinish => predecessor.early_finish + lag - span,
        DependencyType::StartToFinish => predecessor.early_start + lag - span,
    }
}

/// Latest finish a dependency allows for its predecessor.
///
/// `predecessor_duration` matters only for the start-anchored types, which
/// constrain the predecessor's start rather than its finish.
pub fn backward_candidate(
    dependency_type: DependencyType,
    lag_days: i32,
    successor: &TaskTiming,
    predecessor_duration: u32,
) -> DayOffset {
    let lag = DayOffset::from(lag_days);
    let span = DayOffset::from(predecessor_duration) - 1;
    match dependency_type {
        DependencyType::FinishToStart => successor.late_start - lag,
        DependencyType::StartToStart => successor.late_start - lag + span,
        DependencyType::FinishToFinish => successor.late_finish - lag,
        DependencyType::StartToFinish => successor.late_finish - lag + span,
    }
}

/// Offset of `date` from the project start.
pub fn offset_of(project_start: NaiveDate, date: NaiveDate) -> DayOffset {
    (date - project_start).num_days()
}

/// Calendar date at `offset` days from the project start, if representable.
pub fn date_at(project_start: NaiveDate, offset: DayOffset) -> Option<NaiveDate> {
    if offset >= 0 {
        project_start.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        project_start.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}
