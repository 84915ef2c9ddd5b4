//! Date constraint checks against a computed schedule.
//!
//! Constraints are reported, not enforced: the passes only treat a task's
//! planned start as a lower bound.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{ConstraintKind, ConstraintViolation, TaskNode, TaskScheduleResult};

/// Compare every task's date constraint with its early dates.
///
/// Returns violations in task input order.
pub fn check_constraints(
    tasks: &[TaskNode],
    schedules: &HashMap<String, TaskScheduleResult>,
) -> Vec<ConstraintViolation> {
    tasks
        .iter()
        .filter_map(|task| {
            let constraint = task.constraint.as_ref()?;
            let schedule = schedules.get(&task.task_id)?;
            let actual = violated_date(constraint.kind, constraint.date, schedule)?;
            Some(ConstraintViolation {
                task_id: task.task_id.clone(),
                kind: constraint.kind,
                constraint_date: constraint.date,
                actual_date: actual,
                days_off: (actual - constraint.date).num_days(),
            })
        })
        .collect()
}

/// The offending early date, if the constraint does not hold.
fn violated_date(
    kind: ConstraintKind,
    date: NaiveDate,
    schedule: &TaskScheduleResult,
) -> Option<NaiveDate> {
    let start = schedule.early_start;
    let finish = schedule.early_finish;
    match kind {
        ConstraintKind::AsSoonAsPossible => None,
        ConstraintKind::MustStartOn => (start != date).then_some(start),
        ConstraintKind::MustFinishOn => (finish != date).then_some(finish),
        ConstraintKind::StartNoEarlierThan => (start < date).then_some(start),
        ConstraintKind::StartNoLaterThan => (start > date).then_some(start),
        ConstraintKind::FinishNoEarlierThan => (finish < date).then_some(finish),
        ConstraintKind::FinishNoLaterThan => (finish > date).then_some(finish),
    }
}
