//! Input validation, run before the dependency graph is assembled.
//!
//! Checks:
//! 1. Every task has a duration of at least one day
//! 2. No two tasks share an ID
//! 3. No dependency points a task at itself
//!
//! References to unknown tasks are detected during graph assembly, and cycles
//! during the topological sort.

use rustc_hash::FxHashSet;

use crate::error::ScheduleError;
use crate::models::{DependencyEdge, TaskNode};

/// Validate tasks and dependencies, returning the first problem found.
pub fn validate_input(tasks: &[TaskNode], edges: &[DependencyEdge]) -> Result<(), ScheduleError> {
    validate_tasks(tasks)?;
    validate_edges(edges)
}

fn validate_tasks(tasks: &[TaskNode]) -> Result<(), ScheduleError> {
    let mut seen: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(tasks.len(), Default::default());

    for task in tasks {
        if task.duration_days == 0 {
            return Err(ScheduleError::InvalidTask {
                task_id: task.task_id.clone(),
                reason: "duration must be at least 1 day".to_string(),
            });
        }
        if !seen.insert(task.task_id.as_str()) {
            return Err(ScheduleError::InvalidTask {
                task_id: task.task_id.clone(),
                reason: "duplicate task id".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_edges(edges: &[DependencyEdge]) -> Result<(), ScheduleError> {
    for edge in edges {
        if edge.predecessor_id == edge.successor_id {
            return Err(ScheduleError::InvalidEdge {
                predecessor_id: edge.predecessor_id.clone(),
                successor_id: edge.successor_id.clone(),
                reason: "a task cannot depend on itself".to_string(),
            });
        }
    }
    Ok(())
}
