//! Error types for schedule computation.
//!
//! Every variant is a precondition failure detected from the input before any
//! result is produced. None of them are transient.

use thiserror::Error;

/// Errors that can occur while computing a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Circular dependency detected among tasks: {task_ids:?}")]
    CyclicDependency { task_ids: Vec<String> },
    #[error("Dependency {predecessor_id} -> {successor_id} references unknown task: {task_id}")]
    MissingTask {
        task_id: String,
        predecessor_id: String,
        successor_id: String,
    },
    #[error("Invalid dependency {predecessor_id} -> {successor_id}: {reason}")]
    InvalidEdge {
        predecessor_id: String,
        successor_id: String,
        reason: String,
    },
    #[error("Invalid task {task_id}: {reason}")]
    InvalidTask { task_id: String, reason: String },
    #[error("Computed date for task {task_id} is out of range")]
    DateOutOfRange { task_id: String },
    #[error("Unknown dependency type: {0}")]
    UnknownDependencyType(String),
    #[error("Unknown constraint kind: {0}")]
    UnknownConstraintKind(String),
}
