//! Critical Path Method scheduling engine for project timelines.
//!
//! Given tasks with durations and typed, lagged dependencies, computes every
//! task's earliest and latest start/finish, its slack and whether it lies on
//! the critical path. The engine is a pure function of its input; the Python
//! module exposes the same computation to the surrounding platform.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;

mod config;
pub mod critical_path;
mod error;
pub mod logging;
mod models;
pub mod validation;

pub use config::ScheduleConfig;
pub use critical_path::{check_constraints, compute, compute_with_config, TaskTiming};
pub use error::ScheduleError;
pub use models::{
    ConstraintKind, ConstraintViolation, DateConstraint, DependencyEdge, DependencyType,
    ScheduleResult, TaskNode, TaskScheduleResult,
};
pub use validation::validate_input;

/// Compute the schedule of one project.
///
/// # Arguments
/// * `tasks` - List of tasks in the project
/// * `edges` - List of dependencies between those tasks
/// * `project_start` - Project start date
/// * `config` - Optional configuration (verbosity, constraint checks)
///
/// # Returns
/// * ScheduleResult with per-task dates and slack plus the critical path
///
/// # Raises
/// * ValueError on a cycle, an unknown task reference, a self-dependency or an invalid task
#[pyfunction]
#[pyo3(signature = (tasks, edges, project_start, config=None))]
fn compute_schedule(
    tasks: Vec<TaskNode>,
    edges: Vec<DependencyEdge>,
    project_start: NaiveDate,
    config: Option<ScheduleConfig>,
) -> PyResult<ScheduleResult> {
    let config = config.unwrap_or_default();

    match compute_with_config(&tasks, &edges, project_start, &config) {
        Ok(result) => Ok(result),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The timeline_cpm.cpm Python module.
#[pymodule]
fn cpm(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<TaskNode>()?;
    m.add_class::<DependencyEdge>()?;
    m.add_class::<DateConstraint>()?;
    m.add_class::<TaskScheduleResult>()?;
    m.add_class::<ConstraintViolation>()?;
    m.add_class::<ScheduleResult>()?;

    // Config types
    m.add_class::<ScheduleConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(compute_schedule, m)?)?;

    Ok(())
}
