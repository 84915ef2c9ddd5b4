//! Entry point tying the graph, sort, passes and resolver together.

use chrono::NaiveDate;

use crate::config::ScheduleConfig;
use crate::error::ScheduleError;
use crate::log_summary;
use crate::models::{DependencyEdge, ScheduleResult, TaskNode};
use crate::validation::validate_input;

use super::backward::{backward_pass, project_finish};
use super::constraints::check_constraints;
use super::forward::forward_pass;
use super::graph::TaskGraph;
use super::resolver::resolve_critical_path;
use super::topo::topological_sort;

/// Compute the full schedule with the default configuration.
///
/// See [`compute_with_config`].
pub fn compute(
    tasks: &[TaskNode],
    edges: &[DependencyEdge],
    project_start: NaiveDate,
) -> Result<ScheduleResult, ScheduleError> {
    compute_with_config(tasks, edges, project_start, &ScheduleConfig::default())
}

/// Compute early/late dates, slack and the critical path for one project.
///
/// The whole graph is recomputed from the given snapshot on every call; nothing
/// is retained between calls. Input problems are reported before any date is
/// computed, in this order: invalid tasks, invalid edges, edges referencing
/// unknown tasks, cycles.
///
/// # Arguments
/// * `tasks` - Every task of the project
/// * `edges` - Dependencies between those tasks
/// * `project_start` - Base date for tasks without a planned start
/// * `config` - Logging and constraint-check settings
pub fn compute_with_config(
    tasks: &[TaskNode],
    edges: &[DependencyEdge],
    project_start: NaiveDate,
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let verbosity = config.verbosity;

    validate_input(tasks, edges)?;
    let graph = TaskGraph::build(tasks, edges)?;
    let topo_order = topological_sort(&graph)?;

    let mut timings = forward_pass(&graph, &topo_order, project_start, verbosity);
    let finish = project_finish(&timings);
    if let Some(finish) = finish {
        backward_pass(&graph, &topo_order, &mut timings, finish, verbosity);
    }

    let mut result = resolve_critical_path(
        &graph,
        &topo_order,
        &timings,
        project_start,
        finish,
        verbosity,
    )?;

    if config.check_constraints {
        result.constraint_violations = check_constraints(tasks, &result.schedules);
    }

    log_summary!(
        verbosity,
        "Scheduled {} tasks / {} dependencies from {}: finish {:?}, {} days, {} critical, \
         {} constraint violations",
        tasks.len(),
        edges.len(),
        project_start,
        result.project_finish,
        result.critical_path_duration_days,
        result.critical_path_task_ids.len(),
        result.constraint_violations.len()
    );

    Ok(result)
}
