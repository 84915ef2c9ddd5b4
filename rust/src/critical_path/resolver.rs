//! Slack, criticality and the critical path, derived from both passes.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::log_passes;
use crate::models::{ScheduleResult, TaskScheduleResult};

use super::graph::TaskGraph;
use super::types::{date_at, forward_candidate, DayOffset, TaskTiming};

/// Build the final result from resolved timings.
///
/// Fails only if a computed offset cannot be represented as a calendar date.
pub fn resolve_critical_path(
    graph: &TaskGraph<'_>,
    topo_order: &[&str],
    timings: &FxHashMap<&str, TaskTiming>,
    project_start: NaiveDate,
    project_finish: Option<DayOffset>,
    verbosity: u8,
) -> Result<ScheduleResult, ScheduleError> {
    let Some(finish) = project_finish else {
        return Ok(ScheduleResult::default());
    };

    let mut schedules: HashMap<String, TaskScheduleResult> = HashMap::with_capacity(timings.len());
    let mut critical_path_task_ids = Vec::new();

    for &task_id in topo_order {
        let Some(timing) = timings.get(task_id) else {
            continue;
        };

        let to_date = |offset: DayOffset| {
            date_at(project_start, offset).ok_or_else(|| ScheduleError::DateOutOfRange {
                task_id: task_id.to_string(),
            })
        };

        let total_slack_days = timing.slack();
        let is_critical = timing.is_critical();
        let free_slack_days =
            free_slack(graph, task_id, timing, timings, finish).min(total_slack_days);

        log_passes!(
            verbosity,
            "resolve {}: total slack {}, free slack {}{}",
            task_id,
            total_slack_days,
            free_slack_days,
            if is_critical { " (critical)" } else { "" }
        );

        if is_critical {
            critical_path_task_ids.push(task_id.to_string());
        }

        schedules.insert(
            task_id.to_string(),
            TaskScheduleResult {
                task_id: task_id.to_string(),
                early_start: to_date(timing.early_start)?,
                early_finish: to_date(timing.early_finish)?,
                late_start: to_date(timing.late_start)?,
                late_finish: to_date(timing.late_finish)?,
                total_slack_days,
                free_slack_days,
                is_critical,
            },
        );
    }

    let project_finish_date =
        date_at(project_start, finish).ok_or_else(|| ScheduleError::DateOutOfRange {
            task_id: critical_path_task_ids.last().cloned().unwrap_or_default(),
        })?;

    Ok(ScheduleResult {
        schedules,
        critical_path_task_ids,
        critical_path_duration_days: finish + 1,
        project_finish: Some(project_finish_date),
        critical_chain: critical_chain(graph, topo_order, timings, finish),
        constraint_violations: Vec::new(),
    })
}

/// Days a task can slip before it moves the early start of any successor.
///
/// Sinks can slip until the project finish.
fn free_slack(
    graph: &TaskGraph<'_>,
    task_id: &str,
    timing: &TaskTiming,
    timings: &FxHashMap<&str, TaskTiming>,
    project_finish: DayOffset,
) -> DayOffset {
    graph
        .outgoing(task_id)
        .iter()
        .filter_map(|edge| {
            let succ_task = graph.task(&edge.successor_id)?;
            let succ = timings.get(edge.successor_id.as_str())?;
            let candidate = forward_candidate(
                edge.dependency_type,
                edge.lag_days,
                timing,
                succ_task.duration_days,
            );
            Some(succ.early_start - candidate)
        })
        .min()
        .unwrap_or(project_finish - timing.early_finish)
}

/// One chain of critical tasks, first to last, linked by driving dependencies.
///
/// Starts from the last critical task (in topological order) that finishes on
/// the project finish and walks back through critical predecessors whose
/// dependency produced the task's early start.
fn critical_chain(
    graph: &TaskGraph<'_>,
    topo_order: &[&str],
    timings: &FxHashMap<&str, TaskTiming>,
    project_finish: DayOffset,
) -> Vec<String> {
    let end = topo_order.iter().rev().copied().find(|id| {
        timings
            .get(id)
            .is_some_and(|t| t.is_critical() && t.early_finish == project_finish)
    });
    let Some(mut current) = end else {
        return Vec::new();
    };

    let mut chain = vec![current.to_string()];
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(current);

    loop {
        let (Some(task), Some(timing)) = (graph.task(current), timings.get(current)) else {
            break;
        };

        let driver = graph.incoming(current).iter().find_map(|edge| {
            let pred_id = edge.predecessor_id.as_str();
            let pred = timings.get(pred_id)?;
            let candidate =
                forward_candidate(edge.dependency_type, edge.lag_days, pred, task.duration_days);
            (pred.is_critical() && candidate == timing.early_start && !visited.contains(pred_id))
                .then_some(pred_id)
        });

        match driver {
            Some(pred_id) => {
                visited.insert(pred_id);
                chain.push(pred_id.to_string());
                current = pred_id;
            }
            None => break,
        }
    }

    chain.reverse();
    chain
}
