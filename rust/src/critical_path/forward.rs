//! Forward pass: earliest start and finish per task.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::{log_debug, log_passes};

use super::graph::TaskGraph;
use super::types::{finish_of, forward_candidate, offset_of, DayOffset, TaskTiming};

/// Compute early start/finish for every task, in topological order.
///
/// A task's early start is the latest of its own base date (planned start, or
/// the project start) and the candidate start of every incoming dependency.
/// Every dependency must hold at once, so the latest candidate binds.
///
/// Late fields are left at zero for the backward pass to fill in.
pub fn forward_pass<'a>(
    graph: &TaskGraph<'a>,
    topo_order: &[&'a str],
    project_start: NaiveDate,
    verbosity: u8,
) -> FxHashMap<&'a str, TaskTiming> {
    let mut timings: FxHashMap<&'a str, TaskTiming> =
        FxHashMap::with_capacity_and_hasher(topo_order.len(), Default::default());

    for &task_id in topo_order {
        let Some(task) = graph.task(task_id) else {
            continue;
        };

        let mut early_start: DayOffset = task
            .planned_start_date
            .map(|planned| offset_of(project_start, planned))
            .unwrap_or(0);

        for edge in graph.incoming(task_id) {
            // Topological order guarantees the predecessor is already resolved
            let Some(pred) = timings.get(edge.predecessor_id.as_str()) else {
                continue;
            };
            let candidate =
                forward_candidate(edge.dependency_type, edge.lag_days, pred, task.duration_days);
            log_debug!(
                verbosity,
                "  forward {} <- {} ({}, lag {}): candidate start {}",
                task_id,
                edge.predecessor_id,
                edge.dependency_type,
                edge.lag_days,
                candidate
            );
            early_start = early_start.max(candidate);
        }

        let early_finish = finish_of(early_start, task.duration_days);
        log_passes!(
            verbosity,
            "forward {}: early start {}, early finish {}",
            task_id,
            early_start,
            early_finish
        );

        timings.insert(
            task_id,
            TaskTiming {
                early_start,
                early_finish,
                late_start: 0,  // Will be filled in backward pass
                late_finish: 0, // Will be filled in backward pass
            },
        );
    }

    timings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critical_path::topo::topological_sort;
    use crate::models::{DependencyEdge, DependencyType, TaskNode};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn run(
        tasks: &[TaskNode],
        edges: &[DependencyEdge],
    ) -> FxHashMap<String, (DayOffset, DayOffset)> {
        let graph = TaskGraph::build(tasks, edges).unwrap();
        let order = topological_sort(&graph).unwrap();
        forward_pass(&graph, &order, start(), 0)
            .into_iter()
            .map(|(id, t)| (id.to_string(), (t.early_start, t.early_finish)))
            .collect()
    }

    #[test]
    fn test_same_day_handoff() {
        // A zero-lag finish-to-start lets the successor start on the day the predecessor ends
        let tasks = vec![TaskNode::new("a", 3), TaskNode::new("b", 2)];
        let edges = vec![DependencyEdge::finish_to_start("a", "b")];
        let early = run(&tasks, &edges);
        assert_eq!(early["a"], (0, 2));
        assert_eq!(early["b"], (2, 3));
    }

    #[test]
    fn test_each_dependency_type() {
        let tasks = vec![
            TaskNode::new("p", 4), // days 0..=3
            TaskNode::new("fs", 2),
            TaskNode::new("ss", 2),
            TaskNode::new("ff", 2),
            TaskNode::new("sf", 2),
        ];
        let edges = vec![
            DependencyEdge::new("p", "fs", DependencyType::FinishToStart, 1),
            DependencyEdge::new("p", "ss", DependencyType::StartToStart, 1),
            DependencyEdge::new("p", "ff", DependencyType::FinishToFinish, 1),
            DependencyEdge::new("p", "sf", DependencyType::StartToFinish, 5),
        ];
        let early = run(&tasks, &edges);
        assert_eq!(early["fs"], (4, 5));
        assert_eq!(early["ss"], (1, 2));
        assert_eq!(early["ff"], (3, 4));
        assert_eq!(early["sf"], (4, 5));
    }

    #[test]
    fn test_latest_candidate_binds() {
        // c waits for the later of a (ends day 1) and b (ends day 4)
        let tasks = vec![
            TaskNode::new("a", 2),
            TaskNode::new("b", 5),
            TaskNode::new("c", 1),
        ];
        let edges = vec![
            DependencyEdge::finish_to_start("a", "c"),
            DependencyEdge::finish_to_start("b", "c"),
        ];
        let early = run(&tasks, &edges);
        assert_eq!(early["c"], (4, 4));
    }

    #[test]
    fn test_planned_start_is_lower_bound() {
        let planned = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let tasks = vec![
            TaskNode::new("a", 2),
            TaskNode::new("b", 1).with_planned_start(planned),
        ];
        let edges = vec![DependencyEdge::finish_to_start("a", "b")];
        let early = run(&tasks, &edges);
        assert_eq!(early["b"], (9, 9));
    }

    #[test]
    fn test_dependency_overrides_early_planned_start() {
        let planned = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let tasks = vec![
            TaskNode::new("a", 5),
            TaskNode::new("b", 1).with_planned_start(planned),
        ];
        let edges = vec![DependencyEdge::finish_to_start("a", "b")];
        let early = run(&tasks, &edges);
        assert_eq!(early["b"], (4, 4));
    }

    #[test]
    fn test_negative_lag_never_precedes_base() {
        // A lead can pull the candidate before the project start; the base still holds
        let tasks = vec![TaskNode::new("a", 2), TaskNode::new("b", 1)];
        let edges = vec![DependencyEdge::new("a", "b", DependencyType::FinishToStart, -5)];
        let early = run(&tasks, &edges);
        assert_eq!(early["b"], (0, 0));
    }
}
