//! Backward pass: latest start and finish per task.

use rustc_hash::FxHashMap;

use crate::{log_debug, log_passes};

use super::graph::TaskGraph;
use super::types::{backward_candidate, start_of, DayOffset, TaskTiming};

/// Project finish: the latest early finish over all tasks, `None` if there are none.
pub fn project_finish(timings: &FxHashMap<&str, TaskTiming>) -> Option<DayOffset> {
    timings.values().map(|t| t.early_finish).max()
}

/// Fill in late start/finish for every task, in reverse topological order.
///
/// Sinks must finish by the project finish. Any other task must finish by the
/// earliest of the candidates its successors allow, since slipping past any one
/// of them would delay that successor. No task may finish after the project
/// finish, even when a start-anchored successor would allow it.
///
/// The project-finish bound only differs from the plain successor minimum for
/// tasks whose every successor is reached through start-to-start or
/// start-to-finish links (or a lead large enough to push the candidate past the
/// project finish). Example: a 10-day task starting a 1-day task (SS, lag 0)
/// gets late finish = project finish (day 9, critical) instead of day 18 with 9
/// days of slack.
pub fn backward_pass(
    graph: &TaskGraph<'_>,
    topo_order: &[&str],
    timings: &mut FxHashMap<&str, TaskTiming>,
    project_finish: DayOffset,
    verbosity: u8,
) {
    for &task_id in topo_order.iter().rev() {
        let Some(task) = graph.task(task_id) else {
            continue;
        };

        // Successors come later in topological order, so they are already resolved
        let late_finish = if graph.is_sink(task_id) {
            project_finish
        } else {
            graph
                .outgoing(task_id)
                .iter()
                .filter_map(|edge| {
                    let succ = timings.get(edge.successor_id.as_str())?;
                    let candidate = backward_candidate(
                        edge.dependency_type,
                        edge.lag_days,
                        succ,
                        task.duration_days,
                    );
                    log_debug!(
                        verbosity,
                        "  backward {} -> {} ({}, lag {}): candidate finish {}",
                        task_id,
                        edge.successor_id,
                        edge.dependency_type,
                        edge.lag_days,
                        candidate
                    );
                    Some(candidate)
                })
                .fold(project_finish, DayOffset::min)
        };

        let late_start = start_of(late_finish, task.duration_days);
        log_passes!(
            verbosity,
            "backward {}: late start {}, late finish {}",
            task_id,
            late_start,
            late_finish
        );

        if let Some(timing) = timings.get_mut(task_id) {
            timing.late_finish = late_finish;
            timing.late_start = late_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critical_path::forward::forward_pass;
    use crate::critical_path::topo::topological_sort;
    use crate::models::{DependencyEdge, DependencyType, TaskNode};
    use chrono::NaiveDate;

    fn run(tasks: &[TaskNode], edges: &[DependencyEdge]) -> FxHashMap<String, TaskTiming> {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let graph = TaskGraph::build(tasks, edges).unwrap();
        let order = topological_sort(&graph).unwrap();
        let mut timings = forward_pass(&graph, &order, start, 0);
        let finish = project_finish(&timings).unwrap();
        backward_pass(&graph, &order, &mut timings, finish, 0);
        timings
            .into_iter()
            .map(|(id, t)| (id.to_string(), t))
            .collect()
    }

    #[test]
    fn test_project_finish_empty() {
        assert_eq!(project_finish(&FxHashMap::default()), None);
    }

    #[test]
    fn test_sinks_pinned_to_project_finish() {
        // a (5d) and b (2d) are both sinks; b may slip 3 days
        let tasks = vec![TaskNode::new("a", 5), TaskNode::new("b", 2)];
        let timings = run(&tasks, &[]);
        assert_eq!(timings["a"].late_finish, 4);
        assert_eq!(timings["a"].late_start, 0);
        assert_eq!(timings["b"].late_finish, 4);
        assert_eq!(timings["b"].late_start, 3);
    }

    #[test]
    fn test_earliest_candidate_binds() {
        // a feeds b (long) and c (short); b leaves a no room, so a's late finish follows b
        let tasks = vec![
            TaskNode::new("a", 2),
            TaskNode::new("b", 6),
            TaskNode::new("c", 1),
        ];
        let edges = vec![
            DependencyEdge::finish_to_start("a", "b"),
            DependencyEdge::finish_to_start("a", "c"),
        ];
        let timings = run(&tasks, &edges);
        // a: 0..=1, b: 1..=6, c: 1..=1, finish = 6
        assert_eq!(timings["b"].late_start, 1);
        assert_eq!(timings["c"].late_start, 6);
        assert_eq!(timings["a"].late_finish, 1);
        assert_eq!(timings["a"].late_start, 0);
    }

    #[test]
    fn test_start_to_start_backward() {
        // b may start 1 day after a starts; b is longer and drives the finish
        let tasks = vec![TaskNode::new("a", 3), TaskNode::new("b", 5)];
        let edges = vec![DependencyEdge::new("a", "b", DependencyType::StartToStart, 1)];
        let timings = run(&tasks, &edges);
        // a: 0..=2, b: 1..=5, finish = 5
        assert_eq!(timings["b"].late_start, 1);
        // a must start by b.late_start - lag = 0, so it finishes by day 2
        assert_eq!(timings["a"].late_start, 0);
        assert_eq!(timings["a"].late_finish, 2);
    }

    #[test]
    fn test_late_finish_capped_at_project_finish() {
        // a (10d) starts b (1d); the start-to-start link alone would let a finish on day 18
        let tasks = vec![TaskNode::new("a", 10), TaskNode::new("b", 1)];
        let edges = vec![DependencyEdge::new("a", "b", DependencyType::StartToStart, 0)];
        let timings = run(&tasks, &edges);
        assert_eq!(timings["a"].late_finish, 9);
        assert_eq!(timings["a"].late_start, 0);
        assert!(timings["a"].is_critical());
        assert_eq!(timings["b"].late_start, 9);
    }

    #[test]
    fn test_lead_past_project_finish_is_capped() {
        // A 4-day lead on a finish-to-finish link would otherwise let a finish on day 6
        let tasks = vec![TaskNode::new("a", 3), TaskNode::new("b", 1)];
        let edges = vec![DependencyEdge::new("a", "b", DependencyType::FinishToFinish, -4)];
        let timings = run(&tasks, &edges);
        // a: 0..=2, b: day 0 (candidate -2 loses to the project start), finish = 2
        assert_eq!(timings["b"].early_start, 0);
        assert_eq!(timings["b"].late_finish, 2);
        assert_eq!(timings["a"].late_finish, 2);
        assert!(timings["a"].is_critical());
    }

    #[test]
    fn test_finish_to_finish_backward() {
        let tasks = vec![TaskNode::new("a", 2), TaskNode::new("b", 4)];
        let edges = vec![DependencyEdge::new("a", "b", DependencyType::FinishToFinish, 2)];
        let timings = run(&tasks, &edges);
        // a: 0..=1; b must finish >= 3, so b: 0..=3; finish = 3
        assert_eq!(timings["b"].early_start, 0);
        assert_eq!(timings["b"].late_finish, 3);
        assert_eq!(timings["a"].late_finish, 1);
        assert_eq!(timings["a"].late_start, 0);
    }

    #[test]
    fn test_start_to_finish_backward() {
        let tasks = vec![TaskNode::new("a", 3), TaskNode::new("b", 2)];
        let edges = vec![DependencyEdge::new("a", "b", DependencyType::StartToFinish, 4)];
        let timings = run(&tasks, &edges);
        // a: 0..=2; b must finish >= 4, so b: 3..=4; finish = 4
        assert_eq!(timings["b"].early_start, 3);
        assert_eq!(timings["b"].late_finish, 4);
        // a must start by b.late_finish - lag = 0
        assert_eq!(timings["a"].late_start, 0);
        assert_eq!(timings["a"].late_finish, 2);
    }
}
