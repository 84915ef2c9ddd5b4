//! Topological ordering of the task graph.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

use crate::error::ScheduleError;

use super::graph::TaskGraph;

/// Perform topological sort of tasks using Kahn's algorithm.
///
/// Returns task IDs such that every task comes after all of its predecessors.
/// Ready tasks are taken in input order and successors in edge order, so the
/// result is deterministic for a given input.
///
/// Fails with `CyclicDependency` listing every task that could not be ordered.
pub fn topological_sort<'a>(graph: &TaskGraph<'a>) -> Result<Vec<&'a str>, ScheduleError> {
    let mut in_degree: FxHashMap<&str, usize> = graph
        .task_ids()
        .iter()
        .map(|&id| (id, graph.in_degree(id)))
        .collect();

    let mut queue: VecDeque<&'a str> = graph
        .task_ids()
        .iter()
        .copied()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut result: Vec<&'a str> = Vec::with_capacity(graph.len());

    while let Some(task_id) = queue.pop_front() {
        result.push(task_id);

        for edge in graph.outgoing(task_id) {
            let successor = edge.successor_id.as_str();
            if let Some(degree) = in_degree.get_mut(successor) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(successor);
                }
            }
        }
    }

    if result.len() < graph.len() {
        let mut task_ids: Vec<String> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(id, _)| id.to_string())
            .collect();
        task_ids.sort();
        return Err(ScheduleError::CyclicDependency { task_ids });
    }

    Ok(result)
}
