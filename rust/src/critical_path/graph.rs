//! Dependency graph assembly from flat task and edge lists.

use rustc_hash::FxHashMap;

use crate::error::ScheduleError;
use crate::models::{DependencyEdge, TaskNode};

/// Adjacency view over one project's tasks and dependencies.
///
/// Borrowed from the caller's input and discarded after a single computation.
#[derive(Debug)]
pub struct TaskGraph<'a> {
    /// Task ID -> task.
    tasks: FxHashMap<&'a str, &'a TaskNode>,
    /// Task IDs in input order (used to keep outputs deterministic).
    task_order: Vec<&'a str>,
    /// Predecessor ID -> outgoing edges, in input order.
    outgoing: FxHashMap<&'a str, Vec<&'a DependencyEdge>>,
    /// Successor ID -> incoming edges, in input order.
    incoming: FxHashMap<&'a str, Vec<&'a DependencyEdge>>,
    /// Number of incoming edges per task (0 for roots).
    in_degree: FxHashMap<&'a str, usize>,
}

impl<'a> TaskGraph<'a> {
    /// Build the graph.
    ///
    /// Fails with `MissingTask` if an edge references a task that is not in `tasks`.
    pub fn build(
        tasks: &'a [TaskNode],
        edges: &'a [DependencyEdge],
    ) -> Result<Self, ScheduleError> {
        let n = tasks.len();
        let mut task_map: FxHashMap<&str, &TaskNode> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut task_order = Vec::with_capacity(n);
        let mut in_degree: FxHashMap<&str, usize> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());

        for task in tasks {
            let id = task.task_id.as_str();
            task_map.insert(id, task);
            task_order.push(id);
            in_degree.insert(id, 0);
        }

        let mut outgoing: FxHashMap<&str, Vec<&DependencyEdge>> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut incoming: FxHashMap<&str, Vec<&DependencyEdge>> =
            FxHashMap::with_capacity_and_hasher(n, Default::default());

        for edge in edges {
            for endpoint in [&edge.predecessor_id, &edge.successor_id] {
                if !task_map.contains_key(endpoint.as_str()) {
                    return Err(ScheduleError::MissingTask {
                        task_id: endpoint.clone(),
                        predecessor_id: edge.predecessor_id.clone(),
                        successor_id: edge.successor_id.clone(),
                    });
                }
            }

            outgoing
                .entry(edge.predecessor_id.as_str())
                .or_default()
                .push(edge);
            incoming
                .entry(edge.successor_id.as_str())
                .or_default()
                .push(edge);
            if let Some(degree) = in_degree.get_mut(edge.successor_id.as_str()) {
                *degree += 1;
            }
        }

        Ok(Self {
            tasks: task_map,
            task_order,
            outgoing,
            incoming,
            in_degree,
        })
    }

    pub fn task(&self, task_id: &str) -> Option<&'a TaskNode> {
        self.tasks.get(task_id).copied()
    }

    /// Task IDs in the order they were supplied.
    pub fn task_ids(&self) -> &[&'a str] {
        &self.task_order
    }

    pub fn outgoing(&self, task_id: &str) -> &[&'a DependencyEdge] {
        self.outgoing.get(task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn incoming(&self, task_id: &str) -> &[&'a DependencyEdge] {
        self.incoming.get(task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn in_degree(&self, task_id: &str) -> usize {
        self.in_degree.get(task_id).copied().unwrap_or(0)
    }

    /// A sink has no outgoing dependencies.
    pub fn is_sink(&self, task_id: &str) -> bool {
        self.outgoing(task_id).is_empty()
    }

    pub fn len(&self) -> usize {
        self.task_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DependencyType;

    #[test]
    fn test_adjacency_and_in_degree() {
        let tasks = vec![
            TaskNode::new("a", 1),
            TaskNode::new("b", 2),
            TaskNode::new("c", 3),
        ];
        let edges = vec![
            DependencyEdge::finish_to_start("a", "b"),
            DependencyEdge::new("a", "c", DependencyType::StartToStart, 2),
            DependencyEdge::finish_to_start("b", "c"),
        ];
        let graph = TaskGraph::build(&tasks, &edges).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.task_ids(), &["a", "b", "c"]);
        assert_eq!(graph.in_degree("a"), 0);
        assert_eq!(graph.in_degree("b"), 1);
        assert_eq!(graph.in_degree("c"), 2);

        let out_a: Vec<&str> = graph
            .outgoing("a")
            .iter()
            .map(|e| e.successor_id.as_str())
            .collect();
        assert_eq!(out_a, vec!["b", "c"]);

        let in_c: Vec<&str> = graph
            .incoming("c")
            .iter()
            .map(|e| e.predecessor_id.as_str())
            .collect();
        assert_eq!(in_c, vec!["a", "b"]);

        assert!(graph.is_sink("c"));
        assert!(!graph.is_sink("a"));
        assert!(graph.incoming("a").is_empty());
    }

    #[test]
    fn test_missing_successor() {
        let tasks = vec![TaskNode::new("a", 1)];
        let edges = vec![DependencyEdge::finish_to_start("a", "ghost")];
        let err = TaskGraph::build(&tasks, &edges).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::MissingTask {
                task_id: "ghost".to_string(),
                predecessor_id: "a".to_string(),
                successor_id: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_predecessor() {
        let tasks = vec![TaskNode::new("b", 1)];
        let edges = vec![DependencyEdge::finish_to_start("ghost", "b")];
        let err = TaskGraph::build(&tasks, &edges).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingTask { task_id, .. } if task_id == "ghost"));
    }

    #[test]
    fn test_empty_graph() {
        let graph = TaskGraph::build(&[], &[]).unwrap();
        assert!(graph.is_empty());
        assert!(graph.task("a").is_none());
    }
}
