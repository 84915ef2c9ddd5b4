//! Critical Path Method scheduling.
//!
//! Computes early/late dates, slack and the critical path of a project from a
//! flat list of tasks and typed, lagged dependencies. The pipeline is:
//! graph assembly, topological sort, forward pass, backward pass, resolution.

mod backward;
mod constraints;
mod engine;
mod forward;
mod graph;
mod resolver;
mod topo;
mod types;

pub use backward::{backward_pass, project_finish};
pub use constraints::check_constraints;
pub use engine::{compute, compute_with_config};
pub use forward::forward_pass;
pub use graph::TaskGraph;
pub use resolver::resolve_critical_path;
pub use topo::topological_sort;
pub use types::{backward_candidate, forward_candidate, DayOffset, TaskTiming};
