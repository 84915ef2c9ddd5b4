//! Core data types for the scheduling engine.

use chrono::NaiveDate;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

// Note: We use std HashMap here for PyO3 interface compatibility

/// Relationship between a predecessor and a successor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DependencyType {
    /// Successor starts once the predecessor finishes.
    #[default]
    FinishToStart,
    /// Successor starts once the predecessor starts.
    StartToStart,
    /// Successor finishes once the predecessor finishes.
    FinishToFinish,
    /// Successor finishes once the predecessor starts.
    StartToFinish,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FinishToStart => "finish_to_start",
            Self::StartToStart => "start_to_start",
            Self::FinishToFinish => "finish_to_finish",
            Self::StartToFinish => "start_to_finish",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finish_to_start" | "fs" => Ok(Self::FinishToStart),
            "start_to_start" | "ss" => Ok(Self::StartToStart),
            "finish_to_finish" | "ff" => Ok(Self::FinishToFinish),
            "start_to_finish" | "sf" => Ok(Self::StartToFinish),
            _ => Err(ScheduleError::UnknownDependencyType(s.to_string())),
        }
    }
}

/// Kind of date constraint attached to a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    #[default]
    AsSoonAsPossible,
    MustStartOn,
    MustFinishOn,
    StartNoEarlierThan,
    StartNoLaterThan,
    FinishNoEarlierThan,
    FinishNoLaterThan,
}

impl ConstraintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsSoonAsPossible => "as_soon_as_possible",
            Self::MustStartOn => "must_start_on",
            Self::MustFinishOn => "must_finish_on",
            Self::StartNoEarlierThan => "start_no_earlier_than",
            Self::StartNoLaterThan => "start_no_later_than",
            Self::FinishNoEarlierThan => "finish_no_earlier_than",
            Self::FinishNoLaterThan => "finish_no_later_than",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "as_soon_as_possible" | "asap" => Ok(Self::AsSoonAsPossible),
            "must_start_on" => Ok(Self::MustStartOn),
            "must_finish_on" => Ok(Self::MustFinishOn),
            "start_no_earlier_than" => Ok(Self::StartNoEarlierThan),
            "start_no_later_than" => Ok(Self::StartNoLaterThan),
            "finish_no_earlier_than" => Ok(Self::FinishNoEarlierThan),
            "finish_no_later_than" => Ok(Self::FinishNoLaterThan),
            _ => Err(ScheduleError::UnknownConstraintKind(s.to_string())),
        }
    }
}

/// A date constraint on a task. Checked after scheduling, never enforced by the passes.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateConstraint {
    pub kind: ConstraintKind,
    #[pyo3(get, set)]
    pub date: NaiveDate,
}

impl DateConstraint {
    pub fn new(kind: ConstraintKind, date: NaiveDate) -> Self {
        Self { kind, date }
    }
}

#[pymethods]
impl DateConstraint {
    #[new]
    fn py_new(kind: &str, date: NaiveDate) -> PyResult<Self> {
        let kind = kind
            .parse()
            .map_err(|e: ScheduleError| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(Self { kind, date })
    }

    #[getter(kind)]
    fn py_kind(&self) -> &'static str {
        self.kind.as_str()
    }

    fn __repr__(&self) -> String {
        format!("DateConstraint(kind={:?}, date={})", self.kind.as_str(), self.date)
    }
}

/// A task to be scheduled.
#[pyclass]
#[derive(Clone, Debug)]
pub struct TaskNode {
    #[pyo3(get, set)]
    pub task_id: String,
    /// Whole days, at least 1. Milestones are modeled as 1-day tasks.
    #[pyo3(get, set)]
    pub duration_days: u32,
    /// Lower bound for the early start; the project start date when absent.
    #[pyo3(get, set)]
    pub planned_start_date: Option<NaiveDate>,
    #[pyo3(get, set)]
    pub constraint: Option<DateConstraint>,
}

impl TaskNode {
    pub fn new(task_id: impl Into<String>, duration_days: u32) -> Self {
        Self {
            task_id: task_id.into(),
            duration_days,
            planned_start_date: None,
            constraint: None,
        }
    }

    pub fn with_planned_start(mut self, date: NaiveDate) -> Self {
        self.planned_start_date = Some(date);
        self
    }

    pub fn with_constraint(mut self, kind: ConstraintKind, date: NaiveDate) -> Self {
        self.constraint = Some(DateConstraint::new(kind, date));
        self
    }
}

#[pymethods]
impl TaskNode {
    #[new]
    #[pyo3(signature = (task_id, duration_days, planned_start_date=None, constraint=None))]
    fn py_new(
        task_id: String,
        duration_days: u32,
        planned_start_date: Option<NaiveDate>,
        constraint: Option<DateConstraint>,
    ) -> Self {
        Self {
            task_id,
            duration_days,
            planned_start_date,
            constraint,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskNode(task_id={:?}, duration_days={}, planned_start_date={:?})",
            self.task_id, self.duration_days, self.planned_start_date
        )
    }
}

/// A typed, lagged dependency between two tasks.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyEdge {
    #[pyo3(get, set)]
    pub predecessor_id: String,
    #[pyo3(get, set)]
    pub successor_id: String,
    pub dependency_type: DependencyType,
    /// Positive delays the successor, negative lets it overlap (lead).
    #[pyo3(get, set)]
    pub lag_days: i32,
}

impl DependencyEdge {
    pub fn new(
        predecessor_id: impl Into<String>,
        successor_id: impl Into<String>,
        dependency_type: DependencyType,
        lag_days: i32,
    ) -> Self {
        Self {
            predecessor_id: predecessor_id.into(),
            successor_id: successor_id.into(),
            dependency_type,
            lag_days,
        }
    }

    /// Finish-to-start edge with no lag.
    pub fn finish_to_start(
        predecessor_id: impl Into<String>,
        successor_id: impl Into<String>,
    ) -> Self {
        Self::new(predecessor_id, successor_id, DependencyType::FinishToStart, 0)
    }
}

#[pymethods]
impl DependencyEdge {
    #[new]
    #[pyo3(signature = (
        predecessor_id,
        successor_id,
        dependency_type="finish_to_start",
        lag_days=0
    ))]
    fn py_new(
        predecessor_id: String,
        successor_id: String,
        dependency_type: &str,
        lag_days: i32,
    ) -> PyResult<Self> {
        let dependency_type = dependency_type
            .parse()
            .map_err(|e: ScheduleError| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            predecessor_id,
            successor_id,
            dependency_type,
            lag_days,
        })
    }

    #[getter(dependency_type)]
    fn py_dependency_type(&self) -> &'static str {
        self.dependency_type.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "DependencyEdge({:?} -> {:?}, type={}, lag_days={})",
            self.predecessor_id, self.successor_id, self.dependency_type, self.lag_days
        )
    }
}

/// Computed schedule for a single task. Dates are inclusive: a 1-day task finishes on its start.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskScheduleResult {
    #[pyo3(get)]
    pub task_id: String,
    #[pyo3(get)]
    pub early_start: NaiveDate,
    #[pyo3(get)]
    pub early_finish: NaiveDate,
    #[pyo3(get)]
    pub late_start: NaiveDate,
    #[pyo3(get)]
    pub late_finish: NaiveDate,
    #[pyo3(get)]
    pub total_slack_days: i64,
    /// Days the task can slip without moving any successor's early start.
    #[pyo3(get)]
    pub free_slack_days: i64,
    #[pyo3(get)]
    pub is_critical: bool,
}

#[pymethods]
impl TaskScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "TaskScheduleResult(task_id={:?}, early={}..{}, late={}..{}, slack={}, critical={})",
            self.task_id,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.total_slack_days,
            self.is_critical
        )
    }
}

/// A date constraint that the computed early dates do not satisfy.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintViolation {
    #[pyo3(get)]
    pub task_id: String,
    pub kind: ConstraintKind,
    #[pyo3(get)]
    pub constraint_date: NaiveDate,
    /// The early start or early finish the constraint was checked against.
    #[pyo3(get)]
    pub actual_date: NaiveDate,
    /// `actual_date - constraint_date`; positive when the task is late.
    #[pyo3(get)]
    pub days_off: i64,
}

#[pymethods]
impl ConstraintViolation {
    #[getter(kind)]
    fn py_kind(&self) -> &'static str {
        self.kind.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "ConstraintViolation(task_id={:?}, kind={}, constraint={}, actual={})",
            self.task_id, self.kind, self.constraint_date, self.actual_date
        )
    }
}

/// Full output of one schedule computation.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct ScheduleResult {
    #[pyo3(get)]
    pub schedules: HashMap<String, TaskScheduleResult>,
    /// Zero-slack tasks, in topological order.
    #[pyo3(get)]
    pub critical_path_task_ids: Vec<String>,
    /// Days from the project start to the latest early finish, inclusive.
    #[pyo3(get)]
    pub critical_path_duration_days: i64,
    /// Latest early finish over all tasks; `None` when there are no tasks.
    #[pyo3(get)]
    pub project_finish: Option<NaiveDate>,
    /// One chain of critical tasks linked by driving dependencies, first to last.
    #[pyo3(get)]
    pub critical_chain: Vec<String>,
    #[pyo3(get)]
    pub constraint_violations: Vec<ConstraintViolation>,
}

impl ScheduleResult {
    pub fn get(&self, task_id: &str) -> Option<&TaskScheduleResult> {
        self.schedules.get(task_id)
    }
}

#[pymethods]
impl ScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(tasks={}, critical={}, duration_days={})",
            self.schedules.len(),
            self.critical_path_task_ids.len(),
            self.critical_path_duration_days
        )
    }
}
