//! Configuration types for the schedule engine.

use pyo3::prelude::*;

/// Configuration for a schedule computation.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=passes, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Check task date constraints against the computed early dates.
    #[pyo3(get, set)]
    pub check_constraints: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            check_constraints: true,
        }
    }
}

#[pymethods]
impl ScheduleConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, check_constraints=None))]
    fn new(verbosity: Option<u8>, check_constraints: Option<bool>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            check_constraints: check_constraints.unwrap_or(defaults.check_constraints),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleConfig(verbosity={}, check_constraints={})",
            self.verbosity, self.check_constraints
        )
    }
}
