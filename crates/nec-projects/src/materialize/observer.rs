//! Progress callbacks for project creation

use super::report::{Step, StepReport};
use crate::process::ToolCommand;

/// Receives progress while a project is materialized
///
/// The CLI uses this to drive a spinner; the library itself only logs.
pub trait StepObserver: Send + Sync {
    /// Called before a step runs its command (or filesystem action)
    fn on_step_start(&self, step: Step, command: Option<&ToolCommand>);

    /// Called once the step has a recorded outcome, including a failed
    /// directory creation, so every start has a matching finish
    fn on_step_finish(&self, report: &StepReport);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl StepObserver for NoOpObserver {
    fn on_step_start(&self, _step: Step, _command: Option<&ToolCommand>) {}

    fn on_step_finish(&self, _report: &StepReport) {}
}
