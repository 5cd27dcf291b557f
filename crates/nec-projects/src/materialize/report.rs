//! What happened while materializing a project

use std::fmt;

use camino::Utf8PathBuf;

/// One step of project creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateDirectory,
    VersionControl,
    PackageManifest,
    Template,
}

impl Step {
    pub fn description(&self) -> &'static str {
        match self {
            Self::CreateDirectory => "Create project directory",
            Self::VersionControl => "Initialize git repository",
            Self::PackageManifest => "Create package manifest",
            Self::Template => "Scaffold framework template",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// The step ran and failed; later steps still ran
    Failed(String),
    /// The step did not run
    Skipped(String),
}

/// Record of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    /// Literal command line, for steps that shell out
    pub command: Option<String>,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn succeeded(&self) -> bool {
        self.outcome == StepOutcome::Succeeded
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, StepOutcome::Failed(_))
    }
}

/// Record of a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub project_dir: Utf8PathBuf,
    pub steps: Vec<StepReport>,
}

impl MaterializeReport {
    /// Whether any step failed
    pub fn has_failures(&self) -> bool {
        self.steps.iter().any(StepReport::failed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| s.failed())
    }

    pub fn step(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    /// Command lines that were actually executed, in order
    pub fn commands_run(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| !matches!(s.outcome, StepOutcome::Skipped(_)))
            .filter_map(|s| s.command.as_deref())
            .collect()
    }
}
