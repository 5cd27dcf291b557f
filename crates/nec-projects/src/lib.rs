//! # nec-projects
//!
//! Project scaffolding library for the NEC CLI providing:
//! - A prompt runner with conditional questions and validated input
//! - The project creation wizard
//! - Framework template and package manager dispatch
//! - The materializer that creates the project directory and runs git,
//!   npm/yarn, and scaffolding tools inside it
//!
//! # Examples
//!
//! ## Create a project without prompting
//!
//! ```no_run
//! use nec_projects::{Materializer, ProjectSpec, SystemRunner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = ProjectSpec {
//!     use_version_control: true,
//!     use_package_manager: true,
//!     ..ProjectSpec::new("my-app")
//! };
//! let report = Materializer::new(SystemRunner, "/tmp").materialize(&spec).await?;
//! assert!(!report.has_failures());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod materialize;
pub mod process;
pub mod templates;
pub mod types;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use materialize::{
    MaterializeOptions, MaterializeReport, Materializer, Step, StepObserver, StepOutcome,
    StepReport,
};
pub use process::{CommandOutput, CommandRunner, SystemRunner, ToolCommand};
pub use templates::{PackageManager, Template};
pub use types::ProjectSpec;
pub use wizard::{project_wizard, Answer, AnswerSet, Prompter, Question, Runner, WizardOutcome};
