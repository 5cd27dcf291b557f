//! Project materializer
//!
//! Turns a [`ProjectSpec`] into a directory on disk:
//! 1. create the project directory (fatal on failure)
//! 2. `git init` inside it, if requested
//! 3. `npm init -y` / `yarn init -y`, if Node.js without a template
//! 4. the template's scaffolding command, if Node.js with a template
//!
//! Every command runs with the project directory as its working directory;
//! the process working directory is never changed. External tool failures
//! are logged and recorded, and the remaining steps still run. Nothing is
//! rolled back.

mod observer;
mod report;

pub use observer::{NoOpObserver, StepObserver};
pub use report::{MaterializeReport, Step, StepOutcome, StepReport};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::process::{CommandRunner, ToolCommand};
use crate::templates::Template;
use crate::types::ProjectSpec;

/// Tunables taken from runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Branch passed to `git init --initial-branch`
    pub default_branch: String,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self::from(&nec_core::RuntimeConfig::default())
    }
}

impl From<&nec_core::RuntimeConfig> for MaterializeOptions {
    fn from(config: &nec_core::RuntimeConfig) -> Self {
        Self {
            default_branch: config.git.default_branch.clone(),
        }
    }
}

/// Creates projects under a base directory
pub struct Materializer<R> {
    runner: R,
    base_dir: Utf8PathBuf,
    options: MaterializeOptions,
    observer: Box<dyn StepObserver>,
}

impl<R: CommandRunner> Materializer<R> {
    pub fn new(runner: R, base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            runner,
            base_dir: base_dir.into(),
            options: MaterializeOptions::default(),
            observer: Box::new(NoOpObserver),
        }
    }

    pub fn with_options(mut self, options: MaterializeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_observer(mut self, observer: impl StepObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Create the project described by `spec`
    ///
    /// # Errors
    /// - `InvalidProjectName` if the name is not a single path component
    /// - `DirectoryCreate` if the directory exists or cannot be created; no
    ///   further step runs
    ///
    /// External tool failures are not errors; they show up in the report.
    pub async fn materialize(&self, spec: &ProjectSpec) -> Result<MaterializeReport> {
        info!("Creating project '{}' in {}", spec.name, self.base_dir);

        let project_dir = self.create_directory(&spec.name).await?;
        let mut steps = vec![StepReport {
            step: Step::CreateDirectory,
            command: None,
            outcome: StepOutcome::Succeeded,
        }];
        self.observer.on_step_finish(&steps[0]);

        // Git
        if spec.use_version_control {
            let command = ToolCommand::new("git")
                .arg("init")
                .args(["--initial-branch", self.options.default_branch.as_str()]);
            steps.push(self.run_step(Step::VersionControl, command, &project_dir).await);
        } else {
            steps.push(self.skip(Step::VersionControl, "git not requested"));
        }

        let package_manager = spec.package_manager();

        // Package manifest
        if spec.use_package_manager && !spec.use_template {
            steps.push(
                self.run_step(
                    Step::PackageManifest,
                    package_manager.init_command(),
                    &project_dir,
                )
                .await,
            );
        } else if spec.use_package_manager {
            steps.push(self.skip(Step::PackageManifest, "template creates its own manifest"));
        } else {
            steps.push(self.skip(Step::PackageManifest, "Node.js not requested"));
        }

        // Template
        if spec.use_package_manager && spec.use_template {
            let id = spec.template_id.as_deref().unwrap_or_default();
            match Template::parse(id) {
                Ok(template) => {
                    debug!("Template '{}' resolved to {:?}", id, template);
                    let command = template.scaffold_command(package_manager);
                    steps.push(self.run_step(Step::Template, command, &project_dir).await);
                }
                Err(e) => {
                    warn!("{}; skipping template scaffolding", e);
                    steps.push(self.skip(Step::Template, e.to_string()));
                }
            }
        } else {
            steps.push(self.skip(Step::Template, "no template requested"));
        }

        let report = MaterializeReport { project_dir, steps };
        if report.has_failures() {
            warn!(
                "Project '{}' created with {} failed step(s)",
                spec.name,
                report.failures().count()
            );
        } else {
            info!("Project '{}' created at {}", spec.name, report.project_dir);
        }
        Ok(report)
    }

    /// Step 1; the only fatal step
    async fn create_directory(&self, name: &str) -> Result<Utf8PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::invalid_project_name(
                name,
                "must be a single directory name",
            ));
        }

        let project_dir = self.base_dir.join(name);
        self.observer.on_step_start(Step::CreateDirectory, None);

        // Non-recursive create: fails if the entry appeared after validation
        match tokio::fs::create_dir(&project_dir).await {
            Ok(()) => {
                debug!("Created {}", project_dir);
                Ok(project_dir)
            }
            Err(e) => {
                let error = Error::directory_create(project_dir.as_str(), e);
                self.observer.on_step_finish(&StepReport {
                    step: Step::CreateDirectory,
                    command: None,
                    outcome: StepOutcome::Failed(error.to_string()),
                });
                Err(error)
            }
        }
    }

    async fn run_step(&self, step: Step, command: ToolCommand, cwd: &Utf8Path) -> StepReport {
        self.observer.on_step_start(step, Some(&command));
        debug!("{}: {}", step, command);

        let outcome = match self.runner.run(&command, cwd).await {
            Ok(output) => {
                trace!("{} stdout: {}", step, output.stdout.trim_end());
                trace!("{} stderr: {}", step, output.stderr.trim_end());
                StepOutcome::Succeeded
            }
            Err(e) => {
                warn!("{} failed: {}", step, e);
                StepOutcome::Failed(e.to_string())
            }
        };

        let report = StepReport {
            step,
            command: Some(command.to_string()),
            outcome,
        };
        self.observer.on_step_finish(&report);
        report
    }

    fn skip(&self, step: Step, reason: impl Into<String>) -> StepReport {
        let reason = reason.into();
        debug!("{} skipped: {}", step, reason);
        let report = StepReport {
            step,
            command: None,
            outcome: StepOutcome::Skipped(reason),
        };
        self.observer.on_step_finish(&report);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::CommandOutput;
    use crate::testing::RecordingRunner;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn base() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (temp, path)
    }

    fn node_spec(name: &str) -> ProjectSpec {
        ProjectSpec {
            use_version_control: true,
            use_package_manager: true,
            ..ProjectSpec::new(name)
        }
    }

    #[tokio::test]
    async fn test_bare_project_runs_no_commands() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new(), dir.clone());

        let report = materializer
            .materialize(&ProjectSpec::new("plain"))
            .await
            .unwrap();

        assert!(dir.join("plain").is_dir());
        assert!(materializer.runner().calls().is_empty());
        assert!(report.commands_run().is_empty());
        assert!(!report.has_failures());
    }

    #[tokio::test]
    async fn test_commands_run_inside_project_dir() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new(), dir.clone());

        let report = materializer.materialize(&node_spec("demo")).await.unwrap();

        let calls = materializer.runner().calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, cwd)| *cwd == dir.join("demo")));
        assert_eq!(
            report.commands_run(),
            ["git init --initial-branch main", "npm init -y"]
        );
    }

    #[tokio::test]
    async fn test_configured_branch_is_used() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new(), dir).with_options(
            MaterializeOptions {
                default_branch: "trunk".to_string(),
            },
        );

        let report = materializer.materialize(&node_spec("demo")).await.unwrap();
        assert_eq!(
            report.step(Step::VersionControl).unwrap().command.as_deref(),
            Some("git init --initial-branch trunk")
        );
    }

    #[tokio::test]
    async fn test_git_failure_does_not_stop_later_steps() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new().fail_on("git"), dir);

        let report = materializer.materialize(&node_spec("demo")).await.unwrap();

        assert!(report.has_failures());
        assert!(report.step(Step::VersionControl).unwrap().failed());
        assert!(report.step(Step::PackageManifest).unwrap().succeeded());
        assert_eq!(materializer.runner().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_existing_directory_fails_before_any_command() {
        let (_temp, dir) = base();
        std::fs::create_dir(dir.join("demo")).unwrap();
        std::fs::write(dir.join("demo").join("keep.txt"), "mine").unwrap();
        let materializer = Materializer::new(RecordingRunner::new(), dir.clone());

        let result = materializer.materialize(&node_spec("demo")).await;

        assert!(matches!(result, Err(Error::DirectoryCreate { .. })));
        assert!(materializer.runner().calls().is_empty());
        assert_eq!(
            std::fs::read_to_string(dir.join("demo").join("keep.txt")).unwrap(),
            "mine"
        );
    }

    #[tokio::test]
    async fn test_path_like_name_is_rejected() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new(), dir);

        let result = materializer.materialize(&ProjectSpec::new("../escape")).await;
        assert!(matches!(result, Err(Error::InvalidProjectName { .. })));
    }

    #[tokio::test]
    async fn test_yarn_template_uses_yarn_scaffolder() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new(), dir);
        let spec = ProjectSpec {
            use_alternate_package_manager: true,
            use_template: true,
            template_id: Some("react".to_string()),
            ..node_spec("web")
        };

        let report = materializer.materialize(&spec).await.unwrap();
        assert_eq!(
            report.commands_run(),
            ["git init --initial-branch main", "yarn create react-app ."]
        );
    }

    #[tokio::test]
    async fn test_unknown_template_skips_only_that_step() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(RecordingRunner::new(), dir.clone());
        let spec = ProjectSpec {
            use_template: true,
            template_id: Some("angular".to_string()),
            ..node_spec("web")
        };

        let report = materializer.materialize(&spec).await.unwrap();

        assert!(dir.join("web").is_dir());
        assert!(!report.has_failures());
        assert!(matches!(
            &report.step(Step::Template).unwrap().outcome,
            StepOutcome::Skipped(reason) if reason.contains("angular")
        ));
        assert_eq!(report.commands_run(), ["git init --initial-branch main"]);
    }

    struct ChattyRunner;

    #[async_trait::async_trait]
    impl CommandRunner for ChattyRunner {
        async fn run(&self, _command: &ToolCommand, _cwd: &Utf8Path) -> Result<CommandOutput> {
            Ok(CommandOutput {
                stdout: "Initialized empty Git repository\n".to_string(),
                stderr: "hint: using 'main'\n".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_command_output_does_not_affect_outcome() {
        let (_temp, dir) = base();
        let materializer = Materializer::new(ChattyRunner, dir);

        let report = materializer.materialize(&node_spec("demo")).await.unwrap();

        assert!(report.step(Step::VersionControl).unwrap().succeeded());
        assert!(report.step(Step::PackageManifest).unwrap().succeeded());
    }

    struct CollectingObserver(Arc<Mutex<Vec<String>>>);

    impl StepObserver for CollectingObserver {
        fn on_step_start(&self, step: Step, _command: Option<&ToolCommand>) {
            self.0.lock().unwrap().push(format!("start {:?}", step));
        }

        fn on_step_finish(&self, report: &StepReport) {
            self.0.lock().unwrap().push(format!("finish {:?}", report.step));
        }
    }

    #[tokio::test]
    async fn test_observer_sees_steps_in_order() {
        let (_temp, dir) = base();
        let events = Arc::new(Mutex::new(Vec::new()));
        let materializer = Materializer::new(RecordingRunner::new(), dir)
            .with_observer(CollectingObserver(events.clone()));

        materializer.materialize(&node_spec("demo")).await.unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            [
                "start CreateDirectory",
                "finish CreateDirectory",
                "start VersionControl",
                "finish VersionControl",
                "start PackageManifest",
                "finish PackageManifest",
                "finish Template",
            ]
        );
    }

    #[tokio::test]
    async fn test_observer_sees_finish_when_directory_exists() {
        let (_temp, dir) = base();
        std::fs::create_dir(dir.join("demo")).unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let materializer = Materializer::new(RecordingRunner::new(), dir)
            .with_observer(CollectingObserver(events.clone()));

        let result = materializer.materialize(&ProjectSpec::new("demo")).await;

        assert!(result.is_err());
        assert_eq!(
            *events.lock().unwrap(),
            ["start CreateDirectory", "finish CreateDirectory"]
        );
    }
}
