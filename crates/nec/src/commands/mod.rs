//! Command handlers

pub mod new;
pub mod templates;
pub mod wizard;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use camino::Utf8PathBuf;
use nec_core::RuntimeConfig;
use nec_projects::{
    MaterializeOptions, MaterializeReport, Materializer, ProjectSpec, Step, StepOutcome,
    SystemRunner,
};

use crate::output;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub config: RuntimeConfig,
    /// Directory new projects are created in
    pub base_dir: Utf8PathBuf,
    pub show_banner: bool,
}

impl Context {
    /// Resolve the base directory from `--directory` or the process cwd
    pub fn new(
        config: RuntimeConfig,
        directory: Option<Utf8PathBuf>,
        no_banner: bool,
    ) -> Result<Self> {
        let base_dir = match directory {
            Some(dir) => dir,
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                Utf8PathBuf::from_path_buf(cwd).map_err(|p| {
                    anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display())
                })?
            }
        };
        if !base_dir.is_dir() {
            anyhow::bail!("Directory does not exist: {}", base_dir);
        }

        let show_banner = config.display.banner && !no_banner;
        Ok(Self {
            config,
            base_dir,
            show_banner,
        })
    }
}

/// Run the materializer with terminal progress and print a summary
///
/// Exit status is failure when any external step failed.
pub(crate) async fn create_project(ctx: &Context, spec: &ProjectSpec) -> Result<ExitCode> {
    output::header(&format!("Creating project '{}'", spec.name));

    let materializer = Materializer::new(SystemRunner, ctx.base_dir.clone())
        .with_options(MaterializeOptions::from(&ctx.config))
        .with_observer(output::StepSpinner::new());

    let report = materializer
        .materialize(spec)
        .await
        .with_context(|| format!("Could not create project '{}'", spec.name))?;

    Ok(print_summary(spec, &report))
}

fn print_summary(spec: &ProjectSpec, report: &MaterializeReport) -> ExitCode {
    if spec.use_template {
        if let Some(StepOutcome::Skipped(reason)) =
            report.step(Step::Template).map(|s| &s.outcome)
        {
            output::warning(&format!("Template skipped: {}", reason));
        }
    }

    println!();
    if report.has_failures() {
        output::warning(&format!(
            "Project '{}' created with {} failed step(s)",
            spec.name,
            report.failures().count()
        ));
        output::kv("Location", report.project_dir.as_str());
        return ExitCode::FAILURE;
    }

    output::success(&format!("Project '{}' created successfully", spec.name));
    output::kv("Location", report.project_dir.as_str());
    println!();
    output::info("Next steps:");
    println!("   cd {}", spec.name);
    ExitCode::SUCCESS
}
