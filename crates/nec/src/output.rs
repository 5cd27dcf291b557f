//! Terminal output utilities

use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use nec_projects::{Step, StepObserver, StepOutcome, StepReport, ToolCommand};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(spinner_style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Shows a spinner while each materializer step runs, then its outcome
#[derive(Default)]
pub struct StepSpinner {
    current: Mutex<Option<ProgressBar>>,
}

impl StepSpinner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for StepSpinner {
    fn on_step_start(&self, step: Step, command: Option<&ToolCommand>) {
        let msg = match command {
            Some(cmd) => format!("{} ({})", step, cmd),
            None => format!("{}...", step),
        };
        let mut current = self.current.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(previous) = current.replace(spinner(&msg)) {
            previous.finish_and_clear();
        }
    }

    fn on_step_finish(&self, report: &StepReport) {
        if let Some(pb) = self
            .current
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take()
        {
            pb.finish_and_clear();
        }

        let label = match &report.command {
            Some(cmd) => format!("{} ({})", report.step, cmd),
            None => report.step.to_string(),
        };
        match &report.outcome {
            StepOutcome::Succeeded => success(&label),
            StepOutcome::Failed(reason) => error(&format!("{}: {}", label, reason)),
            StepOutcome::Skipped(reason) => {
                tracing::debug!("{} skipped: {}", report.step, reason);
            }
        }
    }
}
