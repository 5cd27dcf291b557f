//! Interactive wizard (`nec` / `nec wizard`)

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context as _, Result};
use nec_projects::{project_wizard, ProjectSpec, WizardOutcome};

use super::Context;
use crate::banner;
use crate::prompt::TerminalPrompter;

/// Exit status when the user picks "Exit"
pub const EXIT_STATUS: u8 = 1;

pub async fn run(ctx: &Context) -> Result<ExitCode> {
    if ctx.show_banner {
        let duration = Duration::from_millis(ctx.config.display.banner_duration_ms);
        if let Err(e) = banner::play(duration).await {
            tracing::debug!("Banner failed: {}", e);
        }
    }

    let wizard = project_wizard(&ctx.base_dir)?;
    let mut prompter = TerminalPrompter;
    let outcome = wizard.run(&mut prompter).context("Wizard aborted")?;

    let answers = match outcome {
        WizardOutcome::Exit => return Ok(exit(ctx).await),
        WizardOutcome::Completed(answers) => answers,
    };

    let spec = ProjectSpec::from_answers(&answers)?;
    tracing::debug!("Project spec: {:?}", spec);
    super::create_project(ctx, &spec).await
}

/// Acknowledge the exit choice and hand back the exit status
async fn exit(ctx: &Context) -> ExitCode {
    println!("\nExiting...");
    tokio::time::sleep(Duration::from_millis(ctx.config.exit.delay_ms)).await;
    ExitCode::from(EXIT_STATUS)
}
