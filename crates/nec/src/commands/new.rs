//! `nec new` - create a project from flags

use std::process::ExitCode;

use anyhow::Result;
use camino::Utf8Path;
use nec_projects::wizard::validate_project_name;
use nec_projects::{Error, ProjectSpec};

use super::Context;
use crate::cli::NewArgs;

pub async fn run(ctx: &Context, args: NewArgs) -> Result<ExitCode> {
    let spec = spec_from_args(&ctx.base_dir, args)?;
    super::create_project(ctx, &spec).await
}

/// Same name rules as the wizard; `--yarn` and `--template` imply `--node`
fn spec_from_args(base_dir: &Utf8Path, args: NewArgs) -> nec_projects::Result<ProjectSpec> {
    let name = args.name.trim().to_string();
    validate_project_name(base_dir, &name)
        .map_err(|reason| Error::invalid_project_name(&name, reason))?;

    let use_template = args.template.is_some();
    let use_package_manager = args.node || args.yarn || use_template;

    Ok(ProjectSpec {
        use_version_control: args.git,
        use_package_manager,
        use_alternate_package_manager: args.yarn,
        use_template,
        template_id: args.template,
        ..ProjectSpec::new(name)
    })
}
