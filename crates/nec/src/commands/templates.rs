//! `nec templates` - list framework templates

use anyhow::Result;
use nec_projects::Template;
use serde::Serialize;

use crate::cli::TemplatesArgs;
use crate::output;

#[derive(Debug, Serialize)]
struct TemplateRow {
    slug: &'static str,
    label: &'static str,
    description: &'static str,
    aliases: &'static [&'static str],
}

impl From<Template> for TemplateRow {
    fn from(t: Template) -> Self {
        Self {
            slug: t.slug(),
            label: t.label(),
            description: t.description(),
            aliases: t.aliases(),
        }
    }
}

pub fn run(args: TemplatesArgs) -> Result<()> {
    let rows: Vec<TemplateRow> = Template::all().iter().copied().map(Into::into).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    output::header("Available templates");
    for row in &rows {
        println!("  {:10} {:22} {}", row.slug, row.label, row.description);
    }
    println!();
    output::info("Use with: nec new <name> --template <slug>");
    Ok(())
}
