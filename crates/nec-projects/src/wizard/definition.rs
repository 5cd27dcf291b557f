//! The project creation wizard

use camino::{Utf8Path, Utf8PathBuf};

use super::question::Question;
use super::runner::Runner;
use crate::error::Result;
use crate::templates::Template;

/// Question keys, stable across releases
pub mod keys {
    pub const ENTRY: &str = "entry";
    pub const PROJECT_NAME: &str = "projectName";
    pub const USE_GIT: &str = "useGit";
    pub const USE_NODE: &str = "useNode";
    pub const USE_YARN: &str = "useYarn";
    pub const USE_TEMPLATE: &str = "useTemplate";
    pub const TEMPLATE: &str = "template";
}

pub const CREATE_PROJECT: &str = "Create a new project";
pub const EXIT: &str = "Exit";

/// Check a project name against `base_dir`
///
/// Returns the user-facing message on rejection.
pub fn validate_project_name(base_dir: &Utf8Path, name: &str) -> std::result::Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Project name cannot be empty.".to_string());
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err("Project name must be a single directory name.".to_string());
    }
    // symlink_metadata so a dangling symlink still counts as taken
    if base_dir.join(name).symlink_metadata().is_ok() {
        return Err(format!("A file or directory named '{}' already exists.", name));
    }
    Ok(())
}

/// Build the question list for creating a project under `base_dir`
pub fn project_questions(base_dir: &Utf8Path) -> Vec<Question> {
    let base_dir: Utf8PathBuf = base_dir.to_path_buf();

    vec![
        Question::select(keys::ENTRY, "What do you want to do?", [CREATE_PROJECT, EXIT])
            .exits_on(EXIT),
        Question::input(keys::PROJECT_NAME, "What is the name of your project?")
            .validate(move |name| validate_project_name(&base_dir, name)),
        Question::confirm(
            keys::USE_GIT,
            "Do you want to initialize a git repository?",
            true,
        ),
        Question::confirm(
            keys::USE_NODE,
            "Do you want to initialize a Node.js project?",
            true,
        ),
        Question::confirm(keys::USE_YARN, "Do you want to use yarn instead of npm?", false)
            .when(|a| a.flag(keys::USE_NODE)),
        Question::confirm(
            keys::USE_TEMPLATE,
            "Do you want to start from a framework template?",
            false,
        )
        .when(|a| a.flag(keys::USE_NODE)),
        Question::select(
            keys::TEMPLATE,
            "Which template do you want to use?",
            Template::all().iter().map(|t| t.label()),
        )
        .when(|a| a.flag(keys::USE_NODE) && a.flag(keys::USE_TEMPLATE)),
    ]
}

/// Runner for the project creation wizard
pub fn project_wizard(base_dir: &Utf8Path) -> Result<Runner> {
    Runner::new(project_questions(base_dir))
}
