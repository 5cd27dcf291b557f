//! Core types for project creation

use crate::error::{Error, Result};
use crate::templates::PackageManager;
use crate::wizard::{keys, AnswerSet};

/// What to create, derived once from a finished wizard session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    /// Directory name, created under the base directory
    pub name: String,
    /// Run `git init` in the new directory
    pub use_version_control: bool,
    /// Set up a Node.js package (manifest or template)
    pub use_package_manager: bool,
    /// Use yarn instead of npm
    pub use_alternate_package_manager: bool,
    /// Scaffold from a framework template instead of a bare manifest
    pub use_template: bool,
    /// Template label, slug, or alias; resolved when materializing
    pub template_id: Option<String>,
}

impl ProjectSpec {
    /// Bare project: directory only
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_version_control: false,
            use_package_manager: false,
            use_alternate_package_manager: false,
            use_template: false,
            template_id: None,
        }
    }

    /// Derive a spec from wizard answers
    ///
    /// Package manager options only count when Node.js was requested, and the
    /// template only when templating was requested.
    pub fn from_answers(answers: &AnswerSet) -> Result<Self> {
        let name = answers
            .text(keys::PROJECT_NAME)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::missing_answer(keys::PROJECT_NAME))?;

        let use_package_manager = answers.flag(keys::USE_NODE);
        let use_template = use_package_manager && answers.flag(keys::USE_TEMPLATE);

        let template_id = if use_template {
            Some(
                answers
                    .text(keys::TEMPLATE)
                    .ok_or_else(|| Error::missing_answer(keys::TEMPLATE))?
                    .to_string(),
            )
        } else {
            None
        };

        Ok(Self {
            name: name.to_string(),
            use_version_control: answers.flag(keys::USE_GIT),
            use_package_manager,
            use_alternate_package_manager: use_package_manager && answers.flag(keys::USE_YARN),
            use_template,
            template_id,
        })
    }

    /// Package manager for steps that need one
    pub fn package_manager(&self) -> PackageManager {
        PackageManager::select(self.use_alternate_package_manager)
    }
}
