//! Framework templates and package managers
//!
//! Each template variant maps to exactly one scaffolding command per
//! package manager.

use std::fmt;

use crate::error::{Error, Result};
use crate::process::ToolCommand;

/// Package manager used for manifest creation and scaffolding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// `Yarn` when the alternate manager was requested, otherwise `Npm`
    pub fn select(use_alternate: bool) -> Self {
        if use_alternate {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Command that writes a default package.json
    pub fn init_command(&self) -> ToolCommand {
        ToolCommand::new(self.as_str()).args(["init", "-y"])
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Framework scaffolding template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// React via create-react-app, JavaScript
    ReactJavascript,
    /// React via create-react-app, TypeScript
    ReactTypescript,
    /// Next.js via create-next-app, JavaScript
    NextJavascript,
    /// Next.js via create-next-app, TypeScript
    NextTypescript,
}

const ALL_TEMPLATES: [Template; 4] = [
    Template::ReactJavascript,
    Template::ReactTypescript,
    Template::NextJavascript,
    Template::NextTypescript,
];

impl Template {
    /// All templates in menu order
    pub fn all() -> &'static [Template] {
        &ALL_TEMPLATES
    }

    /// Label shown in the wizard
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReactJavascript => "React (JavaScript)",
            Self::ReactTypescript => "React (TypeScript)",
            Self::NextJavascript => "Next.js (JavaScript)",
            Self::NextTypescript => "Next.js (TypeScript)",
        }
    }

    /// Short identifier for the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ReactJavascript => "react",
            Self::ReactTypescript => "react-ts",
            Self::NextJavascript => "next",
            Self::NextTypescript => "next-ts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ReactJavascript => "Single-page React app (create-react-app)",
            Self::ReactTypescript => "Single-page React app with TypeScript (create-react-app)",
            Self::NextJavascript => "Next.js app (create-next-app)",
            Self::NextTypescript => "Next.js app with TypeScript (create-next-app)",
        }
    }

    /// Extra accepted spellings besides label and slug
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::ReactJavascript => &["react-js", "cra", "react-javascript"],
            Self::ReactTypescript => &["react-typescript", "cra-ts"],
            Self::NextJavascript => &["next-js", "nextjs", "next-javascript"],
            Self::NextTypescript => &["next-typescript", "nextjs-ts"],
        }
    }

    /// Match a label, slug, or alias, ignoring case
    pub fn resolve(id: &str) -> Option<Self> {
        let wanted = id.trim().to_lowercase();
        Self::all().iter().copied().find(|t| {
            t.label().to_lowercase() == wanted
                || t.slug() == wanted
                || t.aliases().iter().any(|a| *a == wanted)
        })
    }

    /// Like [`Template::resolve`] but reports what is available on failure
    pub fn parse(id: &str) -> Result<Self> {
        Self::resolve(id).ok_or_else(|| {
            let available = Self::all()
                .iter()
                .map(|t| t.slug())
                .collect::<Vec<_>>()
                .join(", ");
            Error::unrecognized_template(id, available)
        })
    }

    /// The scaffolding command, run inside the (empty) project directory
    pub fn scaffold_command(&self, package_manager: PackageManager) -> ToolCommand {
        let base = match (self, package_manager) {
            (Self::ReactJavascript | Self::ReactTypescript, PackageManager::Npm) => {
                ToolCommand::new("npx").args(["create-react-app", "."])
            }
            (Self::ReactJavascript | Self::ReactTypescript, PackageManager::Yarn) => {
                ToolCommand::new("yarn").args(["create", "react-app", "."])
            }
            (Self::NextJavascript | Self::NextTypescript, PackageManager::Npm) => {
                ToolCommand::new("npx").args(["create-next-app@latest", "."])
            }
            (Self::NextJavascript | Self::NextTypescript, PackageManager::Yarn) => {
                ToolCommand::new("yarn").args(["create", "next-app", "."])
            }
        };

        match self {
            Self::ReactJavascript => base,
            Self::ReactTypescript => base.args(["--template", "typescript"]),
            Self::NextJavascript | Self::NextTypescript => {
                let language = if *self == Self::NextTypescript {
                    "--ts"
                } else {
                    "--js"
                };
                let manager = match package_manager {
                    PackageManager::Npm => "--use-npm",
                    PackageManager::Yarn => "--use-yarn",
                };
                base.args([language, manager, "--yes"])
            }
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
