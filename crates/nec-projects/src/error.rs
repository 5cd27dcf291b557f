//! Error types for nec-projects

use thiserror::Error;

/// Result type alias using nec-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project name failed validation outside the interactive wizard
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// Project directory could not be created
    #[error("Failed to create project directory {path}: {source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// An external tool exited unsuccessfully
    #[error("`{command}` failed: {message}")]
    ExternalTool { command: String, message: String },

    /// Command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Template identifier did not match any known template
    #[error("Unrecognized template: {template}. Available templates: {available}")]
    UnrecognizedTemplate { template: String, available: String },

    /// Wizard finished without an answer the project needs
    #[error("Missing answer for '{key}'")]
    MissingAnswer { key: String },

    /// Two questions share a key
    #[error("Duplicate question key: {key}")]
    DuplicateQuestion { key: String },

    /// The prompt backend failed (closed terminal, interrupted input)
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a directory create error
    pub fn directory_create(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Create an external tool error
    pub fn external_tool(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create an unrecognized template error
    pub fn unrecognized_template(
        template: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self::UnrecognizedTemplate {
            template: template.into(),
            available: available.into(),
        }
    }

    /// Create a missing answer error
    pub fn missing_answer(key: impl Into<String>) -> Self {
        Self::MissingAnswer { key: key.into() }
    }

    /// Create a duplicate question error
    pub fn duplicate_question(key: impl Into<String>) -> Self {
        Self::DuplicateQuestion { key: key.into() }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }
}
