//! External command execution
//!
//! Every external tool the materializer uses (git, npm, yarn, npx) goes
//! through [`CommandRunner`] with an explicit working directory.

use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Whether any argument equals `arg`
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` inside `cwd`; a non-zero exit is an [`Error::ExternalTool`]
    async fn run(&self, command: &ToolCommand, cwd: &Utf8Path) -> Result<CommandOutput>;
}

/// Runs commands as child processes of this one
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ToolCommand, cwd: &Utf8Path) -> Result<CommandOutput> {
        let program = which::which(command.program())
            .map_err(|_| Error::command_not_found(command.program()))?;

        debug!("Running: {} (in {})", command, cwd);
        let output = Command::new(&program)
            .args(command.arguments())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let message = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                trimmed => trimmed.to_string(),
            };
            return Err(Error::external_tool(command.to_string(), message));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
