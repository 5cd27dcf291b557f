//! Test doubles for the prompt and process seams, for unit tests
//!
//! [`ScriptedPrompter`] answers wizard questions from a fixed script and
//! [`RecordingRunner`] records commands instead of executing them.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{Error, Result};
use crate::process::{CommandOutput, CommandRunner, ToolCommand};
use crate::wizard::{Prompter, Question};

/// One scripted reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Index into the question's choices
    Select(usize),
    Input(String),
    Confirm(bool),
}

/// Prompter that replays a script
///
/// Running out of replies, or a reply of the wrong kind, is a prompt error,
/// the same as a closed terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    asked: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Keys of every question presented, including repeats after rejection
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Rejection messages shown, in order
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Replies not consumed
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, question: &Question) -> Result<Reply> {
        self.asked.push(question.key().to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| Error::prompt(format!("script exhausted at '{}'", question.key())))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, question: &Question, _choices: &[String], _default: usize) -> Result<usize> {
        match self.next(question)? {
            Reply::Select(index) => Ok(index),
            other => Err(mismatch(question, "select", &other)),
        }
    }

    fn input(&mut self, question: &Question, _default: Option<&str>) -> Result<String> {
        match self.next(question)? {
            Reply::Input(text) => Ok(text),
            other => Err(mismatch(question, "input", &other)),
        }
    }

    fn confirm(&mut self, question: &Question, _default: bool) -> Result<bool> {
        match self.next(question)? {
            Reply::Confirm(value) => Ok(value),
            other => Err(mismatch(question, "confirm", &other)),
        }
    }

    fn reject(&mut self, _question: &Question, message: &str) {
        self.rejections.push(message.to_string());
    }
}

fn mismatch(question: &Question, expected: &str, got: &Reply) -> Error {
    Error::prompt(format!(
        "expected {} reply for '{}', got {:?}",
        expected,
        question.key(),
        got
    ))
}

/// Runner that records commands and reports success
///
/// Programs named with [`RecordingRunner::fail_on`] fail with an
/// `ExternalTool` error instead.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(ToolCommand, Utf8PathBuf)>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(mut self, program: impl Into<String>) -> Self {
        self.failing.push(program.into());
        self
    }

    /// Every command received, with its working directory
    pub fn calls(&self) -> Vec<(ToolCommand, Utf8PathBuf)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Command lines received, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|(cmd, _)| cmd.to_string()).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ToolCommand, cwd: &Utf8Path) -> Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((command.clone(), cwd.to_path_buf()));

        if self.failing.iter().any(|p| p == command.program()) {
            return Err(Error::external_tool(command.to_string(), "simulated failure"));
        }
        Ok(CommandOutput::default())
    }
}
