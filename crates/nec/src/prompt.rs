//! dialoguer-backed prompter for the wizard

use dialoguer::{Confirm, Input, Select};
use nec_projects::{Error, Prompter, Question, Result};

use crate::output;

/// Asks wizard questions on the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::prompt(err.to_string())
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, question: &Question, choices: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(question.prompt())
            .items(choices)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&mut self, question: &Question, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(question.prompt())
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn confirm(&mut self, question: &Question, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question.prompt())
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn reject(&mut self, _question: &Question, message: &str) {
        output::error(message);
    }
}
