//! Prompt sequence runner
//!
//! Walks an ordered question list, asking each visible question through a
//! [`Prompter`] and re-asking free-text questions until their validator
//! accepts the input.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::question::{Answer, AnswerSet, Question, QuestionKind};
use crate::error::{Error, Result};

/// Message shown when free-text input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "A value is required.";

/// Terminal seam for the runner
///
/// Implementations only display and collect; visibility, validation and
/// retry are the runner's job.
pub trait Prompter {
    /// Ask a single-choice question, returning the index of the chosen item
    fn select(&mut self, question: &Question, choices: &[String], default: usize) -> Result<usize>;

    /// Ask for free text
    fn input(&mut self, question: &Question, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, question: &Question, default: bool) -> Result<bool>;

    /// Show why the last answer to `question` was rejected
    fn reject(&mut self, question: &Question, message: &str);
}

/// How a wizard session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Every visible question was answered
    Completed(AnswerSet),
    /// The user chose an exit sentinel
    Exit,
}

/// Ordered question list with unique keys
#[derive(Debug)]
pub struct Runner {
    questions: Vec<Question>,
}

impl Runner {
    /// Build a runner, rejecting duplicate keys
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.key().to_string()) {
                return Err(Error::duplicate_question(question.key()));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Run the session to completion or exit
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<WizardOutcome> {
        let mut answers = AnswerSet::new();

        for question in &self.questions {
            if !question.is_visible(&answers) {
                debug!("Skipping question '{}'", question.key());
                continue;
            }

            let answer = ask(question, prompter)?;
            if question.is_exit(&answer) {
                debug!("Exit selected at '{}'", question.key());
                return Ok(WizardOutcome::Exit);
            }

            trace!("Answered '{}': {}", question.key(), answer);
            answers.insert(question.key(), answer);
        }

        Ok(WizardOutcome::Completed(answers))
    }
}

fn ask(question: &Question, prompter: &mut dyn Prompter) -> Result<Answer> {
    match question.kind() {
        QuestionKind::Select { choices } => {
            let default = question
                .default_answer()
                .and_then(Answer::as_text)
                .and_then(|d| choices.iter().position(|c| c == d))
                .unwrap_or(0);
            loop {
                let index = prompter.select(question, choices, default)?;
                let choice = choices.get(index).ok_or_else(|| {
                    Error::prompt(format!(
                        "selection {} out of range for '{}'",
                        index,
                        question.key()
                    ))
                })?;
                match question.check(choice) {
                    Ok(()) => return Ok(Answer::Text(choice.clone())),
                    Err(message) => prompter.reject(question, &message),
                }
            }
        }
        QuestionKind::Input => {
            let default = question.default_answer().and_then(Answer::as_text);
            loop {
                let raw = prompter.input(question, default)?;
                let mut value = raw.trim();
                if value.is_empty() {
                    if let Some(d) = default {
                        value = d;
                    }
                }
                if value.is_empty() {
                    prompter.reject(question, EMPTY_INPUT_MESSAGE);
                    continue;
                }
                match question.check(value) {
                    Ok(()) => return Ok(Answer::Text(value.to_string())),
                    Err(message) => prompter.reject(question, &message),
                }
            }
        }
        QuestionKind::Confirm => {
            let default = question
                .default_answer()
                .and_then(Answer::as_bool)
                .unwrap_or(false);
            Ok(Answer::Bool(prompter.confirm(question, default)?))
        }
    }
}
