//! Interactive wizard: question model, prompt runner, and the project wizard

mod definition;
mod question;
mod runner;

pub use definition::{
    keys, project_questions, project_wizard, validate_project_name, CREATE_PROJECT, EXIT,
};
pub use question::{Answer, AnswerSet, Question, QuestionKind, ValidatorFn, VisibilityFn};
pub use runner::{Prompter, Runner, WizardOutcome, EMPTY_INPUT_MESSAGE};
