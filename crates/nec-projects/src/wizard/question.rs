//! Question definitions and the answers they produce

use std::collections::BTreeMap;
use std::fmt;

/// Visibility predicate evaluated against answers collected so far
pub type VisibilityFn = Box<dyn Fn(&AnswerSet) -> bool + Send + Sync>;

/// Validator for free-text input; `Err` carries the message shown to the user
pub type ValidatorFn = Box<dyn Fn(&str) -> std::result::Result<(), String> + Send + Sync>;

/// How a question is asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one of an ordered list of choices
    Select { choices: Vec<String> },
    /// Free-text input
    Input,
    /// Yes/no
    Confirm,
}

/// A single answer value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free-text input or the label of the selected choice
    Text(String),
    /// Yes/no answer
    Bool(bool),
}

impl Answer {
    /// Text value, if this is a text answer
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    /// Boolean value, if this is a yes/no answer
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(true) => f.write_str("yes"),
            Self::Bool(false) => f.write_str("no"),
        }
    }
}

/// Answers keyed by question key
///
/// Skipped questions have no entry. Only the runner inserts, so a set handed
/// back from a finished session is read-only to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, answer: Answer) {
        self.answers.insert(key.into(), answer);
    }

    /// Raw answer for a key
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.answers.get(key)
    }

    /// Text answer for a key
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Answer::as_text)
    }

    /// Yes/no answer for a key; absent or non-boolean reads as `false`
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Answer::as_bool).unwrap_or(false)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate answers in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, Answer)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, answer) in iter {
            set.insert(key, answer);
        }
        set
    }
}

/// One step of the wizard
///
/// Built with the constructor for its kind plus builder methods; immutable
/// once handed to a [`Runner`](super::Runner).
pub struct Question {
    key: String,
    prompt: String,
    kind: QuestionKind,
    default: Option<Answer>,
    visible: Option<VisibilityFn>,
    validator: Option<ValidatorFn>,
    exit_value: Option<String>,
}

impl Question {
    fn new(key: impl Into<String>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            kind,
            default: None,
            visible: None,
            validator: None,
            exit_value: None,
        }
    }

    /// Single-choice question; the first choice is the default
    pub fn select<I, S>(key: impl Into<String>, prompt: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        let default = choices.first().cloned().map(Answer::Text);
        let mut question = Self::new(key, prompt, QuestionKind::Select { choices });
        question.default = default;
        question
    }

    /// Free-text question
    pub fn input(key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(key, prompt, QuestionKind::Input)
    }

    /// Yes/no question
    pub fn confirm(key: impl Into<String>, prompt: impl Into<String>, default: bool) -> Self {
        let mut question = Self::new(key, prompt, QuestionKind::Confirm);
        question.default = Some(Answer::Bool(default));
        question
    }

    /// Default value offered to the user
    pub fn with_default(mut self, default: Answer) -> Self {
        self.default = Some(default);
        self
    }

    /// Only ask when `predicate` holds for the answers gathered so far
    pub fn when(mut self, predicate: impl Fn(&AnswerSet) -> bool + Send + Sync + 'static) -> Self {
        self.visible = Some(Box::new(predicate));
        self
    }

    /// Validate free-text input before accepting it
    pub fn validate(
        mut self,
        validator: impl Fn(&str) -> std::result::Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Selecting `value` ends the session with an exit intent
    pub fn exits_on(mut self, value: impl Into<String>) -> Self {
        self.exit_value = Some(value.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn default_answer(&self) -> Option<&Answer> {
        self.default.as_ref()
    }

    /// Whether this question should be asked given the answers so far
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.visible.as_ref().map_or(true, |f| f(answers))
    }

    /// Run the validator; questions without one accept anything
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        match &self.validator {
            Some(f) => f(value),
            None => Ok(()),
        }
    }

    /// Whether `answer` is this question's exit sentinel
    pub fn is_exit(&self, answer: &Answer) -> bool {
        matches!(
            (&self.exit_value, answer),
            (Some(exit), Answer::Text(chosen)) if exit == chosen
        )
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("key", &self.key)
            .field("prompt", &self.prompt)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .field("conditional", &self.visible.is_some())
            .field("validated", &self.validator.is_some())
            .field("exit_value", &self.exit_value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_to_false_when_absent() {
        let answers: AnswerSet = [("useGit", Answer::Bool(true))].into_iter().collect();
        assert!(answers.flag("useGit"));
        assert!(!answers.flag("useNode"));
        assert!(!answers.contains("useNode"));
    }

    #[test]
    fn test_text_ignores_bool_answers() {
        let answers: AnswerSet = [
            ("projectName", Answer::Text("demo".into())),
            ("useGit", Answer::Bool(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(answers.text("projectName"), Some("demo"));
        assert_eq!(answers.text("useGit"), None);
        assert!(!answers.flag("projectName"));
    }

    #[test]
    fn test_select_defaults_to_first_choice() {
        let q = Question::select("entry", "What?", ["Create", "Exit"]);
        assert_eq!(q.default_answer(), Some(&Answer::Text("Create".into())));
    }

    #[test]
    fn test_exit_sentinel_only_matches_exact_text() {
        let q = Question::select("entry", "What?", ["Create", "Exit"]).exits_on("Exit");
        assert!(q.is_exit(&Answer::Text("Exit".into())));
        assert!(!q.is_exit(&Answer::Text("exit".into())));
        assert!(!q.is_exit(&Answer::Bool(true)));

        let plain = Question::select("entry", "What?", ["Create", "Exit"]);
        assert!(!plain.is_exit(&Answer::Text("Exit".into())));
    }

    #[test]
    fn test_unconditional_question_is_visible() {
        let q = Question::confirm("useGit", "Git?", true);
        assert!(q.is_visible(&AnswerSet::new()));
    }

    #[test]
    fn test_validator_message_is_returned() {
        let q = Question::input("projectName", "Name?").validate(|v| {
            if v.is_empty() {
                Err("empty".to_string())
            } else {
                Ok(())
            }
        });
        assert_eq!(q.check(""), Err("empty".to_string()));
        assert_eq!(q.check("x"), Ok(()));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Bool(true).to_string(), "yes");
        assert_eq!(Answer::Text("demo".into()).to_string(), "demo");
    }
}
