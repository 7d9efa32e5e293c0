//! Poll model - the sub-resource gated behind a `PrePoll` requirement.
//!
//! Questions and answers are internally tagged unions on `answer_type`,
//! matching the platform's poll wire format. Answer validation is local:
//! it never touches the network and a failed validation leaves all state
//! untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A poll attached to a Space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub pk: String,
    pub sk: String,

    pub topic: String,
    #[serde(default)]
    pub description: String,

    pub started_at: i64,
    pub ended_at: i64,

    /// Whether respondents may revise a submitted response.
    #[serde(default)]
    pub response_editable: bool,

    #[serde(default)]
    pub user_response_count: i64,

    #[serde(default)]
    pub questions: Vec<Question>,

    /// The viewer's own response, if any.
    #[serde(default)]
    pub my_response: Vec<Answer>,
}

/// One poll question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "answer_type", rename_all = "snake_case")]
pub enum Question {
    SingleChoice {
        title: String,
        #[serde(default)]
        options: Vec<String>,
        #[serde(default)]
        is_required: bool,
    },
    MultipleChoice {
        title: String,
        #[serde(default)]
        options: Vec<String>,
        #[serde(default)]
        is_required: bool,
    },
    ShortAnswer {
        title: String,
        #[serde(default)]
        is_required: bool,
    },
    Subjective {
        title: String,
        #[serde(default)]
        is_required: bool,
    },
    LinearScale {
        title: String,
        min_value: i64,
        max_value: i64,
        #[serde(default)]
        min_label: String,
        #[serde(default)]
        max_label: String,
        #[serde(default)]
        is_required: bool,
    },
}

impl Question {
    pub fn is_required(&self) -> bool {
        match self {
            Question::SingleChoice { is_required, .. }
            | Question::MultipleChoice { is_required, .. }
            | Question::ShortAnswer { is_required, .. }
            | Question::Subjective { is_required, .. }
            | Question::LinearScale { is_required, .. } => *is_required,
        }
    }
}

/// One answer, parallel to the question at the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "answer_type", rename_all = "snake_case")]
pub enum Answer {
    SingleChoice {
        #[serde(default)]
        answer: Option<i64>,
    },
    MultipleChoice {
        #[serde(default)]
        answer: Option<Vec<i64>>,
    },
    ShortAnswer {
        #[serde(default)]
        answer: Option<String>,
    },
    Subjective {
        #[serde(default)]
        answer: Option<String>,
    },
    LinearScale {
        #[serde(default)]
        answer: Option<i64>,
    },
}

impl Answer {
    /// Whether the answer carries any content.
    pub fn is_answered(&self) -> bool {
        match self {
            Answer::SingleChoice { answer } | Answer::LinearScale { answer } => answer.is_some(),
            Answer::MultipleChoice { answer } => {
                answer.as_ref().is_some_and(|a| !a.is_empty())
            }
            Answer::ShortAnswer { answer } | Answer::Subjective { answer } => {
                answer.as_ref().is_some_and(|a| !a.trim().is_empty())
            }
        }
    }

    fn matches(&self, question: &Question) -> bool {
        matches!(
            (self, question),
            (Answer::SingleChoice { .. }, Question::SingleChoice { .. })
                | (Answer::MultipleChoice { .. }, Question::MultipleChoice { .. })
                | (Answer::ShortAnswer { .. }, Question::ShortAnswer { .. })
                | (Answer::Subjective { .. }, Question::Subjective { .. })
                | (Answer::LinearScale { .. }, Question::LinearScale { .. })
        )
    }
}

/// Why a response cannot be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerValidationError {
    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    #[error("answer {index} does not match its question type")]
    TypeMismatch { index: usize },

    #[error("question {index} requires an answer")]
    MissingRequired { index: usize },
}

impl Poll {
    /// Validate a response against this poll's questions.
    ///
    /// Every answer must sit at its question's index with the matching
    /// variant, and every required question must carry a non-empty answer.
    pub fn validate_answers(&self, answers: &[Answer]) -> Result<(), AnswerValidationError> {
        if answers.len() != self.questions.len() {
            return Err(AnswerValidationError::AnswerCount {
                expected: self.questions.len(),
                got: answers.len(),
            });
        }
        for (index, (question, answer)) in self.questions.iter().zip(answers).enumerate() {
            if !answer.matches(question) {
                return Err(AnswerValidationError::TypeMismatch { index });
            }
            if question.is_required() && !answer.is_answered() {
                return Err(AnswerValidationError::MissingRequired { index });
            }
        }
        Ok(())
    }
}
