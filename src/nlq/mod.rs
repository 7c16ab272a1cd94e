//! Natural Language Querying (NLQ)
//!
//! Maps free-text questions about connections onto the analytics layer.
//! Recognition is pattern based and closed: every supported form is a
//! variant of [`Question`].

pub mod question;

use crate::query::PathAnalytics;
use thiserror::Error;
use tracing::debug;

pub use question::{normalize, Answer, Question};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NlqError {
    #[error("The received text is not a recognized question: '{0}'")]
    Unrecognized(String),
    #[error("Invalid number '{0}' in question")]
    InvalidNumber(String),
    #[error("Question pattern failed to compile: {0}")]
    Pattern(String),
}

pub type NlqResult<T> = Result<T, NlqError>;

/// Parses questions and answers them against one graph
pub struct QuestionEvaluator<'a> {
    analytics: PathAnalytics<'a>,
}

impl<'a> QuestionEvaluator<'a> {
    pub fn new(analytics: PathAnalytics<'a>) -> Self {
        Self { analytics }
    }

    pub fn analytics(&self) -> &PathAnalytics<'a> {
        &self.analytics
    }

    pub fn evaluate(&self, text: &str) -> NlqResult<Answer> {
        let question = Question::parse(text)?;
        debug!("Evaluating {:?}", question);
        Ok(question.answer(&self.analytics))
    }
}
