//! Question session runner
//!
//! Input is line oriented: the first non-empty line holds the connections
//! table, every following non-empty line is one question. Answers are
//! written in question order, numbered from 1.

use crate::graph::{ParseError, WeightedGraphIndex};
use crate::nlq::{Answer, QuestionEvaluator};
use crate::query::{AnalyticsConfig, PathAnalytics};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input contains no connections table")]
    MissingConnections,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// How answers are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `n: question`, `n: answer`, blank line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub analytics: AnalyticsConfig,
    pub format: OutputFormat,
}

impl SessionConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }
}

#[derive(Serialize)]
struct AnswerRecord<'a> {
    index: usize,
    question: &'a str,
    answer: String,
    result: &'a Answer,
}

/// Runs one connections table and its questions
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Answer every question in `reader`, writing to `writer`.
    ///
    /// A malformed connections table is fatal. Unrecognized questions are
    /// skipped and do not take a number. Returns the number of answers
    /// written.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> SessionResult<usize> {
        let mut lines = reader.lines();

        let specification = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(SessionError::MissingConnections),
            }
        };

        let index = WeightedGraphIndex::parse(&specification)?;
        let evaluator =
            QuestionEvaluator::new(PathAnalytics::with_config(&index, self.config.analytics));

        let mut answered = 0;
        for line in lines {
            let line = line?;
            let question = line.trim();
            if question.is_empty() {
                continue;
            }

            let answer = match evaluator.evaluate(question) {
                Ok(answer) => answer,
                Err(e) => {
                    warn!("Skipping question: {}", e);
                    continue;
                }
            };

            answered += 1;
            debug!("Answered question {}: {}", answered, answer);
            self.write_answer(writer, answered, question, &answer)?;
        }

        writer.flush()?;
        info!("Answered {} questions", answered);
        Ok(answered)
    }

    /// [`Session::run`] over the contents of the file at `path`
    pub fn run_file<W: Write>(&self, path: impl AsRef<Path>, writer: &mut W) -> SessionResult<usize> {
        let path = path.as_ref();
        info!("Reading questions from {}", path.display());
        let file = File::open(path)?;
        self.run(BufReader::new(file), writer)
    }

    fn write_answer<W: Write>(
        &self,
        writer: &mut W,
        index: usize,
        question: &str,
        answer: &Answer,
    ) -> SessionResult<()> {
        match self.config.format {
            OutputFormat::Text => {
                writeln!(writer, "{}: {}", index, question)?;
                writeln!(writer, "{}: {}", index, answer)?;
                writeln!(writer)?;
            }
            OutputFormat::Json => {
                let record = AnswerRecord {
                    index,
                    question,
                    answer: answer.to_string(),
                    result: answer,
                };
                serde_json::to_writer(&mut *writer, &record)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}
