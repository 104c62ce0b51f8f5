use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank::QuestionBank;
use super::domain::{Answer, AnswerKind, Question, MAX_ORDINAL, MIN_ORDINAL};

/// Answer value as it arrives from a caller, before it is checked against the
/// question it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(i64),
    Text(String),
}

impl From<i64> for RawAnswer {
    fn from(value: i64) -> Self {
        RawAnswer::Number(value)
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        RawAnswer::Text(value.to_string())
    }
}

impl From<String> for RawAnswer {
    fn from(value: String) -> Self {
        RawAnswer::Text(value)
    }
}

/// Wire shape of a single answer submitted over HTTP or from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSubmission {
    pub question_id: String,
    pub answer: RawAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
}

/// Request document accepted by the results endpoint and the `score` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionBatch {
    #[serde(default)]
    pub responses: Vec<ResponseSubmission>,
}

/// A validated answer to one question.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub question_id: &'static str,
    pub answer: Answer,
    pub captured_at: DateTime<Utc>,
}

/// Reasons a response is rejected before it can reach the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("question '{question_id}' expects a value between 1 and 5, got {value}")]
    ScaleOutOfRange { question_id: String, value: i64 },
    #[error("question '{question_id}' has no option '{given}'")]
    UnknownOption { question_id: String, given: String },
    #[error("question '{question_id}' expects \"yes\" or \"no\", got '{given}'")]
    InvalidBinary { question_id: String, given: String },
    #[error("question '{question_id}' expects a {expected} answer")]
    KindMismatch {
        question_id: String,
        expected: &'static str,
    },
}

/// Responses keyed by question identifier. A later answer to the same
/// question replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    responses: BTreeMap<&'static str, Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a batch, rejecting all of it on the first invalid entry.
    pub fn from_submissions<I>(
        bank: &QuestionBank,
        submissions: I,
        received_at: DateTime<Utc>,
    ) -> Result<Self, ResponseError>
    where
        I: IntoIterator<Item = ResponseSubmission>,
    {
        let mut set = Self::new();
        for submission in submissions {
            let captured_at = submission.captured_at.unwrap_or(received_at);
            set.record(bank, &submission.question_id, submission.answer, captured_at)?;
        }
        Ok(set)
    }

    /// Validate and store an answer, returning the response it replaced.
    pub fn record(
        &mut self,
        bank: &QuestionBank,
        question_id: &str,
        raw: RawAnswer,
        captured_at: DateTime<Utc>,
    ) -> Result<Option<Response>, ResponseError> {
        let question = bank
            .question(question_id)
            .ok_or_else(|| ResponseError::UnknownQuestion(question_id.to_string()))?;
        let answer = validate_answer(question, raw)?;

        Ok(self.responses.insert(
            question.id,
            Response {
                question_id: question.id,
                answer,
                captured_at,
            },
        ))
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.responses.get(question_id)
    }

    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.get(question_id).map(|response| &response.answer)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.values()
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }
}

fn validate_answer(question: &Question, raw: RawAnswer) -> Result<Answer, ResponseError> {
    let question_id = question.id.to_string();
    match (question.kind, raw) {
        (AnswerKind::Ordinal, RawAnswer::Number(value)) => u8::try_from(value)
            .ok()
            .filter(|value| (MIN_ORDINAL..=MAX_ORDINAL).contains(value))
            .map(Answer::Ordinal)
            .ok_or(ResponseError::ScaleOutOfRange { question_id, value }),
        (AnswerKind::MultipleChoice(options), RawAnswer::Text(given)) => {
            if options.contains(&given.as_str()) {
                Ok(Answer::Choice(given))
            } else {
                Err(ResponseError::UnknownOption { question_id, given })
            }
        }
        (AnswerKind::Binary, RawAnswer::Text(given)) => match given.as_str() {
            "yes" => Ok(Answer::Binary(true)),
            "no" => Ok(Answer::Binary(false)),
            _ => Err(ResponseError::InvalidBinary { question_id, given }),
        },
        (kind, _) => Err(ResponseError::KindMismatch {
            question_id,
            expected: kind.label(),
        }),
    }
}
