//! Request models and field validation.
//!
//! Requests arrive with every field optional (a JSON body may omit any of
//! them). Validation collects every failing field, in declaration order, and
//! either rejects the request as a whole or produces a query holding plain
//! values that can be passed straight to `wordfreq-core`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const VALIDATION_FAILED: &str = "Input Validation Failed";

pub const HIGHEST_TEXT_MISSING: &str = "Text input to search in is missing";
pub const TEXT_BLOCK_MISSING: &str = "Text block to search in is missing";
pub const WORD_MISSING: &str = "A word to search for is missing";
pub const LIMIT_MISSING: &str = "A Limit number must be provided";
pub const LIMIT_NOT_POSITIVE: &str = "The Limit number must be a positive integer";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structured rejection of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{problem}: {}", describe(.field_errors))]
pub struct ValidationError {
    pub problem: String,
    pub field_errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(problem: impl Into<String>, field_errors: Vec<FieldError>) -> Self {
        Self {
            problem: problem.into(),
            field_errors,
        }
    }
}

fn describe(field_errors: &[FieldError]) -> String {
    field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Body of a highest-frequency request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighestFrequencyRequest {
    pub text: Option<String>,
}

/// Body of a single-word frequency request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordFrequencyRequest {
    pub text: Option<String>,
    pub word: Option<String>,
}

/// Body of a most-frequent-words request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MostFrequentWordsRequest {
    pub text: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    pub text: String,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub text: String,
    pub limit: usize,
}

impl HighestFrequencyRequest {
    pub fn validate(self, max_text_bytes: Option<usize>) -> Result<TextQuery, ValidationError> {
        let mut errors = Vec::new();
        let text = check_text(self.text, HIGHEST_TEXT_MISSING, max_text_bytes, &mut errors);

        match text {
            Some(text) if errors.is_empty() => Ok(TextQuery { text }),
            _ => Err(ValidationError::new(VALIDATION_FAILED, errors)),
        }
    }
}

impl WordFrequencyRequest {
    pub fn validate(self, max_text_bytes: Option<usize>) -> Result<WordQuery, ValidationError> {
        let mut errors = Vec::new();
        let text = check_text(self.text, TEXT_BLOCK_MISSING, max_text_bytes, &mut errors);
        let word = check_not_blank("word", self.word, WORD_MISSING, &mut errors);

        match (text, word) {
            (Some(text), Some(word)) if errors.is_empty() => Ok(WordQuery { text, word }),
            _ => Err(ValidationError::new(VALIDATION_FAILED, errors)),
        }
    }
}

impl MostFrequentWordsRequest {
    pub fn validate(self, max_text_bytes: Option<usize>) -> Result<PageQuery, ValidationError> {
        let mut errors = Vec::new();
        let text = check_text(self.text, TEXT_BLOCK_MISSING, max_text_bytes, &mut errors);
        let limit = check_limit(self.limit, &mut errors);

        match (text, limit) {
            (Some(text), Some(limit)) if errors.is_empty() => Ok(PageQuery { text, limit }),
            _ => Err(ValidationError::new(VALIDATION_FAILED, errors)),
        }
    }
}

fn check_text(
    text: Option<String>,
    missing: &str,
    max_text_bytes: Option<usize>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let text = check_not_blank("text", text, missing, errors)?;

    match max_text_bytes {
        Some(max) if text.len() > max => {
            errors.push(FieldError::new(
                "text",
                format!("Text exceeds the maximum size of {max} bytes"),
            ));
            None
        }
        _ => Some(text),
    }
}

fn check_not_blank(
    field: &str,
    value: Option<String>,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

fn check_limit(limit: Option<i64>, errors: &mut Vec<FieldError>) -> Option<usize> {
    match limit {
        None => {
            errors.push(FieldError::new("limit", LIMIT_MISSING));
            None
        }
        Some(n) if n <= 0 => {
            errors.push(FieldError::new("limit", LIMIT_NOT_POSITIVE));
            None
        }
        // Positive i64 values beyond usize can only mean "everything"
        Some(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}
