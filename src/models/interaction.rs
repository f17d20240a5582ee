use chrono::Local;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One question/answer exchange. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub question: String,
    pub answer: String,
    /// ISO-8601 local time, kept as text so older data files load unchanged.
    pub timestamp: String,
    #[serde(default)]
    pub learned: bool,
}

impl Interaction {
    pub fn answered(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(question.into(), answer.into(), false)
    }

    pub fn learned(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(question.into(), answer.into(), true)
    }

    fn new(question: String, answer: String, learned: bool) -> Self {
        Self {
            question,
            answer,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            learned,
        }
    }
}
