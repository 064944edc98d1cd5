// File: ./src/model/parsed.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    Urgent = 1,
    #[default]
    Normal = 4,
}

impl Priority {
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Urgent)
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Urgent),
            4 => Ok(Self::Normal),
            other => Err(format!("Unknown priority level: {}", other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Structured fields pulled out of one line of free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    /// Whatever text no extraction stage consumed.
    pub content: String,
    /// Local wall-clock time. `None` only for empty input.
    pub date: Option<NaiveDateTime>,
    pub date_label: String,
    pub phone: Option<String>,
    pub priority: Priority,
}

impl ParsedResult {
    /// Result for empty input.
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            date: None,
            date_label: String::new(),
            phone: None,
            priority: Priority::Normal,
        }
    }
}

impl Default for ParsedResult {
    fn default() -> Self {
        Self::empty()
    }
}
