// File: ./src/model/item.rs
use crate::model::parsed::{ParsedResult, Priority};
use crate::model::parser::SmartParser;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumIter};
use uuid::Uuid;

fn default_uid() -> String {
    Uuid::new_v4().to_string()
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    #[default]
    #[strum(to_string = "전화")]
    Call,
    #[strum(to_string = "방문")]
    Visit,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Active,
    Done,
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Outcome of one contact attempt.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HistoryType {
    Call,
    Visit,
    Reschedule,
    Absence,
    Callback,
    Reject,
    Success,
    VisitSuccess,
    DepositComplete,
    Memo,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(rename = "type")]
    pub kind: HistoryType,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HistoryItem {
    pub fn new(kind: HistoryType, timestamp: NaiveDateTime) -> Self {
        Self {
            kind,
            timestamp,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "default_uid")]
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub due_date: NaiveDateTime,
    #[serde(rename = "type", default)]
    pub kind: TaskKind,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(rename = "rescheduleCount", default)]
    pub reschedule_count: u32,
    #[serde(default)]
    pub history: Vec<HistoryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(
        rename = "resultText",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub result_text: Option<String>,
}

impl Task {
    /// Parses `input` and drafts a new active task from it.
    pub fn new(input: &str, parser: &SmartParser, kind: TaskKind) -> Self {
        Self::from_parsed(parser.parse(input), kind, parser.now())
    }

    /// `now` is only used when the parse result carries no date.
    pub fn from_parsed(parsed: ParsedResult, kind: TaskKind, now: NaiveDateTime) -> Self {
        Self {
            id: default_uid(),
            content: parsed.content,
            phone: parsed.phone,
            due_date: parsed.date.unwrap_or(now),
            kind,
            status: TaskStatus::Active,
            priority: parsed.priority,
            reschedule_count: 0,
            history: Vec::new(),
            memo: None,
            result_text: None,
        }
    }

    pub fn complete(&mut self, result_text: impl Into<String>) {
        self.status = TaskStatus::Done;
        self.result_text = Some(result_text.into());
    }

    pub fn add_history(&mut self, item: HistoryItem) {
        self.history.push(item);
    }

    /// Moves the due date and records the move in the history.
    pub fn reschedule(&mut self, new_due: NaiveDateTime, now: NaiveDateTime, note: Option<String>) {
        self.due_date = new_due;
        self.reschedule_count += 1;
        self.history.push(HistoryItem {
            kind: HistoryType::Reschedule,
            timestamp: now,
            note,
        });
    }

    pub fn last_contact(&self) -> Option<&HistoryItem> {
        self.history.iter().max_by_key(|h| h.timestamp)
    }
}

// --- SORTING ---
// Active before done, then due date, then urgency, then text.
impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.status
            .is_done()
            .cmp(&other.status.is_done())
            .then_with(|| self.due_date.cmp(&other.due_date))
            .then_with(|| u8::from(self.priority).cmp(&u8::from(other.priority)))
            .then_with(|| self.content.cmp(&other.content))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
