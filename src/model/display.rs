// File: ./src/model/display.rs
use crate::model::item::{Task, TaskStatus};
use crate::model::parsed::ParsedResult;
use chrono::NaiveDateTime;
use std::fmt;

/// `MM/DD HH:mm`, 24-hour, using the wall-clock fields as they are.
pub fn format_date_label(dt: &NaiveDateTime) -> String {
    dt.format("%m/%d %H:%M").to_string()
}

impl fmt::Display for ParsedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.date_label)?;
        if self.priority.is_urgent() {
            write!(f, " !")?;
        }
        write!(f, " {}", self.content)?;
        if let Some(phone) = &self.phone {
            write!(f, " ({})", phone)?;
        }
        Ok(())
    }
}

pub trait TaskDisplay {
    fn checkbox_symbol(&self) -> &'static str;
    fn due_label(&self) -> String;
    fn to_line(&self) -> String;
}

impl TaskDisplay for Task {
    fn checkbox_symbol(&self) -> &'static str {
        match self.status {
            TaskStatus::Done => "[✔]",
            TaskStatus::Active => "[ ]",
        }
    }

    fn due_label(&self) -> String {
        format_date_label(&self.due_date)
    }

    fn to_line(&self) -> String {
        let mut s = format!(
            "{} {} {} {}",
            self.checkbox_symbol(),
            self.due_label(),
            self.kind,
            self.content
        );
        if let Some(phone) = &self.phone {
            s.push_str(&format!(" ({})", phone));
        }
        if self.priority.is_urgent() {
            s.push_str(" !");
        }
        if self.reschedule_count > 0 {
            s.push_str(&format!(" [+{}]", self.reschedule_count));
        }
        s
    }
}
