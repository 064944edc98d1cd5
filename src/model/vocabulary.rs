// File: ./src/model/vocabulary.rs
//! Locale word table used by the smart parser.
//!
//! Nothing in here knows how matching works; `patterns.rs` turns a
//! `Vocabulary` into compiled regexes. The defaults are Korean. Any field can
//! be overridden from the `[vocabulary]` table of the config file, and
//! omitted fields keep their default.
use serde::{Deserialize, Serialize};

/// How a week word shifts the target weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOffset {
    /// Today or later within the current seven-day cycle.
    This,
    /// Always seven days on top of the raw weekday difference.
    Next,
    /// Always fourteen days on top of the raw weekday difference.
    AfterNext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Weekday names, Sunday first.
    pub weekdays: [String; 7],
    /// Accepted forms of the word that may follow a weekday name.
    pub weekday_suffixes: Vec<String>,
    pub this_week: String,
    pub next_week: String,
    pub week_after_next: String,
    pub today: String,
    pub tomorrow: String,
    pub morning: String,
    pub afternoon: String,
    pub hour_marker: String,
    pub minute_marker: String,
    pub urgency_token: String,
    /// Raw regex for a local phone number.
    pub phone_pattern: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            weekdays: ["일", "월", "화", "수", "목", "금", "토"].map(String::from),
            weekday_suffixes: vec!["요일".to_string(), "요".to_string()],
            this_week: "이번주".to_string(),
            next_week: "다음주".to_string(),
            week_after_next: "다다음주".to_string(),
            today: "오늘".to_string(),
            tomorrow: "내일".to_string(),
            morning: "오전".to_string(),
            afternoon: "오후".to_string(),
            hour_marker: "시".to_string(),
            minute_marker: "분".to_string(),
            urgency_token: "!!1".to_string(),
            phone_pattern: r"(?:010|02|0[3-6][1-5])-?[0-9]{3,4}-?[0-9]{4}".to_string(),
        }
    }
}

impl Vocabulary {
    /// Sunday = 0 .. Saturday = 6.
    pub fn weekday_ordinal(&self, name: &str) -> Option<u32> {
        self.weekdays
            .iter()
            .position(|w| w == name)
            .map(|idx| idx as u32)
    }

    pub fn week_offset(&self, word: &str) -> Option<WeekOffset> {
        if word == self.this_week {
            Some(WeekOffset::This)
        } else if word == self.next_week {
            Some(WeekOffset::Next)
        } else if word == self.week_after_next {
            Some(WeekOffset::AfterNext)
        } else {
            None
        }
    }

    /// Which meridiem word `word` is, if any. `Some(true)` means afternoon.
    pub fn is_afternoon(&self, word: &str) -> Option<bool> {
        if word == self.afternoon {
            Some(true)
        } else if word == self.morning {
            Some(false)
        } else {
            None
        }
    }

    /// Every single-word field paired with its name, for validation.
    pub(crate) fn required_words(&self) -> Vec<(&'static str, &str)> {
        let mut words = vec![
            ("this_week", self.this_week.as_str()),
            ("next_week", self.next_week.as_str()),
            ("week_after_next", self.week_after_next.as_str()),
            ("today", self.today.as_str()),
            ("tomorrow", self.tomorrow.as_str()),
            ("morning", self.morning.as_str()),
            ("afternoon", self.afternoon.as_str()),
            ("hour_marker", self.hour_marker.as_str()),
            ("minute_marker", self.minute_marker.as_str()),
            ("urgency_token", self.urgency_token.as_str()),
        ];
        for day in &self.weekdays {
            words.push(("weekdays", day.as_str()));
        }
        words
    }
}
