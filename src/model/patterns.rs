// File: ./src/model/patterns.rs
//! Compiled matchers for one `Vocabulary`.
use crate::model::vocabulary::Vocabulary;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// Korean defaults, compiled once per process.
pub(crate) static DEFAULT_PATTERNS: Lazy<Arc<Patterns>> = Lazy::new(|| {
    Arc::new(
        Patterns::compile(Vocabulary::default()).expect("built-in vocabulary must compile"),
    )
});

#[derive(Debug)]
pub struct Patterns {
    pub vocabulary: Vocabulary,
    pub phone: Regex,
    /// Groups: 1 = week word, 2 = weekday name.
    pub week: Regex,
    /// Groups: 1 = year, 2 = month, 3 = day.
    pub full_date: Regex,
    /// Groups: 1 = month, 2 = day.
    pub month_day: Regex,
    /// Groups: 1 = meridiem, 2 = hour, 3 = minute.
    pub explicit_time: Regex,
    /// Groups: 1 = meridiem, 2 = digit run.
    pub continuous_time: Regex,
}

/// Regex alternation of literal words, longest first.
fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    words
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

impl Patterns {
    pub fn compile(vocabulary: Vocabulary) -> Result<Self> {
        for (field, word) in vocabulary.required_words() {
            if word.trim().is_empty() {
                bail!("Vocabulary field '{}' must not be empty", field);
            }
        }

        let phone = Regex::new(&vocabulary.phone_pattern).with_context(|| {
            format!(
                "Invalid phone_pattern in vocabulary: '{}'",
                vocabulary.phone_pattern
            )
        })?;

        let weeks = alternation([
            vocabulary.this_week.as_str(),
            vocabulary.next_week.as_str(),
            vocabulary.week_after_next.as_str(),
        ]);
        let days = alternation(vocabulary.weekdays.iter().map(String::as_str));
        let suffixes = vocabulary
            .weekday_suffixes
            .iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str);
        let suffix = alternation(suffixes);
        let week = if suffix.is_empty() {
            Regex::new(&format!(r"({})\s*({})", weeks, days))?
        } else {
            Regex::new(&format!(r"({})\s*({})(?:{})?", weeks, days, suffix))?
        };

        let meridiem = alternation([vocabulary.morning.as_str(), vocabulary.afternoon.as_str()]);
        let hour = regex::escape(&vocabulary.hour_marker);
        let minute = regex::escape(&vocabulary.minute_marker);

        let explicit_time = Regex::new(&format!(
            r"(?:({m}))?\s*([0-9]{{1,2}})(?:{h}|:|\s+)([0-9]{{1,2}})(?:{mi})?",
            m = meridiem,
            h = hour,
            mi = minute
        ))?;
        let continuous_time = Regex::new(&format!(
            r"(?:({m}))?\s*([0-9]{{1,4}})(?:{h}|:|{mi})?",
            m = meridiem,
            h = hour,
            mi = minute
        ))?;

        Ok(Self {
            phone,
            week,
            full_date: Regex::new(r"([0-9]{4})/([0-9]{1,2})/([0-9]{1,2})")?,
            month_day: Regex::new(r"([0-9]{1,2})/([0-9]{1,2})")?,
            explicit_time,
            continuous_time,
            vocabulary,
        })
    }
}
