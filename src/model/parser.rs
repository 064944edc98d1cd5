// File: src/model/parser.rs
//! Smart input parsing for call/visit notes.
//!
//! A note such as `다음주 수요일 오후 3시 김사장 010-1234-5678 방문 필요!!1`
//! runs through a fixed table of stages. Each stage looks at the text left
//! over by the previous ones, cuts out what it recognised and records one
//! field. Order matters: the phone number goes first so its digits are never
//! read as a date or a time, and the urgency token goes last.
use crate::clock::{Clock, SystemClock};
use crate::model::display::format_date_label;
use crate::model::parsed::{ParsedResult, Priority};
use crate::model::patterns::{DEFAULT_PATTERNS, Patterns};
use crate::model::vocabulary::{Vocabulary, WeekOffset};
use anyhow::Result;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use regex::Captures;
use std::ops::Range;
use std::sync::Arc;

/// Partial result threaded through the stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub phone: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub priority: Priority,
}

impl Extraction {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            phone: None,
            date: None,
            priority: Priority::Normal,
        }
    }

    /// Removes `range` from the working text and trims it.
    fn cut(&mut self, range: Range<usize>) {
        let mut rest = String::with_capacity(self.text.len());
        rest.push_str(&self.text[..range.start]);
        rest.push_str(&self.text[range.end..]);
        self.text = rest.trim().to_string();
    }
}

pub type Stage = fn(&Patterns, NaiveDateTime, Extraction) -> Extraction;

/// Stage table, in execution order.
pub const STAGES: &[(&str, Stage)] = &[
    ("phone", extract_phone),
    ("weekday", resolve_relative_weekday),
    ("date", resolve_absolute_date),
    ("default-date", fill_default_date),
    ("time", resolve_time),
    ("priority", tag_priority),
];

pub fn extract_phone(p: &Patterns, _now: NaiveDateTime, mut ex: Extraction) -> Extraction {
    if let Some(m) = p.phone.find(&ex.text) {
        ex.phone = Some(m.as_str().to_string());
        ex.cut(m.range());
    }
    ex
}

pub fn resolve_relative_weekday(
    p: &Patterns,
    now: NaiveDateTime,
    mut ex: Extraction,
) -> Extraction {
    let Some(caps) = p.week.captures(&ex.text) else {
        return ex;
    };
    let (Some(week), Some(day)) = (caps.get(1), caps.get(2)) else {
        return ex;
    };
    let (Some(rule), Some(target)) = (
        p.vocabulary.week_offset(week.as_str()),
        p.vocabulary.weekday_ordinal(day.as_str()),
    ) else {
        return ex;
    };

    let current = now.weekday().num_days_from_sunday() as i64;
    let mut offset = target as i64 - current;
    match rule {
        WeekOffset::This => {
            if offset < 0 {
                offset += 7;
            }
        }
        WeekOffset::Next => offset += 7,
        WeekOffset::AfterNext => offset += 14,
    }

    if let Some(date) = now.checked_add_signed(Duration::days(offset)) {
        log::trace!("weekday '{}' resolved {} days ahead", &caps[0], offset);
        ex.date = Some(date);
        let range = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
        ex.cut(range);
    }
    ex
}

fn capture_u32(caps: &Captures, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Builds a date from parts that may be out of range, carrying the excess
/// forward: `2/30` lands in March, month 13 is January of the next year and
/// day 0 is the last day of the previous month.
fn rolled_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first = match month.checked_sub(1) {
        Some(extra) => first.checked_add_months(Months::new(extra))?,
        None => first.checked_sub_months(Months::new(1))?,
    };
    first.checked_add_signed(Duration::days(day as i64 - 1))
}

fn on_date(date: Option<NaiveDate>, matched: &str, now: NaiveDateTime) -> NaiveDateTime {
    match date {
        Some(d) => d.and_time(now.time()),
        None => {
            log::debug!("date '{}' is out of range, keeping today", matched);
            now
        }
    }
}

/// Absolute dates and the today/tomorrow words. Skipped when a weekday
/// expression already set the date. A matched date expression is always
/// consumed, even when its parts overflow the calendar.
pub fn resolve_absolute_date(p: &Patterns, now: NaiveDateTime, mut ex: Extraction) -> Extraction {
    if ex.date.is_some() {
        return ex;
    }
    let vocab = &p.vocabulary;

    if let Some(caps) = p.full_date.captures(&ex.text) {
        let date = capture_u32(&caps, 1)
            .zip(capture_u32(&caps, 2))
            .zip(capture_u32(&caps, 3))
            .and_then(|((y, m), d)| rolled_date(y as i32, m, d));
        let resolved = on_date(date, &caps[0], now);
        let range = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
        ex.date = Some(resolved);
        ex.cut(range);
    } else if let Some(caps) = p.month_day.captures(&ex.text) {
        let date = capture_u32(&caps, 1)
            .zip(capture_u32(&caps, 2))
            .and_then(|(m, d)| rolled_date(now.year(), m, d));
        let resolved = on_date(date, &caps[0], now);
        let range = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
        ex.date = Some(resolved);
        ex.cut(range);
    } else if let Some(idx) = ex.text.find(&vocab.tomorrow) {
        ex.date = now.checked_add_signed(Duration::days(1));
        ex.cut(idx..idx + vocab.tomorrow.len());
    } else if let Some(idx) = ex.text.find(&vocab.today) {
        ex.date = Some(now);
        ex.cut(idx..idx + vocab.today.len());
    }
    ex
}

pub fn fill_default_date(_p: &Patterns, now: NaiveDateTime, mut ex: Extraction) -> Extraction {
    if ex.date.is_none() {
        ex.date = Some(now);
    }
    ex
}

/// First match of `re` that does not overlap any of `protected`.
fn first_unprotected<'t>(
    re: &regex::Regex,
    text: &'t str,
    protected: &[Range<usize>],
) -> Option<Captures<'t>> {
    re.captures_iter(text).find(|caps| {
        caps.get(0).is_some_and(|m| {
            !protected
                .iter()
                .any(|r| m.start() < r.end && r.start < m.end())
        })
    })
}

fn apply_meridiem(hour: u32, afternoon: Option<bool>) -> u32 {
    match afternoon {
        Some(true) if hour < 12 => hour + 12,
        Some(false) if hour == 12 => 0,
        _ => hour,
    }
}

/// Explicit `H시 M분` / `H:M` / `H M`, else a compact digit run like `930`.
pub fn resolve_time(p: &Patterns, _now: NaiveDateTime, mut ex: Extraction) -> Extraction {
    let Some(date) = ex.date else {
        return ex;
    };
    let vocab = &p.vocabulary;
    let protected: Vec<Range<usize>> = ex
        .text
        .match_indices(vocab.urgency_token.as_str())
        .map(|(i, s)| i..i + s.len())
        .collect();

    let meridiem = |caps: &Captures| caps.get(1).and_then(|m| vocab.is_afternoon(m.as_str()));

    let candidate = if let Some(caps) = first_unprotected(&p.explicit_time, &ex.text, &protected)
        && let (Some(h), Some(m)) = (capture_u32(&caps, 2), capture_u32(&caps, 3))
    {
        Some((apply_meridiem(h, meridiem(&caps)), m, caps.get(0).map(|mat| mat.range())))
    } else if let Some(caps) = first_unprotected(&p.continuous_time, &ex.text, &protected)
        && let Some(digits) = caps.get(2)
    {
        let marked = ex.text.contains(vocab.hour_marker.as_str())
            || ex.text.contains(':')
            || caps.get(1).is_some();
        if marked || digits.as_str().len() >= 3 {
            let value: u32 = digits.as_str().parse().unwrap_or(0);
            let (h, m) = if value >= 100 {
                (value / 100, value % 100)
            } else {
                (value, 0)
            };
            Some((apply_meridiem(h, meridiem(&caps)), m, caps.get(0).map(|mat| mat.range())))
        } else {
            log::trace!("bare number '{}' is too ambiguous for a time", digits.as_str());
            None
        }
    } else {
        None
    };

    if let Some((hour, minute, Some(range))) = candidate {
        if hour < 24 && minute < 60 {
            if let Some(dt) = date.date().and_hms_opt(hour, minute, 0) {
                ex.date = Some(dt);
                ex.cut(range);
            }
        } else {
            log::debug!("rejecting out-of-range time {}:{}", hour, minute);
        }
    }
    ex
}

pub fn tag_priority(p: &Patterns, _now: NaiveDateTime, mut ex: Extraction) -> Extraction {
    let token = p.vocabulary.urgency_token.as_str();
    if let Some(idx) = ex.text.find(token) {
        ex.priority = Priority::Urgent;
        ex.cut(idx..idx + token.len());
    }
    ex
}

/// Runs the stage table over `text` with a single reading of the clock.
pub fn run_stages(patterns: &Patterns, now: NaiveDateTime, text: &str) -> ParsedResult {
    if text.is_empty() {
        return ParsedResult::empty();
    }

    let mut ex = Extraction::new(text);
    for (name, stage) in STAGES {
        ex = stage(patterns, now, ex);
        log::trace!("after {} stage: '{}'", name, ex.text);
    }

    let date_label = ex.date.as_ref().map(format_date_label).unwrap_or_default();
    ParsedResult {
        content: ex.text.split_whitespace().collect::<Vec<_>>().join(" "),
        date: ex.date,
        date_label,
        phone: ex.phone,
        priority: ex.priority,
    }
}

/// Parser bound to a vocabulary and a clock.
#[derive(Debug, Clone)]
pub struct SmartParser {
    patterns: Arc<Patterns>,
    clock: Arc<dyn Clock>,
}

impl SmartParser {
    /// Korean vocabulary, system clock.
    pub fn korean() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Korean vocabulary, caller-supplied clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            patterns: Arc::clone(&DEFAULT_PATTERNS),
            clock,
        }
    }

    /// Compiles a custom vocabulary. Fails if a word is empty or the phone
    /// pattern is not a valid regex.
    pub fn new(vocabulary: &Vocabulary, clock: Arc<dyn Clock>) -> Result<Self> {
        if *vocabulary == DEFAULT_PATTERNS.vocabulary {
            return Ok(Self::with_clock(clock));
        }
        Ok(Self {
            patterns: Arc::new(Patterns::compile(vocabulary.clone())?),
            clock,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.patterns.vocabulary
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn parse(&self, text: &str) -> ParsedResult {
        let result = run_stages(&self.patterns, self.clock.now(), text);
        log::debug!("parsed '{}' -> {:?}", text, result);
        result
    }
}

impl Default for SmartParser {
    fn default() -> Self {
        Self::korean()
    }
}

/// Parses with the Korean vocabulary and the system clock.
pub fn parse(text: &str) -> ParsedResult {
    SmartParser::korean().parse(text)
}
