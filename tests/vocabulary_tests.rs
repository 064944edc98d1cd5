// Swapping the locale table while keeping the pipeline unchanged.
use callnote::clock::FixedClock;
use callnote::model::{Priority, SmartParser, Vocabulary, WeekOffset};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::sync::Arc;

// Monday 2026-10-19, 14:05:30
fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(14, 5, 30)
        .unwrap()
}

fn english() -> Vocabulary {
    Vocabulary {
        weekdays: [
            "sunday",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
        ]
        .map(String::from),
        weekday_suffixes: Vec::new(),
        this_week: "this".to_string(),
        next_week: "next".to_string(),
        week_after_next: "after next".to_string(),
        today: "today".to_string(),
        tomorrow: "tomorrow".to_string(),
        morning: "am".to_string(),
        afternoon: "pm".to_string(),
        hour_marker: "h".to_string(),
        minute_marker: "m".to_string(),
        urgency_token: "!!".to_string(),
        phone_pattern: r"\+1-[0-9]{3}-[0-9]{4}".to_string(),
    }
}

fn parser(vocab: &Vocabulary) -> SmartParser {
    SmartParser::new(vocab, Arc::new(FixedClock::new(now()))).expect("vocabulary compiles")
}

#[test]
fn test_default_vocabulary_lookups() {
    let v = Vocabulary::default();
    assert_eq!(v.weekday_ordinal("일"), Some(0));
    assert_eq!(v.weekday_ordinal("수"), Some(3));
    assert_eq!(v.weekday_ordinal("토"), Some(6));
    assert_eq!(v.weekday_ordinal("x"), None);
    assert_eq!(v.week_offset("다다음주"), Some(WeekOffset::AfterNext));
    assert_eq!(v.is_afternoon("오후"), Some(true));
    assert_eq!(v.is_afternoon("오전"), Some(false));
    assert_eq!(v.is_afternoon("저녁"), None);
}

#[test]
fn test_english_pipeline() {
    let p = parser(&english());
    let r = p.parse("call bob tomorrow pm 3h +1-555-0100 !!");

    assert_eq!(r.phone.as_deref(), Some("+1-555-0100"));
    let d = r.date.unwrap();
    assert_eq!(d.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert_eq!((d.hour(), d.minute()), (15, 0));
    assert_eq!(r.priority, Priority::Urgent);
    assert_eq!(r.content, "call bob");
}

#[test]
fn test_english_week_words() {
    let p = parser(&english());

    let r = p.parse("this friday demo");
    assert_eq!(r.date.unwrap().date(), NaiveDate::from_ymd_opt(2026, 10, 23).unwrap());
    assert_eq!(r.content, "demo");

    let r = p.parse("after next monday review");
    assert_eq!(r.date.unwrap().date(), NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());
    assert_eq!(r.content, "review");
}

#[test]
fn test_korean_words_ignored_by_english_table() {
    let r = parser(&english()).parse("내일 전화");
    assert_eq!(r.date, Some(now()));
    assert_eq!(r.content, "내일 전화");
}

#[test]
fn test_default_vocabulary_reuses_builtin() {
    let p = parser(&Vocabulary::default());
    assert_eq!(p.vocabulary(), &Vocabulary::default());
    assert_eq!(p.parse("급한 건!!1").priority, Priority::Urgent);
}

#[test]
fn test_invalid_vocabulary_is_an_error() {
    let clock = Arc::new(FixedClock::new(now()));

    let mut v = english();
    v.today = "  ".to_string();
    let err = SmartParser::new(&v, clock.clone()).unwrap_err();
    assert!(err.to_string().contains("today"));

    let mut v = english();
    v.phone_pattern = "[0-9".to_string();
    assert!(SmartParser::new(&v, clock).is_err());
}

#[test]
fn test_partial_toml_override_keeps_defaults() {
    let v: Vocabulary = toml::from_str("urgency_token = \"급!\"").unwrap();
    assert_eq!(v.urgency_token, "급!");
    assert_eq!(v.tomorrow, "내일");

    let r = parser(&v).parse("내일 급! 견적");
    assert_eq!(r.priority, Priority::Urgent);
    assert_eq!(r.content, "견적");
}
