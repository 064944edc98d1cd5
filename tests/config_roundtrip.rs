// Config persistence through an isolated TestContext.
use callnote::config::{Config, LOG_ENV_VAR};
use callnote::context::{AppContext, TestContext};
use callnote::model::TaskKind;
use log::LevelFilter;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn test_missing_config_is_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let config = Config::load_or_default(&ctx).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_then_load() {
    let ctx = TestContext::new();
    let mut config = Config::default();
    config.log_level = "debug".to_string();
    config.default_task_kind = TaskKind::Visit;
    config.vocabulary.urgency_token = "!!!".to_string();

    config.save(&ctx).unwrap();
    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded, config);

    let path = Config::get_path_string(&ctx).unwrap();
    assert!(path.ends_with("config.toml"));
}

#[test]
fn test_partial_file_uses_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "default_task_kind = \"visit\"\n\n[vocabulary]\ntomorrow = \"낼\"\n").unwrap();

    let config = Config::load(&ctx).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.default_task_kind, TaskKind::Visit);
    assert_eq!(config.vocabulary.tomorrow, "낼");
    assert_eq!(config.vocabulary.today, "오늘");
}

#[test]
fn test_broken_file_is_not_reported_as_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "log_level = [unterminated").unwrap();

    let err = Config::load(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(Config::load_or_default(&ctx).is_err());
}

#[test]
fn test_context_cleans_up_on_drop() {
    let root = {
        let ctx = TestContext::new();
        ctx.get_config_dir().unwrap();
        ctx.root.clone()
    };
    assert!(!root.exists());
}

#[test]
#[serial]
fn test_log_level_from_config() {
    unsafe {
        env::remove_var(LOG_ENV_VAR);
    }
    let mut config = Config::default();
    assert_eq!(config.log_level_filter(), LevelFilter::Warn);

    config.log_level = "info".to_string();
    assert_eq!(config.log_level_filter(), LevelFilter::Info);

    config.log_level = "loud".to_string();
    assert_eq!(config.log_level_filter(), LevelFilter::Warn);
}

#[test]
#[serial]
fn test_log_level_env_override() {
    unsafe {
        env::set_var(LOG_ENV_VAR, "trace");
    }
    let config = Config {
        log_level: "error".to_string(),
        ..Config::default()
    };
    assert_eq!(config.log_level_filter(), LevelFilter::Trace);
    unsafe {
        env::remove_var(LOG_ENV_VAR);
    }
}
