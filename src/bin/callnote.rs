use anyhow::{Context, Result};
use callnote::cli::{CliArgs, print_help};
use callnote::clock::SystemClock;
use callnote::config::Config;
use callnote::context::StandardContext;
use callnote::model::{SmartParser, Task, TaskDisplay, TaskKind};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::io::{self, BufRead};
use std::sync::Arc;

fn main() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1)).map_err(|e| anyhow::anyhow!(e))?;

    if args.help {
        print_help("callnote");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;

    // Logging goes to stderr so stdout stays machine-readable.
    TermLogger::init(
        config.log_level_filter(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    let parser = SmartParser::new(&config.vocabulary, Arc::new(SystemClock))
        .context("Invalid vocabulary in config file")?;
    let kind = if args.visit {
        TaskKind::Visit
    } else {
        config.default_task_kind
    };

    if !args.text.is_empty() {
        return emit(&parser, &args, kind, &args.text);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        emit(&parser, &args, kind, &line)?;
    }
    Ok(())
}

fn emit(parser: &SmartParser, args: &CliArgs, kind: TaskKind, input: &str) -> Result<()> {
    if args.as_task {
        let task = Task::new(input, parser, kind);
        if args.json {
            println!("{}", serde_json::to_string(&task)?);
        } else {
            println!("{}", task.to_line());
        }
    } else {
        let parsed = parser.parse(input);
        if args.json {
            println!("{}", serde_json::to_string(&parsed)?);
        } else {
            println!("{}", parsed);
        }
    }
    Ok(())
}
