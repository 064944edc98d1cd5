// File: ./src/cli.rs
//! Command-line argument handling and help text for the `callnote` binary.
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub json: bool,
    pub as_task: bool,
    pub visit: bool,
    pub help: bool,
    /// Remaining words, joined with spaces. Empty means "read stdin".
    pub text: String,
}

impl CliArgs {
    /// Parses everything after the binary name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut out = CliArgs::default();
        let mut words = Vec::new();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" if words.is_empty() => out.help = true,
                "-r" | "--root" => {
                    let path = iter
                        .next()
                        .ok_or_else(|| format!("{} requires a path", arg))?;
                    out.root = Some(PathBuf::from(path));
                }
                "--json" => out.json = true,
                "--task" => out.as_task = true,
                "--visit" => out.visit = true,
                "--" => {
                    words.extend(iter.by_ref());
                }
                _ => words.push(arg),
            }
        }
        out.text = words.join(" ");
        Ok(out)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Callnote v{} - Turns Korean call/visit notes into structured tasks",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <text...>", binary_name);
    println!("    echo \"내일 930 전화\" | {} [OPTIONS]", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    --json                Print JSON instead of a summary line.");
    println!("    --task                Draft a task record from the parsed note.");
    println!("    --visit               Drafted task is a visit (default from config).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("SMART INPUT SYNTAX:");
    println!("    010-1234-5678     Phone number (010, 02, 031-065 prefixes)");
    println!("    다음주 수요일     Weekday (이번주 / 다음주 / 다다음주)");
    println!("    2024/3/15, 3/15   Absolute date");
    println!("    오늘, 내일        Relative day");
    println!("    오후 2시30분      Time (also 14:30, 9 30, 930, 오전 9시)");
    println!("    !!1               Urgent");
    println!();
    println!("ENVIRONMENT:");
    println!("    CALLNOTE_LOG      Log level (error, warn, info, debug, trace)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<CliArgs, String> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_flags_and_words() {
        let a = args(&["--json", "내일", "930", "--visit", "전화"]).unwrap();
        assert!(a.json);
        assert!(a.visit);
        assert!(!a.as_task);
        assert_eq!(a.text, "내일 930 전화");
    }

    #[test]
    fn test_help_only_before_words() {
        assert!(args(&["help"]).unwrap().help);
        let a = args(&["전화", "help"]).unwrap();
        assert!(!a.help);
        assert_eq!(a.text, "전화 help");
    }

    #[test]
    fn test_root_requires_value() {
        assert!(args(&["--root"]).is_err());
        let a = args(&["-r", "/tmp/x", "메모"]).unwrap();
        assert_eq!(a.root, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_double_dash_stops_flag_parsing() {
        let a = args(&["--", "--json", "그대로"]).unwrap();
        assert!(!a.json);
        assert_eq!(a.text, "--json 그대로");
    }
}
