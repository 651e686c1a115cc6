//! releaf-modcheck - ReLeaf content moderation checker
//!
//! Reads text from stdin one line at a time and prints one result per line.
//!
//! ```text
//! releaf-modcheck [config.toml] [--mode check|clean|words|analyze|name|post] [--json-logs]
//! ```

mod config;
mod error;
mod screen;
mod telemetry;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, bail};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::screen::Screener;

/// What to print for each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Check,
    Clean,
    Words,
    Analyze,
    Name,
    Post,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Clean => "clean",
            Self::Words => "words",
            Self::Analyze => "analyze",
            Self::Name => "name",
            Self::Post => "post",
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "check" => Self::Check,
            "clean" => Self::Clean,
            "words" => Self::Words,
            "analyze" => Self::Analyze,
            "name" => Self::Name,
            "post" => Self::Post,
            other => bail!("unknown mode {other:?}"),
        })
    }
}

#[derive(Debug)]
struct Args {
    config_path: Option<String>,
    mode: Mode,
    json_logs: bool,
}

impl Args {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<Self> {
        let mut parsed = Args {
            config_path: None,
            mode: Mode::Clean,
            json_logs: false,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let value = args.next().context("--mode requires a value")?;
                    parsed.mode = value.parse()?;
                }
                "--json-logs" => parsed.json_logs = true,
                flag if flag.starts_with("--") => bail!("unknown flag {flag:?}"),
                _ if parsed.config_path.is_none() => parsed.config_path = Some(arg),
                _ => bail!("unexpected argument {arg:?}"),
            }
        }
        Ok(parsed)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    telemetry::init(args.json_logs);

    let config = match &args.config_path {
        Some(path) => Config::load(path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load config");
            e
        })?,
        None => Config::default(),
    };

    if let Err(errors) = config::validate(&config) {
        for err in &errors {
            error!(error = %err, "Invalid configuration");
        }
        bail!("configuration has {} error(s)", errors.len());
    }

    let filter = config.filter.build_filter()?;
    let screener = Screener::new(filter, config.limits.clone());

    info!(mode = args.mode.as_str(), "Screening stdin");
    let _span = telemetry::spans::check(args.mode.as_str()).entered();

    let stdin = io::stdin();
    let mut out = io::BufWriter::new(io::stdout().lock());
    let mut lines = 0usize;
    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", run(&screener, args.mode, &line)?)?;
        lines += 1;
    }
    out.flush()?;

    info!(lines, "Done");
    Ok(())
}

fn run(screener: &Screener, mode: Mode, line: &str) -> anyhow::Result<String> {
    let filter = screener.filter();
    Ok(match mode {
        Mode::Check => filter.contains_profanity(line).to_string(),
        Mode::Clean => filter.clean_profanity(line),
        Mode::Words => filter.profane_words(line).join(", "),
        Mode::Analyze => serde_json::to_string(&filter.analyze(line))?,
        Mode::Name => match screener.screen_name(Some(line)) {
            Ok(Some(name)) => name,
            Ok(None) => String::new(),
            Err(e) => format!("error[{}]: {} ({})", e.status_code(), e, e.field()),
        },
        Mode::Post => match screener.screen_post(line) {
            Ok(post) => {
                debug!(masked = post.masked, "Screened post");
                post.content
            }
            Err(e) => format!("error[{}]: {} ({})", e.status_code(), e, e.field()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_args_defaults() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.config_path, None);
        assert_eq!(parsed.mode, Mode::Clean);
        assert!(!parsed.json_logs);
    }

    #[test]
    fn test_args_full() {
        let parsed = args(&["moderation.toml", "--mode", "words", "--json-logs"]).unwrap();
        assert_eq!(parsed.config_path.as_deref(), Some("moderation.toml"));
        assert_eq!(parsed.mode, Mode::Words);
        assert!(parsed.json_logs);
    }

    #[test]
    fn test_args_rejects_bad_input() {
        assert!(args(&["--mode"]).is_err());
        assert!(args(&["--mode", "shout"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn test_run_modes() {
        let filter = config::FilterConfig::default().build_filter().unwrap();
        let screener = Screener::new(filter, config::LimitsConfig::default());

        assert_eq!(run(&screener, Mode::Check, "hello there").unwrap(), "false");
        assert_eq!(run(&screener, Mode::Check, "oh shit").unwrap(), "true");
        assert_eq!(run(&screener, Mode::Clean, "oh shit").unwrap(), "oh ****");
        assert_eq!(run(&screener, Mode::Words, "shit and crap").unwrap(), "shit, crap");
        assert_eq!(
            run(&screener, Mode::Analyze, "hello").unwrap(),
            r#"{"verdict":"clean"}"#
        );
        assert_eq!(
            run(&screener, Mode::Name, "chutiya").unwrap(),
            "error[400]: Name contains inappropriate language. Please choose a different name. (name)"
        );
        assert_eq!(run(&screener, Mode::Post, "  ok  ").unwrap(), "ok");
    }
}
