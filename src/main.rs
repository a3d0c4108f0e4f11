use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use tracing::{error, warn};

use tmux_sessions::alfred::ScriptFilter;
use tmux_sessions::app;
use tmux_sessions::tmux::{TmuxClient, DEFAULT_TIMEOUT};

/// Written if the real document cannot be serialized
const FALLBACK_JSON: &str =
    r#"{"items":[{"title":"Unexpected error","subtitle":"failed to serialize output","valid":false}]}"#;

/// The whole argv is the launcher query: no flags are recognised, so
/// `--version` or `-h` typed into the launcher is searched for like any name.
#[derive(Parser, Debug)]
#[command(name = "tmux-sessions", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Filter sessions by name (case-insensitive); also the name for a new session
    #[arg(allow_hyphen_values = true)]
    query: Option<String>,
}

/// Runtime settings, read from the environment only
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    /// tmux executable to run (`TMUX_SESSIONS_TMUX`)
    tmux_path: String,
    /// Bound on `tmux list-sessions` (`TMUX_SESSIONS_TIMEOUT`, seconds)
    timeout: Duration,
}

impl Settings {
    fn from_env() -> Self {
        Self::from_vars(
            std::env::var("TMUX_SESSIONS_TMUX").ok(),
            std::env::var("TMUX_SESSIONS_TIMEOUT").ok(),
        )
    }

    fn from_vars(tmux_path: Option<String>, timeout: Option<String>) -> Self {
        let tmux_path = match tmux_path {
            Some(path) if !path.trim().is_empty() => path,
            _ => "tmux".to_string(),
        };

        let timeout = match timeout.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_TIMEOUT,
            Some(secs) => match secs.parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => {
                    warn!("ignoring TMUX_SESSIONS_TIMEOUT={:?}: {}", secs, e);
                    DEFAULT_TIMEOUT
                }
            },
        };

        Self { tmux_path, timeout }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout is reserved for the JSON document
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let doc = match Args::try_parse() {
        Ok(args) => {
            let settings = Settings::from_env();
            let query = args.query.as_deref().unwrap_or("").trim();
            let client = TmuxClient::with_path(settings.tmux_path).with_timeout(settings.timeout);
            app::run(&client, query, chrono::Utc::now()).await
        }
        Err(err) => {
            // clap's message ends with usage text; the first line is enough here
            let message = err.to_string();
            let first_line = message.lines().next().unwrap_or("invalid arguments");
            let err = anyhow::anyhow!("{}", first_line.trim_start_matches("error: "));
            ScriptFilter::new(vec![app::error_item(&err)])
        }
    };

    emit(&doc);
}

/// Write exactly one JSON document to stdout
fn emit(doc: &ScriptFilter) {
    let json = doc.to_json().unwrap_or_else(|e| {
        error!("failed to serialize output: {}", e);
        FALLBACK_JSON.to_string()
    });

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
        error!("failed to write output: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_json_is_valid() {
        let value: serde_json::Value = serde_json::from_str(FALLBACK_JSON).unwrap();
        assert_eq!(value["items"][0]["valid"], false);
    }

    fn parse_query(arg: &str) -> Option<String> {
        Args::try_parse_from(["tmux-sessions", arg]).unwrap().query
    }

    #[test]
    fn test_no_argument_is_empty_query() {
        let args = Args::try_parse_from(["tmux-sessions"]).unwrap();
        assert_eq!(args.query, None);
    }

    #[test]
    fn test_flag_like_queries_are_queries() {
        let args = [
            "--version",
            "-V",
            "-h",
            "--help",
            "--tmux",
            "--tmux=/x",
            "--timeout",
            "-scratch",
        ];
        for arg in args {
            assert_eq!(parse_query(arg).as_deref(), Some(arg), "argument {arg:?}");
        }
    }

    #[test]
    fn test_plain_query() {
        assert_eq!(parse_query("My Project").as_deref(), Some("My Project"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_vars(None, None);
        assert_eq!(settings.tmux_path, "tmux");
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);

        assert_eq!(Settings::from_vars(Some(" ".into()), Some("".into())), settings);
    }

    #[test]
    fn test_settings_from_vars() {
        let settings = Settings::from_vars(Some("/opt/bin/tmux".into()), Some("2".into()));
        assert_eq!(settings.tmux_path, "/opt/bin/tmux");
        assert_eq!(settings.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_settings_bad_timeout_uses_default() {
        let settings = Settings::from_vars(None, Some("soon".into()));
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
    }
}
