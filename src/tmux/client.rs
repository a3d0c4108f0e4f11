use std::process::Stdio;
use std::str::FromStr;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use super::{Session, TmuxError};

/// `list-sessions -F` template; field order matches [`parse_session_line`]
pub const LIST_FORMAT: &str = "#{session_name}|#{session_windows}|#{session_created}|#{session_attached}|#{session_activity}";

/// How long `list-sessions` may run before it is abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const FIELD_SEPARATOR: char = '|';

/// Client for interacting with tmux via CLI
#[derive(Debug, Clone)]
pub struct TmuxClient {
    /// Path to tmux binary
    tmux_path: String,
    /// Bound on a single tmux invocation
    timeout: Duration,
}

impl TmuxClient {
    pub fn new() -> Self {
        Self::with_path("tmux")
    }

    pub fn with_path(tmux_path: impl Into<String>) -> Self {
        Self {
            tmux_path: tmux_path.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// List all tmux sessions.
    ///
    /// A nonzero exit (tmux reports "no server running" this way) and a
    /// timeout both yield an empty list. Only failing to launch tmux is an error.
    pub async fn list_sessions(&self) -> Result<Vec<Session>, TmuxError> {
        debug!("running {} list-sessions -F {}", self.tmux_path, LIST_FORMAT);

        let child = Command::new(&self.tmux_path)
            .args(["list-sessions", "-F", LIST_FORMAT])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| TmuxError::from_io(&self.tmux_path, e))?;

        // Dropping the future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| TmuxError::from_io(&self.tmux_path, e))?,
            Err(_) => {
                warn!(
                    "tmux list-sessions timed out after {:?}, treating as no sessions",
                    self.timeout
                );
                return Ok(Vec::new());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                "tmux list-sessions exited with {}: {}",
                output.status,
                stderr.trim()
            );
            return Ok(Vec::new());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_session_list(&stdout))
    }
}

impl Default for TmuxClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the whole `list-sessions` output, skipping lines that don't parse
pub fn parse_session_list(output: &str) -> Vec<Session> {
    output
        .lines()
        .filter_map(|line| {
            let session = parse_session_line(line);
            if session.is_none() && !line.trim().is_empty() {
                debug!("skipping unparseable tmux line: {:?}", line);
            }
            session
        })
        .collect()
}

/// Parse one `name|windows|created|attached|activity` line.
///
/// Malformed numbers fall back to defaults instead of dropping the session:
/// windows to 1, created to 0, activity to the created time.
pub fn parse_session_line(line: &str) -> Option<Session> {
    if line.is_empty() {
        return None;
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let name = fields.next()?;
    let windows = fields.next()?;
    let created = fields.next()?;
    let attached = fields.next()?;
    let activity = fields.next()?;

    if name.is_empty() {
        return None;
    }

    let created_at = parse_digits(created).unwrap_or(0);

    Some(Session {
        name: name.to_string(),
        windows: parse_digits(windows).unwrap_or(1),
        created_at,
        attached: attached == "1",
        activity_at: parse_digits(activity).unwrap_or(created_at),
    })
}

/// Parse an unsigned decimal literal: digits only, no sign or whitespace
fn parse_digits<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
