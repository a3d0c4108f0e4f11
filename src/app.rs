use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::alfred::{self, Item, ScriptFilter};
use crate::filter::filter_and_rank;
use crate::tmux::{Session, TmuxClient, TmuxError};

/// List sessions through `client` and build the document for `query`.
///
/// Never fails: any error becomes a single informational item.
pub async fn run(client: &TmuxClient, query: &str, now: DateTime<Utc>) -> ScriptFilter {
    let listing = client
        .list_sessions()
        .await
        .context("failed to list tmux sessions");
    present(listing, query, now)
}

/// Turn a session listing (or its failure) into the output document
pub fn present(listing: Result<Vec<Session>>, query: &str, now: DateTime<Utc>) -> ScriptFilter {
    match listing {
        Ok(sessions) => {
            let total = sessions.len();
            let ranked = filter_and_rank(sessions, query);
            debug!("{} of {} sessions match {:?}", ranked.len(), total, query);
            ScriptFilter::new(alfred::render(&ranked, query, now))
        }
        Err(err) => ScriptFilter::new(vec![error_item(&err)]),
    }
}

/// Collapse an error into the single item shown in its place
pub fn error_item(err: &anyhow::Error) -> Item {
    match err.downcast_ref::<TmuxError>() {
        Some(TmuxError::NotInstalled { path }) => {
            warn!("tmux executable not found: {}", path);
            alfred::tmux_missing()
        }
        _ => {
            error!("{:#}", err);
            alfred::unexpected_error(format!("{:#}", err))
        }
    }
}
