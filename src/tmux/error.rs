use std::io;

use thiserror::Error;

/// Errors that escape the tmux session source.
///
/// A nonzero exit or a timeout is not an error: both mean "no sessions".
#[derive(Error, Debug)]
pub enum TmuxError {
    /// The tmux executable could not be found
    #[error("tmux executable not found: {path}")]
    NotInstalled { path: String },

    /// Spawning or waiting on tmux failed for another reason
    #[error("failed to run {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl TmuxError {
    pub(crate) fn from_io(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotInstalled {
                path: path.to_string(),
            }
        } else {
            Self::Spawn {
                path: path.to_string(),
                source,
            }
        }
    }
}
