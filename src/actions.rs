use std::fmt;
use std::str::FromStr;

/// Action carried in an item's `arg`.
///
/// Rendered as `name` (attach) or `tag:name`. Session names never contain
/// `:`, so the first colon always separates the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Attach to (open) a session
    Attach(String),
    /// Create a new session
    Create(String),
    /// Delete a session
    Delete(String),
    /// Detach clients from a session
    Detach(String),
}

impl SessionAction {
    /// Session name the action targets
    pub fn name(&self) -> &str {
        match self {
            Self::Attach(name) | Self::Create(name) | Self::Delete(name) | Self::Detach(name) => {
                name
            }
        }
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attach(name) => write!(f, "{}", name),
            Self::Create(name) => write!(f, "create:{}", name),
            Self::Delete(name) => write!(f, "delete:{}", name),
            Self::Detach(name) => write!(f, "detach:{}", name),
        }
    }
}

impl FromStr for SessionAction {
    type Err = std::convert::Infallible;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let action = match arg.split_once(':') {
            Some(("create", name)) => Self::Create(name.to_string()),
            Some(("delete", name)) => Self::Delete(name.to_string()),
            Some(("detach", name)) => Self::Detach(name.to_string()),
            _ => Self::Attach(arg.to_string()),
        };
        Ok(action)
    }
}
