//! Script-filter output: the JSON item schema the launcher consumes, and
//! the builders that turn sessions (or their absence) into items.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::actions::SessionAction;
use crate::tmux::{is_valid_name, Session};

/// Top-level document: `{"items": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

impl ScriptFilter {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Serialize as compact UTF-8 JSON (non-ASCII is not escaped)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One row in the launcher list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Value handed back when the row is chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Whether the row can be actioned; omitted when true
    #[serde(skip_serializing_if = "is_true")]
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Mods>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Alternate actions bound to modifier keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctrl: Option<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modifier {
    pub subtitle: String,
    pub arg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub path: String,
}

fn is_true(value: &bool) -> bool {
    *value
}

impl Item {
    /// Actionable item that returns `action` when chosen
    pub fn action(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        action: &SessionAction,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: Some(subtitle.into()),
            arg: Some(action.to_string()),
            valid: true,
            mods: None,
            icon: None,
        }
    }

    /// Informational item that cannot be actioned
    pub fn message(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: Some(subtitle.into()),
            arg: None,
            valid: false,
            mods: None,
            icon: None,
        }
    }

    pub fn with_mods(mut self, mods: Mods) -> Self {
        self.mods = Some(mods);
        self
    }

    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon = Some(Icon { path: path.into() });
        self
    }
}

/// Build the item list for already filtered and ranked sessions.
///
/// With no sessions the list holds a single prompt: create `query` (or
/// explain why it can't be created) when a query was typed, otherwise the
/// empty-state hint.
pub fn render(sessions: &[Session], query: &str, now: DateTime<Utc>) -> Vec<Item> {
    if !sessions.is_empty() {
        return sessions.iter().map(|s| session_item(s, now)).collect();
    }

    if query.is_empty() {
        vec![empty_state()]
    } else {
        vec![create_prompt(query)]
    }
}

/// Item for an existing session: enter attaches, cmd deletes, ctrl detaches
pub fn session_item(session: &Session, now: DateTime<Utc>) -> Item {
    let name = &session.name;

    let detach_subtitle = if session.attached {
        format!("Detach from session {}", name)
    } else {
        format!("Session {} already detached", name)
    };

    Item::action(
        name.clone(),
        session.subtitle(now),
        &SessionAction::Attach(name.clone()),
    )
    .with_mods(Mods {
        cmd: Some(Modifier {
            subtitle: format!("Delete session {}", name),
            arg: SessionAction::Delete(name.clone()).to_string(),
            valid: None,
        }),
        ctrl: Some(Modifier {
            subtitle: detach_subtitle,
            arg: SessionAction::Detach(name.clone()).to_string(),
            valid: Some(session.attached),
        }),
    })
}

/// Offer to create `query`, or explain why it is not a usable name
pub fn create_prompt(query: &str) -> Item {
    if is_valid_name(query) {
        return Item::action(
            format!("Create new session \"{}\"", query),
            "Press Enter to create this tmux session",
            &SessionAction::Create(query.to_string()),
        )
        .with_icon("icon.png");
    }

    Item::message(
        format!("Invalid session name \"{}\"", query),
        "Session names cannot contain spaces, dots, or colons",
    )
}

pub fn empty_state() -> Item {
    Item::message(
        "No tmux sessions found",
        "Start typing to create a new session",
    )
}

pub fn tmux_missing() -> Item {
    Item::message("tmux not found", "Install tmux: brew install tmux")
}

pub fn unexpected_error(description: impl Into<String>) -> Item {
    Item::message("Unexpected error", description)
}
