//! List, filter and rank tmux sessions and render them as launcher
//! script-filter items.

pub mod actions;
pub mod alfred;
pub mod app;
pub mod filter;
pub mod time;
pub mod tmux;
