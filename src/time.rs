use chrono::{DateTime, Datelike, Utc};

/// Format a unix timestamp as a coarse age relative to `now`
/// ("3d ago", "2h ago", "5m ago", "just now").
///
/// Returns "unknown" when the timestamp falls outside years 1 through 9999.
pub fn format_relative(timestamp: i64, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::from_timestamp(timestamp, 0) else {
        return "unknown".to_string();
    };
    if !(1..=9999).contains(&then.year()) {
        return "unknown".to_string();
    }

    let delta = now.signed_duration_since(then);

    if delta.num_days() > 0 {
        return format!("{}d ago", delta.num_days());
    }
    if delta.num_hours() > 0 {
        return format!("{}h ago", delta.num_hours());
    }
    if delta.num_minutes() > 0 {
        return format!("{}m ago", delta.num_minutes());
    }

    // Also covers timestamps in the future (clock skew)
    "just now".to_string()
}
