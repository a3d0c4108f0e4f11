use std::cmp::Ordering;

use crate::tmux::Session;

/// Keep sessions whose name contains `query` (case-insensitive) and order
/// them: attached first, then most recent activity, then name.
///
/// An empty query keeps everything. The sort is stable.
pub fn filter_and_rank(sessions: Vec<Session>, query: &str) -> Vec<Session> {
    let needle = query.to_lowercase();

    let mut matched: Vec<Session> = sessions
        .into_iter()
        .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
        .collect();

    matched.sort_by(rank_order);
    matched
}

/// Attached before detached, newer activity first, then case-insensitive name
pub fn rank_order(a: &Session, b: &Session) -> Ordering {
    b.attached
        .cmp(&a.attached)
        .then_with(|| b.activity_at.cmp(&a.activity_at))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session(name: &str, attached: bool, activity_at: i64) -> Session {
        Session {
            name: name.to_string(),
            windows: 1,
            created_at: 0,
            attached,
            activity_at,
        }
    }

    fn names(sessions: &[Session]) -> Vec<&str> {
        sessions.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let sessions = vec![session("a", false, 1), session("b", false, 2)];
        assert_eq!(filter_and_rank(sessions, "").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let sessions = vec![
            session("Work", false, 1),
            session("homework", false, 2),
            session("notes", false, 3),
        ];
        let ranked = filter_and_rank(sessions, "WORK");
        assert_eq!(names(&ranked), vec!["homework", "Work"]);
    }

    #[test]
    fn test_no_match() {
        let sessions = vec![session("work", true, 1)];
        assert!(filter_and_rank(sessions, "zzz").is_empty());
    }

    #[test]
    fn test_attached_before_more_recent_detached() {
        let sessions = vec![
            session("fresh", false, 2_000),
            session("inuse", true, 1_000),
        ];
        let ranked = filter_and_rank(sessions, "");
        assert_eq!(names(&ranked), vec!["inuse", "fresh"]);
    }

    #[test]
    fn test_full_ordering() {
        let sessions = vec![
            session("delta", false, 10),
            session("Bravo", true, 5),
            session("alpha", true, 5),
            session("charlie", true, 9),
            session("echo", false, 30),
            session("Foxtrot", false, 10),
        ];
        let ranked = filter_and_rank(sessions, "");
        assert_eq!(
            names(&ranked),
            vec!["charlie", "alpha", "Bravo", "echo", "delta", "Foxtrot"]
        );

        for pair in ranked.windows(2) {
            assert_ne!(rank_order(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let sessions = vec![
            session("b", false, 3),
            session("a", true, 1),
            session("c", false, 3),
            session("d", true, 7),
        ];
        let once = filter_and_rank(sessions, "");
        let twice = filter_and_rank(once.clone(), "");
        assert_eq!(once, twice);
    }
}
