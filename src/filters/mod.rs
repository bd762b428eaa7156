//! Fuzzy search over session lists.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher};

use crate::models::Session;

struct SessionHaystack {
    position: usize,
    text: String,
    session: Session,
}

impl AsRef<str> for SessionHaystack {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Keep sessions whose label or project name fuzzy-matches `query`.
///
/// Matching ignores case. The input order (for example a sort by recency) is
/// preserved; a blank query keeps everything.
pub fn fuzzy_filter_sessions(sessions: Vec<Session>, query: &str) -> Vec<Session> {
    let query = query.trim();
    if query.is_empty() {
        return sessions;
    }

    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);

    let haystacks = sessions.into_iter().enumerate().map(|(position, session)| SessionHaystack {
        position,
        text: format!("{} {}", session.display, session.project_name),
        session,
    });

    let mut matches = pattern.match_list(haystacks, &mut matcher);
    matches.sort_by_key(|(haystack, _)| haystack.position);
    matches.into_iter().map(|(haystack, _)| haystack.session).collect()
}
