use crate::score::{rank_candidates, score_delegate, ScoredCandidate};
use crate::stakeholder::Stakeholder;
use crate::types::MatchStatus;
use serde::{Deserialize, Serialize};

/// Candidates within this many points of the top score are also surfaced.
pub const RUNNER_UP_WINDOW: i32 = 2;

/// Upper bound on surfaced candidates.
pub const MAX_CANDIDATES: usize = 3;

// ---------------------------------------------------------------------------
// MatchResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub status: MatchStatus,
    pub candidates: Vec<ScoredCandidate>,
    pub message: String,
}

impl MatchResult {
    fn new(status: MatchStatus, candidates: Vec<ScoredCandidate>) -> Self {
        let message = build_message(status, &candidates);
        Self {
            status,
            candidates,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Score every stakeholder against the task and keep the viable leaders.
///
/// Returns `EmptyGraph` for an empty list, `NoMatch` when nobody scores
/// above zero, otherwise `Match` with at most [`MAX_CANDIDATES`] entries.
pub fn run_match(
    stakeholders: &[Stakeholder],
    title: &str,
    description: &str,
) -> (MatchStatus, Vec<ScoredCandidate>) {
    if stakeholders.is_empty() {
        return (MatchStatus::EmptyGraph, Vec::new());
    }

    let scored: Vec<ScoredCandidate> = stakeholders
        .iter()
        .map(|s| score_delegate(s, title, description))
        .collect();
    let viable: Vec<ScoredCandidate> = rank_candidates(&scored)
        .into_iter()
        .filter(|c| c.score > 0)
        .collect();

    let Some(top_score) = viable.first().map(|c| c.score) else {
        return (MatchStatus::NoMatch, Vec::new());
    };

    let candidates = viable
        .into_iter()
        .filter(|c| c.score >= top_score - RUNNER_UP_WINDOW)
        .take(MAX_CANDIDATES)
        .collect();
    (MatchStatus::Match, candidates)
}

/// Match against a graph that may not exist. `None` yields `NoGraph`.
pub fn match_graph(
    stakeholders: Option<&[Stakeholder]>,
    title: &str,
    description: &str,
) -> MatchResult {
    let Some(stakeholders) = stakeholders else {
        return MatchResult::new(MatchStatus::NoGraph, Vec::new());
    };
    let (status, candidates) = run_match(stakeholders, title, description);
    tracing::debug!(%status, candidates = candidates.len(), "delegate match");
    MatchResult::new(status, candidates)
}

/// Human-readable summary of a match outcome.
pub fn build_message(status: MatchStatus, candidates: &[ScoredCandidate]) -> String {
    match (status, candidates.first()) {
        (MatchStatus::NoGraph, _) => "No stakeholder graph found. Copy \
             integrations/config/stakeholders.yaml.example to stakeholders.yaml \
             and fill in your delegates."
            .to_string(),
        (MatchStatus::EmptyGraph, _) => {
            "Stakeholder graph is empty — no delegates configured.".to_string()
        }
        (MatchStatus::NoMatch, _) | (MatchStatus::Match, None) => {
            "No clear domain match in your stakeholder graph. Who should own this?".to_string()
        }
        (MatchStatus::Match, Some(top)) => {
            let fit = if top.matched_domains.is_empty() {
                "relationship fit".to_string()
            } else {
                format!("domain match: {}", top.matched_domains.join(", "))
            };
            let mut msg = format!("Suggested delegate: {} ({}) — {fit}", top.alias, top.role);
            if let Some(second) = candidates.get(1) {
                msg.push_str(&format!(
                    ". Also matched: {} ({}).",
                    second.alias, second.role
                ));
            }
            if top.capacity_warning {
                msg.push_str(&format!(
                    " Note: {} is showing low capacity — confirm availability.",
                    top.alias
                ));
            }
            msg
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
