use crate::stakeholder::Stakeholder;
use crate::types::{CapacitySignal, Relationship};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Points per domain tag found in the task text.
pub const DOMAIN_MATCH_WEIGHT: i32 = 3;

// ---------------------------------------------------------------------------
// ScoredCandidate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub alias: String,
    pub role: String,
    pub relationship: Relationship,
    pub capacity_signal: CapacitySignal,
    pub score: i32,
    /// Domains that hit, in the stakeholder's domain-list order.
    pub matched_domains: Vec<String>,
    pub capacity_warning: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Text normalization
// ---------------------------------------------------------------------------

static NON_WORD_RE: OnceLock<Regex> = OnceLock::new();

fn non_word_re() -> &'static Regex {
    NON_WORD_RE.get_or_init(|| Regex::new(r"[^a-z0-9\s]").unwrap())
}

/// Lower-case `text` and replace every character outside `[a-z0-9\s]`
/// with a space.
pub fn normalize_text(text: &str) -> String {
    non_word_re()
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

pub fn score_delegate(
    stakeholder: &Stakeholder,
    task_title: &str,
    task_description: &str,
) -> ScoredCandidate {
    let search_text = normalize_text(&format!("{task_title} {task_description}"));

    let matched_domains: Vec<String> = stakeholder
        .domains
        .iter()
        .filter(|d| search_text.contains(&normalize_text(d)))
        .cloned()
        .collect();

    let domain_points = DOMAIN_MATCH_WEIGHT * matched_domains.len() as i32;
    let score = domain_points
        + stakeholder.relationship.weight()
        + stakeholder.capacity_signal.weight();

    ScoredCandidate {
        alias: stakeholder.display_alias().to_string(),
        role: stakeholder.role.clone(),
        relationship: stakeholder.relationship,
        capacity_signal: stakeholder.capacity_signal,
        score,
        matched_domains,
        capacity_warning: stakeholder.capacity_signal == CapacitySignal::Low,
        notes: stakeholder.notes.clone(),
    }
}

/// Sort by score, then relationship rank, both descending. Exact ties keep
/// their input order.
pub fn rank_candidates(candidates: &[ScoredCandidate]) -> Vec<ScoredCandidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.relationship.rank().cmp(&a.relationship.rank()))
    });
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
