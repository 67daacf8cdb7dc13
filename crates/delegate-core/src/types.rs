use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Relationship
// ---------------------------------------------------------------------------

/// Any value outside the known set loads as `Unknown` and scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    DirectReport,
    Peer,
    Vendor,
    Partner,
    #[serde(other)]
    Unknown,
}

impl Relationship {
    /// Points added to a delegate's score for this relationship.
    pub fn weight(self) -> i32 {
        match self {
            Relationship::DirectReport => 2,
            Relationship::Peer => 1,
            Relationship::Vendor | Relationship::Partner | Relationship::Unknown => 0,
        }
    }

    /// Tiebreak rank used when two candidates share a score.
    pub fn rank(self) -> u8 {
        match self {
            Relationship::DirectReport => 2,
            Relationship::Peer => 1,
            Relationship::Vendor | Relationship::Partner | Relationship::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::DirectReport => "direct_report",
            Relationship::Peer => "peer",
            Relationship::Vendor => "vendor",
            Relationship::Partner => "partner",
            Relationship::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CapacitySignal
// ---------------------------------------------------------------------------

/// A missing or unrecognized signal loads as `Unknown` and scores 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacitySignal {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CapacitySignal {
    pub fn weight(self) -> i32 {
        match self {
            CapacitySignal::High => 2,
            CapacitySignal::Medium => 1,
            CapacitySignal::Low => -1,
            CapacitySignal::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CapacitySignal::High => "high",
            CapacitySignal::Medium => "medium",
            CapacitySignal::Low => "low",
            CapacitySignal::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CapacitySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Match,
    NoMatch,
    NoGraph,
    EmptyGraph,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Match => "match",
            MatchStatus::NoMatch => "no_match",
            MatchStatus::NoGraph => "no_graph",
            MatchStatus::EmptyGraph => "empty_graph",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DelegateState
// ---------------------------------------------------------------------------

/// Where a task record sits in the delegation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegateState {
    /// `Suggested delegate:` set during prioritization, not yet confirmed.
    Suggested,
    /// `Delegate to:` set, push to reminders still pending.
    Confirmed,
    /// `Synced:` present; nothing left to do.
    Synced,
    /// `Delegate to:` holds the "not yet assigned" placeholder.
    Unassigned,
    None,
}

impl DelegateState {
    pub fn as_str(self) -> &'static str {
        match self {
            DelegateState::Suggested => "suggested",
            DelegateState::Confirmed => "confirmed",
            DelegateState::Synced => "synced",
            DelegateState::Unassigned => "unassigned",
            DelegateState::None => "none",
        }
    }
}

impl fmt::Display for DelegateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
