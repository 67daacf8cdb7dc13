use crate::calendar::business_days_elapsed;
use crate::error::Result;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Business days an alias may sit on open delegations before review.
pub const DEFAULT_STALE_THRESHOLD: u32 = 5;

// ---------------------------------------------------------------------------
// Open work handed to delegates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDelegation {
    pub alias: String,
    pub task_title: String,
    /// Date the task was delegated (`Scheduled:` field).
    pub scheduled_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDelegation {
    pub alias: String,
    pub task_title: String,
    pub checkin_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaleDelegate {
    pub alias: String,
    pub open_count: usize,
    /// Business days since the oldest open delegation.
    pub oldest_delegation_days: u32,
    pub tasks: Vec<String>,
}

// ---------------------------------------------------------------------------
// Stale delegates
// ---------------------------------------------------------------------------

/// Aliases holding two or more open delegations, the oldest of which has
/// been open for more than `threshold_days` business days. Most stale first.
pub fn detect_stale_delegates(
    delegations: &[ActiveDelegation],
    threshold_days: u32,
    today: NaiveDate,
) -> Vec<StaleDelegate> {
    // Group by alias, keeping first-seen order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&ActiveDelegation>)> = Vec::new();
    for d in delegations {
        let slot = *index.entry(d.alias.as_str()).or_insert_with(|| {
            groups.push((d.alias.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(d);
    }

    let mut stale: Vec<StaleDelegate> = groups
        .into_iter()
        .filter(|(_, tasks)| tasks.len() >= 2)
        .filter_map(|(alias, tasks)| {
            let max_age = tasks
                .iter()
                .map(|t| business_days_elapsed(t.scheduled_date, today))
                .max()?;
            (max_age > threshold_days).then(|| StaleDelegate {
                alias: alias.to_string(),
                open_count: tasks.len(),
                oldest_delegation_days: max_age,
                tasks: tasks.iter().map(|t| t.task_title.clone()).collect(),
            })
        })
        .collect();

    stale.sort_by(|a, b| b.oldest_delegation_days.cmp(&a.oldest_delegation_days));
    stale
}

// ---------------------------------------------------------------------------
// Overdue check-ins
// ---------------------------------------------------------------------------

/// A check-in due today counts as overdue.
pub fn is_overdue(checkin_date: NaiveDate, today: NaiveDate) -> bool {
    checkin_date <= today
}

/// Overdue delegations, earliest check-in first.
pub fn overdue_delegations(delegations: &[OpenDelegation], today: NaiveDate) -> Vec<OpenDelegation> {
    let mut overdue: Vec<OpenDelegation> = delegations
        .iter()
        .filter(|d| is_overdue(d.checkin_date, today))
        .cloned()
        .collect();
    overdue.sort_by_key(|d| d.checkin_date);
    overdue
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a list of delegations from a YAML file, or JSON when the extension
/// is `.json`.
pub fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = std::fs::read_to_string(path)?;
    let items: Option<Vec<T>> = crate::io::parse_document(path, &data)?;
    Ok(items.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
