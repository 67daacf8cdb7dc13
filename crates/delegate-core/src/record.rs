use crate::calendar::format_date;
use crate::error::{DelegateError, Result};
use crate::types::DelegateState;
use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// One task from the task list: field label → value.
pub type TaskRecord = BTreeMap<String, String>;

/// Task-list fields in the order they are written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields(Vec<(String, String)>);

impl RecordFields {
    fn from_pairs<const N: usize>(pairs: [(&str, String); N]) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

#[cfg(test)]
impl RecordFields {
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    fn to_task_record(&self) -> TaskRecord {
        self.0.iter().cloned().collect()
    }
}

impl Serialize for RecordFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

pub const FIELD_SYNCED: &str = "Synced";
pub const FIELD_DELEGATE_TO: &str = "Delegate to";
pub const FIELD_SUGGESTED_DELEGATE: &str = "Suggested delegate";

/// Placeholder written to `Delegate to:` when no stakeholder fits.
pub const UNASSIGNED_MARKER: &str = "not yet assigned";

// ---------------------------------------------------------------------------
// Delegation state
// ---------------------------------------------------------------------------

fn non_blank<'a>(record: &'a TaskRecord, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// Dedup guard: a non-blank `Synced:` means the delegation was already
/// pushed in an earlier session.
pub fn is_already_synced(record: &TaskRecord) -> bool {
    non_blank(record, FIELD_SYNCED).is_some()
}

pub fn has_confirmed_delegate(record: &TaskRecord) -> bool {
    non_blank(record, FIELD_DELEGATE_TO).is_some_and(|v| !v.contains(UNASSIGNED_MARKER))
}

/// Classify a task record. Precedence: synced, then `Delegate to`
/// (unassigned or confirmed), then suggested, then none.
pub fn delegate_state(record: &TaskRecord) -> DelegateState {
    if is_already_synced(record) {
        return DelegateState::Synced;
    }
    if let Some(delegate) = record.get(FIELD_DELEGATE_TO).filter(|v| !v.is_empty()) {
        return if delegate.contains(UNASSIGNED_MARKER) {
            DelegateState::Unassigned
        } else {
            DelegateState::Confirmed
        };
    }
    if non_blank(record, FIELD_SUGGESTED_DELEGATE).is_some() {
        return DelegateState::Suggested;
    }
    DelegateState::None
}

/// Parse a `Key=Value` pair as given on the command line.
pub fn parse_field(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| DelegateError::InvalidField(s.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(DelegateError::InvalidField(s.to_string()));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

// ---------------------------------------------------------------------------
// DelegatedTask
// ---------------------------------------------------------------------------

/// The task-list entry for a task handed off directly with `/delegate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegatedTask {
    pub title: String,
    pub description: String,
    pub source: String,
    pub requester: String,
    pub urgency: String,
    pub quadrant: String,
    pub delegate_to: String,
    pub checkin_date: NaiveDate,
    pub scheduled: NaiveDate,
    pub action: String,
}

impl DelegatedTask {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        delegate_alias: impl Into<String>,
        checkin_date: NaiveDate,
        scheduled: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            source: "Direct delegation".to_string(),
            requester: "Self".to_string(),
            urgency: "Delegated".to_string(),
            quadrant: "Q3 — Delegate if possible".to_string(),
            delegate_to: delegate_alias.into(),
            checkin_date,
            scheduled,
            action: format!("Delegated — check in {}", format_date(checkin_date)),
        }
    }

    pub fn to_record(&self) -> RecordFields {
        RecordFields::from_pairs([
            ("Title", self.title.clone()),
            ("Description", self.description.clone()),
            ("Source", self.source.clone()),
            ("Requester", self.requester.clone()),
            ("Urgency", self.urgency.clone()),
            ("Quadrant", self.quadrant.clone()),
            (FIELD_DELEGATE_TO, self.delegate_to.clone()),
            ("Check-in date", format_date(self.checkin_date)),
            ("Scheduled", format_date(self.scheduled)),
            ("Action", self.action.clone()),
        ])
    }
}

// ---------------------------------------------------------------------------
// Follow-ups for missed check-ins
// ---------------------------------------------------------------------------

pub fn follow_up_title(original_title: &str, alias: &str) -> String {
    format!("Follow up: {original_title} with {alias}")
}

pub fn follow_up_description(alias: &str, today: NaiveDate, original_checkin: NaiveDate) -> String {
    format!(
        "Delegation follow-up — {alias} reported still in progress as of {}. \
         Original check-in was {}.",
        format_date(today),
        format_date(original_checkin),
    )
}

/// Intake record appended to the unprocessed section when a delegate
/// misses a check-in.
pub fn follow_up_record(
    original_title: &str,
    alias: &str,
    today: NaiveDate,
    original_checkin: NaiveDate,
) -> RecordFields {
    RecordFields::from_pairs([
        ("Title", follow_up_title(original_title, alias)),
        (
            "Description",
            follow_up_description(alias, today, original_checkin),
        ),
        ("Source", "Delegation follow-up".to_string()),
        ("Requester", alias.to_string()),
        ("Urgency", "Check-in overdue".to_string()),
        ("Due date", "Not specified".to_string()),
        ("Status", "Unprocessed".to_string()),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
