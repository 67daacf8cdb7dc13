use crate::error::{DelegateError, Result};
use crate::types::{CapacitySignal, Relationship};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// A stakeholder's aliases: never empty. The first entry is the display
/// alias; the rest are case-insensitive lookup terms.
///
/// The graph file may hold either a single string (legacy) or a list; both
/// load into the same representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aliases(Vec<String>);

impl Aliases {
    /// Returns `None` when `entries` is empty.
    pub fn new(entries: Vec<String>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self(entries))
        }
    }

    #[cfg(test)]
    pub(crate) fn single(alias: impl Into<String>) -> Self {
        Self(vec![alias.into()])
    }

    pub fn display(&self) -> &str {
        &self.0[0]
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// True when any entry equals `term` after trimming and lower-casing
    /// both sides.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        self.0.iter().any(|e| e.trim().to_lowercase() == needle)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAliases {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for Aliases {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = match RawAliases::deserialize(deserializer)? {
            RawAliases::One(s) => vec![s],
            RawAliases::Many(v) => v,
        };
        Aliases::new(entries)
            .ok_or_else(|| serde::de::Error::custom("alias list must not be empty"))
    }
}

impl Serialize for Aliases {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Stakeholder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stakeholder {
    /// Full name. Kept for the owner's reference only; never echoed in output.
    pub name: String,
    pub alias: Aliases,
    pub role: String,
    pub relationship: Relationship,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub capacity_signal: CapacitySignal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Stakeholder {
    pub fn display_alias(&self) -> &str {
        self.alias.display()
    }
}

/// Return the display alias of the first stakeholder with an alias entry
/// equal to `input` (case-insensitive, whitespace-trimmed).
pub fn resolve_alias<'a>(input: &str, stakeholders: &'a [Stakeholder]) -> Option<&'a str> {
    stakeholders
        .iter()
        .find(|s| s.alias.matches(input))
        .map(Stakeholder::display_alias)
}

// ---------------------------------------------------------------------------
// StakeholderFile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StakeholderFile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stakeholders: Vec<Stakeholder>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Stakeholder>, D::Error> {
    Ok(Option::<Vec<Stakeholder>>::deserialize(deserializer)?.unwrap_or_default())
}

impl StakeholderFile {
    pub fn parse(data: &str) -> Result<Self> {
        // An empty document parses as YAML null.
        let file: Option<StakeholderFile> = serde_yaml::from_str(data)?;
        Ok(file.unwrap_or_default())
    }
}

/// Load the stakeholder graph at `path`.
///
/// `Ok(None)` means there is no graph file at all; `Ok(Some(vec![]))` means
/// the file exists but lists nobody. Callers report these differently.
pub fn load_stakeholders(path: &Path) -> Result<Option<Vec<Stakeholder>>> {
    let Some(data) = crate::io::read_if_exists(path)? else {
        tracing::debug!(path = %path.display(), "no stakeholder graph");
        return Ok(None);
    };
    let file = StakeholderFile::parse(&data)?;
    for s in &file.stakeholders {
        if s.alias.entries().iter().all(|a| a.trim().is_empty()) {
            return Err(DelegateError::EmptyAlias(s.name.clone()));
        }
        if s.relationship == Relationship::Unknown || s.capacity_signal == CapacitySignal::Unknown {
            tracing::warn!(
                alias = s.display_alias(),
                relationship = %s.relationship,
                capacity_signal = %s.capacity_signal,
                "unrecognized relationship or capacity signal; scoring it as 0"
            );
        }
    }
    tracing::debug!(
        path = %path.display(),
        count = file.stakeholders.len(),
        "loaded stakeholder graph"
    );
    Ok(Some(file.stakeholders))
}

/// Starter graph written by `init`. Names are placeholders.
pub const EXAMPLE_GRAPH: &str = r#"# Stakeholder graph for delegation suggestions.
# Copy to stakeholders.yaml (gitignored) and replace with your delegates.
#
# alias: first entry is shown in suggestions; the rest are lookup terms.
# relationship: direct_report | peer | vendor | partner
# capacity_signal: high | medium | low
stakeholders:
  - name: FIRST_LAST_1
    alias: ["Alex E.", "alex", "ae"]
    role: Senior Engineer
    relationship: direct_report
    domains: ["infrastructure", "CI/CD", "incident response", "observability"]
    capacity_signal: medium
  - name: FIRST_LAST_2
    alias: ["Jordan F.", "jordan"]
    role: Engineering Lead
    relationship: direct_report
    domains: ["frontend", "mobile", "design systems", "accessibility"]
    capacity_signal: high
  - name: VENDOR_1
    alias: "Vendor A"
    role: Account Manager
    relationship: vendor
    domains: ["contracts", "procurement", "licensing"]
    capacity_signal: high
    contact_hint: email
"#;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
