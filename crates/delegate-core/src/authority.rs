//! Guard phrases that mark a task as needing the owner's own authority.
//!
//! A flagged task must not be routed through automated delegation; the
//! check runs before matching.

pub const AUTHORITY_PHRASES: &[&str] = &[
    "requires your sign-off",
    "executive decision",
    "personnel decision",
    "sensitive communication on your behalf",
];

/// Guard phrases present in the task, in table order.
pub fn authority_flags(title: &str, description: &str) -> Vec<&'static str> {
    let combined = format!("{title} {description}").to_lowercase();
    AUTHORITY_PHRASES
        .iter()
        .copied()
        .filter(|p| combined.contains(p))
        .collect()
}

pub fn has_authority_flag(title: &str, description: &str) -> bool {
    !authority_flags(title, description).is_empty()
}
