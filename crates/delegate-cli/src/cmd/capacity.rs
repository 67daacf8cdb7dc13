use super::date_or_today;
use crate::output::{print_json, print_table};
use anyhow::Context;
use delegate_core::calendar::format_date;
use delegate_core::delegation::{
    detect_stale_delegates, load_list, overdue_delegations, ActiveDelegation, OpenDelegation,
};
use std::path::Path;

// ---------------------------------------------------------------------------
// stale
// ---------------------------------------------------------------------------

pub fn stale(file: &Path, threshold: u32, today: Option<&str>, json: bool) -> anyhow::Result<()> {
    let delegations: Vec<ActiveDelegation> =
        load_list(file).with_context(|| format!("failed to load {}", file.display()))?;
    let today = date_or_today(today)?;
    let flagged = detect_stale_delegates(&delegations, threshold, today);
    tracing::debug!(
        delegations = delegations.len(),
        stale = flagged.len(),
        threshold,
        "capacity review"
    );

    if json {
        print_json(&serde_json::json!({
            "today": format_date(today),
            "threshold": threshold,
            "stale": flagged,
        }))?;
        return Ok(());
    }

    if flagged.is_empty() {
        println!("No delegates need a capacity review.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = flagged
        .iter()
        .map(|s| {
            vec![
                s.alias.clone(),
                s.open_count.to_string(),
                s.oldest_delegation_days.to_string(),
                s.tasks.join("; "),
            ]
        })
        .collect();
    print_table(&["DELEGATE", "OPEN", "OLDEST (BIZ DAYS)", "TASKS"], &rows);
    Ok(())
}

// ---------------------------------------------------------------------------
// overdue
// ---------------------------------------------------------------------------

pub fn overdue(file: &Path, today: Option<&str>, json: bool) -> anyhow::Result<()> {
    let delegations: Vec<OpenDelegation> =
        load_list(file).with_context(|| format!("failed to load {}", file.display()))?;
    let today = date_or_today(today)?;
    let due = overdue_delegations(&delegations, today);

    if json {
        print_json(&serde_json::json!({
            "today": format_date(today),
            "overdue": due,
        }))?;
        return Ok(());
    }

    if due.is_empty() {
        println!("No check-ins due.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = due
        .iter()
        .map(|o| {
            vec![
                format_date(o.checkin_date),
                o.alias.clone(),
                o.task_title.clone(),
            ]
        })
        .collect();
    print_table(&["CHECK-IN", "DELEGATE", "TASK"], &rows);
    Ok(())
}
