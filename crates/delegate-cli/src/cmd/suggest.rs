use crate::output::print_json;
use delegate_core::authority::authority_flags;
use delegate_core::matching::{match_graph, MatchResult};
use delegate_core::types::MatchStatus;
use std::path::Path;

pub fn run(
    root: &Path,
    graph: Option<&Path>,
    title: &str,
    description: &str,
    skip_authority_check: bool,
    json: bool,
) -> anyhow::Result<()> {
    if !skip_authority_check {
        let flags = authority_flags(title, description);
        if !flags.is_empty() {
            tracing::warn!(?flags, "task requires owner authority; not suggesting a delegate");
            if json {
                print_json(&serde_json::json!({
                    "status": "blocked",
                    "candidates": [],
                    "authority_flags": flags,
                    "message": "This task needs your own authority and can't be delegated automatically.",
                }))?;
            }
            anyhow::bail!("authority flag: {}", flags.join(", "));
        }
    }

    let stakeholders = super::load_graph(root, graph)?;
    let result = match_graph(stakeholders.as_deref(), title, description);

    if json {
        print_json(&result)?;
    } else {
        print_text(&result);
    }
    Ok(())
}

fn print_text(result: &MatchResult) {
    println!("{}", result.message);
    if result.status != MatchStatus::Match {
        return;
    }
    println!();
    for (i, c) in result.candidates.iter().enumerate() {
        let domains = if c.matched_domains.is_empty() {
            "-".to_string()
        } else {
            c.matched_domains.join(", ")
        };
        let warn = if c.capacity_warning { "  [low capacity]" } else { "" };
        println!(
            "  {}. {:<16} {:>3}  {} / {}  domains: {domains}{warn}",
            i + 1,
            c.alias,
            c.score,
            c.relationship,
            c.capacity_signal,
        );
    }
}
