use crate::output::{print_json, print_table};
use delegate_core::stakeholder::resolve_alias;
use std::path::Path;

const NO_GRAPH: &str = "no stakeholder graph found: run 'delegate init' and copy the example";

pub fn resolve(root: &Path, graph: Option<&Path>, name: &str, json: bool) -> anyhow::Result<()> {
    let Some(stakeholders) = super::load_graph(root, graph)? else {
        anyhow::bail!(NO_GRAPH);
    };
    let alias = resolve_alias(name, &stakeholders);

    if json {
        print_json(&serde_json::json!({ "input": name, "alias": alias }))?;
    } else if let Some(alias) = alias {
        println!("{alias}");
    }

    match alias {
        Some(_) => Ok(()),
        None => anyhow::bail!("no stakeholder matches '{}'", name.trim()),
    }
}

pub fn list(root: &Path, graph: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let Some(stakeholders) = super::load_graph(root, graph)? else {
        anyhow::bail!(NO_GRAPH);
    };

    if json {
        let rows: Vec<serde_json::Value> = stakeholders
            .iter()
            .map(|s| {
                serde_json::json!({
                    "alias": s.display_alias(),
                    "role": s.role,
                    "relationship": s.relationship,
                    "capacity_signal": s.capacity_signal,
                    "domains": s.domains,
                })
            })
            .collect();
        print_json(&rows)?;
        return Ok(());
    }

    if stakeholders.is_empty() {
        println!("Stakeholder graph is empty.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = stakeholders
        .iter()
        .map(|s| {
            vec![
                s.display_alias().to_string(),
                s.role.clone(),
                s.relationship.to_string(),
                s.capacity_signal.to_string(),
                s.domains.join(", "),
            ]
        })
        .collect();
    print_table(&["ALIAS", "ROLE", "RELATIONSHIP", "CAPACITY", "DOMAINS"], &rows);
    Ok(())
}
