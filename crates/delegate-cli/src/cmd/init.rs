use crate::output::print_json;
use anyhow::Context;
use delegate_core::{io, paths, stakeholder::EXAMPLE_GRAPH};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let example = paths::stakeholders_example_path(root);
    let wrote_example = io::write_if_missing(&example, EXAMPLE_GRAPH.as_bytes())
        .with_context(|| format!("failed to write {}", example.display()))?;
    let ignored = io::ensure_gitignore_entry(root, paths::STAKEHOLDERS_FILE)
        .context("failed to update .gitignore")?;
    let has_graph = paths::stakeholders_path(root).exists();

    if json {
        print_json(&serde_json::json!({
            "example": paths::STAKEHOLDERS_EXAMPLE_FILE,
            "example_written": wrote_example,
            "gitignore_updated": ignored,
            "graph_exists": has_graph,
        }))?;
        return Ok(());
    }

    if wrote_example {
        println!("Wrote {}", paths::STAKEHOLDERS_EXAMPLE_FILE);
    }
    if ignored {
        println!("Added {} to .gitignore", paths::STAKEHOLDERS_FILE);
    }
    if !has_graph {
        println!(
            "Next: copy {} to {} and fill in your delegates.",
            paths::STAKEHOLDERS_EXAMPLE_FILE,
            paths::STAKEHOLDERS_FILE
        );
    }
    Ok(())
}
