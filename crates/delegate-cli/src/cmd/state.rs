use crate::output::print_json;
use anyhow::Context;
use delegate_core::record::{delegate_state, has_confirmed_delegate, is_already_synced, parse_field, TaskRecord};
use std::path::Path;

pub fn run(fields: &[String], file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let mut record = TaskRecord::new();
    if let Some(path) = file {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let from_file: Option<TaskRecord> = delegate_core::io::parse_document(path, &data)
            .with_context(|| format!("{} is not a field mapping", path.display()))?;
        record.extend(from_file.unwrap_or_default());
    }
    // Command-line fields override the file.
    for f in fields {
        let (key, value) = parse_field(f)?;
        record.insert(key, value);
    }

    let state = delegate_state(&record);

    if json {
        print_json(&serde_json::json!({
            "state": state,
            "synced": is_already_synced(&record),
            "confirmed_delegate": has_confirmed_delegate(&record),
        }))?;
    } else {
        println!("{state}");
    }
    Ok(())
}
