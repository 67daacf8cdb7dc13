pub mod authority;
pub mod capacity;
pub mod dates;
pub mod init;
pub mod record;
pub mod stakeholders;
pub mod state;
pub mod suggest;

use anyhow::Context;
use chrono::NaiveDate;
use delegate_core::{calendar, paths, stakeholder};
use std::path::{Path, PathBuf};

/// `--graph` if given, otherwise the graph under the plugin root.
pub fn graph_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths::stakeholders_path(root))
}

/// Load the graph, `None` when the file does not exist.
pub fn load_graph(
    root: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<Option<Vec<stakeholder::Stakeholder>>> {
    let path = graph_path(root, explicit);
    stakeholder::load_stakeholders(&path)
        .with_context(|| format!("failed to load stakeholder graph {}", path.display()))
}

/// Parse `--today`-style arguments, falling back to the local date.
pub fn date_or_today(arg: Option<&str>) -> anyhow::Result<NaiveDate> {
    match arg {
        Some(s) => Ok(calendar::parse_date(s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
