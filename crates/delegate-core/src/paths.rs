use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const INTEGRATIONS_CONFIG_DIR: &str = "integrations/config";
pub const STAKEHOLDERS_FILE: &str = "integrations/config/stakeholders.yaml";
pub const STAKEHOLDERS_EXAMPLE_FILE: &str = "integrations/config/stakeholders.yaml.example";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_dir(root: &Path) -> PathBuf {
    root.join(INTEGRATIONS_CONFIG_DIR)
}

pub fn stakeholders_path(root: &Path) -> PathBuf {
    root.join(STAKEHOLDERS_FILE)
}

pub fn stakeholders_example_path(root: &Path) -> PathBuf {
    root.join(STAKEHOLDERS_EXAMPLE_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
