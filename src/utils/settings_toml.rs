//! Load `.evensquare.toml` (CLI only). Lib callers pass capacities directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::Settings;

#[derive(Debug, Default, Deserialize)]
pub struct SettingsToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    capacity: Option<usize>,
    display_threshold: Option<usize>,
    verbose: Option<bool>,
}

impl SettingsToml {
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse settings file")
    }
}

/// Load the settings file at `path` if present. Returns None when missing;
/// a file that exists but does not parse is logged and ignored.
pub fn load_settings_toml(path: &Path) -> Option<SettingsToml> {
    let s = std::fs::read_to_string(path).ok()?;
    SettingsToml::parse(&s)
        .map_err(|e| log::warn!("{}: {:#}", path.display(), e))
        .ok()
}

/// Overwrite settings field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $settings:expr, $field:ident) => {
        if let Some(v) = $section.$field {
            $settings.$field = v;
        }
    };
}

/// Apply file config to settings (only fields present in the file). Call before env and CLI.
pub fn apply_file_to_settings(file: &SettingsToml, settings: &mut Settings) {
    let section = &file.settings;
    apply_file_opt!(section, settings, capacity);
    apply_file_opt!(section, settings, display_threshold);
    apply_file_opt!(section, settings, verbose);
}
