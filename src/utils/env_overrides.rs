//! Settings from the environment: process env first, then `.env` in the working directory.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::Settings;
use crate::utils::config::PackagePaths;

/// Load `.env` from `dir` into the process environment if present. Existing variables win.
pub fn load_dotenv(dir: &Path) {
    let env_path = dir.join(".env");
    if env_path.is_file() {
        match dotenvy::from_path(&env_path) {
            Ok(()) => debug!("Loaded {}", env_path.display()),
            Err(e) => log::warn!("{}: {}", env_path.display(), e),
        }
    }
}

fn read_usize(setting: &str) -> Result<Option<usize>> {
    let key = PackagePaths::get().env_var(setting);
    match std::env::var(&key) {
        Ok(s) if !s.trim().is_empty() => {
            let v = s
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key}={s:?} is not a non-negative integer"))?;
            Ok(Some(v))
        }
        _ => Ok(None),
    }
}

/// Apply `<PKG>_CAPACITY` and `<PKG>_DISPLAY_THRESHOLD` on top of `settings`.
pub fn apply_env_to_settings(settings: &mut Settings) -> Result<()> {
    if let Some(v) = read_usize("capacity")? {
        settings.capacity = v;
    }
    if let Some(v) = read_usize("display_threshold")? {
        settings.display_threshold = v;
    }
    Ok(())
}
