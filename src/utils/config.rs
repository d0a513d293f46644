//! Application configuration constants.
//! Capacities and thresholds in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
    env_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
                env_prefix: pkg.to_uppercase(),
            }
        })
    }

    /// Settings file looked up in the working directory (e.g. `.evensquare.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Environment variable name for a setting, e.g. `EVENSQUARE_CAPACITY`.
    pub fn env_var(&self, setting: &str) -> String {
        format!("{}_{}", self.env_prefix, setting.to_uppercase())
    }
}

// ---- Buffers ----

/// Default bound on input, filtered and squared buffers (large-capacity build).
pub const MAX_CAPACITY: usize = 750_000_000;

/// Smallest step a full buffer grows by (elements). Larger buffers double, capped at the bound.
pub const BUFFER_GROWTH_MIN: usize = 4096;

// ---- Reporting ----

/// Runs with at most this many inputs print the raw sequences.
pub const DISPLAY_THRESHOLD: usize = 20;

// ---- Ingestion ----

/// Input files at or above this size are memory-mapped instead of read (bytes). 64 MB.
pub const MMAP_THRESHOLD: u64 = 64 * 1024 * 1024;

/// Upper bound on the input buffer's initial reservation (elements); it grows as values parse.
pub const INGEST_RESERVE_CHUNK: usize = 1024 * 1024;
