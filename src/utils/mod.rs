pub mod config;
pub mod env_overrides;
pub mod logger;
pub mod settings_toml;

pub use config::*;
pub use env_overrides::{apply_env_to_settings, load_dotenv};
pub use logger::{Colors, set_verbose, setup_logging};
pub use settings_toml::{SettingsToml, apply_file_to_settings, load_settings_toml};
