use anyhow::{Context, Result};
use cdinventory_core::DEFAULT_FILE_NAME;
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of the environment variables that override the config file.
const ENV_PREFIX: &str = "cdinv";

/// Contents written by `cdinventory config init`.
pub const TEMPLATE: &str = r#"# cdinventory configuration
#
# CLI flags and CDINV_* environment variables override this file.

# Snapshot file the menu loads on start and writes on save.
# Same as --file or CDINV_INVENTORY_PATH.
#inventory_path = "/path/to/CDInventory.dat"

# Log filter for stderr output; RUST_LOG wins when set.
log_level = "warn"
"#;

/// Settings for cdinventory.
///
/// Sources, highest priority first: CLI flags, `CDINV_*` environment
/// variables, the config file, built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the inventory snapshot lives.
    #[serde(default = "default_inventory_path")]
    pub inventory_path: PathBuf,

    /// Log filter used when RUST_LOG is not set (e.g. "warn", "debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: default_inventory_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from the user's config file and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path(), Some(ENV_PREFIX))
    }

    /// Load from the user's config file and the environment, then point at
    /// an explicit inventory file (the --file flag).
    pub fn load_with_inventory_path(inventory_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.inventory_path = inventory_path;
        Ok(config)
    }

    /// Build the configuration from `config_path`, if it exists, and from
    /// environment variables under `env_prefix`, if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(config_path: &Path, env_prefix: Option<&str>) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .with_context(|| format!("Failed to load {}", config_path.display()))?;
        }

        if let Some(prefix) = env_prefix {
            builder
                .add_env(env::Options::with_top_level(prefix))
                .context("Failed to load environment variables")?;
        }

        builder.build().context("Failed to build configuration")
    }
}

fn default_inventory_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cdinventory")
        .join(DEFAULT_FILE_NAME)
}

fn default_log_level() -> String {
    String::from("warn")
}

/// `config.toml` under the platform config directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cdinventory")
        .join("config.toml")
}

/// Write [`TEMPLATE`] to `path` unless a file is already there.
///
/// Returns whether the file was written.
pub fn write_template(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path, TEMPLATE).context("Failed to write config file")?;

    Ok(true)
}
