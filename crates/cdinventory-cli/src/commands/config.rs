use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{self, Config};

/// Print the effective settings and where they came from.
pub fn show_config(config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();
    write_config(&mut out, config, &config::config_file_path())?;
    out.flush()?;
    Ok(())
}

fn write_config(out: &mut impl Write, config: &Config, config_path: &Path) -> io::Result<()> {
    let source = if config_path.exists() {
        "found"
    } else {
        "missing, defaults in use"
    };
    writeln!(out, "Config file: {} ({})", config_path.display(), source)?;
    writeln!(out, "inventory_path = {}", config.inventory_path.display())?;
    writeln!(out, "log_level = {}", config.log_level)
}

/// Create the config file from the template if there is none yet.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();

    if config::write_template(&config_path)? {
        println!("✓ Created config file: {}", config_path.display());
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
