use anyhow::{bail, Result};

use rulerkit_core::AppConfig;

pub fn run(config: &AppConfig, path: bool, default: bool, init: bool) -> Result<()> {
    let config_path = AppConfig::config_path();

    if init {
        if config_path.exists() {
            bail!("Config file already exists: {}", config_path.display());
        }
        AppConfig::default().save()?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    if path {
        println!("{}", config_path.display());
        return Ok(());
    }

    let shown = if default {
        AppConfig::default()
    } else {
        config.clone()
    };
    print!("{}", shown.to_toml()?);
    Ok(())
}
