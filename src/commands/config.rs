//! Config subcommands handler

use anyhow::Result;

use wcgen::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration, refusing to clobber an existing file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\nHint: use --force to overwrite it.",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
