//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use super::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../tokenboard.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Run: tokenboard config validate -c {}", path.display()));
    output::note(&format!("3. Run: tokenboard balances -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
///
/// Shows defaults when the file does not exist.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let tiers = config.chain_tiers()?;

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Found", if path.exists() { "yes" } else { "no (defaults)" });

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Prices");
    match &config.prices.file {
        Some(file) => output::field("File", file.display()),
        None => {
            output::field("URL", &config.prices.url);
            output::field("Timeout", format!("{}s", config.prices.timeout_secs));
        }
    }

    output::section("Balances");
    output::field("Path", config.balances.path.display());

    output::section("Tiers");
    for (chain, priority) in tiers.entries() {
        output::field(chain.as_str(), priority);
    }
    output::field("(unknown)", tiers.unknown());

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if config.prices.file.is_some() && !config.prices.url.is_empty() {
        output::warning("prices.file is set; prices.url is ignored");
    }
    if !config.balances.path.exists() {
        output::warning(&format!(
            "balance file {} does not exist yet",
            config.balances.path.display()
        ));
    }

    output::field(
        "Next",
        format!("tokenboard config show -c {}", path.display()),
    );

    Ok(())
}
