use crate::domain_model::{DEFAULT_OVERRIDE_MARKET, MarketGrant};
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
    pub permission: Permission,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Permission {
    pub backend: String, // "fake" or "static"
    #[serde(default = "default_override_market")]
    pub override_market: String,
    /// Table for the static backend; the builtin table is used when absent.
    #[serde(default)]
    pub grants: Option<Vec<MarketGrant>>,
}

fn default_override_market() -> String {
    DEFAULT_OVERRIDE_MARKET.to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
