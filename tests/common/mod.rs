//! Shared test helpers.

use sales_permissions::settings::{Settings, parse_settings};
use std::fs;
use tempfile::TempDir;

/// Writes `contents` to a settings file in a fresh temp dir and parses it.
/// The dir is returned so it outlives the parse.
pub fn settings_from_toml(contents: &str) -> anyhow::Result<(TempDir, Settings)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.toml");
    fs::write(&path, contents)?;
    let settings = parse_settings(path.to_str())?;
    Ok((dir, settings))
}
