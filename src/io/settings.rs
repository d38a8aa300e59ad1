//! JSON settings files.

use crate::sim::config::Settings;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads run settings from a JSON file.
///
/// Fails on a missing or malformed required key. Unknown keys are ignored.
/// Values are not range-checked here; see [`Settings::validate`].
///
/// # Example
/// ```no_run
/// use muography::io::read_settings;
/// use std::path::Path;
///
/// let settings = read_settings(Path::new("settings.json")).unwrap();
/// println!("Pyramid height: {}", settings.height);
/// ```
pub fn read_settings(path: &Path) -> Result<Settings> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let settings: Settings = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse settings from: {}", path.display()))?;

    Ok(settings)
}

/// Parses run settings from a JSON string.
pub fn settings_from_str(json: &str) -> Result<Settings> {
    serde_json::from_str(json).context("Failed to parse settings from string")
}
