//! XDG directory utilities for lexivox.

use std::path::PathBuf;

use anyhow::{Context, Result};
use xdg::BaseDirectories;

const APP_NAME: &str = "lexivox";

fn base_dirs() -> BaseDirectories {
    BaseDirectories::with_prefix(APP_NAME)
}

/// Return the XDG config directory (no creation - config may not exist yet).
/// `~/.config/lexivox/`
pub fn config_dir() -> Result<PathBuf> {
    base_dirs()
        .get_config_home()
        .context("Could not determine config directory (HOME not set?)")
}

/// Return the XDG data directory, creating it if needed.
/// `~/.local/share/lexivox/`
pub fn data_dir() -> Result<PathBuf> {
    let dir = base_dirs()
        .get_data_home()
        .context("Could not determine data directory (HOME not set?)")?;
    std::fs::create_dir_all(&dir).context("Failed to create data directory")?;
    Ok(dir)
}

/// Return the XDG state directory, creating it if needed.
/// `~/.local/state/lexivox/`
pub fn state_dir() -> Result<PathBuf> {
    let dir = base_dirs()
        .get_state_home()
        .context("Failed to get XDG state directory (HOME not set?)")?;
    std::fs::create_dir_all(&dir).context("Failed to create state directory")?;
    Ok(dir)
}

/// Directory where speech models are downloaded.
/// `~/.local/share/lexivox/models/`
pub fn models_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("models"))
}

/// Path of the persistent vocabulary store.
/// `~/.local/share/lexivox/vocabulary.json`
pub fn vocabulary_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("vocabulary.json"))
}

/// Log file path.
/// `~/.local/state/lexivox/lexivox.log`
pub fn log_path() -> Result<PathBuf> {
    Ok(state_dir()?.join("lexivox.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_path_in_xdg_data() {
        let path = vocabulary_path().unwrap();
        assert!(path.to_string_lossy().contains("lexivox"));
        assert!(path.to_string_lossy().ends_with("vocabulary.json"));
    }

    #[test]
    fn test_log_path_in_xdg_state() {
        let path = log_path().unwrap();
        assert!(path.to_string_lossy().contains("lexivox"));
        assert!(path.to_string_lossy().ends_with("lexivox.log"));
    }

    #[test]
    fn test_models_dir_under_data_dir() {
        let models = models_dir().unwrap();
        let data = data_dir().unwrap();
        assert_eq!(models.parent().unwrap(), data);
    }
}
