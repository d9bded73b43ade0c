use std::path::{Path, PathBuf};

use crate::error::Error;

/// Default per-item character budget for the name + signature column.
pub const DEFAULT_MAX_ITEM_CHARS: usize = 50;

/// Project configuration loaded from `.apisum.toml`.
pub struct Config {
    /// Search roots probed, in order, for module source files.
    pub roots: Vec<PathBuf>,
    /// Character budget shared by an item's display name and signature.
    pub max_item_chars: usize,
}

/// Raw TOML structure for `.apisum.toml`.
#[derive(serde::Deserialize)]
struct ApisumTomlConfig {
    #[serde(default)]
    roots: Vec<String>,
    #[serde(default)]
    max_item_chars: Option<usize>,
}

impl Config {
    /// Load config from `.apisum.toml` in the given directory.
    /// Returns defaults (current directory as the only root) if the file
    /// doesn't exist. Returns an error if the file exists but is malformed —
    /// never silently falls back to defaults when the user wrote a config
    /// file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let path = dir.join(".apisum.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default_in(dir)),
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: ApisumTomlConfig = toml::from_str(&content)?;
        let roots = if raw.roots.is_empty() {
            vec![dir.to_path_buf()]
        } else {
            raw.roots.iter().map(|r| dir.join(r)).collect()
        };

        Ok(Config {
            roots,
            max_item_chars: raw.max_item_chars.unwrap_or(DEFAULT_MAX_ITEM_CHARS),
        })
    }

    /// Default config rooted at `dir`.
    fn default_in(dir: &Path) -> Self {
        Config {
            roots: vec![dir.to_path_buf()],
            max_item_chars: DEFAULT_MAX_ITEM_CHARS,
        }
    }
}
