//! Shell configuration loaded from `taskline.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const CONFIG_FILE: &str = "taskline.toml";
const DEFAULT_DATA_FILE: &str = "taskline.json";
const DEFAULT_BORDER_WIDTH: usize = 80;

/// Settings for the interactive shell. Everything has a default; the file
/// is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where tasks are persisted between sessions.
    pub data_file: PathBuf,
    /// Width of the `*` border drawn around each reply.
    pub border_width: usize,
    /// Whether the greeting banner is shown on startup.
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            border_width: DEFAULT_BORDER_WIDTH,
            banner: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `taskline.toml` in the
    /// working directory when no path is given. A missing default file
    /// yields the defaults; a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = path.map_or_else(
            || (PathBuf::from(CONFIG_FILE), false),
            |path| (path.to_path_buf(), true),
        );
        if !path.exists() {
            if required {
                bail!("configuration file not found: {}", path.display());
            }
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.border_width == 0 {
            bail!("border_width must be at least 1");
        }
        Ok(())
    }
}
