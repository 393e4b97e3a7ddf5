use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_INPUT_DIR: &str = "docs/playlists/new canon";

/// Defaults, overridable through `PLAYLIST_*` environment variables
/// (e.g. `PLAYLIST_INPUT_EXT=text`). CLI flags win over both.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub input_ext: String,
    pub output_ext: String,
    pub delete_source: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_config(
            Config::builder().add_source(Environment::with_prefix("PLAYLIST").try_parsing(true)),
        )
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let settings = builder
            .set_default("input_dir", DEFAULT_INPUT_DIR)?
            .set_default("input_ext", "txt")?
            .set_default("output_ext", "md")?
            .set_default("delete_source", false)?
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

// ── Tests ──
