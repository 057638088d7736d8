use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::utils;

/// Per-model settings read from `<model>.toml` or a folder-wide `obj.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ObjMeta {
    /// Run the polygon checks after parsing.
    pub(crate) validate: bool,
    /// Print every element of the model.
    pub(crate) dump: bool,
}

impl Default for ObjMeta {
    fn default() -> Self {
        Self {
            validate: true,
            dump: false,
        }
    }
}

impl ObjMeta {
    pub(crate) fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Could not read meta file: {}", path.display()))?;
        let meta: Self = toml::from_slice(&data)
            .with_context(|| format!("Invalid meta file: {}", path.display()))?;
        Ok(meta)
    }

    /// Meta from a file called `file.toml`, alternatively from the folder scoped
    /// `obj.toml`, or else the defaults.
    pub(crate) fn find(path: &Path) -> Result<Self> {
        let dir = path
            .parent()
            .with_context(|| format!("Path terminates in root or prefix: {}", path.display()))?;

        let own = utils::combine_path(dir, utils::file_name(path)?, "toml");
        if own.is_file() {
            return Self::parse(&own);
        }

        let folder = utils::combine_path(dir, "obj", "toml");
        if folder.is_file() {
            return Self::parse(&folder);
        }

        Ok(Self::default())
    }
}
