//! Repository configuration (`.git/config`)
//!
//! File format:
//!   [core]
//!   repositoryformatversion=0
//!   filemode=false
//!   bare=false

use crate::errors::{StoreError, StoreResult};
use ini::Ini;
use std::path::Path;

const CORE_SECTION: &str = "core";

/// The only on-disk layout this crate understands
pub const SUPPORTED_FORMAT_VERSION: u32 = 0;

#[derive(Debug, Clone)]
pub struct Config {
    ini: Ini,
}

impl Default for Config {
    fn default() -> Self {
        let mut ini = Ini::new();
        ini.with_section(Some(CORE_SECTION))
            .set("repositoryformatversion", SUPPORTED_FORMAT_VERSION.to_string())
            .set("filemode", "false")
            .set("bare", "false");

        Config { ini }
    }
}

impl Config {
    /// Load the config file, failing if it is absent
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::MissingConfiguration(path.to_path_buf()));
        }

        let ini = Ini::load_from_file(path)?;
        Ok(Config { ini })
    }

    pub fn write(&self, path: &Path) -> StoreResult<()> {
        self.ini.write_to_file(path)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.ini.get_from(Some(CORE_SECTION), key)
    }

    /// `core.repositoryformatversion`, if present and numeric
    pub fn format_version(&self) -> Option<u32> {
        self.get("repositoryformatversion")?.trim().parse().ok()
    }

    /// Fail unless `core.repositoryformatversion` is 0
    pub fn validate(&self) -> StoreResult<()> {
        match self.format_version() {
            Some(SUPPORTED_FORMAT_VERSION) => Ok(()),
            _ => Err(StoreError::UnsupportedRepositoryVersion(
                self.get("repositoryformatversion")
                    .unwrap_or_default()
                    .to_string(),
            )),
        }
    }

    pub fn filemode(&self) -> bool {
        self.flag("filemode")
    }

    pub fn bare(&self) -> bool {
        self.flag("bare")
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
    }
}
