//! Configuration of the application which hosts actors.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use semver::Version;

pub const CRATE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const CRATE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref CRATE_VERSION: Version = CRATE_VERSION_STR.parse().unwrap();
}

#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    log_level: LevelFilter,
    log_dir: PathBuf,
}

impl Config {
    pub fn new(name: String, version: Version) -> Self {
        let log_level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            name,
            version,
            log_level,
            log_dir: PathBuf::from("logs"),
        }
    }

    /// Sets maximal level of messages to be logged.
    pub fn with_log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    /// Sets directory for log files.
    pub fn with_log_dir<P>(mut self, log_dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.log_dir = log_dir.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(CRATE_NAME.to_string(), CRATE_VERSION.clone())
    }
}
