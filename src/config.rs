use crate::geo::{Backend, DatabaseEdition, GeoError, OpenFlags};
use crate::{set_custom_directory, ClosedPolicy, GeoIp, OpenOptions};

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_log_level")]
    pub log_level: log::Level,
    #[serde(default)]
    pub custom_directory: Option<PathBuf>,
    #[serde(default = "Config::default_databases")]
    pub databases: Vec<DatabaseConfig>,
}

impl Config {
    fn default_log_level() -> log::Level {
        log::Level::Info
    }

    fn default_databases() -> Vec<DatabaseConfig> {
        vec![DatabaseConfig::default()]
    }

    /// Applies process-wide settings, must be called before opening databases
    pub fn apply(&self) {
        if let Some(dir) = &self.custom_directory {
            set_custom_directory(dir);
        }
    }
}

/// How much of a database file is kept in memory.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheMode {
    /// Every lookup reads the file
    Standard,
    #[default]
    Memory,
    /// Only the search tree is kept in memory
    Index,
    Mmap,
}

impl From<CacheMode> for OpenFlags {
    fn from(mode: CacheMode) -> Self {
        match mode {
            CacheMode::Standard => OpenFlags::STANDARD,
            CacheMode::Memory => OpenFlags::MEMORY_CACHE,
            CacheMode::Index => OpenFlags::INDEX_CACHE,
            CacheMode::Mmap => OpenFlags::MMAP_CACHE,
        }
    }
}

/// One database to open.
///
/// `paths` are tried in order, an `edition` without paths opens the conventional file of that
/// edition from the custom or default directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub paths: Vec<PathBuf>,
    #[serde(default)]
    pub edition: Option<DatabaseEdition>,
    #[serde(default)]
    pub cache: CacheMode,
    #[serde(default)]
    pub check_cache: bool,
    #[serde(default)]
    pub silence: bool,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub closed: ClosedPolicy,
    #[serde(default = "DatabaseConfig::default_teredo")]
    pub teredo: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            paths: vec![],
            edition: None,
            cache: CacheMode::default(),
            check_cache: false,
            silence: false,
            backend: Backend::default(),
            closed: ClosedPolicy::default(),
            teredo: Self::default_teredo(),
        }
    }
}

impl DatabaseConfig {
    fn default_teredo() -> bool {
        true
    }

    pub fn open_options(&self) -> OpenOptions {
        let mut flags = OpenFlags::from(self.cache);
        flags.set(OpenFlags::CHECK_CACHE, self.check_cache);
        flags.set(OpenFlags::SILENCE, self.silence);
        OpenOptions {
            flags,
            backend: self.backend,
            teredo: self.teredo,
            closed: self.closed,
        }
    }

    pub fn open(&self) -> Result<GeoIp, GeoError> {
        let options = self.open_options();
        match (self.paths.is_empty(), self.edition) {
            (true, Some(edition)) => GeoIp::open_type_with(edition, &options),
            _ => GeoIp::open_with(&self.paths, &options),
        }
    }
}

pub fn parse_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let toml_string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml_string)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_opens_default_database() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.log_level, log::Level::Info);
        assert!(config.custom_directory.is_none());
        assert_eq!(config.databases.len(), 1);

        let options = config.databases[0].open_options();
        assert_eq!(options, OpenOptions::default());
    }

    #[test]
    fn database_sections() {
        let config: Config = toml::from_str(
            r#"
            log_level = "debug"
            custom_directory = "/var/lib/GeoIP"

            [[databases]]
            paths = ["/tmp/GeoIPCity.dat", "/usr/share/GeoIP/GeoIPCity.dat"]
            cache = "index"
            check_cache = true
            closed = "strict"

            [[databases]]
            edition = "asnum-v6"
            cache = "standard"
            teredo = false
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(
            config.custom_directory.as_deref(),
            Some(Path::new("/var/lib/GeoIP"))
        );

        let city = &config.databases[0];
        assert_eq!(city.paths.len(), 2);
        let options = city.open_options();
        assert_eq!(
            options.flags,
            OpenFlags::INDEX_CACHE | OpenFlags::CHECK_CACHE
        );
        assert_eq!(options.closed, ClosedPolicy::Strict);
        assert!(options.teredo);

        let asn = &config.databases[1];
        assert_eq!(asn.edition, Some(DatabaseEdition::AsnumV6));
        let options = asn.open_options();
        assert_eq!(options.flags, OpenFlags::STANDARD);
        assert!(!options.teredo);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!(toml::from_str::<Config>("[[databases]]\ncache = \"disk\"").is_err());
        assert!(toml::from_str::<Config>("[[databases]]\nedition = \"weather\"").is_err());
        assert!(toml::from_str::<Config>("[[databases]]\npath = \"GeoIP.dat\"").is_err());
    }

    #[test]
    fn missing_files_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let database = DatabaseConfig {
            paths: vec![dir.path().join("GeoIP.dat")],
            ..Default::default()
        };
        assert!(matches!(database.open(), Err(GeoError::NotFound { .. })));
    }
}
