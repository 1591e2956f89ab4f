//! Configuration module
//!
//! Settings come from a TOML file (default
//! `~/.config/office-energy/config.toml`); every section and key is optional.
//! `DATABASE_URL` and `APP_PORT` override the file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::ListingPolicy;
use crate::domain::employee::EmployeeSortField;
use crate::domain::energy_statement::EnergyStatementSortField;
use crate::domain::listing::{ListDefaults, SortField, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::office::OfficeSortField;
use crate::infrastructure::DatabaseConfig;
use crate::shared::errors::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "OFFICE_ENERGY_CONFIG";

/// `<config_dir>/office-energy/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("office-energy")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL; `sqlite://…` or `postgres://…`
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            max_connections: defaults.max_connections,
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
        }
    }
}

impl DatabaseSettings {
    pub fn connection(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Plain,
        }
    }
}

/// Listing defaults of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityListing {
    #[serde(default = "default_page_size")]
    pub default_size: u64,
    pub default_sort: String,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl EntityListing {
    fn sorted_by(default_sort: &str) -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            default_sort: default_sort.to_string(),
        }
    }

    fn defaults<F: SortField>(&self) -> ListDefaults<F> {
        ListDefaults::from_settings(self.default_size, &self.default_sort)
    }

    fn validate<F: SortField>(&self, section: &str) -> Result<(), ConfigError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.default_size) {
            return Err(ConfigError::Invalid(format!(
                "listing.{section}.default_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.default_size
            )));
        }
        let field = self
            .default_sort
            .split_once(',')
            .map_or(self.default_sort.as_str(), |(field, _)| field);
        if F::from_name(field).is_none() {
            let allowed: Vec<_> = F::ALLOWED.iter().map(|f| f.as_str()).collect();
            return Err(ConfigError::Invalid(format!(
                "listing.{section}.default_sort: unknown field '{}' (allowed: {})",
                field.trim(),
                allowed.join(", ")
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub offices: EntityListing,
    pub employees: EntityListing,
    pub energy_statements: EntityListing,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            offices: EntityListing::sorted_by("name,asc"),
            employees: EntityListing::sorted_by("email,asc"),
            energy_statements: EntityListing::sorted_by("period,desc"),
        }
    }
}

impl ListingConfig {
    pub fn policy(&self) -> ListingPolicy {
        ListingPolicy {
            offices: self.offices.defaults(),
            employees: self.employees.defaults(),
            energy_statements: self.energy_statements.defaults(),
        }
    }
}

impl AppConfig {
    /// Read `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load, apply process environment overrides and validate.
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DATABASE_URL` and `APP_PORT` as returned by `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            self.database.url = url;
        }
        if let Some(port) = lookup("APP_PORT").filter(|port| !port.is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("APP_PORT is not a port: {port}")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".into()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url is empty".into()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be at least 1".into(),
            ));
        }
        self.listing.offices.validate::<OfficeSortField>("offices")?;
        self.listing
            .employees
            .validate::<EmployeeSortField>("employees")?;
        self.listing
            .energy_statements
            .validate::<EnergyStatementSortField>("energy_statements")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;
    use crate::domain::listing::SortDirection;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 8080

[logging]
format = "json"

[listing.offices]
default_size = 50
default_sort = "code,desc"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");

        let policy = config.listing.policy();
        assert_eq!(policy.offices.page_size, 50);
        assert_eq!(policy.offices.sort.field, OfficeSortField::Code);
        assert_eq!(policy.offices.sort.direction, SortDirection::Desc);
        assert_eq!(policy.employees.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn statements_default_to_latest_period() {
        let policy = AppConfig::default().listing.policy();
        assert_eq!(
            policy.energy_statements.sort.field,
            EnergyStatementSortField::Period
        );
        assert_eq!(policy.energy_statements.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn environment_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("DATABASE_URL", "postgres://localhost/energy"),
            ("APP_PORT", "9090"),
        ]
        .into();
        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.database.url, "postgres://localhost/energy");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(|key| (key == "APP_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn out_of_range_default_size_is_invalid() {
        let mut config = AppConfig::default();
        config.listing.employees.default_size = 0;
        assert!(config.validate().is_err());
        config.listing.employees.default_size = MAX_PAGE_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_default_sort_field_is_invalid() {
        let mut config = AppConfig::default();
        config.listing.offices.default_sort = "salary,asc".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("salary"));
    }

    #[test]
    fn database_settings_convert() {
        let settings = DatabaseSettings {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            connect_timeout_secs: 3,
        };
        let db = settings.connection();
        assert_eq!(db.max_connections, 1);
        assert_eq!(db.connect_timeout, Duration::from_secs(3));
    }
}
