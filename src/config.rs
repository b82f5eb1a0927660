use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealdeck_mealplan::WindowShape;
use serde::Deserialize;
use std::env;
use time::UtcOffset;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub user: UserConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Owner of the meal plans the CLI reads and writes.
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
        }
    }
}

fn default_user_id() -> String {
    "local".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CalendarConfig {
    /// Show the 13 day strip instead of the Monday to Sunday week.
    #[serde(default)]
    pub strip: bool,
    /// Hours east of UTC used to decide which day is today.
    #[serde(default)]
    pub utc_offset_hours: i8,
}

impl CalendarConfig {
    pub fn shape(&self) -> WindowShape {
        if self.strip {
            WindowShape::Strip
        } else {
            WindowShape::Week
        }
    }

    pub fn utc_offset(&self) -> Result<UtcOffset, time::error::ComponentRange> {
        UtcOffset::from_hms(self.utc_offset_hours, 0, 0)
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALDECK__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:mealdeck.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALDECK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.user.id.trim().is_empty() {
            return Err("User id must not be empty".to_string());
        }
        if !(-23..=23).contains(&self.calendar.utc_offset_hours) {
            return Err("Calendar utc_offset_hours must be between -23 and 23".to_string());
        }
        Ok(())
    }
}
