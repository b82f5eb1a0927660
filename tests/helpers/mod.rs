use std::path::Path;

use mealdeck::Config;
use mealdeck::config::{CalendarConfig, DatabaseConfig, ObservabilityConfig, UserConfig};

pub fn config(path: &Path) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", path.to_str().unwrap()),
            max_connections: 2,
        },
        observability: ObservabilityConfig::default(),
        user: UserConfig {
            id: "john".to_owned(),
        },
        calendar: CalendarConfig::default(),
    }
}
