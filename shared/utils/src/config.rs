use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Hierarchy depth beyond which the importer records an advisory
    /// warning. Source tables have never exceeded five levels; deeper input
    /// usually means the level column was misread upstream.
    pub max_hierarchy_depth: u32,
    /// Make/buy code applied to leaves the source table left untagged.
    pub default_part_type: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("PICKLIST").separator("__"));

        config.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
                file_path: None,
            },
            import: ImportConfig {
                max_hierarchy_depth: 5,
                default_part_type: "buy".to_string(),
            },
        }
    }
}
