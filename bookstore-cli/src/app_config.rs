use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON fixture holding the books
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            .set_default("catalog.path", "catalog.json")?
            .set_default("log.level", "info")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false));

        // A file named on the command line must exist
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path));
        }

        // Eg.. `BOOKSTORE__CATALOG__PATH=books.json`
        builder
            .add_source(config::Environment::with_prefix("BOOKSTORE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
