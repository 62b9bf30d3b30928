pub mod app_config;
pub mod commands;

pub use app_config::Config;
pub use commands::{load_catalog, run, Command, OutputFormat};
