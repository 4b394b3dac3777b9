use std::{env, path::Path};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub static_dir: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `server.toml` in the working directory, then `APP__*`
/// environment variables. `SERVER_BIND` is honoured as a fallback bind
/// address below both sources.
pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let defaults = Settings::default();
    let bind_addr = env::var("SERVER_BIND").unwrap_or(defaults.bind_addr);

    Config::builder()
        .set_default("bind_addr", bind_addr)?
        .set_default("static_dir", defaults.static_dir)?
        .set_default("log_filter", defaults.log_filter)?
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()
        .and_then(Config::try_deserialize)
        .with_context(|| format!("failed to load settings from '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
