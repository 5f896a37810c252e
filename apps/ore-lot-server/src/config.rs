//! Server configuration: YAML file merged with `ORELOT_*` environment
//! variables over built-in defaults.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SeaORM connection string (Postgres or SQLite)
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    ([0, 0, 0, 0], 8087).into()
}

fn default_database_url() -> String {
    "sqlite://ore_lots.db?mode=rwc".to_string()
}

/// Load configuration. Precedence: env > file > defaults.
pub fn load(path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }

    let cfg = figment
        .merge(Env::prefixed("ORELOT_").split("__"))
        .extract()?;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.server.bind_addr, default_bind_addr());
        assert_eq!(cfg.database.url, default_database_url());
    }
}
