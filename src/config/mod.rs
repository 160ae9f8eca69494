pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "isotope-api")]
#[command(about = "Lookup service for chemical elements and their natural isotopes")]
pub struct ServerConfig {
    #[arg(long, env = "ISOTOPE_API_HOST", help = "Address to listen on [default: 127.0.0.1]")]
    pub host: Option<String>,

    #[arg(long, env = "ISOTOPE_API_PORT", help = "Port to listen on [default: 8080]")]
    pub port: Option<u16>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Effective settings after merging CLI, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// 合併設定：命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Ok(self.merge(file.as_ref()))
    }

    pub fn merge(&self, file: Option<&TomlConfig>) -> Settings {
        let server = file.and_then(|f| f.server.as_ref());
        let logging = file.and_then(|f| f.logging.as_ref());

        let host = self
            .host
            .clone()
            .or_else(|| server.and_then(|s| s.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = self
            .port
            .or_else(|| server.and_then(|s| s.port))
            .unwrap_or(DEFAULT_PORT);

        let file_verbose = logging
            .and_then(|l| l.level.as_deref())
            .map(|level| level.eq_ignore_ascii_case("debug") || level.eq_ignore_ascii_case("trace"))
            .unwrap_or(false);
        let file_json = logging.and_then(|l| l.json).unwrap_or(false);

        Settings {
            host,
            port,
            verbose: self.verbose || file_verbose,
            json_logs: self.json_logs || file_json,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
