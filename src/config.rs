use crate::catalog::Catalog;
use crate::constants;
use crate::error::{ListingError, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
            static_dir: PathBuf::from(constants::DEFAULT_STATIC_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file; the built-in seed is used when unset
    pub path: Option<PathBuf>,
    /// Reject unrecognized categories on the web surface instead of
    /// rendering an empty list
    pub strict_categories: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Prometheus exporter address; exporter disabled when unset
    pub addr: Option<String>,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ListingError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `STAY_CONFIG` (or `config.toml` when present, defaults otherwise),
    /// then apply the `PORT` override.
    pub fn from_env() -> Result<Self> {
        Self::from_sources(std::env::var("STAY_CONFIG").ok(), std::env::var("PORT").ok())
    }

    /// An explicit config path must exist; only the implicit `config.toml`
    /// may be absent.
    pub fn from_sources(explicit_path: Option<String>, port: Option<String>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => {
                info!("Loading configuration from {}", path);
                Self::load(&path)?
            }
            None if Path::new(constants::DEFAULT_CONFIG_PATH).exists() => {
                info!("Loading configuration from {}", constants::DEFAULT_CONFIG_PATH);
                Self::load(constants::DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.apply_port_override(port.as_deref())?;
        Ok(config)
    }

    /// Apply environment overrides to a config loaded from an explicit file
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_port_override(std::env::var("PORT").ok().as_deref())
    }

    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .map_err(|e| ListingError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse()
            .map_err(|e| ListingError::Config(format!("Invalid bind address '{}': {}", raw, e)))
    }

    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        self.metrics
            .addr
            .as_deref()
            .map(|raw| {
                raw.parse()
                    .map_err(|e| ListingError::Config(format!("Invalid metrics address '{}': {}", raw, e)))
            })
            .transpose()
    }

    /// The configured catalog file, or the built-in seed
    pub fn build_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::seed()),
        }
    }
}
