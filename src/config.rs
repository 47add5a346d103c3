//! Client configuration.
//!
//! Priority: command-line flags > `MECHANIC_SHOP_*` environment > config file >
//! defaults. The first existing file of `/etc/mechanic_shop/mechanic_shop.toml`
//! and `./mechanic_shop.toml` is read, unless `--config` names a file, which
//! then has to exist.

use crate::core::ShopError;
use crate::db::ConnectionSettings;
use crate::output::OutputFormat;
use clap::Args;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = [
    "/etc/mechanic_shop/mechanic_shop.toml",
    "./mechanic_shop.toml",
];

const ENV_PREFIX: &str = "MECHANIC_SHOP";

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Connection flags shared by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Server host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Database name
    #[arg(short = 'd', long)]
    pub database: Option<String>,

    /// Database user
    #[arg(short = 'U', long)]
    pub user: Option<String>,

    /// Database password
    #[arg(short = 'W', long)]
    pub password: Option<String>,

    /// Config file to read instead of the default locations
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShopConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5432 }
fn default_database() -> String { "postgres".to_string() }
fn default_user() -> String { "postgres".to_string() }

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            user: default_user(),
            password: String::new(),
            format: OutputFormat::default(),
        }
    }
}

impl ShopConfig {
    /// Loads from the default locations (or `--config`), environment and flags.
    ///
    /// A file named with `--config` must exist and parse. Problems with the
    /// default locations or the environment are reported and the defaults used.
    pub fn load(args: &ConnectionArgs) -> Result<Self, ShopError> {
        let base = match args.config {
            Some(ref path) => Self::from_file(path, true)?,
            None => {
                let paths: Vec<PathBuf> = DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect();
                Self::from_sources(&paths, true).unwrap_or_else(|e| {
                    warn!(error = %e, "ignoring invalid configuration");
                    Self::default()
                })
            }
        };
        Ok(base.with_overrides(args))
    }

    /// Reads `path` as TOML whatever its extension; a missing file is an error
    pub fn from_file(path: &Path, with_env: bool) -> Result<Self, ShopError> {
        debug!(path = %path.display(), "loading config file");
        let mut builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        if with_env {
            builder = builder.add_source(env_source());
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Reads the first existing file of `paths`, then the environment when `with_env` is set
    pub fn from_sources(paths: &[PathBuf], with_env: bool) -> Result<Self, ShopError> {
        let mut builder = Config::builder();

        if let Some(path) = paths.iter().find(|p| Path::new(p).exists()) {
            debug!(path = %path.display(), "loaded config file");
            builder = builder.add_source(File::from(path.as_path()));
        }

        if with_env {
            builder = builder.add_source(env_source());
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// CLI args override everything
    #[must_use]
    pub fn with_overrides(self, args: &ConnectionArgs) -> Self {
        Self {
            host: args.host.clone().unwrap_or(self.host),
            port: args.port.unwrap_or(self.port),
            database: args.database.clone().unwrap_or(self.database),
            user: args.user.clone().unwrap_or(self.user),
            password: args.password.clone().unwrap_or(self.password),
            format: self.format,
        }
    }

    #[must_use]
    pub fn connection(&self) -> ConnectionSettings {
        ConnectionSettings {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}
