use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::ConfigError;

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "kview";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_CONTENT_ROOT: &str = "/content/overview";
pub const DEFAULT_CONTEXT: &str = "default";

/// Application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Prefix of every content path produced for links and navigation.
    #[serde(default = "default_content_root")]
    pub content_root: String,

    /// Name of the context rendered objects belong to.
    #[serde(default = "default_context")]
    pub context: String,

    /// Pretty print rendered JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Short names that resolve to resource kinds.
    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, String>,
}

fn default_content_root() -> String {
    DEFAULT_CONTENT_ROOT.to_owned()
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_owned()
}

fn default_pretty() -> bool {
    true
}

fn default_aliases() -> BTreeMap<String, String> {
    [
        ("po", "Pod"),
        ("pod", "Pod"),
        ("pods", "Pod"),
        ("rc", "ReplicationController"),
        ("replicationcontrollers", "ReplicationController"),
        ("sa", "ServiceAccount"),
        ("serviceaccounts", "ServiceAccount"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            context: default_context(),
            pretty: default_pretty(),
            aliases: default_aliases(),
        }
    }
}

impl Config {
    /// Returns the default configuration path: `HOME/.kview/config.yaml`.
    pub fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    /// Loads configuration from the specified file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&config_str)
    }

    /// Loads configuration from the `path` or from the default location if `path` is `None`.\
    /// **Note** that a missing file yields the default configuration, a malformed one is an error.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        match Self::load(&path).await {
            Ok(config) => Ok(config),
            Err(ConfigError::IoError(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            },
            Err(error) => {
                tracing::error!("Cannot load config {}: {}", path.display(), error);
                Err(error)
            },
        }
    }

    /// Deserializes configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str::<Config>(text)?)
    }

    /// Serializes configuration to YAML text.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Resolves `name` to a resource kind using configured aliases.\
    /// Names without an alias are returned as they are.
    pub fn resolve_kind<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .get(&name.to_ascii_lowercase())
            .map_or(name, String::as_str)
    }
}
