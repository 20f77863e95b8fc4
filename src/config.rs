//! Configuration with TOML persistence.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "PGRAPH_CONFIG";

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pgraph.toml";

/// Whether `add_edge(v, v)` is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfLoopPolicy {
    /// Store `{v, v}`; `v` becomes its own neighbour.
    #[default]
    Allow,
    /// Fail with `GraphError::SelfLoop`.
    Reject,
}

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse "text" or "json" (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Graph construction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub self_loops: SelfLoopPolicy,
}

/// Output settings for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// env_logger filter used by the `pgraph` binary.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            graph: GraphConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Resolve the configuration using priority order:
    /// 1. Explicit path (CLI arg)
    /// 2. PGRAPH_CONFIG environment variable
    /// 3. pgraph.toml in the current directory
    /// 4. Built-in defaults
    ///
    /// An explicit path must exist. A path taken from the environment that
    /// does not exist falls back to the defaults. Nothing is logged here: the
    /// returned `ConfigSource` is reported once a logger is installed.
    pub fn resolve(explicit: Option<&Path>) -> GraphResult<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(env_path);
            if path.is_file() {
                return Ok((Self::load(&path)?, ConfigSource::Env(path)));
            }
            return Ok((Self::default(), ConfigSource::MissingEnv(path)));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(local)?, ConfigSource::Local(local.to_path_buf())));
        }

        Ok((Self::default(), ConfigSource::Default))
    }
}

/// Where `Config::resolve` found the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line.
    Explicit(PathBuf),
    /// Path named by PGRAPH_CONFIG.
    Env(PathBuf),
    /// PGRAPH_CONFIG named a file that does not exist; defaults were used.
    MissingEnv(PathBuf),
    /// pgraph.toml in the current directory.
    Local(PathBuf),
    /// No file found; defaults were used.
    Default,
}

impl ConfigSource {
    /// Log where the configuration came from.
    pub fn report(&self) {
        match self {
            Self::Explicit(path) | Self::Local(path) => {
                log::debug!("Loaded config from {}", path.display());
            }
            Self::Env(path) => {
                log::debug!("Loaded config from ${} = {}", CONFIG_ENV, path.display());
            }
            Self::MissingEnv(path) => log::warn!(
                "${} points at {}, which does not exist; using defaults",
                CONFIG_ENV,
                path.display()
            ),
            Self::Default => log::debug!("No config file found; using defaults"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"

            [graph]
            self_loops = "reject"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.graph.self_loops, SelfLoopPolicy::Reject);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_policy() {
        let err = Config::from_toml("[graph]\nself_loops = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.graph.self_loops = SelfLoopPolicy::Reject;
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
