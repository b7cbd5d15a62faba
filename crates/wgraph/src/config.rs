//! Configuration management for wgraph.
//!
//! Configuration lives in an optional `wgraph.yaml` next to the graph files:
//!
//! ```yaml
//! graph-file: graph.txt
//! generator:
//!   min-cost: 0
//!   max-cost: 999
//!   seed: null
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::domain::Cost;
use crate::error::{Error, Result};
use crate::generate::{DEFAULT_MAX_COST, DEFAULT_MIN_COST};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`WgraphConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "wgraph.yaml";

/// Graph file used when neither the config nor the command line names one.
pub const DEFAULT_GRAPH_FILE: &str = "graph.txt";

/// Configuration file structure for wgraph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct WgraphConfig {
    /// Graph file operated on by CLI commands, relative to the working directory
    pub graph_file: PathBuf,

    /// Random graph generator settings
    pub generator: GeneratorSettings,
}

/// Generator configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorSettings {
    /// Inclusive lower bound on generated costs
    pub min_cost: Cost,

    /// Inclusive upper bound on generated costs
    pub max_cost: Cost,

    /// Fixed seed; random when absent
    pub seed: Option<u64>,
}

impl Default for WgraphConfig {
    fn default() -> Self {
        Self {
            graph_file: PathBuf::from(DEFAULT_GRAPH_FILE),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_cost: DEFAULT_MIN_COST,
            max_cost: DEFAULT_MAX_COST,
            seed: None,
        }
    }
}

impl WgraphConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the configuration a command in `working_dir` should use.
    ///
    /// An explicit `config_path` is resolved against `working_dir` and must
    /// exist. Without one this is [`discover`](Self::discover).
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or cannot be loaded,
    /// or a discovered file cannot be loaded.
    pub fn resolve(working_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(_) => Self::load(&config_file_path(working_dir, config_path)),
            None => Self::discover(working_dir),
        }
    }

    /// Load `wgraph.yaml` from `dir` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be loaded.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject settings no command could honour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the generator cost range is empty.
    pub fn validate(&self) -> Result<()> {
        if self.generator.min_cost > self.generator.max_cost {
            return Err(Error::Config(format!(
                "generator min-cost {} exceeds max-cost {}",
                self.generator.min_cost, self.generator.max_cost
            )));
        }
        Ok(())
    }
}

/// Path of the configuration file for `working_dir`: `config_path` joined
/// onto it when given, otherwise [`CONFIG_FILE_NAME`] inside it.
#[must_use]
pub fn config_file_path(working_dir: &Path, config_path: Option<&Path>) -> PathBuf {
    working_dir.join(config_path.unwrap_or(Path::new(CONFIG_FILE_NAME)))
}
