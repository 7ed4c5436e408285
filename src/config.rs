use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Priorities;
use crate::error::{PlanError, Result};

/// File name looked up in the config dir and the working directory.
pub const CONFIG_FILE_NAME: &str = "task-configuration.json";

/// The task configuration: where the catalog lives and how tags are spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default = "default_tasks_dir")]
    pub tasks_dir: PathBuf,

    #[serde(default)]
    pub tag_distribution: TagDistribution,

    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TagDistribution {
    #[serde(default)]
    pub daily_priorities: Priorities,
}

fn default_tasks_dir() -> PathBuf {
    PathBuf::from("tasks")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_dir: default_tasks_dir(),
            tag_distribution: TagDistribution::default(),
            source: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain:
    /// explicit path, `<config_dir>/weekplan/task-configuration.json`,
    /// `./task-configuration.json`. Finding none is an error.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(CONFIG_FILE_NAME);
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        let fallback_config = PathBuf::from(CONFIG_FILE_NAME);
        if fallback_config.exists() {
            return Self::load_from_file(&fallback_config);
        }

        Err(PlanError::Config(format!(
            "no {} found; pass --cfg <path>",
            CONFIG_FILE_NAME
        )))
    }

    /// Read a JSON or YAML (by extension) configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| PlanError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let mut config = Self::parse(&content, path)?;
        config.source = Some(path.to_path_buf());

        info!(
            "Loaded config from: {} ({} tags)",
            path.display(),
            config.priorities().len()
        );
        Ok(config)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

        if is_yaml {
            Ok(serde_yaml::from_str(content)?)
        } else {
            Ok(serde_json::from_str(content)?)
        }
    }

    pub fn priorities(&self) -> &Priorities {
        &self.tag_distribution.daily_priorities
    }

    /// Tasks directory, relative paths resolved against the config file.
    pub fn resolved_tasks_dir(&self) -> PathBuf {
        if self.tasks_dir.is_absolute() {
            return self.tasks_dir.clone();
        }
        match self.source.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(&self.tasks_dir),
            None => self.tasks_dir.clone(),
        }
    }
}
