use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::GoalError,
    goal::GoalList,
    utils::{
        paths::{app_data_dir, config_file_in},
        persistence::{load_goals_from_file, save_goals_to_file, write_atomic},
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub goals_file: String,
    /// Overrides the directory the goals file lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goals_file: "goals.txt".into(),
            data_dir: None,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, GoalError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, GoalError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, GoalError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), GoalError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    /// Resolves where the goals file lives for the given configuration.
    pub fn goals_path(&self, config: &Config) -> PathBuf {
        config
            .data_dir
            .as_deref()
            .unwrap_or(&self.base)
            .join(&config.goals_file)
    }

    pub fn load_goals(&self, config: &Config) -> Result<GoalList, GoalError> {
        load_goals_from_file(&self.goals_path(config))
    }

    pub fn save_goals(&self, config: &Config, goals: &GoalList) -> Result<(), GoalError> {
        save_goals_to_file(goals, &self.goals_path(config))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
