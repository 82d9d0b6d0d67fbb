//! Configuration loading and management

use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_RENAME_TABLE, DEFAULT_SKIP_DIRS, DEFAULT_SKIP_FILES,
    DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE_REPO,
};
use crate::error::Result;
use crate::rename::TemplateNames;
use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

/// Path rules applied while copying the template tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenameRules {
    /// Directory names never descended into.
    #[serde(default = "get_default_skip_dirs")]
    pub skip_dirs: Vec<String>,
    /// Root-relative `/`-separated paths never copied.
    #[serde(default = "get_default_skip_files")]
    pub skip_files: Vec<String>,
    /// Root-relative source path -> literal destination path.
    #[serde(default = "get_default_rename_table")]
    pub rename_table: IndexMap<String, String>,
}

impl RenameRules {
    pub fn is_skipped(&self, relative: &str) -> bool {
        self.skip_files.iter().any(|skipped| skipped == relative)
    }

    pub fn renamed(&self, relative: &str) -> Option<&str> {
        self.rename_table.get(relative).map(String::as_str)
    }
}

impl Default for RenameRules {
    fn default() -> Self {
        Self {
            skip_dirs: get_default_skip_dirs(),
            skip_files: get_default_skip_files(),
            rename_table: get_default_rename_table(),
        }
    }
}

/// Settings of a template, read from `rename.yaml`, `rename.yml` or `rename.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenameConfig {
    /// The template's own name in snake_case.
    #[serde(default = "get_default_template_name")]
    pub template_name: String,
    /// The template's own repository name.
    #[serde(default = "get_default_template_repo")]
    pub template_repo: String,
    #[serde(flatten)]
    pub rules: RenameRules,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            template_name: get_default_template_name(),
            template_repo: get_default_template_repo(),
            rules: RenameRules::default(),
        }
    }
}

impl RenameConfig {
    /// Loads the first configuration file found in `template_root`, falling back
    /// to the built-in defaults. The loaded file is added to the skip files.
    pub fn load_config<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = template_root.join(config_file_name);

            if config_file_path.exists() {
                let content = std::fs::read_to_string(&config_file_path)?;
                let mut config: RenameConfig = if config_file_name.ends_with(".json") {
                    serde_json::from_str(&content)?
                } else {
                    serde_yaml::from_str(&content)?
                };

                if !config.rules.is_skipped(config_file_name) {
                    config.rules.skip_files.push(config_file_name.to_string());
                }
                info!("Loaded rename config from {}", config_file_path.display());
                return Ok(config);
            }
        }

        debug!("No rename config found in {}, using defaults", template_root.display());
        Ok(Self::default())
    }

    pub fn template_names(&self) -> TemplateNames {
        TemplateNames::new(self.template_name.as_str(), self.template_repo.as_str())
    }
}

fn get_default_template_name() -> String {
    DEFAULT_TEMPLATE_NAME.to_string()
}

fn get_default_template_repo() -> String {
    DEFAULT_TEMPLATE_REPO.to_string()
}

fn get_default_skip_dirs() -> Vec<String> {
    DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect()
}

fn get_default_skip_files() -> Vec<String> {
    DEFAULT_SKIP_FILES.iter().map(|s| s.to_string()).collect()
}

fn get_default_rename_table() -> IndexMap<String, String> {
    DEFAULT_RENAME_TABLE.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
