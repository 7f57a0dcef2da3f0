use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logic::breadcrumb::NODE_ID_MAXLEN;
use crate::logic::url::DEFAULT_SCHEMES;
use crate::model::DEFAULT_ROWS_PER_PAGE;
use crate::validation::ValidatorRegistry;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    #[serde(default = "default_rows_per_page_choices")]
    pub rows_per_page_choices: Vec<usize>,
    #[serde(default = "default_valid_schemes")]
    pub valid_schemes: Vec<String>,
    #[serde(default = "default_breadcrumb_max_width")]
    pub breadcrumb_max_width: usize,
    /// Offline catalog served instead of a remote service
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

fn default_rows_per_page() -> usize {
    DEFAULT_ROWS_PER_PAGE
}

fn default_rows_per_page_choices() -> Vec<usize> {
    vec![5, 10, 25]
}

fn default_valid_schemes() -> Vec<String> {
    DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect()
}

fn default_breadcrumb_max_width() -> usize {
    NODE_ID_MAXLEN
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            rows_per_page: default_rows_per_page(),
            rows_per_page_choices: default_rows_per_page_choices(),
            valid_schemes: default_valid_schemes(),
            breadcrumb_max_width: default_breadcrumb_max_width(),
            snapshot: None,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file deserializes as null
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    /// Load `path`, or the defaults when there is no config file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Self::from_yaml(&text).with_context(|| format!("In {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Validators for the url field
    pub fn validators(&self) -> ValidatorRegistry {
        ValidatorRegistry::for_urls(self.valid_schemes.clone())
    }
}
