use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use artgrid_engine::{FetchSettings, DEFAULT_ENDPOINT, DEFAULT_FIELDS};
use grid_logging::grid_info;
use serde::{Deserialize, Serialize};

use crate::args::Cli;

const CONFIG_FILENAME: &str = "artgrid.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct GridConfig {
    pub endpoint: String,
    pub fields: Vec<String>,
    pub limit: Option<u32>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fields: DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect(),
            limit: None,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
        }
    }
}

impl GridConfig {
    /// Loads `explicit`, or `./artgrid.ron` when it exists, or the defaults.
    ///
    /// A missing explicit path is an error; a missing default file is not.
    pub(crate) fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(CONFIG_FILENAME);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config =
            Self::from_ron(&text).with_context(|| format!("parsing config {}", path.display()))?;
        grid_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub(crate) fn from_ron(text: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub(crate) fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(limit) = cli.limit {
            self.limit = Some(limit);
        }
    }

    pub(crate) fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.endpoint.clone(),
            fields: self.fields.clone(),
            limit: self.limit,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}
