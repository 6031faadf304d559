mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "NACF_CONFIG";
pub const SERVER_URL_ENV: &str = "OLLAMA_URL";
pub const MODEL_ENV: &str = "NACF_MODEL";

const DEFAULT_CONFIG_PATH: &str = "nacf.yaml";

/// Values supplied on the command line; they win over env and file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub server_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

/// Loads the YAML config file.
///
/// An explicit path (argument or `NACF_CONFIG`) must exist. The implicit
/// `nacf.yaml` is optional and built-in defaults are used when it is absent.
pub async fn load(explicit: Option<&Path>) -> Result<Config> {
    let (config_path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match env::var(CONFIG_PATH_ENV) {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        },
    };

    debug!("Loading configuration from: {}", config_path.display());

    match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => parse(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::config(format!(
            "configuration file not found: {}",
            config_path.display()
        ))),
        Err(e) => Err(e.into()),
    }
}

pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    /// Applies `OLLAMA_URL` / `NACF_MODEL` through the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVER_URL_ENV) {
            self.inference.server_url = url;
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.inference.model = model;
        }
    }

    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref url) = overrides.server_url {
            self.inference.server_url = url.clone();
        }
        if let Some(ref model) = overrides.model {
            self.inference.model = model.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.inference.timeout_secs = secs;
        }
        if let Some(ref level) = overrides.log_level {
            self.logs.level = level.clone();
        }
    }

    /// Trims and defaults blank values, then rejects what cannot work.
    pub fn normalize(mut self) -> Result<Self> {
        let url = self.inference.server_url.trim().trim_end_matches('/');
        self.inference.server_url = if url.is_empty() {
            DEFAULT_SERVER_URL.to_string()
        } else {
            url.to_string()
        };

        let model = self.inference.model.trim();
        self.inference.model = if model.is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            model.to_string()
        };

        if self.inference.timeout_secs == 0 {
            return Err(Error::config("inference.timeout_secs must be greater than zero"));
        }

        if !self.inference.server_url.starts_with("http://")
            && !self.inference.server_url.starts_with("https://")
        {
            return Err(Error::config(format!(
                "inference.server_url must be an http(s) URL, got '{}'",
                self.inference.server_url
            )));
        }

        Ok(self)
    }
}
