use anyhow::{bail, Context};
use hf_imagegen::{Config, MODEL_PLACEHOLDER};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";
pub const MODEL_VAR: &str = "HF_MODEL";
pub const ENDPOINT_VAR: &str = "HF_ENDPOINT";
pub const OUTPUT_DIR_VAR: &str = "HF_OUTPUT_DIR";

/// Contents of a config file. Anything left out falls back to the
/// environment or the built-in defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub probe_timeout_secs: Option<u64>,
}

pub fn read(path: impl AsRef<Path>) -> anyhow::Result<FileConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    from_str(&s).with_context(|| format!("parsing {}", path.display()))
}

pub fn from_str(s: &str) -> anyhow::Result<FileConfig> {
    Ok(toml::from_str(s)?)
}

/// Layer `env` over `file` over the defaults.
///
/// Empty variables count as unset.
pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
    let var = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    let api_key = var(API_KEY_VAR).or(file.api_key).with_context(|| {
        format!(
            "no API key configured: set {} or `api_key` in the config file",
            API_KEY_VAR
        )
    })?;
    let mut config = Config::new(api_key);
    if let Some(model) = var(MODEL_VAR).or(file.model) {
        config.model_id = model;
    }
    if let Some(endpoint) = var(ENDPOINT_VAR).or(file.endpoint) {
        config.endpoint_template = endpoint;
    }
    if let Some(dir) = var(OUTPUT_DIR_VAR).map(PathBuf::from).or(file.output_dir) {
        config.output_dir = dir;
    }
    if let Some(secs) = file.timeout_secs {
        config.generate_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.probe_timeout_secs {
        config.probe_timeout = Duration::from_secs(secs);
    }

    if !config.endpoint_template.contains(MODEL_PLACEHOLDER) {
        bail!(
            "endpoint {:?} has no {} placeholder",
            config.endpoint_template,
            MODEL_PLACEHOLDER
        );
    }
    if config.generate_timeout.is_zero() || config.probe_timeout.is_zero() {
        bail!("timeouts must be at least one second");
    }
    Ok(config)
}

/// Build the run configuration from an optional file, `.env`, and the process
/// environment.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match dotenvy::dotenv() {
        Ok(env_file) => log::debug!("Loaded {}", env_file.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("loading .env"),
    }
    let file = match path {
        Some(path) => read(path)?,
        None => FileConfig::default(),
    };
    let config = resolve(file, |name| std::env::var(name).ok())?;
    log::debug!("Using {:?}", config);
    Ok(config)
}
