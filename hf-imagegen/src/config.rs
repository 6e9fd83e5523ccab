use std::{fmt, path::PathBuf, time::Duration};

pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1-schnell";
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference/models/{model}";
pub const DEFAULT_OUTPUT_DIR: &str = "public/images";
pub const DEFAULT_GENERATE_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(120);

/// Placeholder substituted with the model identifier in `endpoint_template`.
pub const MODEL_PLACEHOLDER: &str = "{model}";

/// Everything a [`Client`](crate::Client) needs for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model_id: String,
    pub endpoint_template: String,
    pub output_dir: PathBuf,
    pub generate_timeout: Duration,
    pub probe_timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL.into(),
            endpoint_template: DEFAULT_ENDPOINT.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            generate_timeout: DEFAULT_GENERATE_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn endpoint_url(&self) -> String {
        self.endpoint_template.replace(MODEL_PLACEHOLDER, &self.model_id)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("endpoint_template", &self.endpoint_template)
            .field("output_dir", &self.output_dir)
            .field("generate_timeout", &self.generate_timeout)
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}
