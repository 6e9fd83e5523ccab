use crate::{
    output::{self, OutputFormat},
    Config, DiagnosticReport, Error, Result,
};
use image::{GenericImageView, ImageReader};
use reqwest::{blocking::Response, StatusCode};
use serde::Serialize;
use std::{io::Cursor, path::PathBuf, time::Duration};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// A validated prompt and the (normalized) file it should be saved as.
///
/// Backslashes in the filename are treated as directory separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    filename: String,
    format: OutputFormat,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, filename: &str) -> Result<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(Error::EmptyPrompt);
        }
        let filename = output::normalize_filename(&filename.replace('\\', "/"));
        let format = OutputFormat::from_filename(&filename).unwrap_or(OutputFormat::WebP);
        Ok(Self {
            prompt,
            filename,
            format,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Where and how a generated image ended up on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    /// Forward-slash separated, relative to the working directory unless
    /// the configured output directory is absolute.
    pub path: String,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

pub struct Client {
    config: Config,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        self.config.endpoint_url()
    }

    /// Path an image for `request` is written to.
    pub fn target_path(&self, request: &GenerationRequest) -> PathBuf {
        self.config.output_dir.join(request.filename())
    }

    fn send(&self, prompt: &str, timeout: Duration) -> Result<Response> {
        let url = self.endpoint();
        log::debug!("POST {} (timeout {:?})", url, timeout);
        Ok(self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .timeout(timeout)
            .json(&InferenceRequest { inputs: prompt })
            .send()?)
    }

    /// Send `prompt` and report the raw response. Any HTTP status is a
    /// successful probe; only transport failures are errors.
    pub fn probe(&self, prompt: &str) -> Result<DiagnosticReport> {
        let response = self.send(prompt, self.config.probe_timeout)?;
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text()?;
        log::debug!("Probe got {} with {} bytes of body", status, body.len());
        Ok(DiagnosticReport {
            url,
            status,
            headers,
            body,
        })
    }

    /// Generate an image for `prompt` and save it under the output directory
    /// as `filename`, see [`GenerationRequest::new`].
    pub fn generate(&self, prompt: &str, filename: &str) -> Result<SavedImage> {
        let request = GenerationRequest::new(prompt, filename)?;
        self.generate_request(&request)
    }

    pub fn generate_request(&self, request: &GenerationRequest) -> Result<SavedImage> {
        log::info!(
            "Requesting image from {} as {}",
            self.config.model_id,
            request.filename()
        );
        let response = self.send(request.prompt(), self.config.generate_timeout)?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text()?;
            log::warn!("Endpoint answered {}", status);
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }
        let data = response.bytes()?;
        log::debug!("Received {} bytes", data.len());

        let reader = ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?;
        log::debug!("Detected format {:?}", reader.format());
        let image = reader.decode()?;
        let (width, height) = image.dimensions();
        let encoded = request.format().encode(image)?;

        let path = self.target_path(request);
        output::write_atomic(&path, &encoded)?;
        let path = output::display_path(&path);
        log::info!("Saved {}x{} image to {}", width, height, path);
        Ok(SavedImage {
            path,
            format: request.format(),
            width,
            height,
        })
    }
}
