use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The provider answered with something other than `200 OK`.
    #[error("{status} - {body}")]
    Api { status: u16, body: String },
    /// The body was not an image, or could not be re-encoded for the target file.
    #[error(transparent)]
    Decode(#[from] image::ImageError),
    #[error(transparent)]
    Filesystem(#[from] std::io::Error),
    #[error("prompt must not be empty")]
    EmptyPrompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Api,
    Decode,
    Filesystem,
    InvalidRequest,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Transport(_) => ErrorKind::Transport,
            GenerationError::Api { .. } => ErrorKind::Api,
            GenerationError::Decode(_) => ErrorKind::Decode,
            GenerationError::Filesystem(_) => ErrorKind::Filesystem,
            GenerationError::EmptyPrompt => ErrorKind::InvalidRequest,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Transport => "Transport",
            ErrorKind::Api => "API",
            ErrorKind::Decode => "Decode",
            ErrorKind::Filesystem => "Filesystem",
            ErrorKind::InvalidRequest => "Request",
        })
    }
}

impl From<tempfile::PersistError> for GenerationError {
    fn from(e: tempfile::PersistError) -> Self {
        GenerationError::Filesystem(e.error)
    }
}
