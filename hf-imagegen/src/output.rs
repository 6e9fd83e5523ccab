//! Target filenames and the formats images are saved in.

use image::{DynamicImage, ImageFormat};
use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};

/// Formats a generated image can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    WebP,
    Png,
    Jpeg,
}

/// Recognized filename extensions. Anything else gets [`DEFAULT_EXTENSION`].
pub const EXTENSIONS: [(&str, OutputFormat); 3] = [
    (".webp", OutputFormat::WebP),
    (".png", OutputFormat::Png),
    (".jpg", OutputFormat::Jpeg),
];

pub const DEFAULT_EXTENSION: &str = ".webp";

impl OutputFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(ext, _)| filename.ends_with(ext))
            .map(|&(_, format)| format)
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Convert to a color type the encoder accepts.
    ///
    /// JPEG has no alpha channel; the WebP encoder only takes 8-bit RGB(A).
    fn prepare(self, image: DynamicImage) -> DynamicImage {
        match (self, image) {
            (OutputFormat::Jpeg, image) => DynamicImage::ImageRgb8(image.into_rgb8()),
            (_, image @ (DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_))) => image,
            (_, image) if image.color().has_alpha() => {
                DynamicImage::ImageRgba8(image.into_rgba8())
            }
            (_, image) => DynamicImage::ImageRgb8(image.into_rgb8()),
        }
    }

    /// Encode `image` into an in-memory buffer.
    pub fn encode(self, image: DynamicImage) -> image::ImageResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.prepare(image).write_to(&mut buffer, self.image_format())?;
        Ok(buffer.into_inner())
    }
}

/// Append the default extension unless `filename` already has a recognized one.
pub fn normalize_filename(filename: &str) -> String {
    match OutputFormat::from_filename(filename) {
        Some(_) => filename.to_owned(),
        None => format!("{}{}", filename, DEFAULT_EXTENSION),
    }
}

/// Render `path` with forward slashes regardless of platform.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Write `data` to `path` without ever leaving a truncated file behind.
///
/// Missing parent directories are created. The bytes go to a temporary file
/// next to the target, which is then renamed over it.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> crate::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
