//! Image loading and bounding-box resize.

use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::ascii::PixelGrid;

/// Maximum output width of the loaded grid.
pub const MAX_WIDTH: u32 = 512;
/// Maximum output height of the loaded grid.
pub const MAX_HEIGHT: u32 = 512;

/// Load an image from disk into an RGB [`PixelGrid`].
///
/// Images larger than 512x512 in either dimension are scaled down to fit
/// that bounding box while preserving aspect ratio; smaller images are
/// never upscaled. RGBA and grayscale inputs are converted to RGB (alpha
/// is dropped).
pub fn load_image(path: &Path) -> Result<PixelGrid, LoadError> {
    if !path.exists() {
        return Err(LoadError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = ImageReader::open(path)
        .map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
        .decode()
        .map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::info!("Image loaded successfully. Processing...");

    let image = if decoded.width() > MAX_WIDTH || decoded.height() > MAX_HEIGHT {
        decoded.thumbnail(MAX_WIDTH, MAX_HEIGHT)
    } else {
        decoded
    };
    log::info!("Scaled image size: {} x {}", image.width(), image.height());

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelGrid::new(rgb.into_raw(), width, height))
}

/// Errors from loading and decoding an image.
#[derive(Debug)]
pub enum LoadError {
    /// The given path does not exist.
    PathNotFound { path: PathBuf },
    /// The file could not be opened.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but is not a decodable image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::PathNotFound { path } => {
                write!(
                    f,
                    "That doesn't seem to be a valid image: '{}' does not exist. Please check the given path.",
                    path.display()
                )
            }
            LoadError::Io { path, source } => {
                write!(f, "Failed to open '{}': {}", path.display(), source)
            }
            LoadError::Decode { path, source } => {
                write!(f, "Failed to decode '{}' as an image: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::PathNotFound { .. } => None,
            LoadError::Io { source, .. } => Some(source),
            LoadError::Decode { source, .. } => Some(source),
        }
    }
}
