//! The conversion pipeline: load, reduce, invert, map, save.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ascii::{self, BrightnessMode, CharRamp};
use crate::loader::{self, LoadError};
use crate::output;

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Brightness formula to apply per pixel.
    pub mode: BrightnessMode,
    /// Character ramp, darkest to brightest.
    pub ramp: CharRamp,
    /// Complement brightness before mapping (for light backgrounds).
    pub invert: bool,
    /// Output base name; the file written is `{name}.txt`.
    pub name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            mode: BrightnessMode::default(),
            ramp: CharRamp::default(),
            invert: false,
            name: "output".to_string(),
        }
    }
}

/// Convert the image at `location` to an ASCII text file.
///
/// Stages run strictly in order, each to completion. Any failure aborts
/// the run before an output file is created. Returns the path written.
pub fn run(location: &Path, options: &RenderOptions) -> Result<PathBuf, PipelineError> {
    let pixels = loader::load_image(location)?;

    log::info!("Converting image to brightness scale ({})", options.mode.name());
    let mut brightness = ascii::reduce(&pixels, options.mode);

    if options.invert {
        log::info!("Inverting brightness");
        brightness = ascii::invert(brightness);
    }

    log::info!("Converting to ASCII");
    let grid = ascii::map_to_chars(&brightness, &options.ramp);

    let path = output::save_as_text(&grid, &options.name)?;
    Ok(path)
}

/// Errors from a pipeline run.
#[derive(Debug)]
pub enum PipelineError {
    /// Loading or decoding the source image failed.
    Load(LoadError),
    /// Writing the output file failed.
    Write(std::io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Load(e) => write!(f, "{}", e),
            PipelineError::Write(e) => write!(f, "Failed to write output file: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Load(e) => Some(e),
            PipelineError::Write(e) => Some(e),
        }
    }
}

impl From<LoadError> for PipelineError {
    fn from(err: LoadError) -> Self {
        PipelineError::Load(err)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Write(err)
    }
}
