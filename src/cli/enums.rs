//! CLI enum types for the brightness mode option.

use clap::ValueEnum;

use crate::ascii::BrightnessMode;

/// Brightness formula selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Mode {
    /// Average of the RGB channels
    #[default]
    Average,
    /// Average of the highest and lowest channel
    MinMax,
    /// Perceived brightness (0.21 R + 0.72 G + 0.07 B)
    Luminosity,
    /// Highest channel
    Max,
    /// Lowest channel
    Min,
}

impl From<Mode> for BrightnessMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Average => BrightnessMode::Average,
            Mode::MinMax => BrightnessMode::MinMax,
            Mode::Luminosity => BrightnessMode::Luminosity,
            Mode::Max => BrightnessMode::Max,
            Mode::Min => BrightnessMode::Min,
        }
    }
}
