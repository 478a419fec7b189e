//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Mode;

/// Convert an image into ASCII art written to a text file.
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about = "Convert an image into ASCII", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Location of the image to convert
    pub location: Option<PathBuf>,

    /// Type of RGB to brightness conversion (default: average)
    #[arg(long, short)]
    pub mode: Option<Mode>,

    /// Character ramp to use, ordered darkest to brightest
    #[arg(long, short)]
    pub scale: Option<String>,

    /// Base name of the output file, written as {name}.txt (default: output)
    #[arg(long, short)]
    pub name: Option<String>,

    /// Invert the brightness scale (for light backgrounds)
    #[arg(long)]
    pub invert: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["img2ascii", "photo.png"]);
        assert_eq!(args.location, Some(PathBuf::from("photo.png")));
        assert!(args.mode.is_none());
        assert!(args.scale.is_none());
        assert!(args.name.is_none());
        assert!(!args.invert);
        assert!(args.config.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_invert_flag() {
        let args = Args::parse_from(["img2ascii", "photo.png", "--invert"]);
        assert!(args.invert);
    }

    #[test]
    fn test_args_mode_values() {
        let args = Args::parse_from(["img2ascii", "photo.png", "--mode", "average"]);
        assert_eq!(args.mode, Some(Mode::Average));

        let args = Args::parse_from(["img2ascii", "photo.png", "-m", "min_max"]);
        assert_eq!(args.mode, Some(Mode::MinMax));

        let args = Args::parse_from(["img2ascii", "photo.png", "--mode", "luminosity"]);
        assert_eq!(args.mode, Some(Mode::Luminosity));

        let args = Args::parse_from(["img2ascii", "photo.png", "--mode", "max"]);
        assert_eq!(args.mode, Some(Mode::Max));

        let args = Args::parse_from(["img2ascii", "photo.png", "--mode", "min"]);
        assert_eq!(args.mode, Some(Mode::Min));
    }

    #[test]
    fn test_args_rejects_unknown_mode() {
        let result = Args::try_parse_from(["img2ascii", "photo.png", "--mode", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_scale_option() {
        let args = Args::parse_from(["img2ascii", "photo.png", "--scale", "01"]);
        assert_eq!(args.scale, Some("01".to_string()));

        let args = Args::parse_from(["img2ascii", "photo.png", "-s", " .:#@"]);
        assert_eq!(args.scale, Some(" .:#@".to_string()));
    }

    #[test]
    fn test_args_name_option() {
        let args = Args::parse_from(["img2ascii", "photo.png", "--name", "art"]);
        assert_eq!(args.name, Some("art".to_string()));

        let args = Args::parse_from(["img2ascii", "photo.png", "-n", "banner"]);
        assert_eq!(args.name, Some("banner".to_string()));
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["img2ascii", "photo.png", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["img2ascii", "photo.png", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["img2ascii", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["img2ascii", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "img2ascii",
            "photo.png",
            "--mode",
            "luminosity",
            "--scale",
            " .:#",
            "--name",
            "art",
            "--invert",
        ]);
        assert_eq!(args.location, Some(PathBuf::from("photo.png")));
        assert_eq!(args.mode, Some(Mode::Luminosity));
        assert_eq!(args.scale, Some(" .:#".to_string()));
        assert_eq!(args.name, Some("art".to_string()));
        assert!(args.invert);
    }
}
