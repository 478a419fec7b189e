use clap::Parser;

use img2ascii::ascii::{BrightnessMode, CharRamp, DEFAULT_RAMP};
use img2ascii::cli::{handle_config_action, Args, Command};
use img2ascii::config::Config;
use img2ascii::pipeline::{self, RenderOptions};

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = args.command {
        handle_config_action(action);
        return;
    }

    let Some(location) = args.location else {
        eprintln!("Error: No image given. Usage: img2ascii <location> [options]");
        std::process::exit(1);
    };

    // If --config is specified, require the file to exist; otherwise fall
    // back to defaults when the default config is absent.
    if let Some(ref path) = args.config {
        if !path.exists() {
            eprintln!("Error: Config file '{}' not found", path.display());
            std::process::exit(1);
        }
    }
    let cfg = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Merge settings: CLI args > config file > built-in defaults.
    let mode = match args.mode {
        Some(m) => m.into(),
        None => match cfg.render.mode.as_deref() {
            Some(name) => BrightnessMode::from_name(name).unwrap_or_else(|| {
                eprintln!(
                    "Error: Unknown brightness mode '{}' in config. \
                     Available modes: average, min_max, luminosity, max, min",
                    name
                );
                std::process::exit(1);
            }),
            None => BrightnessMode::default(),
        },
    };

    let scale = args
        .scale
        .or(cfg.render.scale)
        .unwrap_or_else(|| DEFAULT_RAMP.to_string());
    let ramp = match CharRamp::new(&scale) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let invert = args.invert || cfg.render.invert;
    let name = args
        .name
        .or(cfg.output.name)
        .unwrap_or_else(|| "output".to_string());

    let options = RenderOptions {
        mode,
        ramp,
        invert,
        name,
    };

    match pipeline::run(&location, &options) {
        Ok(path) => println!("Saved output to {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
